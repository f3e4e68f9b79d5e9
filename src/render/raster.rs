use crate::foundation::core::{Point, Rgba8};
use crate::render::frame::FrameRGBA;

/// Fill a triangle by sampling pixel centers.
///
/// Vertices are snapped to integer pixel corners. Coverage is evaluated with integer edge
/// functions in doubled coordinates (pixel centers land on odd values), and pixels exactly on
/// an edge belong to that edge only when it is a top-left edge. Two triangles sharing an edge
/// therefore never both cover, or both miss, a pixel along it.
///
/// A triangle too thin to own any pixel center still fills the pixel holding its centroid, so
/// one-pixel tiles stay visible. Geometry outside the frame is clipped. Degenerate triangles
/// draw nothing.
pub fn fill_triangle(frame: &mut FrameRGBA, tri: &[Point; 3], color: Rgba8) {
    let snap = |p: Point| -> (i64, i64) { (2 * p.x.round() as i64, 2 * p.y.round() as i64) };
    let a = snap(tri[0]);
    let mut b = snap(tri[1]);
    let mut c = snap(tri[2]);

    let area = edge(a, b, c);
    if area == 0 {
        return;
    }
    if area < 0 {
        std::mem::swap(&mut b, &mut c);
    }

    let w = i64::from(frame.width);
    let h = i64::from(frame.height);
    let min_x = (a.0.min(b.0).min(c.0).div_euclid(2)).max(0);
    let max_x = ((a.0.max(b.0).max(c.0) + 1).div_euclid(2)).min(w);
    let min_y = (a.1.min(b.1).min(c.1).div_euclid(2)).max(0);
    let max_y = ((a.1.max(b.1).max(c.1) + 1).div_euclid(2)).min(h);
    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let edges = [(a, b), (b, c), (c, a)];
    let owns = edges.map(|(from, to)| is_top_left(from, to));
    let rgba = color.to_array();
    let mut filled = 0usize;

    for y in min_y..max_y {
        let py = 2 * y + 1;
        for x in min_x..max_x {
            let p = (2 * x + 1, py);
            let inside = edges
                .iter()
                .zip(owns)
                .all(|(&(from, to), owned)| {
                    let e = edge(from, to, p);
                    e > 0 || (e == 0 && owned)
                });
            if inside {
                let i = ((y * w + x) * 4) as usize;
                frame.data[i..i + 4].copy_from_slice(&rgba);
                filled += 1;
            }
        }
    }

    if filled == 0 {
        // Centroid in doubled coordinates is (a + b + c) / 3; one pixel spans 2.
        let cx = (a.0 + b.0 + c.0).div_euclid(6);
        let cy = (a.1 + b.1 + c.1).div_euclid(6);
        if (0..w).contains(&cx) && (0..h).contains(&cy) {
            let i = ((cy * w + cx) * 4) as usize;
            frame.data[i..i + 4].copy_from_slice(&rgba);
        }
    }
}

/// Twice the signed area of `(from, to, p)`; positive when `p` is on the interior side.
fn edge(from: (i64, i64), to: (i64, i64), p: (i64, i64)) -> i64 {
    (to.0 - from.0) * (p.1 - from.1) - (to.1 - from.1) * (p.0 - from.0)
}

// Antisymmetric: exactly one of (from, to) and (to, from) is owned.
fn is_top_left(from: (i64, i64), to: (i64, i64)) -> bool {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    dy < 0 || (dy == 0 && dx > 0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
