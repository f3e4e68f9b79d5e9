use crate::foundation::core::Rgb8;
use crate::foundation::math::{cosine_ease, lerp_u8, ping_pong, wrap_unit};
use crate::gradient::stops::ColorStopTable;

/// Maps a loop phase onto the stop table with a cosine ping-pong traversal.
///
/// As `u` runs over one period the sampled color walks first stop -> last stop -> first stop,
/// easing within each segment. The mapping is periodic with period 1, which is what lets the
/// animation loop without a duplicated closing frame.
#[derive(Clone, Debug)]
pub struct PhaseSampler {
    table: ColorStopTable,
}

impl PhaseSampler {
    pub fn new(table: ColorStopTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ColorStopTable {
        &self.table
    }

    pub fn sample(&self, u: f64) -> Rgb8 {
        let stops = self.table.stops();
        let segments = stops.len() - 1;

        let ping = ping_pong(wrap_unit(u));
        let seg_pos = ping * segments as f64;
        let seg_idx = (seg_pos as usize).min(segments - 1);
        let local_t = cosine_ease(seg_pos - seg_idx as f64);

        let a = stops[seg_idx];
        let b = stops[seg_idx + 1];
        Rgb8::new(
            lerp_u8(a.r, b.r, local_t),
            lerp_u8(a.g, b.g, local_t),
            lerp_u8(a.b, b.b, local_t),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/sampler.rs"]
mod tests;
