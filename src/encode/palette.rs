use std::collections::BTreeSet;

use crate::foundation::core::{Rgb8, Rgba8};
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::foundation::math::mul_div255;
use crate::render::frame::{Background, FrameRGBA};

/// Palette slot reserved for fully transparent pixels.
pub const TRANSPARENT_INDEX: u8 = 255;

/// Maximum number of entries a GIF color table can hold.
pub const MAX_PALETTE_LEN: usize = 256;

/// NeuQuant sampling factor (1 = best, 30 = fastest).
const NEUQUANT_SAMPLE_FACTOR: i32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb8>,
    transparent: Option<u8>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb8>, transparent: Option<u8>) -> ShimmerResult<Self> {
        if colors.is_empty() || colors.len() > MAX_PALETTE_LEN {
            return Err(ShimmerError::encode(format!(
                "palette must hold 1..={MAX_PALETTE_LEN} colors (got {})",
                colors.len()
            )));
        }
        if let Some(t) = transparent
            && usize::from(t) >= colors.len()
        {
            return Err(ShimmerError::encode(format!(
                "transparency index {t} is outside a {}-entry palette",
                colors.len()
            )));
        }
        Ok(Self {
            colors,
            transparent,
        })
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn transparent_index(&self) -> Option<u8> {
        self.transparent
    }

    /// Flat `r,g,b,r,g,b,...` bytes as a GIF color table expects.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }
}

/// A frame re-expressed as palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFrame {
    pub width: u32,
    pub height: u32,
    pub indices: Vec<u8>,
    pub palette: Palette,
}

impl EncodedFrame {
    /// Expand back to RGBA; the transparency index decodes to zero alpha.
    pub fn to_rgba(&self) -> Vec<u8> {
        let colors = self.palette.colors();
        let transparent = self.palette.transparent_index();
        let mut out = Vec::with_capacity(self.indices.len() * 4);
        for &i in &self.indices {
            let c = colors.get(usize::from(i)).copied().unwrap_or(Rgb8::BLACK);
            let a = if Some(i) == transparent { 0 } else { 255 };
            out.extend_from_slice(&[c.r, c.g, c.b, a]);
        }
        out
    }
}

/// Composites a rendered frame over the background and quantizes it to a palette.
///
/// In transparent mode the content palette is capped at 255 entries, slot 255 is padded in as
/// the transparent color, and every pixel that had zero alpha before compositing is forced to
/// that slot after quantization.
#[derive(Clone, Copy, Debug)]
pub struct PaletteEncoder {
    background: Background,
}

impl PaletteEncoder {
    pub fn new(background: Background) -> Self {
        Self { background }
    }

    fn capacity(&self) -> usize {
        if self.background.reserves_transparency() {
            MAX_PALETTE_LEN - 1
        } else {
            MAX_PALETTE_LEN
        }
    }

    pub fn encode(&self, frame: &FrameRGBA) -> ShimmerResult<EncodedFrame> {
        let expected = frame.width as usize * frame.height as usize * 4;
        if frame.data.len() != expected {
            return Err(ShimmerError::encode(format!(
                "frame buffer of {} bytes does not match {}x{}",
                frame.data.len(),
                frame.width,
                frame.height
            )));
        }

        let rgb = composite_rgb(&frame.data, self.background.composite_color());
        let (mut colors, mut indices) = quantize(&rgb, self.capacity());

        let transparent = if self.background.reserves_transparency() {
            colors.resize(MAX_PALETTE_LEN - 1, Rgb8::BLACK);
            colors.push(Rgb8::WHITE);
            for (idx, hidden) in indices.iter_mut().zip(frame.transparent_mask()) {
                if hidden {
                    *idx = TRANSPARENT_INDEX;
                }
            }
            Some(TRANSPARENT_INDEX)
        } else {
            None
        };

        tracing::trace!(palette_len = colors.len(), "quantized frame");
        Ok(EncodedFrame {
            width: frame.width,
            height: frame.height,
            indices,
            palette: Palette::new(colors, transparent)?,
        })
    }
}

/// Straight-alpha "over" onto `bg`, dropping alpha. Fully transparent pixels take the
/// background color as-is.
pub(crate) fn composite_rgb(src: &[u8], bg: Rgba8) -> Vec<Rgb8> {
    let bg_r = u16::from(bg.r);
    let bg_g = u16::from(bg.g);
    let bg_b = u16::from(bg.b);

    src.chunks_exact(4)
        .map(|s| {
            let a = u16::from(s[3]);
            match a {
                255 => Rgb8::new(s[0], s[1], s[2]),
                0 => Rgb8::new(bg.r, bg.g, bg.b),
                _ => {
                    let inv = 255 - a;
                    Rgb8::new(
                        (mul_div255(u16::from(s[0]), a) + mul_div255(bg_r, inv)).min(255) as u8,
                        (mul_div255(u16::from(s[1]), a) + mul_div255(bg_g, inv)).min(255) as u8,
                        (mul_div255(u16::from(s[2]), a) + mul_div255(bg_b, inv)).min(255) as u8,
                    )
                }
            }
        })
        .collect()
}

/// Exact palette when the frame fits, NeuQuant otherwise.
fn quantize(pixels: &[Rgb8], capacity: usize) -> (Vec<Rgb8>, Vec<u8>) {
    let distinct: BTreeSet<Rgb8> = pixels.iter().copied().collect();
    if distinct.len() <= capacity {
        let colors: Vec<Rgb8> = distinct.into_iter().collect();
        let indices = pixels
            .iter()
            .map(|c| colors.binary_search(c).map_or(0, |i| i as u8))
            .collect();
        return (colors, indices);
    }

    let rgba: Vec<u8> = pixels
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, 255])
        .collect();
    let nq = color_quant::NeuQuant::new(NEUQUANT_SAMPLE_FACTOR, capacity, &rgba);
    let colors = nq
        .color_map_rgb()
        .chunks_exact(3)
        .map(|c| Rgb8::new(c[0], c[1], c[2]))
        .collect();
    let indices = rgba
        .chunks_exact(4)
        .map(|px| nq.index_of(px) as u8)
        .collect();
    (colors, indices)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/palette.rs"]
mod tests;
