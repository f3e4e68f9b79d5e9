use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::foundation::math::wrap_unit;
use crate::gradient::sampler::PhaseSampler;
use crate::layout::grid::GridLayout;
use crate::render::raster::fill_triangle;

/// One rendered frame: straight-alpha RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn filled(canvas: Canvas, color: Rgba8) -> Self {
        let px = color.to_array();
        let mut data = Vec::with_capacity(canvas.pixel_count() * 4);
        for _ in 0..canvas.pixel_count() {
            data.extend_from_slice(&px);
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        Rgba8 {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// `true` for every pixel with zero alpha.
    pub fn transparent_mask(&self) -> Vec<bool> {
        self.data.chunks_exact(4).map(|px| px[3] == 0).collect()
    }

    pub fn to_image(&self) -> ShimmerResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            ShimmerError::render(format!(
                "frame buffer of {} bytes does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    /// Write the frame as a PNG still.
    pub fn save_png(&self, path: &Path) -> ShimmerResult<()> {
        crate::encode::animation::ensure_parent_dir(path)?;
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// What sits behind the triangles.
///
/// The same pipeline serves both looks; only the canvas fill, the composite color and the
/// transparency-index policy change.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Transparent canvas; uncovered pixels get a reserved transparent palette index.
    #[default]
    Transparent,
    /// Opaque black canvas; no transparency.
    Black,
}

impl Background {
    /// Initial fill of the render canvas.
    pub fn canvas_fill(self) -> Rgba8 {
        match self {
            Self::Transparent => Rgba8::TRANSPARENT,
            Self::Black => Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            },
        }
    }

    /// Color the frame is composited over before quantization.
    pub fn composite_color(self) -> Rgba8 {
        match self {
            Self::Transparent => Rgba8 {
                r: 255,
                g: 255,
                b: 255,
                a: 0,
            },
            Self::Black => self.canvas_fill(),
        }
    }

    pub fn reserves_transparency(self) -> bool {
        matches!(self, Self::Transparent)
    }
}

/// Rasterizes every cell of a [`GridLayout`] for a given global phase.
///
/// Holds only shared references, so one renderer can serve many threads.
#[derive(Clone, Copy, Debug)]
pub struct FrameRenderer<'a> {
    layout: &'a GridLayout,
    sampler: &'a PhaseSampler,
    background: Background,
}

impl<'a> FrameRenderer<'a> {
    pub fn new(layout: &'a GridLayout, sampler: &'a PhaseSampler, background: Background) -> Self {
        Self {
            layout,
            sampler,
            background,
        }
    }

    pub fn background(&self) -> Background {
        self.background
    }

    #[tracing::instrument(skip(self))]
    pub fn render(&self, phase: f64) -> FrameRGBA {
        let mut frame = FrameRGBA::filled(self.layout.spec().canvas(), self.background.canvas_fill());
        for cell in self.layout.cells() {
            let color = self.sampler.sample(wrap_unit(phase + cell.phase_offset));
            fill_triangle(&mut frame, &cell.triangle(), Rgba8::opaque(color));
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
