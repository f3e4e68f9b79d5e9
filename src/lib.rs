//! Shimmer procedurally generates seamlessly looping, palette-indexed GIF animations of a
//! triangle grid whose tiles pulse through a grayscale gradient.
//!
//! # Pipeline overview
//!
//! 1. **Stops**: `GradientConfig -> ColorStopTable` (evenly stepped grays)
//! 2. **Layout**: `Canvas + tile size + seed -> GridLayout` (interlocking columns, per-cell
//!    phase offsets with horizontal wrap continuity)
//! 3. **Render**: `GridLayout + phase -> FrameRGBA` (one triangle per cell, colored by
//!    [`PhaseSampler`])
//! 4. **Quantize**: `FrameRGBA -> EncodedFrame` (≤256-entry palette, optional reserved
//!    transparency index)
//! 5. **Assemble**: `EncodedFrame*` -> [`Animation`] (infinite loop, restore-to-background
//!    disposal) written as a GIF
//!
//! Layout and stops are computed once per run; every frame is a pure function of them and its
//! phase, so frames may be rendered in parallel ([`RenderThreading`]) without changing output.
#![forbid(unsafe_code)]

mod config;
mod encode;
mod foundation;
mod gradient;
mod layout;
mod render;

pub mod page;

pub use config::{BatchConfig, GenerateConfig, RenderThreading};
pub use encode::animation::{
    Animation, AnimationAssembler, delay_centis, ensure_parent_dir,
};
pub use encode::palette::{
    EncodedFrame, MAX_PALETTE_LEN, Palette, PaletteEncoder, TRANSPARENT_INDEX,
};
pub use foundation::core::{Canvas, FrameIndex, MAX_CANVAS_EDGE, Point, Rgb8, Rgba8};
pub use foundation::error::{ShimmerError, ShimmerResult};
pub use foundation::rng::{PhaseSource, Rng64};
pub use gradient::sampler::PhaseSampler;
pub use gradient::stops::{ColorStopTable, GradientConfig};
pub use layout::grid::{Cell, GridLayout, GridSpec, PhaseOffsets};
pub use render::frame::{Background, FrameRGBA, FrameRenderer};
pub use render::pipeline::{GenerateStats, Generator, generate, generate_batch};
pub use render::raster::fill_triangle;
