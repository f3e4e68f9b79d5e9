use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{BatchConfig, GenerateConfig, RenderThreading};
use crate::encode::animation::{Animation, AnimationAssembler};
use crate::encode::palette::{EncodedFrame, PaletteEncoder};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::foundation::rng::{PhaseSource, Rng64};
use crate::gradient::sampler::PhaseSampler;
use crate::gradient::stops::ColorStopTable;
use crate::layout::grid::GridLayout;
use crate::render::frame::{FrameRGBA, FrameRenderer};

/// Summary of one generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub frames: u32,
    pub width: u32,
    pub height: u32,
    pub columns: usize,
    pub rows: usize,
    /// Largest palette any frame needed.
    pub max_palette_len: usize,
}

/// Precomputed, read-only state for one run: stop table, grid and phase offsets.
///
/// Every frame is a pure function of this state and its index, so frames can be produced in
/// any order or in parallel.
#[derive(Clone, Debug)]
pub struct Generator {
    cfg: GenerateConfig,
    layout: GridLayout,
    sampler: PhaseSampler,
    encoder: PaletteEncoder,
}

impl Generator {
    /// Seeds phase offsets from `cfg.seed`, or from the clock when unset.
    pub fn new(cfg: &GenerateConfig) -> ShimmerResult<Self> {
        let mut rng = cfg.seed.map_or_else(Rng64::from_entropy, Rng64::new);
        Self::with_source(cfg, &mut rng)
    }

    pub fn with_source(cfg: &GenerateConfig, source: &mut dyn PhaseSource) -> ShimmerResult<Self> {
        cfg.validate()?;
        let table = ColorStopTable::new(&cfg.gradient)?;
        let layout = GridLayout::generate(cfg.canvas, cfg.tile_size, source)?;
        tracing::debug!(
            columns = layout.spec().columns(),
            rows = layout.spec().rows(),
            stops = table.len(),
            "prepared grid"
        );
        Ok(Self {
            cfg: cfg.clone(),
            layout,
            sampler: PhaseSampler::new(table),
            encoder: PaletteEncoder::new(cfg.background),
        })
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.cfg
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn sampler(&self) -> &PhaseSampler {
        &self.sampler
    }

    pub fn renderer(&self) -> FrameRenderer<'_> {
        FrameRenderer::new(&self.layout, &self.sampler, self.cfg.background)
    }

    pub fn render_frame(&self, idx: FrameIndex) -> FrameRGBA {
        self.renderer().render(idx.phase(self.cfg.frames_count))
    }

    pub fn encode_frame(&self, idx: FrameIndex) -> ShimmerResult<EncodedFrame> {
        let frame = self.render_frame(idx);
        let encoded = self.encoder.encode(&frame)?;
        tracing::debug!(
            frame = idx.0,
            palette_len = encoded.palette.len(),
            "encoded frame"
        );
        Ok(encoded)
    }

    /// Encode every frame of the loop, in phase order.
    pub fn encode_all(&self) -> ShimmerResult<Vec<EncodedFrame>> {
        let n = u64::from(self.cfg.frames_count);
        let threading = &self.cfg.threading;
        if !threading.parallel {
            return (0..n).map(|i| self.encode_frame(FrameIndex(i))).collect();
        }

        let pool = build_thread_pool(threading)?;
        pool.install(|| {
            (0..n)
                .into_par_iter()
                .map(|i| self.encode_frame(FrameIndex(i)))
                .collect()
        })
    }

    pub fn assemble(&self) -> ShimmerResult<Animation> {
        let frames = self.encode_all()?;
        let mut asm = AnimationAssembler::new(self.cfg.canvas, self.cfg.duration_ms)?
            .with_capacity(frames.len());
        for (i, frame) in frames.into_iter().enumerate() {
            asm.push(FrameIndex(i as u64), frame)?;
        }
        asm.finish()
    }

    fn stats(&self, anim: &Animation) -> GenerateStats {
        GenerateStats {
            frames: anim.frames.len() as u32,
            width: anim.canvas.width,
            height: anim.canvas.height,
            columns: self.layout.spec().columns(),
            rows: self.layout.spec().rows(),
            max_palette_len: anim
                .frames
                .iter()
                .map(|f| f.palette.len())
                .max()
                .unwrap_or(0),
        }
    }
}

/// Render, encode and write one looping animation to `cfg.out_path`.
#[tracing::instrument(skip(cfg), fields(out = %cfg.out_path.display()))]
pub fn generate(cfg: &GenerateConfig) -> ShimmerResult<GenerateStats> {
    let generator = Generator::new(cfg)?;
    let anim = generator.assemble()?;
    anim.save(&cfg.out_path)?;
    Ok(generator.stats(&anim))
}

/// One artifact per tile size in `batch`, all sharing a seed, written under `out_dir`.
///
/// `base` supplies everything the batch file does not (frame count, duration, background, ...).
pub fn generate_batch(
    batch: &BatchConfig,
    out_dir: &Path,
    base: &GenerateConfig,
) -> ShimmerResult<Vec<PathBuf>> {
    batch.validate()?;
    let seed = base.seed.unwrap_or_else(|| Rng64::from_entropy().next_u64());
    let canvas = Canvas::square(batch.i_size)?;

    let mut written = Vec::with_capacity(batch.t_sizes.len());
    for &tile_size in &batch.t_sizes {
        let cfg = GenerateConfig {
            out_path: out_dir.join(batch.file_name(tile_size)),
            canvas,
            tile_size,
            seed: Some(seed),
            ..base.clone()
        };
        let stats = generate(&cfg)?;
        tracing::info!(
            tile_size,
            frames = stats.frames,
            columns = stats.columns,
            rows = stats.rows,
            "generated"
        );
        written.push(cfg.out_path);
    }
    Ok(written)
}

fn build_thread_pool(threading: &RenderThreading) -> ShimmerResult<rayon::ThreadPool> {
    threading.validate()?;
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threading.threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ShimmerError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
