use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::gradient::stops::GradientConfig;
use crate::render::frame::Background;

/// Frame-level fan-out. Output order is phase order either way.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

impl RenderThreading {
    pub fn validate(&self) -> ShimmerResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(ShimmerError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Everything one generation run needs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub out_path: PathBuf,
    pub canvas: Canvas,
    /// Frames in one loop.
    pub frames_count: u32,
    /// Display time per frame.
    pub duration_ms: u32,
    pub tile_size: u32,
    /// Fixed seed for reproducible phase offsets; `None` seeds from the clock.
    pub seed: Option<u64>,
    pub background: Background,
    pub gradient: GradientConfig,
    pub threading: RenderThreading,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("shape.gif"),
            canvas: Canvas {
                width: 512,
                height: 512,
            },
            frames_count: 30,
            duration_ms: 120,
            tile_size: 8,
            seed: None,
            background: Background::Transparent,
            gradient: GradientConfig::default(),
            threading: RenderThreading::default(),
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> ShimmerResult<()> {
        self.canvas.validate()?;
        if self.tile_size == 0 {
            return Err(ShimmerError::validation("tile_size must be > 0"));
        }
        if self.frames_count == 0 {
            return Err(ShimmerError::validation("frames_count must be > 0"));
        }
        crate::encode::animation::delay_centis(self.duration_ms)?;
        self.gradient.validate()?;
        self.threading.validate()
    }

    pub fn from_path(path: &Path) -> ShimmerResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> ShimmerResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| ShimmerError::serde(format!("invalid generate config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Shared config for batch generation and the viewer page.
///
/// `{"i_size": 512, "t_sizes": [64, 8], "prefix": "shape"}` produces `shape_512_64.gif` and
/// `shape_512_8.gif`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchConfig {
    /// Square canvas edge in pixels.
    pub i_size: u32,
    /// One artifact per tile size, in this order.
    pub t_sizes: Vec<u32>,
    /// Output file-name prefix.
    pub prefix: String,
}

impl BatchConfig {
    pub fn from_path(path: &Path) -> ShimmerResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read batch config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .map_err(|e| ShimmerError::serde(format!("invalid batch config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ShimmerResult<()> {
        Canvas::square(self.i_size)?;
        if self.t_sizes.is_empty() {
            return Err(ShimmerError::validation("t_sizes must not be empty"));
        }
        if self.t_sizes.contains(&0) {
            return Err(ShimmerError::validation("t_sizes entries must be > 0"));
        }
        Ok(())
    }

    pub fn file_name(&self, tile_size: u32) -> String {
        format!("{}_{}_{}.gif", self.prefix, self.i_size, tile_size)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
