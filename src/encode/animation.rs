use std::borrow::Cow;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context as _;

use crate::encode::palette::EncodedFrame;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{ShimmerError, ShimmerResult};

/// Convert a per-frame duration to GIF centiseconds (rounded to nearest).
pub fn delay_centis(duration_ms: u32) -> ShimmerResult<u16> {
    if duration_ms == 0 {
        return Err(ShimmerError::validation("frame duration must be > 0 ms"));
    }
    let centis = duration_ms.saturating_add(5) / 10;
    u16::try_from(centis.max(1)).map_err(|_| {
        ShimmerError::validation(format!(
            "frame duration {duration_ms} ms exceeds the gif delay limit"
        ))
    })
}

/// A finished, in-order frame sequence ready to serialize.
#[derive(Clone, Debug)]
pub struct Animation {
    pub canvas: Canvas,
    pub frames: Vec<EncodedFrame>,
    /// Per-frame delay in centiseconds.
    pub delay_centis: u16,
    /// `0` loops forever.
    pub loop_count: u16,
}

impl Animation {
    pub fn write_to<W: Write>(&self, writer: W) -> ShimmerResult<W> {
        let width = u16::try_from(self.canvas.width)
            .map_err(|_| ShimmerError::encode("canvas width exceeds gif limit"))?;
        let height = u16::try_from(self.canvas.height)
            .map_err(|_| ShimmerError::encode("canvas height exceeds gif limit"))?;

        let mut encoder = gif::Encoder::new(writer, width, height, &[])
            .map_err(|e| ShimmerError::encode(format!("failed to start gif stream: {e}")))?;
        let repeat = match self.loop_count {
            0 => gif::Repeat::Infinite,
            n => gif::Repeat::Finite(n),
        };
        encoder
            .set_repeat(repeat)
            .map_err(|e| ShimmerError::encode(format!("failed to write loop extension: {e}")))?;

        for (i, f) in self.frames.iter().enumerate() {
            let mut frame = gif::Frame::default();
            frame.width = width;
            frame.height = height;
            frame.buffer = Cow::Borrowed(&f.indices);
            frame.palette = Some(f.palette.to_rgb_bytes());
            frame.transparent = f.palette.transparent_index();
            frame.delay = self.delay_centis;
            frame.dispose = gif::DisposalMethod::Background;
            encoder
                .write_frame(&frame)
                .map_err(|e| ShimmerError::encode(format!("failed to write frame {i}: {e}")))?;
        }

        encoder
            .into_inner()
            .map_err(|e| ShimmerError::encode(format!("failed to finish gif stream: {e}")))
    }

    pub fn save(&self, path: &Path) -> ShimmerResult<()> {
        ensure_parent_dir(path)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create output '{}'", path.display()))?;
        let mut out = self.write_to(BufWriter::new(file))?;
        out.flush()
            .with_context(|| format!("flush output '{}'", path.display()))?;
        tracing::info!(path = %path.display(), frames = self.frames.len(), "wrote animation");
        Ok(())
    }
}

/// Collects encoded frames in timeline order.
///
/// Frames must arrive as `0, 1, 2, ...`; anything else is rejected so the artifact order always
/// matches phase order.
#[derive(Debug)]
pub struct AnimationAssembler {
    canvas: Canvas,
    delay_centis: u16,
    frames: Vec<EncodedFrame>,
}

impl AnimationAssembler {
    pub fn new(canvas: Canvas, duration_ms: u32) -> ShimmerResult<Self> {
        canvas.validate()?;
        Ok(Self {
            canvas,
            delay_centis: delay_centis(duration_ms)?,
            frames: Vec::new(),
        })
    }

    pub fn with_capacity(mut self, frames: usize) -> Self {
        self.frames.reserve_exact(frames);
        self
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn push(&mut self, idx: FrameIndex, frame: EncodedFrame) -> ShimmerResult<()> {
        if idx.0 != self.frames.len() as u64 {
            return Err(ShimmerError::encode(format!(
                "frame {} pushed out of order (expected {})",
                idx.0,
                self.frames.len()
            )));
        }
        if frame.width != self.canvas.width || frame.height != self.canvas.height {
            return Err(ShimmerError::encode(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.canvas.width, self.canvas.height
            )));
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Infinite loop, restore-to-background disposal.
    pub fn finish(self) -> ShimmerResult<Animation> {
        if self.frames.is_empty() {
            return Err(ShimmerError::encode("animation has no frames"));
        }
        Ok(Animation {
            canvas: self.canvas,
            frames: self.frames,
            delay_centis: self.delay_centis,
            loop_count: 0,
        })
    }
}

pub fn ensure_parent_dir(path: &Path) -> ShimmerResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/animation.rs"]
mod tests;
