//! Animated sink: indexed-color GIF via the `image` crate.
//!
//! Each pushed frame is the one-row color strip expanded to `strip_height`
//! identical rows and appended to a running animation. Frames carry a delay
//! in hundredths of a second; color quantization runs at a fixed speed and
//! there is no per-frame screen clearing or disposal customization.

use crate::encode::sink::{FrameSink, SinkConfig, check_frame};
use crate::foundation::color::Rgb8;
use crate::foundation::error::{SortvizError, SortvizResult};
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Quantization speed passed to the encoder (1 = best palette, 30 = fastest).
const QUANTIZE_SPEED: i32 = 10;

/// [`FrameSink`] that appends strips as frames of an animated GIF.
pub struct GifSink {
    out_path: PathBuf,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    delay_cs: u16,
    frames: u64,
}

impl GifSink {
    /// Create a sink that will stream frames into `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            encoder: None,
            cfg: None,
            delay_cs: 0,
            frames: 0,
        }
    }

    /// Destination path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.out_path
    }

    /// Frames appended so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> SortvizResult<()> {
        if cfg.width == 0 || cfg.strip_height == 0 {
            return Err(SortvizError::precondition(
                "gif sink width/strip_height must be non-zero",
            ));
        }
        let file = File::create(&self.out_path)?;
        let writer = BufWriter::new(file);
        self.encoder = Some(GifEncoder::new_with_speed(writer, QUANTIZE_SPEED));
        self.delay_cs = cfg.delay_cs;
        self.cfg = Some(cfg);
        self.frames = 0;
        Ok(())
    }

    fn set_frame_delay(&mut self, delay_cs: u16) -> SortvizResult<()> {
        self.delay_cs = delay_cs;
        Ok(())
    }

    fn push_frame(&mut self, values: &[u32]) -> SortvizResult<()> {
        let cfg = check_frame(self.cfg.as_ref(), values)?;
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| SortvizError::precondition("gif sink is already finalized"))?;

        let strip: Vec<Rgb8> = values.iter().map(|&v| Rgb8::from_value(v)).collect();
        let image = RgbaImage::from_fn(cfg.width, cfg.strip_height, |x, _y| {
            let c = strip[x as usize];
            Rgba([c.r, c.g, c.b, 255])
        });

        let delay = Delay::from_numer_denom_ms(u32::from(self.delay_cs) * 10, 1);
        encoder
            .encode_frame(Frame::from_parts(image, 0, 0, delay))
            .map_err(|e| SortvizError::encode(format!("failed to append gif frame: {e}")))?;
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> SortvizResult<()> {
        // Dropping the encoder writes the GIF trailer and flushes the writer.
        self.encoder
            .take()
            .ok_or_else(|| SortvizError::precondition("gif sink not started"))?;
        self.cfg = None;
        Ok(())
    }
}
