//! Static-strip sink: plain ASCII PPM (P3).
//!
//! Each pushed frame becomes `strip_height` identical copies of the one-row
//! color strip; strips from successive frames stack vertically in emission
//! order. Pixels are written as `r g b` text triples, space-terminated except
//! for the last pixel of a row, which is newline-terminated.
//!
//! The P3 header carries the total row count, which is only known once the
//! run finishes. The sink therefore creates the file at `begin` (so an
//! unwritable destination fails up front) but buffers pixel text and writes
//! header plus body in one pass at `end`.

use crate::encode::sink::{FrameSink, SinkConfig, check_frame};
use crate::foundation::color::Rgb8;
use crate::foundation::error::{SortvizError, SortvizResult};
use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Maximum channel value declared in the P3 header.
const MAX_CHANNEL: u32 = 255;

/// [`FrameSink`] that accumulates stacked strips into one plain PPM image.
pub struct PpmSink {
    out_path: PathBuf,
    file: Option<File>,
    cfg: Option<SinkConfig>,
    body: String,
    frames: u64,
}

impl PpmSink {
    /// Create a sink that will write to `out_path` once the session ends.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            file: None,
            cfg: None,
            body: String::new(),
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

    fn append_row(&mut self, values: &[u32]) {
        let last = values.len().saturating_sub(1);
        for (i, &v) in values.iter().enumerate() {
            let c = Rgb8::from_value(v);
            let terminator = if i == last { '\n' } else { ' ' };
            self.body
                .push_str(&format!("{} {} {}{}", c.r, c.g, c.b, terminator));
        }
    }
}

impl FrameSink for PpmSink {
    fn begin(&mut self, cfg: SinkConfig) -> SortvizResult<()> {
        let file = File::create(&self.out_path)?;
        self.file = Some(file);
        self.cfg = Some(cfg);
        self.body.clear();
        self.frames = 0;
        Ok(())
    }

    fn push_frame(&mut self, values: &[u32]) -> SortvizResult<()> {
        let cfg = check_frame(self.cfg.as_ref(), values)?;
        for _ in 0..cfg.strip_height {
            self.append_row(values);
        }
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> SortvizResult<()> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| SortvizError::precondition("ppm sink not started"))?;
        let mut file = self
            .file
            .take()
            .ok_or_else(|| SortvizError::precondition("ppm sink already finalized"))?;

        let rows = self.frames * u64::from(cfg.strip_height);
        let header = format!("P3\n{} {}\n{}\n", cfg.width, rows, MAX_CHANNEL);
        file.write_all(header.as_bytes())?;
        file.write_all(self.body.as_bytes())?;
        file.flush()?;
        self.body.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn out_path(name: &str) -> PathBuf {
        let dir = PathBuf::from("target").join("ppm_tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn cfg(width: u32, strip_height: u32) -> SinkConfig {
        SinkConfig {
            width,
            strip_height,
            delay_cs: 10,
        }
    }

    #[test]
    fn begin_fails_for_unwritable_destination() {
        let mut sink = PpmSink::new("target/ppm_tests/no/such/dir/out.ppm");
        let err = sink.begin(cfg(2, 1)).unwrap_err();
        assert!(matches!(err, SortvizError::Io(_)));
    }

    #[test]
    fn header_and_row_layout_match_p3() {
        let path = out_path("layout.ppm");
        let mut sink = PpmSink::new(&path);
        sink.begin(cfg(2, 2)).unwrap();
        // r,g,b = (1,2,3) and (255,0,9); low byte must be ignored.
        sink.push_frame(&[0x01_02_03_77, 0xFF_00_09_77]).unwrap();
        sink.end().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let expected = "P3\n2 2\n255\n1 2 3 255 0 9\n1 2 3 255 0 9\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn strips_stack_in_emission_order() {
        let path = out_path("stacked.ppm");
        let mut sink = PpmSink::new(&path);
        sink.begin(cfg(1, 1)).unwrap();
        sink.push_frame(&[0x0A_00_00_00]).unwrap();
        sink.push_frame(&[0x0B_00_00_00]).unwrap();
        sink.end().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P3\n1 2\n255\n10 0 0\n11 0 0\n");
    }

    #[test]
    fn zero_frames_yields_zero_rows() {
        let path = out_path("empty.ppm");
        let mut sink = PpmSink::new(&path);
        sink.begin(cfg(3, 6)).unwrap();
        sink.end().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P3\n3 0\n255\n");
    }
}
