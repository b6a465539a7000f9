use crate::foundation::error::{SortvizError, SortvizResult};

/// Configuration provided to a [`FrameSink`] at the start of a run.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Canvas width in pixels. Equals the working-array length.
    pub width: u32,
    /// Rows each array state is expanded into, for visibility.
    pub strip_height: u32,
    /// Per-frame delay in hundredths of a second. Ignored by static sinks.
    pub delay_cs: u16,
}

/// Sink contract for consuming array-state frames in temporal order.
///
/// Lifecycle contract: `begin` once, then zero or more `push_frame` calls,
/// then `end` exactly once. Calling `push_frame` after `end` is prevented by
/// the caller's lifecycle discipline, not by the sink. The sink owns the only
/// I/O in the core; a single failed write is fatal to the run.
pub trait FrameSink {
    /// Called once before any frames are pushed. Creates the destination;
    /// fails with [`SortvizError::Io`] if it cannot be created.
    fn begin(&mut self, cfg: SinkConfig) -> SortvizResult<()>;

    /// Adjust the delay applied to frames pushed from now on. Static sinks
    /// have no frame timing and ignore this.
    fn set_frame_delay(&mut self, _delay_cs: u16) -> SortvizResult<()> {
        Ok(())
    }

    /// Render the current working array as one appended frame.
    fn push_frame(&mut self, values: &[u32]) -> SortvizResult<()>;

    /// Finalize the output (flush, write trailer bytes).
    fn end(&mut self) -> SortvizResult<()>;
}

/// Validate a pushed frame against the begin-time configuration.
///
/// Shared by the concrete sinks so lifecycle misuse fails the same way
/// everywhere.
pub(crate) fn check_frame(cfg: Option<&SinkConfig>, values: &[u32]) -> SortvizResult<SinkConfig> {
    let cfg = cfg.ok_or_else(|| SortvizError::precondition("sink not started"))?;
    if values.len() as u32 != cfg.width {
        return Err(SortvizError::precondition(format!(
            "frame width mismatch: got {}, expected {}",
            values.len(),
            cfg.width
        )));
    }
    Ok(cfg.clone())
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    delay_cs: u16,
    frames: Vec<(u16, Vec<u32>)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames with the delay active at push time.
    pub fn frames(&self) -> &[(u16, Vec<u32>)] {
        &self.frames
    }

    /// Captured array states without delay bookkeeping.
    pub fn states(&self) -> Vec<&[u32]> {
        self.frames.iter().map(|(_, v)| v.as_slice()).collect()
    }

    /// Whether `end` has been observed.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SortvizResult<()> {
        self.delay_cs = cfg.delay_cs;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn set_frame_delay(&mut self, delay_cs: u16) -> SortvizResult<()> {
        self.delay_cs = delay_cs;
        Ok(())
    }

    fn push_frame(&mut self, values: &[u32]) -> SortvizResult<()> {
        check_frame(self.cfg.as_ref(), values)?;
        self.frames.push((self.delay_cs, values.to_vec()));
        Ok(())
    }

    fn end(&mut self) -> SortvizResult<()> {
        self.ended = true;
        Ok(())
    }
}
