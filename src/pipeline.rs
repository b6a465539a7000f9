//! The orchestrator: seed the working array, drive the selected algorithms
//! and sequence the sink lifecycle (begin, frames, end).

use std::str::FromStr;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{SortvizError, SortvizResult};
use crate::sort::{Order, bubble_sort, heap_sort, merge_sort, radix_sort, selection_sort};

/// One of the five supported sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Adjacent-swap bubble sort.
    Bubble,
    /// Selection sort with the historical inverted extremum scan.
    Selection,
    /// Two-phase heap sort.
    Heap,
    /// Top-down recursive merge sort.
    Merge,
    /// LSD base-10 counting sort over sort keys.
    Radix,
}

impl Algorithm {
    /// All algorithms in the fixed order used by [`Selection::All`].
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Radix,
    ];

    /// Stable lowercase name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Radix => "radix",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SortvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "heap" => Ok(Algorithm::Heap),
            "merge" => Ok(Algorithm::Merge),
            "radix" => Ok(Algorithm::Radix),
            other => Err(SortvizError::invalid_argument(format!(
                "unknown sort '{other}' (expected merge|bubble|selection|heap|radix|all)"
            ))),
        }
    }
}

/// Which algorithm(s) a run executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Run a single algorithm.
    One(Algorithm),
    /// Run each algorithm independently against a fresh copy of the same
    /// initial array, in [`Algorithm::ALL`] order.
    All,
}

impl Selection {
    /// The algorithms this selection runs, in execution order.
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::One(a) => vec![a],
            Selection::All => Algorithm::ALL.to_vec(),
        }
    }
}

impl FromStr for Selection {
    type Err = SortvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Selection::All);
        }
        Ok(Selection::One(s.parse()?))
    }
}

/// Options for a single sort-and-visualize run.
#[derive(Clone, Debug)]
pub struct RunOpts {
    /// Algorithm(s) to run.
    pub selection: Selection,
    /// Working-array length. Also the canvas width in pixels.
    pub len: usize,
    /// Rows each array state is expanded into.
    pub strip_height: u32,
    /// Comparison predicate threaded through every algorithm call.
    pub order: Order,
    /// Per-frame delay in hundredths of a second for animated sinks.
    pub delay_cs: u16,
    /// Widened delay for radix frames: radix emits far fewer frames and
    /// would otherwise flash by.
    pub radix_delay_cs: u16,
    /// RNG seed for the initial array. Seeded from entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            len: 250,
            strip_height: 6,
            order: Order::GreaterThan,
            delay_cs: 10,
            radix_delay_cs: 70,
            seed: None,
        }
    }
}

/// Seed a working array of `len` uniformly random 32-bit values.
pub fn seed_values(len: usize, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    (0..len).map(|_| rng.next_u32()).collect()
}

/// Run the selected algorithm(s) and stream every frame into `sink`.
///
/// Sequencing per algorithm: set the frame delay, push one pre frame of the
/// unsorted state, run the sort (which pushes its own frames), push one post
/// frame. All algorithms share one sink session; `end` is called exactly
/// once. When "all" is selected each algorithm starts from an independent
/// copy of the same seeded array so the results are comparable.
#[tracing::instrument(skip(opts, sink), fields(len = opts.len))]
pub fn run(opts: &RunOpts, sink: &mut dyn FrameSink) -> SortvizResult<()> {
    if opts.len == 0 {
        return Err(SortvizError::invalid_argument(
            "array length must be non-zero",
        ));
    }
    if opts.strip_height == 0 {
        return Err(SortvizError::invalid_argument(
            "strip height must be non-zero",
        ));
    }

    sink.begin(SinkConfig {
        width: opts.len as u32,
        strip_height: opts.strip_height,
        delay_cs: opts.delay_cs,
    })?;

    let seeded = seed_values(opts.len, opts.seed);
    let cmp = opts.order.predicate();

    for algorithm in opts.selection.algorithms() {
        let mut work = seeded.clone();
        let delay = if algorithm == Algorithm::Radix {
            opts.radix_delay_cs
        } else {
            opts.delay_cs
        };
        sink.set_frame_delay(delay)?;

        sink.push_frame(&work)?;
        match algorithm {
            Algorithm::Bubble => bubble_sort(&mut work, cmp, sink)?,
            Algorithm::Selection => selection_sort(&mut work, cmp, sink)?,
            Algorithm::Heap => heap_sort(&mut work, cmp, sink)?,
            Algorithm::Merge => merge_sort(&mut work, cmp, sink)?,
            Algorithm::Radix => radix_sort(&mut work, sink)?,
        }
        sink.push_frame(&work)?;
        tracing::info!(algorithm = algorithm.name(), "sorted");
    }

    sink.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::sink::InMemorySink;

    #[test]
    fn unknown_sort_name_is_an_invalid_argument() {
        let err = "quantum".parse::<Selection>().unwrap_err();
        assert!(matches!(err, SortvizError::InvalidArgument(_)));
        assert!(err.to_string().contains("quantum"));
    }

    #[test]
    fn all_names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>().unwrap(), a);
        }
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
    }

    #[test]
    fn seeding_is_deterministic_per_seed() {
        assert_eq!(seed_values(16, Some(42)), seed_values(16, Some(42)));
        assert_ne!(seed_values(16, Some(1)), seed_values(16, Some(2)));
    }

    #[test]
    fn zero_len_is_rejected_before_the_sink_opens() {
        let opts = RunOpts {
            len: 0,
            ..RunOpts::default()
        };
        let mut sink = InMemorySink::new();
        assert!(run(&opts, &mut sink).is_err());
        assert!(sink.config().is_none());
    }

    #[test]
    fn single_algorithm_run_brackets_frames_and_ends_the_session() {
        let n = 8;
        let opts = RunOpts {
            selection: Selection::One(Algorithm::Bubble),
            len: n,
            seed: Some(7),
            ..RunOpts::default()
        };
        let mut sink = InMemorySink::new();
        run(&opts, &mut sink).unwrap();
        // Pre frame + (n-1) pass frames + post frame.
        assert_eq!(sink.frames().len(), n + 1);
        assert!(sink.is_ended());
    }

    #[test]
    fn all_runs_share_one_session_and_one_seed() {
        let opts = RunOpts {
            len: 6,
            seed: Some(3),
            ..RunOpts::default()
        };
        let mut sink = InMemorySink::new();
        run(&opts, &mut sink).unwrap();

        let states = sink.states();
        let first = states.first().copied().unwrap();
        // Each algorithm's pre frame shows the same seeded array.
        let occurrences = states.iter().filter(|&&s| s == first).count();
        assert!(occurrences >= Algorithm::ALL.len());
        assert!(sink.is_ended());
    }

    #[test]
    fn radix_frames_carry_the_widened_delay() {
        let opts = RunOpts {
            selection: Selection::One(Algorithm::Radix),
            len: 8,
            seed: Some(11),
            ..RunOpts::default()
        };
        let mut sink = InMemorySink::new();
        run(&opts, &mut sink).unwrap();
        assert!(sink.frames().iter().all(|(delay, _)| *delay == 70));
    }
}
