//! The sorting engine: five algorithms, one instrumentation contract.
//!
//! Every algorithm mutates the working array in place under a comparison
//! predicate over [`sort_key`](crate::sort_key)s, and after each externally
//! observable rearrangement pushes the array's full state to a
//! [`FrameSink`](crate::FrameSink). The notification
//! granularity is part of the visual contract: changing it changes the
//! animation's pacing.
//!
//! Predicates compare derived sort keys, never raw values. Radix sort is the
//! exception to the predicate rule: it ignores the ordering entirely and
//! always produces key-ascending output.

pub mod bubble;
pub mod heap;
pub mod merge;
pub mod radix;
pub mod selection;

/// `a > b` over sort keys. Yields key-ascending output from the
/// predicate-driven algorithms.
pub fn greater_than(a: u32, b: u32) -> bool {
    a > b
}

/// `a < b` over sort keys. Yields key-descending output from the
/// predicate-driven algorithms.
pub fn less_than(a: u32, b: u32) -> bool {
    a < b
}

/// Comparison predicate selected once per run and threaded through every
/// algorithm call.
///
/// The predicate is the *swap condition*: it holds when a pair is considered
/// out of order. `GreaterThan` therefore sorts key-ascending and `LessThan`
/// key-descending. Historical revisions of the visualizer disagreed on the
/// default; the orchestrator defaults to `GreaterThan` (ascending).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Swap when `left > right`: ascending output.
    #[default]
    GreaterThan,
    /// Swap when `left < right`: descending output.
    LessThan,
}

impl Order {
    /// The key predicate this order denotes.
    pub fn predicate(self) -> fn(u32, u32) -> bool {
        match self {
            Order::GreaterThan => greater_than,
            Order::LessThan => less_than,
        }
    }
}

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;
