//! Sortviz renders classic sorting algorithms as images: every intermediate
//! state of the working array becomes one frame, either stacked into a
//! static strip image (plain ASCII PPM) or appended to an animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: the orchestrator fills the working array with uniformly
//!    random `u32` values, each doubling as an RGB color.
//! 2. **Sort**: the selected algorithm mutates the array in place under a
//!    comparison predicate over derived sort keys, notifying the sink after
//!    every externally observable rearrangement.
//! 3. **Encode**: the [`FrameSink`] turns each notification into an appended
//!    image frame and finalizes the file when the run ends.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded and synchronous**: exactly one logical writer exists
//!   for the process lifetime; the sink session exclusively owns the output
//!   file from `begin` to `end`.
//! - **Keys, not values**: algorithms only ever compare
//!   [`sort_key`](crate::sort_key)s, never raw values.
//! - **No retries**: a failed frame write aborts the run; partial output is
//!   left in place.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod pipeline;
mod sort;

pub use encode::gif::GifSink;
pub use encode::ppm::PpmSink;
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::color::{Rgb8, sort_key};
pub use foundation::error::{SortvizError, SortvizResult};
pub use pipeline::{Algorithm, RunOpts, Selection, run, seed_values};
pub use sort::{
    Order, bubble_sort, greater_than, heap_sort, less_than, merge_sort, radix_sort, selection_sort,
};
