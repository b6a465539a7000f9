//! Adjacent-swap bubble sort.

use crate::encode::sink::FrameSink;
use crate::foundation::color::sort_key;
use crate::foundation::error::SortvizResult;

/// Bubble sort. Pushes one frame per completed outer pass, after the full
/// inner scan: `n - 1` frames for an array of length `n`, regardless of
/// input.
pub fn bubble_sort<C>(values: &mut [u32], cmp: C, sink: &mut dyn FrameSink) -> SortvizResult<()>
where
    C: Fn(u32, u32) -> bool + Copy,
{
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        // Last i elements are already in place.
        for j in 0..n - i - 1 {
            if cmp(sort_key(values[j]), sort_key(values[j + 1])) {
                values.swap(j, j + 1);
            }
        }
        sink.push_frame(values)?;
    }
    Ok(())
}
