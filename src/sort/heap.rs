//! Two-phase heap sort.

use crate::encode::sink::FrameSink;
use crate::foundation::color::sort_key;
use crate::foundation::error::SortvizResult;

/// Sift the element at `i` down through the first `n` slots.
///
/// Compares the node against both children's sort keys under `cmp`, swaps
/// with the winning child and recurses if a swap occurred. Recursion depth is
/// bounded by the heap height, O(log n).
fn heapify<C>(values: &mut [u32], n: usize, i: usize, cmp: C)
where
    C: Fn(u32, u32) -> bool + Copy,
{
    let mut winner = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && cmp(sort_key(values[left]), sort_key(values[winner])) {
        winner = left;
    }
    if right < n && cmp(sort_key(values[right]), sort_key(values[winner])) {
        winner = right;
    }
    if winner != i {
        values.swap(i, winner);
        heapify(values, n, winner, cmp);
    }
}

/// Heap sort. Builds the heap bottom-up, pushing one frame per heapify call,
/// then repeatedly swaps root to end and re-sifts the reduced heap, pushing
/// one frame per extraction step: `n/2 + n` frames in total. The final
/// extraction degenerates to a root-with-root swap and still emits its
/// frame.
pub fn heap_sort<C>(values: &mut [u32], cmp: C, sink: &mut dyn FrameSink) -> SortvizResult<()>
where
    C: Fn(u32, u32) -> bool + Copy,
{
    let n = values.len();

    for i in (0..n / 2).rev() {
        heapify(values, n, i, cmp);
        sink.push_frame(values)?;
    }

    for i in (0..n).rev() {
        values.swap(0, i);
        heapify(values, i, 0, cmp);
        sink.push_frame(values)?;
    }
    Ok(())
}
