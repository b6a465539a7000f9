//! Top-down recursive merge sort.

use crate::encode::sink::FrameSink;
use crate::foundation::color::sort_key;
use crate::foundation::error::SortvizResult;

/// Merge `values[l..=m]` and `values[m+1..=r]` back into place.
///
/// Both halves are copied into scratch buffers, then interleaved using the
/// *negation* of the predicate as the take-from-left condition. The polarity
/// is load-bearing: an element is taken from the left buffer exactly when
/// `cmp` does not hold for left-vs-right.
fn merge<C>(values: &mut [u32], l: usize, m: usize, r: usize, cmp: C)
where
    C: Fn(u32, u32) -> bool + Copy,
{
    let left: Vec<u32> = values[l..=m].to_vec();
    let right: Vec<u32> = values[m + 1..=r].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = l;
    while i < left.len() && j < right.len() {
        if !cmp(sort_key(left[i]), sort_key(right[j])) {
            values[k] = left[i];
            i += 1;
        } else {
            values[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        values[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        values[k] = right[j];
        j += 1;
        k += 1;
    }
}

fn sort_range<C>(
    values: &mut [u32],
    l: usize,
    r: usize,
    cmp: C,
    sink: &mut dyn FrameSink,
) -> SortvizResult<()>
where
    C: Fn(u32, u32) -> bool + Copy,
{
    if l < r {
        let m = l + (r - l) / 2;
        sort_range(values, l, m, cmp, sink)?;
        sort_range(values, m + 1, r, cmp, sink)?;
        merge(values, l, m, r, cmp);
        sink.push_frame(values)?;
    }
    Ok(())
}

/// Merge sort. Pushes one frame after each completed merge of a subrange:
/// `n - 1` frames for an array of length `n` (one per internal node of the
/// recursion tree). Scratch space is O(n) per call level.
pub fn merge_sort<C>(values: &mut [u32], cmp: C, sink: &mut dyn FrameSink) -> SortvizResult<()>
where
    C: Fn(u32, u32) -> bool + Copy,
{
    if values.is_empty() {
        return Ok(());
    }
    let r = values.len() - 1;
    sort_range(values, 0, r, cmp, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::sink::{InMemorySink, SinkConfig};
    use crate::sort::{greater_than, less_than};

    fn sink_for(width: u32) -> InMemorySink {
        let mut sink = InMemorySink::new();
        sink.begin(SinkConfig {
            width,
            strip_height: 1,
            delay_cs: 10,
        })
        .unwrap();
        sink
    }

    fn from_keys(keys: &[u32]) -> Vec<u32> {
        keys.iter().map(|&k| (k << 24) | (k << 16)).collect()
    }

    fn keys_of(values: &[u32]) -> Vec<u32> {
        values.iter().map(|&v| sort_key(v)).collect()
    }

    #[test]
    fn emits_one_frame_per_internal_merge() {
        let mut values = from_keys(&[8, 3, 5, 1, 9, 2, 7, 4]);
        let mut sink = sink_for(8);
        merge_sort(&mut values, greater_than, &mut sink).unwrap();
        assert_eq!(sink.frames().len(), 7);
        assert_eq!(keys_of(&values), vec![1, 2, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn take_from_left_polarity_keeps_equal_keys_left_first() {
        // Two values with equal keys but distinct low color bytes: the left
        // one must win the tie under !cmp.
        let a = (6 * 3) << 24 | 0x01_00;
        let b = (6 * 3) << 24 | 0x02_00;
        let mut values = vec![a, b];
        let mut sink = sink_for(2);
        merge_sort(&mut values, greater_than, &mut sink).unwrap();
        assert_eq!(values, vec![a, b]);
    }

    #[test]
    fn sorts_descending_under_less_than() {
        let mut values = from_keys(&[2, 9, 4, 1]);
        let mut sink = sink_for(4);
        merge_sort(&mut values, less_than, &mut sink).unwrap();
        assert_eq!(keys_of(&values), vec![9, 4, 2, 1]);
    }

    #[test]
    fn empty_and_single_emit_no_frames() {
        let mut empty: Vec<u32> = Vec::new();
        let mut sink = sink_for(0);
        merge_sort(&mut empty, greater_than, &mut sink).unwrap();
        assert!(sink.frames().is_empty());

        let mut single = from_keys(&[5]);
        let mut sink = sink_for(1);
        merge_sort(&mut single, greater_than, &mut sink).unwrap();
        assert!(sink.frames().is_empty());
    }
}
