//! LSD radix sort over derived sort keys.

use crate::encode::sink::FrameSink;
use crate::foundation::color::sort_key;
use crate::foundation::error::SortvizResult;

/// Radix sort: stable base-10 counting passes over the derived sort key, not
/// the raw value. Ignores the comparison predicate entirely; output is always
/// key-ascending. Pushes one frame per digit pass, with the pass count driven
/// by the decimal digit count of the maximum sort key in the array.
pub fn radix_sort(values: &mut [u32], sink: &mut dyn FrameSink) -> SortvizResult<()> {
    let Some(max_key) = values.iter().copied().map(sort_key).max() else {
        return Ok(());
    };

    let mut exp: u32 = 1;
    while max_key / exp > 0 {
        counting_pass(values, exp);
        sink.push_frame(values)?;
        exp *= 10;
    }
    Ok(())
}

/// One stable counting-sort pass on the decimal digit selected by `exp`.
///
/// Elements with an equal digit keep their relative order from the input to
/// this pass. Scratch space is O(n).
fn counting_pass(values: &mut [u32], exp: u32) {
    let mut counts = [0usize; 10];
    for &v in values.iter() {
        counts[digit(v, exp)] += 1;
    }
    for d in 1..10 {
        counts[d] += counts[d - 1];
    }

    let mut output = vec![0u32; values.len()];
    for &v in values.iter().rev() {
        let d = digit(v, exp);
        counts[d] -= 1;
        output[counts[d]] = v;
    }
    values.copy_from_slice(&output);
}

fn digit(value: u32, exp: u32) -> usize {
    ((sort_key(value) / exp) % 10) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::sink::{InMemorySink, SinkConfig};

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
    fn sorts_ascending_regardless_of_any_predicate() {
        let mut values = from_keys(&[170, 45, 75, 90, 2, 24, 66]);
        let mut sink = sink_for(7);
        radix_sort(&mut values, &mut sink).unwrap();
        assert_eq!(keys_of(&values), vec![2, 24, 45, 66, 75, 90, 170]);
    }

    #[test]
    fn one_frame_per_digit_of_the_maximum_key() {
        let mut values = from_keys(&[170, 3, 24]);
        let mut sink = sink_for(3);
        radix_sort(&mut values, &mut sink).unwrap();
        // Max key 170 has three decimal digits.
        assert_eq!(sink.frames().len(), 3);

        let mut values = from_keys(&[9, 3, 5]);
        let mut sink = sink_for(3);
        radix_sort(&mut values, &mut sink).unwrap();
        assert_eq!(sink.frames().len(), 1);
    }

    #[test]
    fn counting_pass_is_stable() {
        // Keys 21 and 23 share the tens digit; their relative order must
        // survive the exp=10 pass.
        let a = (23 * 3) << 24 | 0x01_00;
        let b = (21 * 3) << 24 | 0x02_00;
        let mut values = vec![a, b];
        counting_pass(&mut values, 10);
        assert_eq!(values, vec![a, b]);
    }

    #[test]
    fn all_zero_keys_emit_no_frames() {
        let mut values = vec![0x00_00_FF_00, 0x00_00_01_00];
        let mut sink = sink_for(2);
        radix_sort(&mut values, &mut sink).unwrap();
        assert!(sink.frames().is_empty());
    }
}
