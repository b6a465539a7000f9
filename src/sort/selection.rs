//! Selection sort with the historical inverted extremum search.

use crate::encode::sink::FrameSink;
use crate::foundation::color::sort_key;
use crate::foundation::error::SortvizResult;

/// Selection sort. Pushes one frame per outer placement plus a trailing
/// frame after the loop: `n` frames for an array of length `n`.
///
/// The extremum scan uses the *negation* of the predicate to pick its
/// candidate, so this algorithm selects the opposite extreme from what the
/// predicate's name suggests (`less_than` behaves as a max-selection). The
/// net output order still matches the other predicate-driven algorithms;
/// the inversion is observable in the intermediate frames and is kept
/// deliberately.
pub fn selection_sort<C>(values: &mut [u32], cmp: C, sink: &mut dyn FrameSink) -> SortvizResult<()>
where
    C: Fn(u32, u32) -> bool + Copy,
{
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut pick = i;
        for j in i + 1..n {
            if !cmp(sort_key(values[j]), sort_key(values[pick])) {
                pick = j;
            }
        }
        if pick != i {
            values.swap(i, pick);
        }
        sink.push_frame(values)?;
    }
    sink.push_frame(values)?;
    Ok(())
}
