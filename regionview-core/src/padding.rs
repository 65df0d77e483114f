use crate::error::{RegionError, RegionResult};
use crate::types::{DistancedInterval, Interval, PaddedInterval, Position, RegionKind};

/// Record the distance from each interval's start to the previous interval's stop.
pub fn annotate_distances(intervals: &[Interval]) -> Vec<DistancedInterval> {
    intervals
        .iter()
        .enumerate()
        .map(|(i, interval)| DistancedInterval {
            interval: interval.clone(),
            previous_distance: if i == 0 {
                None
            } else {
                Some(interval.start.saturating_sub(intervals[i - 1].stop))
            },
        })
        .collect()
}

/// Surround every interval with `padding` bases of flanking context.
///
/// When two neighbours are closer than twice the padding, their facing pads
/// would overlap; the end pad of the first and the start pad of the second
/// are then replaced by one `intron` region covering the real gap.
pub fn add_padding(
    padding: Position,
    intervals: &[DistancedInterval],
) -> RegionResult<Vec<PaddedInterval>> {
    if padding < 0 {
        return Err(RegionError::NegativePadding(padding));
    }

    if padding == 0 {
        return Ok(intervals
            .iter()
            .map(|d| PaddedInterval::from(d.interval.clone()))
            .collect());
    }

    let out_of_range = |position| RegionError::PaddingOutOfRange { padding, position };

    let mut padded: Vec<PaddedInterval> = Vec::with_capacity(intervals.len() * 3);
    let mut collapsed = 0usize;

    for DistancedInterval {
        interval,
        previous_distance,
    } in intervals
    {
        let before_start = interval
            .start
            .checked_sub(1)
            .ok_or_else(|| out_of_range(interval.start))?;

        // gap / 2 < padding is gap < 2 * padding without the overflow
        match previous_distance {
            Some(gap) if gap / 2 < padding => {
                // The intron starts on the stop of the previous interval
                let intron_start = match padded.pop() {
                    Some(end_pad) => end_pad.start - 1,
                    None => interval
                        .start
                        .checked_sub(*gap)
                        .ok_or_else(|| out_of_range(interval.start))?,
                };
                padded.push(PaddedInterval::new(
                    RegionKind::Intron,
                    intron_start,
                    before_start,
                ));
                collapsed += 1;
            }
            _ => padded.push(PaddedInterval::new(
                RegionKind::StartPad,
                interval
                    .start
                    .checked_sub(padding)
                    .ok_or_else(|| out_of_range(interval.start))?,
                before_start,
            )),
        }

        let after_stop = interval
            .stop
            .checked_add(padding)
            .ok_or_else(|| out_of_range(interval.stop))?;
        padded.push(PaddedInterval::from(interval.clone()));
        padded.push(PaddedInterval::new(
            RegionKind::EndPad,
            interval.stop + 1,
            after_stop,
        ));
    }

    log::debug!(
        "Padded {} intervals by {}bp into {} regions ({} gaps collapsed to introns)",
        intervals.len(),
        padding,
        padded.len(),
        collapsed
    );

    Ok(padded)
}
