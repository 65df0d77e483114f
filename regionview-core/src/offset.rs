//! Cumulative offsets and genomic → compressed position lookup
//!
//! Each region's offset is the total number of uncovered bases that precede
//! it. Subtracting that offset from a position inside the region yields its
//! coordinate in the compressed space, where long introns take no room.
//! Positions inside collapsed space have no unique compressed coordinate and
//! are clamped to the nearest covered base on their left.

use crate::error::{RegionError, RegionResult};
use crate::types::{OffsetInterval, PaddedInterval, Position, PositionOffset};

pub fn calculate_offsets(regions: &[PaddedInterval]) -> Vec<OffsetInterval> {
    let mut offset_regions: Vec<OffsetInterval> = Vec::with_capacity(regions.len());

    for region in regions {
        let offset = match offset_regions.last() {
            Some(previous) => previous.offset + (region.start - previous.stop),
            None => 0,
        };
        offset_regions.push(OffsetInterval {
            kind: region.kind.clone(),
            start: region.start,
            stop: region.stop,
            offset,
        });
    }

    offset_regions
}

/// Map a genomic position into the compressed coordinate space.
///
/// `regions` must be sorted by start. Positions before the first region
/// clamp to its start and positions in an uncovered gap clamp to the stop of
/// the region on their left.
pub fn position_offset(
    regions: &[OffsetInterval],
    position: Position,
) -> RegionResult<PositionOffset> {
    let first = regions.first().ok_or(RegionError::EmptyRegionSet)?;
    Ok(PositionOffset {
        offset_position: clamped_offset_position(first, regions, position),
    })
}

pub(crate) fn clamped_offset_position(
    first: &OffsetInterval,
    regions: &[OffsetInterval],
    position: Position,
) -> Position {
    let covering = regions.partition_point(|region| region.start <= position);
    if covering == 0 {
        return first.offset_start();
    }

    let region = &regions[covering - 1];
    if position <= region.stop {
        position - region.offset
    } else {
        region.offset_stop()
    }
}

/// Whether `position` falls inside any region of the coordinate system.
pub fn is_position_defined(regions: &[OffsetInterval], position: Position) -> bool {
    let covering = regions.partition_point(|region| region.start <= position);
    covering > 0 && regions[covering - 1].contains(position)
}
