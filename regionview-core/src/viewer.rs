//! End-to-end coordinate system for a region track
//!
//! `RegionViewer` runs filter → normalize → distance → pad → offset → scale
//! once and then answers the lookups drawing code makes repeatedly: where a
//! base lands in pixels, and which base a pixel points at.

use serde::{Deserialize, Serialize};

use crate::error::{RegionError, RegionResult};
use crate::normalize::{filter_feature_types, normalize, validate_intervals};
use crate::offset::{calculate_offsets, clamped_offset_position, is_position_defined};
use crate::padding::{add_padding, annotate_distances};
use crate::scale::LinearScale;
use crate::types::{Interval, OffsetInterval, Position, PositionOffset, RegionKind};

/// Slack added before flooring an inverted pixel so that a base scaled out
/// and back lands on itself. A pixel that inverts to within 1e-6 bp left of
/// a base boundary therefore resolves to the base after that boundary.
const INVERT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerParams {
    /// Flanking bases added on each side of every region
    #[serde(default = "default_padding")]
    pub padding: Position,

    /// Total width in pixels, panels included
    #[serde(default = "default_width")]
    pub width: f64,

    /// Feature types that take part in the coordinate system; empty keeps all
    #[serde(default = "default_feature_types")]
    pub feature_types: Vec<String>,

    #[serde(default)]
    pub left_panel_width: f64,

    #[serde(default)]
    pub right_panel_width: f64,
}

fn default_padding() -> Position { 50 }
fn default_width() -> f64 { 1000.0 }
fn default_feature_types() -> Vec<String> { vec!["CDS".to_string()] }

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            width: default_width(),
            feature_types: default_feature_types(),
            left_panel_width: 0.0,
            right_panel_width: 0.0,
        }
    }
}

impl ViewerParams {
    pub fn with_padding(mut self, padding: Position) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_feature_types<S: Into<String>>(mut self, feature_types: Vec<S>) -> Self {
        self.feature_types = feature_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_panels(mut self, left: f64, right: f64) -> Self {
        self.left_panel_width = left;
        self.right_panel_width = right;
        self
    }

    /// Pixels left for the track itself once both side panels are taken out.
    pub fn track_width(&self) -> RegionResult<f64> {
        let track_width = self.width - self.left_panel_width - self.right_panel_width;
        if !track_width.is_finite() || track_width <= 0.0 {
            return Err(RegionError::InvalidWidth(track_width));
        }
        Ok(track_width)
    }
}

/// A region together with the pixel span it occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelSpan {
    pub kind: RegionKind,
    pub start: Position,
    pub stop: Position,
    pub x_start: f64,
    pub x_stop: f64,
}

/// Run the region pipeline without building a scale.
///
/// Returns an empty list when no interval survives the feature filter.
pub fn calculate_offset_regions<S: AsRef<str>>(
    intervals: &[Interval],
    feature_types: &[S],
    padding: Position,
) -> RegionResult<Vec<OffsetInterval>> {
    validate_intervals(intervals)?;
    let filtered = filter_feature_types(intervals, feature_types);
    if filtered.is_empty() && !intervals.is_empty() {
        log::warn!(
            "None of {} intervals matched the requested feature types",
            intervals.len()
        );
    }

    let normalized = normalize(&filtered)?;
    let padded = add_padding(padding, &annotate_distances(&normalized))?;
    Ok(calculate_offsets(&padded))
}

/// Map a pixel back to a genomic position.
///
/// The last region whose scaled span contains `pixel` wins. A pixel outside
/// every span resolves to 0. Flooring adds `INVERT_TOLERANCE`, so a pixel
/// just short of a base boundary counts as the next base.
pub fn invert_position_offset(
    regions: &[OffsetInterval],
    scale: &LinearScale,
    pixel: f64,
) -> Position {
    let mut result = 0;
    for region in regions {
        let x_start = scale.scale(region.offset_start() as f64);
        let x_stop = scale.scale(region.offset_stop() as f64);
        if pixel >= x_start && pixel <= x_stop {
            result = (scale.invert(pixel) + region.offset as f64 + INVERT_TOLERANCE).floor()
                as Position;
        }
    }
    result
}

/// Coordinate system shared by every track drawn over the same regions.
///
/// Always holds at least one offset region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionViewer {
    offset_regions: Vec<OffsetInterval>,
    scale: LinearScale,
    left_panel_width: f64,
}

impl RegionViewer {
    pub fn new(intervals: &[Interval], params: &ViewerParams) -> RegionResult<Self> {
        let track_width = params.track_width()?;
        let offset_regions =
            calculate_offset_regions(intervals, &params.feature_types, params.padding)?;
        if offset_regions.is_empty() {
            return Err(RegionError::EmptyRegionSet);
        }
        let scale = LinearScale::for_regions(&offset_regions, track_width)?;

        log::info!(
            "Built coordinate system: {} regions, {:.0}bp compressed over {:.0}px",
            offset_regions.len(),
            scale.domain.1 - scale.domain.0,
            track_width
        );

        Ok(Self {
            offset_regions,
            scale,
            left_panel_width: params.left_panel_width,
        })
    }

    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    pub fn offset_regions(&self) -> &[OffsetInterval] {
        &self.offset_regions
    }

    pub fn left_panel_width(&self) -> f64 {
        self.left_panel_width
    }

    pub fn track_width(&self) -> f64 {
        self.scale.range.1 - self.scale.range.0
    }

    pub fn position_offset(&self, position: Position) -> PositionOffset {
        PositionOffset {
            offset_position: clamped_offset_position(
                &self.offset_regions[0],
                &self.offset_regions,
                position,
            ),
        }
    }

    /// Pixel within the track for a genomic position.
    pub fn scale_position(&self, position: Position) -> f64 {
        self.scale
            .scale(self.position_offset(position).offset_position as f64)
    }

    pub fn invert_offset(&self, pixel: f64) -> Position {
        invert_position_offset(&self.offset_regions, &self.scale, pixel)
    }

    pub fn is_position_defined(&self, position: Position) -> bool {
        is_position_defined(&self.offset_regions, position)
    }

    pub fn pixel_spans(&self) -> Vec<PixelSpan> {
        self.offset_regions
            .iter()
            .map(|region| PixelSpan {
                kind: region.kind.clone(),
                start: region.start,
                stop: region.stop,
                x_start: self.scale.scale(region.offset_start() as f64),
                x_stop: self.scale.scale(region.offset_stop() as f64),
            })
            .collect()
    }
}
