//! RegionView Core Library
//!
//! Turns the exons, CDS and other intervals of one or more transcripts into a
//! compressed coordinate system: regions are merged, padded, long introns are
//! collapsed, and positions map to pixels and back.

pub mod types;
pub mod error;
pub mod normalize;
pub mod padding;
pub mod offset;
pub mod scale;
pub mod viewer;
pub mod annotation;

// Re-export commonly used types and functions
pub use types::{Interval, OffsetInterval, PaddedInterval, Position, PositionOffset, RegionKind};
pub use error::{RegionError, RegionResult};
pub use scale::LinearScale;
pub use viewer::{
    calculate_offset_regions, invert_position_offset, PixelSpan, RegionViewer, ViewerParams,
};
pub use annotation::{read_json_intervals, Gff3Reader};

/// Version information for the RegionView core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
