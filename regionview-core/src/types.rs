use serde::{Deserialize, Serialize};
use std::fmt;

pub type Position = i64;

/// Classification of a region in the padded coordinate system.
///
/// Real intervals keep whatever feature type the annotation gave them
/// (`CDS`, `exon`, ...). The other variants are synthetic regions inserted
/// by the padding stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionKind {
    Feature(String),
    StartPad,
    EndPad,
    Intron,
}

impl RegionKind {
    pub fn as_str(&self) -> &str {
        match self {
            RegionKind::Feature(name) => name,
            RegionKind::StartPad => "start_pad",
            RegionKind::EndPad => "end_pad",
            RegionKind::Intron => "intron",
        }
    }

    pub fn is_synthetic(&self) -> bool {
        !matches!(self, RegionKind::Feature(_))
    }
}

impl From<String> for RegionKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "start_pad" => RegionKind::StartPad,
            "end_pad" => RegionKind::EndPad,
            "intron" => RegionKind::Intron,
            _ => RegionKind::Feature(name),
        }
    }
}

impl From<RegionKind> for String {
    fn from(kind: RegionKind) -> Self {
        match kind {
            RegionKind::Feature(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw annotated span, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub feature_type: String,
    pub start: Position,
    pub stop: Position,
}

impl Interval {
    pub fn new<S: Into<String>>(feature_type: S, start: Position, stop: Position) -> Self {
        Self {
            feature_type: feature_type.into(),
            start,
            stop,
        }
    }

    pub fn len(&self) -> Position {
        self.stop - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.stop < self.start
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.stop
    }
}

/// An interval annotated with the gap to its predecessor.
///
/// `previous_distance` is `None` for the first interval, which stands for an
/// infinite distance: nothing before it can be collapsed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistancedInterval {
    pub interval: Interval,
    pub previous_distance: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedInterval {
    pub kind: RegionKind,
    pub start: Position,
    pub stop: Position,
}

impl PaddedInterval {
    pub fn new(kind: RegionKind, start: Position, stop: Position) -> Self {
        Self { kind, start, stop }
    }
}

impl From<Interval> for PaddedInterval {
    fn from(interval: Interval) -> Self {
        Self {
            kind: RegionKind::Feature(interval.feature_type),
            start: interval.start,
            stop: interval.stop,
        }
    }
}

/// A padded interval plus the cumulative number of bases squashed out of the
/// coordinate space before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetInterval {
    pub kind: RegionKind,
    pub start: Position,
    pub stop: Position,
    pub offset: Position,
}

impl OffsetInterval {
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.stop
    }

    /// Start of this region in the compressed coordinate space.
    pub fn offset_start(&self) -> Position {
        self.start - self.offset
    }

    /// Stop of this region in the compressed coordinate space.
    pub fn offset_stop(&self) -> Position {
        self.stop - self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionOffset {
    pub offset_position: Position,
}
