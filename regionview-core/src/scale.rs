use serde::{Deserialize, Serialize};

use crate::error::{RegionError, RegionResult};
use crate::types::OffsetInterval;

/// Linear map from compressed base-pair coordinates to pixels.
///
/// No clamping happens here: values outside the domain extrapolate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Build the scale for a set of offset regions drawn across `width` pixels.
    pub fn for_regions(regions: &[OffsetInterval], width: f64) -> RegionResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(RegionError::InvalidWidth(width));
        }
        let first = regions.first().ok_or(RegionError::EmptyRegionSet)?;
        let last = regions.last().ok_or(RegionError::EmptyRegionSet)?;

        let domain = (first.start as f64, last.offset_stop() as f64);
        Ok(Self::new(domain, (0.0, width)))
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 || d1 == d0 {
            return d0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Pixels per compressed base.
    pub fn pixels_per_base(&self) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            0.0
        } else {
            (r1 - r0) / (d1 - d0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionKind;

    #[test]
    fn test_scale_and_invert() {
        let scale = LinearScale::new((100.0, 300.0), (0.0, 1000.0));
        assert_eq!(scale.scale(100.0), 0.0);
        assert_eq!(scale.scale(300.0), 1000.0);
        assert_eq!(scale.scale(200.0), 500.0);
        assert_eq!(scale.invert(500.0), 200.0);
        // extrapolates outside the domain
        assert_eq!(scale.scale(400.0), 1500.0);
        assert_eq!(scale.pixels_per_base(), 5.0);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearScale::new((42.0, 42.0), (0.0, 100.0));
        assert_eq!(scale.scale(42.0), 50.0);
        assert_eq!(scale.invert(10.0), 42.0);
    }

    #[test]
    fn test_for_regions_domain() {
        let regions = vec![
            OffsetInterval { kind: RegionKind::Feature("CDS".into()), start: 10, stop: 20, offset: 0 },
            OffsetInterval { kind: RegionKind::Feature("CDS".into()), start: 30, stop: 40, offset: 10 },
        ];
        let scale = LinearScale::for_regions(&regions, 200.0).unwrap();
        assert_eq!(scale.domain, (10.0, 30.0));
        assert_eq!(scale.range, (0.0, 200.0));
    }

    #[test]
    fn test_for_regions_rejects_bad_input() {
        assert_eq!(
            LinearScale::for_regions(&[], 100.0).unwrap_err(),
            RegionError::EmptyRegionSet
        );
        let regions = vec![OffsetInterval {
            kind: RegionKind::Intron,
            start: 1,
            stop: 2,
            offset: 0,
        }];
        assert!(matches!(
            LinearScale::for_regions(&regions, 0.0),
            Err(RegionError::InvalidWidth(_))
        ));
        assert!(matches!(
            LinearScale::for_regions(&regions, f64::NAN),
            Err(RegionError::InvalidWidth(_))
        ));
    }
}
