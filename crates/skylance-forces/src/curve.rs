use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use skylance_core::{CurveError, Scalar};

/// Immutable time→force lookup table for a rocket motor burn.
///
/// Interpolation is piecewise linear and clamped: before the first sample the
/// first force is returned, past the last sample the last force (0 N for a
/// burned-out motor). Times must be strictly increasing; the table is
/// validated once at construction and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct ThrustCurve {
    times: Vec<Scalar>,
    forces: Vec<Scalar>,
}

/// On-disk shape, matching thrustcurve.org style exports:
/// `{ "time": [...], "force": [...] }`.
#[derive(Serialize, Deserialize)]
struct CurveFile {
    time: Vec<Scalar>,
    force: Vec<Scalar>,
}

impl ThrustCurve {
    pub fn new(times: Vec<Scalar>, forces: Vec<Scalar>) -> Result<Self, CurveError> {
        if times.is_empty() {
            return Err(CurveError::Empty);
        }
        if times.len() != forces.len() {
            return Err(CurveError::LengthMismatch { times: times.len(), forces: forces.len() });
        }
        for i in 1..times.len() {
            if times[i] <= times[i - 1] {
                return Err(CurveError::NotStrictlyIncreasing { index: i });
            }
        }
        Ok(Self { times, forces })
    }

    pub fn from_json_path(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read thrust curve: {}", path.display()))?;
        let file: CurveFile = serde_json::from_str(&s)
            .with_context(|| format!("failed to parse thrust curve: {}", path.display()))?;
        Ok(Self::new(file.time, file.force)?)
    }

    /// Thrust magnitude (N) at elapsed time `t` (s), clamped interpolation.
    pub fn magnitude(&self, t: Scalar) -> Scalar {
        let n = self.times.len();
        if t <= self.times[0] {
            return self.forces[0];
        }
        if t >= self.times[n - 1] {
            return self.forces[n - 1];
        }
        // first sample strictly past t; 1..n-1 given the clamps above
        let hi = self.times.partition_point(|&s| s <= t);
        let lo = hi - 1;
        let a = (t - self.times[lo]) / (self.times[hi] - self.times[lo]);
        self.forces[lo] + a * (self.forces[hi] - self.forces[lo])
    }

    /// Time of the last sample; the motor contributes that sample's force
    /// (normally 0 N) from here on.
    #[inline]
    pub fn burnout(&self) -> Scalar {
        self.times[self.times.len() - 1]
    }

    #[inline] pub fn len(&self) -> usize { self.times.len() }
    #[inline] pub fn is_empty(&self) -> bool { false } // non-empty by construction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ThrustCurve {
        ThrustCurve::new(vec![1.0, 2.0, 4.0], vec![100.0, 200.0, 0.0]).unwrap()
    }

    #[test] fn clamps_before_first_sample() {
        assert_eq!(table().magnitude(0.0), 100.0);
        assert_eq!(table().magnitude(1.0), 100.0);
    }

    #[test] fn clamps_after_last_sample() {
        assert_eq!(table().magnitude(4.0), 0.0);
        assert_eq!(table().magnitude(100.0), 0.0);
    }

    #[test] fn interpolates_linearly_between_samples() {
        assert!((table().magnitude(1.5) - 150.0).abs() < 1e-12);
        assert!((table().magnitude(3.0) - 100.0).abs() < 1e-12);
    }

    #[test] fn rejects_non_increasing_times() {
        let err = ThrustCurve::new(vec![1.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, CurveError::NotStrictlyIncreasing { index: 1 });
    }

    #[test] fn rejects_length_mismatch() {
        let err = ThrustCurve::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err, CurveError::LengthMismatch { times: 2, forces: 1 });
    }

    #[test] fn rejects_empty_table() {
        assert_eq!(ThrustCurve::new(vec![], vec![]).unwrap_err(), CurveError::Empty);
    }

    #[test] fn construction_is_idempotent() {
        let a = table();
        let b = table();
        for i in 0..=80 {
            let t = i as Scalar * 0.0625;
            assert_eq!(a.magnitude(t), b.magnitude(t));
        }
    }

    #[test] fn loads_curve_json() {
        let path = std::env::temp_dir().join("skylance_curve_test.json");
        std::fs::write(&path, r#"{"time":[1.0,2.0,4.0],"force":[100.0,200.0,0.0]}"#).unwrap();
        let loaded = ThrustCurve::from_json_path(&path).unwrap();
        assert_eq!(loaded, table());
        std::fs::remove_file(&path).ok();
    }

    #[test] fn rejects_bad_curve_json() {
        let path = std::env::temp_dir().join("skylance_curve_bad.json");
        std::fs::write(&path, r#"{"time":[2.0,1.0],"force":[1.0,2.0]}"#).unwrap();
        assert!(ThrustCurve::from_json_path(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
