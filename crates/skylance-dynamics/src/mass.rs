use skylance_core::types::{Mat3, Vec3};
use skylance_core::{Scalar, SpawnError};

#[derive(Copy, Clone, Debug)]
pub struct MassProps {
    pub mass: Scalar,
    pub inv_mass: Scalar,
    /// Local-space inertia tensor.
    pub inertia: Mat3,
}

impl MassProps {
    pub fn new(mass: Scalar, inertia: Mat3) -> Result<Self, SpawnError> {
        if mass <= 0.0 {
            return Err(SpawnError::NonPositiveMass(mass));
        }
        Ok(Self { mass, inv_mass: 1.0 / mass, inertia })
    }

    /// Point mass with an isotropic unit-radius inertia fallback.
    pub fn isotropic(mass: Scalar) -> Result<Self, SpawnError> {
        Self::new(mass, Mat3::from_diagonal(Vec3::splat(mass)))
    }

    /// Solid sphere: I = 2/5·m·r² about every axis.
    pub fn from_sphere(radius: Scalar, density: Scalar) -> Result<Self, SpawnError> {
        let vol = (4.0 / 3.0) * std::f64::consts::PI * radius * radius * radius;
        let m = density * vol;
        let ii = 0.4 * m * radius * radius;
        Self::new(m, Mat3::from_diagonal(Vec3::splat(ii)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn rejects_non_positive_mass() {
        assert_eq!(MassProps::isotropic(0.0).unwrap_err(), SpawnError::NonPositiveMass(0.0));
        assert_eq!(MassProps::isotropic(-2.0).unwrap_err(), SpawnError::NonPositiveMass(-2.0));
        assert!(MassProps::from_sphere(0.25, 0.0).is_err());
    }

    #[test] fn sphere_props() {
        let p = MassProps::from_sphere(0.25, 1000.0).unwrap();
        let expect_m = (4.0 / 3.0) * std::f64::consts::PI * 0.25_f64.powi(3) * 1000.0;
        assert!((p.mass - expect_m).abs() < 1e-9);
        assert!((p.inv_mass * p.mass - 1.0).abs() < 1e-12);
        assert!((p.inertia.x_axis.x - 0.4 * expect_m * 0.0625).abs() < 1e-9);
    }
}
