use skylance_core::{ForceEffector, ForceQuery, Scalar, StepCtx, Vec3, Wrench, vec3};

use crate::ThrustCurve;

/// Fixed firing attitude. The projectile holds this for the whole flight;
/// there is no in-flight guidance or re-targeting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThrustAttitude {
    pub elevation_deg: Scalar,
    pub azimuth_deg: Scalar,
}

impl ThrustAttitude {
    /// Unit thrust direction via spherical-to-Cartesian conversion.
    /// Degrees are converted to radians first; the component order is
    /// (cosθ·cosφ, cosθ·sinφ, sinθ) and must stay exactly this, since the
    /// whole trajectory reproduces from it.
    pub fn direction(&self) -> Vec3 {
        let theta = self.elevation_deg.to_radians();
        let phi = self.azimuth_deg.to_radians();
        vec3(
            theta.cos() * phi.cos(),
            theta.cos() * phi.sin(),
            theta.sin(),
        )
    }
}

/// Rocket-motor thrust: curve magnitude at elapsed sim time, along the
/// body's fixed attitude direction.
#[derive(Clone, Debug)]
pub struct CurveThrust {
    pub curve: ThrustCurve,
}

impl ForceEffector for CurveThrust {
    fn wrench(&self, ctx: &StepCtx, q: ForceQuery) -> Wrench {
        let mag = self.curve.magnitude(ctx.elapsed());
        let att = ThrustAttitude { elevation_deg: q.attitude_deg[0], azimuth_deg: q.attitude_deg[1] };
        Wrench::from_force(att.direction() * mag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylance_core::quat_identity;

    #[test] fn direction_is_unit_length() {
        for (e, a) in [(35.0, 30.0), (0.0, 0.0), (89.0, -120.0), (-10.0, 275.0)] {
            let d = ThrustAttitude { elevation_deg: e, azimuth_deg: a }.direction();
            assert!((d.length() - 1.0).abs() < 1e-12, "({e}, {a})");
        }
    }

    #[test] fn direction_axes() {
        let up = ThrustAttitude { elevation_deg: 90.0, azimuth_deg: 0.0 }.direction();
        assert!((up - vec3(0.0, 0.0, 1.0)).length() < 1e-9);

        let flat = ThrustAttitude { elevation_deg: 0.0, azimuth_deg: 0.0 }.direction();
        assert!((flat - vec3(1.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test] fn direction_matches_spherical_conversion() {
        let d = ThrustAttitude { elevation_deg: 35.0, azimuth_deg: 30.0 }.direction();
        let (theta, phi) = (35.0_f64.to_radians(), 30.0_f64.to_radians());
        assert!((d.x - theta.cos() * phi.cos()).abs() < 1e-15);
        assert!((d.y - theta.cos() * phi.sin()).abs() < 1e-15);
        assert!((d.z - theta.sin()).abs() < 1e-15);
    }

    #[test] fn magnitude_follows_clock() {
        let curve = ThrustCurve::new(vec![1.0, 3.0], vec![100.0, 0.0]).unwrap();
        let eff = CurveThrust { curve };
        let q = ForceQuery {
            pos: Vec3::ZERO,
            orientation: quat_identity(),
            vel_lin: Vec3::ZERO,
            vel_ang: Vec3::ZERO,
            mass: 1.0,
            wind_world: Vec3::ZERO,
            attitude_deg: [90.0, 0.0],
        };
        // tick 240 at 1/120 s -> t = 2.0 s, halfway down the ramp
        let w = eff.wrench(&StepCtx { dt: 1.0 / 120.0, tick: 240 }, q);
        assert!((w.force.z - 50.0).abs() < 1e-9);
        // past burnout: last sample's value
        let w = eff.wrench(&StepCtx { dt: 1.0 / 120.0, tick: 100_000 }, q);
        assert_eq!(w.force.z, 0.0);
    }
}
