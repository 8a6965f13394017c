use skylance_core::{ForceEffector, ForceQuery, StepCtx, Vec3, Wrench, vec3};

/// Constant acceleration field; force scales with the body's mass.
#[derive(Copy, Clone, Debug)]
pub struct UniformGravity {
    pub g: Vec3,
}

impl Default for UniformGravity {
    fn default() -> Self { Self { g: vec3(0.0, 0.0, -9.81) } }
}

impl ForceEffector for UniformGravity {
    fn wrench(&self, _ctx: &StepCtx, q: ForceQuery) -> Wrench {
        Wrench::from_force(self.g * q.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylance_core::quat_identity;

    #[test] fn force_scales_with_mass() {
        let ctx = StepCtx { dt: 1.0 / 120.0, tick: 0 };
        let q = ForceQuery {
            pos: Vec3::ZERO,
            orientation: quat_identity(),
            vel_lin: Vec3::ZERO,
            vel_ang: Vec3::ZERO,
            mass: 50.0,
            wind_world: Vec3::ZERO,
            attitude_deg: [0.0, 0.0],
        };
        let w = UniformGravity::default().wrench(&ctx, q);
        assert!((w.force - vec3(0.0, 0.0, -490.5)).length() < 1e-9);
        assert_eq!(w.torque, Vec3::ZERO);
    }
}
