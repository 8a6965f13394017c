use skylance_core::types::{Vec3, Velocity};

/// Ground-plane contact rule, evaluated after force accumulation and before
/// integration: when both the height and the vertical velocity are negative
/// (`max(p.z, v.z) < 0`), the body is below and still sinking, and the
/// *entire* linear velocity is frozen to zero. Angular velocity passes
/// through.
///
/// Zeroing all three linear components (not just the normal one) is the
/// source model's literal rule, kept as observed behavior; see DESIGN.md.
pub fn ground_response(pos: Vec3, vel: Velocity) -> (Velocity, bool) {
    if pos.z.max(vel.lin.z) < 0.0 {
        (Velocity { lin: Vec3::ZERO, ang: vel.ang }, true)
    } else {
        (vel, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylance_core::vec3;

    #[test] fn sinking_below_plane_freezes_all_linear_components() {
        let vel = Velocity { lin: vec3(3.0, 4.0, -5.0), ang: vec3(0.1, 0.0, 0.0) };
        let (out, contact) = ground_response(vec3(0.0, 0.0, -0.1), vel);
        assert!(contact);
        // full-vector freeze, not just the vertical component
        assert_eq!(out.lin, Vec3::ZERO);
        assert_eq!(out.ang, vel.ang);
    }

    #[test] fn airborne_body_passes_through() {
        let vel = Velocity { lin: vec3(3.0, 4.0, 5.0), ang: Vec3::ZERO };
        let (out, contact) = ground_response(vec3(0.0, 0.0, 1.0), vel);
        assert!(!contact);
        assert_eq!(out.lin, vel.lin);
    }

    #[test] fn ascent_from_below_is_not_clamped() {
        // The rule needs max(p.z, v.z) < 0: a body below the plane but moving
        // up keeps its velocity.
        let vel = Velocity { lin: vec3(3.0, 4.0, 5.0), ang: Vec3::ZERO };
        let (out, contact) = ground_response(vec3(0.0, 0.0, -0.1), vel);
        assert!(!contact);
        assert_eq!(out.lin, vel.lin);
    }

    #[test] fn resting_exactly_on_plane_is_not_clamped() {
        let vel = Velocity::default();
        let (out, contact) = ground_response(Vec3::ZERO, vel);
        assert!(!contact);
        assert_eq!(out.lin, Vec3::ZERO);
    }
}
