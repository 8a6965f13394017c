use skylance_core::{ForceEffector, ForceQuery, Scalar, StepCtx, Wrench};

const SPEED_EPS: Scalar = 1e-6;

/// Quadratic sphere drag against the relative airflow:
/// Fd = 0.5 · Cd · ρ · |w − v|² · A, directed along w − v.
#[derive(Copy, Clone, Debug)]
pub struct SphereDrag {
    pub cd: Scalar,
    pub rho: Scalar,
    pub radius: Scalar,
}

impl SphereDrag {
    /// Sphere-drag defaults: Cd 0.5, sea-level air density.
    pub fn new(radius: Scalar) -> Self {
        Self { cd: 0.5, rho: 1.225, radius }
    }

    /// Reference area, 2π·r².
    #[inline]
    pub fn area(&self) -> Scalar {
        2.0 * std::f64::consts::PI * self.radius * self.radius
    }
}

impl ForceEffector for SphereDrag {
    fn wrench(&self, _ctx: &StepCtx, q: ForceQuery) -> Wrench {
        let rel = q.wind_world - q.vel_lin;
        let speed = rel.length();
        // Degenerate case: body moving exactly with the airflow has no drag
        // and no defined flow direction.
        if speed <= SPEED_EPS {
            return Wrench::ZERO;
        }
        let f_mag = 0.5 * self.cd * self.rho * speed * speed * self.area();
        Wrench::from_force(rel / speed * f_mag)
    }
}
