use crate::Scalar;

/// Fixed-rate simulation clock. `dt` never changes for the lifetime of a run;
/// elapsed time is always `tick * dt`.
#[derive(Copy, Clone, Debug)]
pub struct SimClock {
    pub tick: u64,
    pub dt: Scalar,
}

impl SimClock {
    pub fn new(dt: Scalar) -> Self { Self { tick: 0, dt } }

    #[inline] pub fn elapsed(&self) -> Scalar { self.tick as Scalar * self.dt }
    #[inline] pub fn advance(&mut self) { self.tick = self.tick.wrapping_add(1); }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct StepStats {
    pub bodies_integrated: u32,
    pub ground_contacts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn elapsed_is_tick_times_dt() {
        let mut c = SimClock::new(1.0 / 120.0);
        for _ in 0..240 { c.advance(); }
        assert!((c.elapsed() - 2.0).abs() < 1e-12);
    }
}
