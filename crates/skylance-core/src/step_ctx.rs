use crate::Scalar;

/// Per-tick context passed into effector evaluations. `tick` is the index of
/// the step being computed (pre-increment), so `elapsed()` is 0 on tick zero.
#[derive(Copy, Clone, Debug)]
pub struct StepCtx {
    pub dt: Scalar,
    pub tick: u64,
}

impl StepCtx {
    #[inline] pub fn elapsed(&self) -> Scalar { self.tick as Scalar * self.dt }
}
