use crate::StepHasher;

/// Stages of one simulation tick, in the order they must run: all effectors
/// observe the pre-tick snapshot, the ground response may rewrite velocity,
/// and only then does the integrator consume the accumulated wrench.
#[repr(u8)]
#[derive(Copy, Clone, Debug)]
pub enum StepStage {
    Forces = 1,
    GroundResponse = 2,
    Integrate = 3,
}

pub fn schedule_digest(stages: &[StepStage]) -> [u8; 32] {
    let mut h = StepHasher::new();
    for s in stages { h.update_bytes(&[*s as u8]); }
    h.finalize()
}
