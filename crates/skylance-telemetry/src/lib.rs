use skylance_core::types::Vec3;
use skylance_core::{schedule_digest, Scalar, StepStage};

/// Records the stage sequence of the current tick so hosts can assert the
/// pipeline ran in the contracted order.
#[derive(Default)]
pub struct ScheduleRecorder { stages: Vec<StepStage> }

impl ScheduleRecorder {
    pub fn new() -> Self { Self { stages: Vec::new() } }
    pub fn push(&mut self, s: StepStage) { self.stages.push(s); }
    pub fn clear(&mut self) { self.stages.clear(); }
    pub fn digest(&self) -> [u8; 32] { schedule_digest(&self.stages) }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct DebugSettings {
    /// Print a state line every N ticks; 0 disables printing.
    pub print_every: u32,
    pub show_forces: bool,
    /// Cap on printed bodies per tick.
    pub max_lines: usize,
}

/// One per-tick observation. Cleared at the start of every step; hosts read
/// the ledger between steps.
#[derive(Copy, Clone, Debug)]
pub enum LedgerEvent {
    /// Net accumulated force for a body, with the speed the effectors saw.
    Forces { id: u32, net: Vec3, speed: Scalar },
    /// Ground clamp engaged: full linear velocity frozen before integration.
    GroundContact { id: u32 },
    /// Post-integration state sample.
    Integrate { id: u32, pos: Vec3, vel: Vec3 },
}

pub struct Ledger {
    events: Vec<LedgerEvent>,
    cap: usize,
}

impl Ledger {
    pub fn new(cap: usize) -> Self { Self { events: Vec::with_capacity(cap), cap } }

    /// Events past the cap are dropped; the ledger is telemetry, not history.
    pub fn push(&mut self, e: LedgerEvent) {
        if self.events.len() < self.cap {
            self.events.push(e);
        }
    }

    pub fn clear(&mut self) { self.events.clear(); }
    pub fn events(&self) -> &[LedgerEvent] { &self.events }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn ledger_drops_past_cap() {
        let mut l = Ledger::new(2);
        for id in 0..5 {
            l.push(LedgerEvent::GroundContact { id });
        }
        assert_eq!(l.events().len(), 2);
        l.clear();
        assert!(l.events().is_empty());
    }

    #[test] fn recorder_digest_matches_raw_digest() {
        let mut r = ScheduleRecorder::new();
        let stages = [StepStage::Forces, StepStage::GroundResponse, StepStage::Integrate];
        for s in stages { r.push(s); }
        assert_eq!(r.digest(), schedule_digest(&stages));
    }
}
