use std::sync::Arc;

use crate::types::{Quat, Vec3, Wrench};
use crate::{Scalar, StepCtx};

#[derive(Copy, Clone, Debug)]
pub struct EffectorHandle(pub u32);

/// Read-only snapshot of one body, taken before any effector runs for the
/// tick. Every effector for a body sees the same snapshot; a given model
/// typically reads only a subset of the fields.
#[derive(Copy, Clone, Debug)]
pub struct ForceQuery {
    pub pos: Vec3,
    pub orientation: Quat,
    pub vel_lin: Vec3,
    pub vel_ang: Vec3,
    pub mass: Scalar,
    /// Realized wind for this body, fixed at spawn.
    pub wind_world: Vec3,
    /// Thrust attitude: elevation, azimuth (degrees), fixed at spawn.
    pub attitude_deg: [Scalar; 2],
}

/// One physical force term. Pure: same snapshot and context, same wrench.
pub trait ForceEffector: Send + Sync {
    fn wrench(&self, ctx: &StepCtx, q: ForceQuery) -> Wrench;
}

/// Registry of force models; handles are dense indices, so registration order
/// is the identity. Bodies reference effectors by handle.
pub struct EffectorRegistry {
    effectors: Vec<Arc<dyn ForceEffector>>,
}

impl EffectorRegistry {
    pub fn new() -> Self { Self { effectors: Vec::new() } }

    pub fn register(&mut self, m: Arc<dyn ForceEffector>) -> EffectorHandle {
        let id = self.effectors.len() as u32;
        self.effectors.push(m);
        EffectorHandle(id)
    }

    pub fn get(&self, h: EffectorHandle) -> &dyn ForceEffector { &*self.effectors[h.0 as usize] }
    #[inline] pub fn len(&self) -> usize { self.effectors.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.effectors.is_empty() }
}

impl Default for EffectorRegistry {
    fn default() -> Self { Self::new() }
}
