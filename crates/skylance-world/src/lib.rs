use std::sync::Arc;

use skylance_core::{
    hash_quat, hash_vec3, BodyId, EffectorHandle, EffectorRegistry, ForceEffector, ForceQuery,
    Isometry, Scalar, SimClock, StepCtx, StepHasher, StepStage, StepStats, SpawnError, Vec3,
    Velocity,
};
use skylance_dynamics::{ground_response, Bodies, BodyDesc, MassProps};
use skylance_forces::{sample_wind, ThrustAttitude};
use skylance_telemetry::{DebugSettings, Ledger, LedgerEvent, ScheduleRecorder};

/// Everything a projectile carries at spawn: rigid-body state plus the fixed
/// environment attributes (wind seed, firing attitude).
#[derive(Copy, Clone, Debug)]
pub struct ProjectileDesc {
    pub pose: Isometry,
    pub vel: Velocity,
    pub mass: MassProps,
    pub wind_seed: u64,
    pub attitude: ThrustAttitude,
}

/* ---------------- Builder ---------------- */
pub struct WorldBuilder {
    bodies: usize,
    dt: Scalar,
}

impl WorldBuilder {
    pub fn new() -> Self { Self { bodies: 16, dt: 1.0 / 120.0 } }

    pub fn with_capacity(mut self, bodies: usize) -> Self {
        self.bodies = bodies;
        self
    }

    /// Fixed step duration for the whole run; no adaptive stepping.
    pub fn with_time_step(mut self, dt: Scalar) -> Self {
        self.dt = dt;
        self
    }

    pub fn build(self) -> World {
        World::with_capacity(self.bodies, self.dt)
    }
}

impl Default for WorldBuilder {
    fn default() -> Self { Self::new() }
}

/* ---------------- World ---------------- */
pub struct World {
    clock: SimClock,
    schedule: ScheduleRecorder,

    bodies: Bodies, // SoA
    registry: EffectorRegistry,
    // Per-body spawn-time environment, index = BodyId.
    force_comps: Vec<Vec<EffectorHandle>>,
    winds: Vec<Vec3>,
    attitudes: Vec<ThrustAttitude>,
    grounded: Vec<bool>,

    debug: DebugSettings,
    ledger: Ledger,
}

impl World {
    pub fn with_capacity(bodies: usize, dt: Scalar) -> Self {
        Self {
            clock: SimClock::new(dt),
            schedule: ScheduleRecorder::new(),
            bodies: Bodies::with_capacity(bodies),
            registry: EffectorRegistry::new(),
            force_comps: Vec::with_capacity(bodies),
            winds: Vec::with_capacity(bodies),
            attitudes: Vec::with_capacity(bodies),
            grounded: Vec::with_capacity(bodies),
            debug: DebugSettings::default(),
            ledger: Ledger::new(4096),
        }
    }

    /* ---------- Composition ---------- */

    pub fn register_effector(&mut self, m: Arc<dyn ForceEffector>) -> EffectorHandle {
        self.registry.register(m)
    }

    /// Spawn a projectile. Mass is validated here; the wind vector is
    /// realized from the seed exactly once and never re-sampled.
    pub fn add_projectile(&mut self, desc: ProjectileDesc) -> Result<BodyId, SpawnError> {
        let id = self.bodies.add(BodyDesc { pose: desc.pose, vel: desc.vel, mass: desc.mass })?;
        self.winds.push(sample_wind(desc.wind_seed));
        self.attitudes.push(desc.attitude);
        self.force_comps.push(Vec::new());
        self.grounded.push(false);
        Ok(BodyId(id))
    }

    pub fn set_body_effectors(&mut self, id: BodyId, handles: &[EffectorHandle]) {
        self.force_comps[id.0 as usize] = handles.to_vec();
    }

    pub fn set_debug(&mut self, cfg: DebugSettings) { self.debug = cfg; }

    /* ---------- Readers ---------- */

    #[inline] pub fn num_bodies(&self) -> u32 { self.bodies.len() as u32 }
    #[inline] pub fn tick_index(&self) -> u64 { self.clock.tick }
    #[inline] pub fn time_step(&self) -> Scalar { self.clock.dt }
    #[inline] pub fn elapsed(&self) -> Scalar { self.clock.elapsed() }

    pub fn body_pose(&self, id: BodyId) -> Isometry { self.bodies.pose(id.0) }
    pub fn body_vel(&self, id: BodyId) -> Velocity { self.bodies.vel(id.0) }
    /// Realized wind for this body, fixed since spawn.
    pub fn wind_of(&self, id: BodyId) -> Vec3 { self.winds[id.0 as usize] }
    /// Whether the ground clamp engaged during the last step.
    pub fn ground_contact(&self, id: BodyId) -> bool { self.grounded[id.0 as usize] }
    pub fn ledger(&self) -> &Ledger { &self.ledger }

    /// Digest of the stage sequence of the last step.
    pub fn schedule_digest(&self) -> [u8; 32] { self.schedule.digest() }

    /// Stable digest of all body state in index order.
    pub fn step_hash(&self) -> [u8; 32] {
        let mut h = StepHasher::new();
        for i in self.bodies.indices() {
            let pose = self.bodies.pose(i);
            let vel = self.bodies.vel(i);
            hash_vec3(&mut h, &pose.pos);
            hash_quat(&mut h, &pose.rot);
            hash_vec3(&mut h, &vel.lin);
            hash_vec3(&mut h, &vel.ang);
        }
        h.finalize()
    }

    /* ---------- Step ---------- */

    /// Advance the whole world by one fixed step:
    /// effectors → ground response → integrate. Pure and total given valid
    /// spawn-time inputs; nothing mid-tick can fail.
    pub fn step(&mut self) -> StepStats {
        self.schedule.clear();
        self.ledger.clear();
        let ctx = StepCtx { dt: self.clock.dt, tick: self.clock.tick };

        // Effectors: each reads the same pre-tick snapshot, contributions
        // merge by summation into the per-body accumulator.
        self.schedule.push(StepStage::Forces);
        for i in 0..self.bodies.len() as u32 {
            let pose = self.bodies.pose(i);
            let vel = self.bodies.vel(i);
            let att = self.attitudes[i as usize];
            let q = ForceQuery {
                pos: pose.pos,
                orientation: pose.rot,
                vel_lin: vel.lin,
                vel_ang: vel.ang,
                mass: self.bodies.mass_of(i),
                wind_world: self.winds[i as usize],
                attitude_deg: [att.elevation_deg, att.azimuth_deg],
            };
            for h in &self.force_comps[i as usize] {
                let w = self.registry.get(*h).wrench(&ctx, q);
                self.bodies.accumulate(i, w);
            }
            if self.debug.show_forces {
                let net = self.bodies.wrench_of(i).force;
                self.ledger.push(LedgerEvent::Forces { id: i, net, speed: vel.lin.length() });
            }
        }

        // Ground response: may rewrite linear velocity before the integrator
        // applies it to position.
        self.schedule.push(StepStage::GroundResponse);
        let mut contacts = 0u32;
        for i in 0..self.bodies.len() as u32 {
            let pose = self.bodies.pose(i);
            let (vel, contact) = ground_response(pose.pos, self.bodies.vel(i));
            if contact {
                self.bodies.set_vel(i, vel);
                self.ledger.push(LedgerEvent::GroundContact { id: i });
                contacts += 1;
            }
            self.grounded[i as usize] = contact;
        }

        // Integrate: consumes the accumulators, clears them for the next tick.
        self.schedule.push(StepStage::Integrate);
        let integrated = self.bodies.integrate_all(self.clock.dt);
        for i in self.bodies.indices() {
            let pose = self.bodies.pose(i);
            let vel = self.bodies.vel(i);
            self.ledger.push(LedgerEvent::Integrate { id: i, pos: pose.pos, vel: vel.lin });
        }

        self.maybe_print(ctx.tick);
        self.clock.advance();
        StepStats { bodies_integrated: integrated, ground_contacts: contacts }
    }

    fn maybe_print(&self, tick: u64) {
        let every = self.debug.print_every as u64;
        if every == 0 || tick % every != 0 {
            return;
        }
        let limit = if self.debug.max_lines == 0 { usize::MAX } else { self.debug.max_lines };
        for i in self.bodies.indices().take(limit) {
            let p = self.bodies.pose(i).pos;
            let v = self.bodies.vel(i).lin;
            let mark = if self.grounded[i as usize] { "  [ground]" } else { "" };
            println!(
                "tick {tick:5}  t {:7.3}  body {i}  pos ({:9.2} {:9.2} {:9.2})  |v| {:8.2}{mark}",
                tick as Scalar * self.clock.dt, p.x, p.y, p.z, v.length(),
            );
        }
    }
}
