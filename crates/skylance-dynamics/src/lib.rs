mod mass;
mod ground;

pub use mass::MassProps;
pub use ground::ground_response;

use skylance_core::types::{Isometry, Mat3, Quat, Vec3, Velocity, Wrench};
use skylance_core::{Scalar, SpawnError};

/// Input descriptor when creating a body.
#[derive(Copy, Clone, Debug)]
pub struct BodyDesc {
    pub pose: Isometry,
    pub vel: Velocity,
    pub mass: MassProps,
}

/// SoA body storage with deterministic ID = index semantics. Holds the full
/// 6DOF state plus the per-tick wrench accumulator; the accumulator is summed
/// into by effectors and consumed (and cleared) by `integrate_all`, so it
/// never survives a tick.
pub struct Bodies {
    pos: Vec<Vec3>,
    rot: Vec<Quat>,
    linvel: Vec<Vec3>,
    angvel: Vec<Vec3>,
    mass: Vec<Scalar>,
    inv_mass: Vec<Scalar>,
    inv_inertia_local: Vec<Mat3>,
    force: Vec<Vec3>,
    torque: Vec<Vec3>,
}

impl Bodies {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            pos: Vec::with_capacity(cap),
            rot: Vec::with_capacity(cap),
            linvel: Vec::with_capacity(cap),
            angvel: Vec::with_capacity(cap),
            mass: Vec::with_capacity(cap),
            inv_mass: Vec::with_capacity(cap),
            inv_inertia_local: Vec::with_capacity(cap),
            force: Vec::with_capacity(cap),
            torque: Vec::with_capacity(cap),
        }
    }

    pub fn add(&mut self, desc: BodyDesc) -> Result<u32, SpawnError> {
        if desc.mass.mass <= 0.0 {
            return Err(SpawnError::NonPositiveMass(desc.mass.mass));
        }
        self.pos.push(desc.pose.pos);
        self.rot.push(desc.pose.rot);
        self.linvel.push(desc.vel.lin);
        self.angvel.push(desc.vel.ang);
        self.mass.push(desc.mass.mass);
        self.inv_mass.push(desc.mass.inv_mass);
        self.inv_inertia_local.push(desc.mass.inertia.inverse());
        self.force.push(Vec3::ZERO);
        self.torque.push(Vec3::ZERO);
        Ok((self.pos.len() as u32) - 1)
    }

    #[inline] pub fn len(&self) -> usize { self.pos.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.pos.is_empty() }

    // -------- Accessors used by world/hash --------
    #[inline] pub fn pose(&self, id: u32) -> Isometry {
        let i = id as usize;
        Isometry { pos: self.pos[i], rot: self.rot[i] }
    }
    #[inline] pub fn set_pose(&mut self, id: u32, iso: Isometry) {
        let i = id as usize;
        self.pos[i] = iso.pos;
        self.rot[i] = iso.rot;
    }

    #[inline] pub fn vel(&self, id: u32) -> Velocity {
        let i = id as usize;
        Velocity { lin: self.linvel[i], ang: self.angvel[i] }
    }
    #[inline] pub fn set_vel(&mut self, id: u32, v: Velocity) {
        let i = id as usize;
        self.linvel[i] = v.lin;
        self.angvel[i] = v.ang;
    }

    #[inline] pub fn mass_of(&self, id: u32) -> Scalar { self.mass[id as usize] }
    #[inline] pub fn inv_mass_of(&self, id: u32) -> Scalar { self.inv_mass[id as usize] }

    /// World-space inverse inertia: R * I^-1_local * R^T.
    pub fn inv_inertia_world(&self, id: u32) -> Mat3 {
        let i = id as usize;
        let r = Mat3::from_quat(self.rot[i]);
        r * self.inv_inertia_local[i] * r.transpose()
    }

    // -------- Per-tick wrench accumulator --------
    #[inline] pub fn accumulate(&mut self, id: u32, w: Wrench) {
        let i = id as usize;
        self.force[i] += w.force;
        self.torque[i] += w.torque;
    }

    #[inline] pub fn wrench_of(&self, id: u32) -> Wrench {
        let i = id as usize;
        Wrench { force: self.force[i], torque: self.torque[i] }
    }

    pub fn clear_wrenches(&mut self) {
        for f in &mut self.force { *f = Vec3::ZERO; }
        for t in &mut self.torque { *t = Vec3::ZERO; }
    }

    /// One semi-implicit Euler step for every body: velocity from the
    /// accumulated wrench first, then position from the updated velocity,
    /// then a normalized quaternion update from angular velocity. Consumes
    /// and clears the accumulators. Returns the number of bodies advanced.
    pub fn integrate_all(&mut self, dt: Scalar) -> u32 {
        let mut n = 0u32;
        for i in 0..self.len() {
            self.linvel[i] += self.force[i] * self.inv_mass[i] * dt;
            let inv_i_w = self.inv_inertia_world(i as u32);
            self.angvel[i] += inv_i_w * self.torque[i] * dt;

            self.pos[i] += self.linvel[i] * dt;
            let w = self.angvel[i];
            if w.length_squared() > 0.0 {
                let dq = Quat::from_scaled_axis(w * dt);
                self.rot[i] = (dq * self.rot[i]).normalize();
            }

            self.force[i] = Vec3::ZERO;
            self.torque[i] = Vec3::ZERO;
            n += 1;
        }
        n
    }

    /// Iterator for hashing in stable order.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        0..(self.len() as u32)
    }
}

impl Default for Bodies {
    fn default() -> Self { Self::with_capacity(0) }
}
