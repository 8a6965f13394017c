use glam::{DVec3, DMat3, DQuat};
use crate::Scalar;

pub type Vec3 = DVec3;
pub type Mat3 = DMat3;
pub type Quat = DQuat;

#[inline] pub fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vec3 { Vec3::new(x, y, z) }
#[inline] pub fn iso(pos: Vec3, rot: Quat) -> Isometry { Isometry { pos, rot } }
#[inline] pub fn quat_identity() -> Quat { Quat::IDENTITY }

/// World-frame pose: position in meters, orientation as a unit quaternion.
#[derive(Copy, Clone, Debug)]
pub struct Isometry { pub pos: Vec3, pub rot: Quat }

impl Default for Isometry {
    fn default() -> Self { Self { pos: Vec3::ZERO, rot: Quat::IDENTITY } }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Velocity { pub lin: Vec3, pub ang: Vec3 }

/// Combined force (N) and torque (N·m) about the center of mass, world frame.
/// Contributions merge by summation, so accumulation order never matters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Wrench { pub force: Vec3, pub torque: Vec3 }

impl Wrench {
    pub const ZERO: Wrench = Wrench { force: Vec3::ZERO, torque: Vec3::ZERO };

    #[inline] pub fn from_force(force: Vec3) -> Self { Self { force, torque: Vec3::ZERO } }
}

impl core::ops::Add for Wrench {
    type Output = Wrench;
    #[inline] fn add(self, rhs: Wrench) -> Wrench {
        Wrench { force: self.force + rhs.force, torque: self.torque + rhs.torque }
    }
}

impl core::ops::AddAssign for Wrench {
    #[inline] fn add_assign(&mut self, rhs: Wrench) {
        self.force += rhs.force;
        self.torque += rhs.torque;
    }
}
