mod curve;
mod wind;
mod gravity;
mod thrust;
mod drag;
pub mod presets;

pub use curve::ThrustCurve;
pub use wind::sample as sample_wind;
pub use gravity::UniformGravity;
pub use thrust::{ThrustAttitude, CurveThrust};
pub use drag::SphereDrag;
