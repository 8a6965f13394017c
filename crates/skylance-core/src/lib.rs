pub mod scalar;
pub mod ids;
pub mod types;
pub mod hash;
pub mod time;
pub mod error;
pub mod schedule;
pub mod step_ctx;
pub mod effector;

pub use scalar::Scalar;
pub use ids::BodyId;
pub use types::{Vec3, Mat3, Quat, Isometry, Velocity, Wrench, vec3, iso, quat_identity};
pub use hash::{StepHasher, hash_vec3, hash_quat};
pub use time::{SimClock, StepStats};
pub use error::{CurveError, SpawnError};
pub use schedule::{StepStage, schedule_digest};
pub use step_ctx::StepCtx;
pub use effector::{ForceEffector, ForceQuery, EffectorHandle, EffectorRegistry};
