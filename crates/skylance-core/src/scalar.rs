/// Simulation scalar. The trajectory pipeline runs in f64 end to end so that
/// a 2400-tick run reproduces bit-exactly across platforms.
pub type Scalar = f64;
