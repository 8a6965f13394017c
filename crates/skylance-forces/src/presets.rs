use crate::ThrustCurve;

/// AeroTech M685W, 22 samples, ~12 s burn.
/// Ref: https://www.thrustcurve.org/motors/AeroTech/M685W/
pub fn aerotech_m685w() -> ThrustCurve {
    ThrustCurve::new(
        vec![
            0.083, 0.13, 0.249, 0.308, 0.403, 0.675, 1.018, 1.456, 1.977, 2.995, 3.99,
            4.985, 5.494, 5.991, 7.258, 7.862, 8.015, 8.998, 9.993, 10.514, 11.496, 11.994,
        ],
        vec![
            1333.469, 1368.376, 1361.395, 1380.012, 1359.068, 1184.53, 1072.826, 996.029,
            958.794, 914.578, 856.399, 781.929, 730.732, 679.534, 542.231, 463.107, 456.125,
            330.458, 207.118, 137.303, 34.908, 0.0,
        ],
    )
    .expect("M685W table is strictly increasing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn m685w_boundary_samples() {
        let c = aerotech_m685w();
        assert_eq!(c.magnitude(0.0), 1333.469);
        assert_eq!(c.magnitude(0.083), 1333.469);
        assert_eq!(c.magnitude(11.994), 0.0);
        assert_eq!(c.magnitude(20.0), 0.0);
        assert!((c.burnout() - 11.994).abs() < 1e-12);
    }

    #[test] fn m685w_peak_is_early() {
        let c = aerotech_m685w();
        assert_eq!(c.magnitude(0.308), 1380.012);
        assert!(c.magnitude(6.0) < c.magnitude(1.0));
    }
}
