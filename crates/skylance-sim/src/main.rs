use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use skylance_core::{iso, quat_identity, vec3, Velocity};
use skylance_dynamics::MassProps;
use skylance_forces::{presets, CurveThrust, SphereDrag, ThrustAttitude, ThrustCurve, UniformGravity};
use skylance_telemetry::DebugSettings;
use skylance_world::{ProjectileDesc, WorldBuilder};

#[derive(Parser, Debug)]
#[command(name = "skylance-sim", version, about = "Fixed-step free flight of a thrust-propelled projectile")]
struct Opts {
    /// Tick budget; the run halts when it is spent
    #[arg(long, default_value_t = 2400)]
    ticks: u64,

    /// Fixed time step in seconds
    #[arg(long, default_value_t = 1.0 / 120.0)]
    dt: f64,

    /// Wind seed; the gust is realized once at spawn
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Firing elevation in degrees
    #[arg(long, default_value_t = 35.0)]
    elevation: f64,

    /// Firing azimuth in degrees
    #[arg(long, default_value_t = 30.0)]
    azimuth: f64,

    /// Projectile mass in kg
    #[arg(long, default_value_t = 50.0)]
    mass: f64,

    /// Projectile radius in meters (drag reference)
    #[arg(long, default_value_t = 0.25)]
    radius: f64,

    /// Thrust curve JSON ({"time":[..],"force":[..]}); default: AeroTech M685W
    #[arg(long)]
    curve: Option<PathBuf>,

    /// Print a state line every N ticks (0 = quiet until the summary)
    #[arg(long, default_value_t = 120)]
    print_every: u32,
}

fn main() -> Result<()> {
    let opt = Opts::parse();

    let curve = match &opt.curve {
        Some(p) => ThrustCurve::from_json_path(p)?,
        None => presets::aerotech_m685w(),
    };
    let burnout = curve.burnout();

    let mut w = WorldBuilder::new().with_time_step(opt.dt).build();
    w.set_debug(DebugSettings { print_every: opt.print_every, show_forces: false, max_lines: 8 });

    let gravity = w.register_effector(Arc::new(UniformGravity::default()));
    let thrust = w.register_effector(Arc::new(CurveThrust { curve }));
    let drag = w.register_effector(Arc::new(SphereDrag::new(opt.radius)));

    let body = w.add_projectile(ProjectileDesc {
        pose: iso(vec3(0.0, 0.0, 0.0), quat_identity()),
        vel: Velocity::default(),
        mass: MassProps::isotropic(opt.mass)?,
        wind_seed: opt.seed,
        attitude: ThrustAttitude { elevation_deg: opt.elevation, azimuth_deg: opt.azimuth },
    })?;
    w.set_body_effectors(body, &[gravity, thrust, drag]);

    let wind = w.wind_of(body);
    println!(
        "seed {}  wind ({:+.3} {:+.3} {:+.3}) m/s  burnout {:.3} s  dt {:.6} s  budget {} ticks",
        opt.seed, wind.x, wind.y, wind.z, burnout, opt.dt, opt.ticks
    );

    let mut apogee = 0.0_f64;
    let mut apogee_t = 0.0_f64;
    let mut impact_tick: Option<u64> = None;
    for _ in 0..opt.ticks {
        w.step();
        let p = w.body_pose(body).pos;
        if p.z > apogee {
            apogee = p.z;
            // clock has already advanced past the tick that produced this pose
            apogee_t = (w.tick_index() - 1) as f64 * opt.dt;
        }
        if impact_tick.is_none() && w.ground_contact(body) {
            impact_tick = Some(w.tick_index() - 1);
        }
    }

    let p = w.body_pose(body).pos;
    let downrange = (p.x * p.x + p.y * p.y).sqrt();
    println!("apogee   {apogee:9.2} m at t {apogee_t:.2} s");
    println!("downrange {downrange:8.2} m");
    match impact_tick {
        Some(t) => println!("impact   at tick {t} (t {:.2} s)", t as f64 * opt.dt),
        None => println!("impact   none within the tick budget"),
    }
    let hash = w.step_hash();
    let hex: String = hash.iter().map(|b| format!("{b:02x}")).collect();
    println!("state hash {hex}");
    Ok(())
}
