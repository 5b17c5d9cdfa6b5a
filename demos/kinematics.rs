//! Kinematics walk-through
//!
//! Run with `cargo run --example kinematics`; set `RUST_LOG=kinematics=debug`
//! (or `tagged_units=debug`) for more output.

use tagged_units::prelude::*;
use tagged_units::si::{self, Acceleration, Energy, Force, Hertz, Length, Speed, Time};
use tracing::{debug, info, warn};

tagged_units::tag! {
    /// Per-lane position of a particle batch
    Position => "m";
    /// Per-lane velocity of a particle batch
    Velocity => "m/s";
    Step => "s";
}

tagged_units::additive!(Position, Velocity, Step);
tagged_units::product!(Velocity * Step => Position);
tagged_units::scalar_division!(Position, AlignedVector<f32, 8>, f32);

type Lanes = AlignedVector<f32, 8>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kinematics=info")),
        )
        .init();

    let distance: Length = si::meters(100.0);
    let elapsed: Time = si::seconds(20.0);
    let speed: Speed = distance / elapsed;
    info!(%distance, %elapsed, %speed, "average speed");

    let accel: Acceleration = speed / si::seconds(2.5);
    let force: Force = 2.0_f64.kg() * accel;
    let work: Energy = force * si::meters(3.0);
    info!(%accel, %force, %work, "dynamics");

    let rate: Hertz = 1.0 / si::seconds(0.5);
    let cycles: Dimensionless<f64> = rate * elapsed;
    info!(%rate, %cycles, "frequency");

    let mut pos: Tagged<Lanes, Position> = Tagged::default();
    let vel: Tagged<Lanes, Velocity> = Tagged::new(Lanes::new([0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]));
    let dt: Tagged<Lanes, Step> = Tagged::new(Lanes::splat(0.1));
    for step in 0..10 {
        pos += vel * dt;
        debug!(step, lanes = ?pos.get().as_slice(), "integrated");
    }
    let scaled: Tagged<Lanes, Position> = pos / 8;
    info!(lanes = ?pos.get().as_slice(), scaled = ?scaled.get().as_slice(), "batch positions");

    match Lanes::try_from(&[1.0_f32, 2.0, 3.0][..]) {
        Ok(v) => info!(?v, "accepted"),
        Err(err) => warn!(%err, "rejected"),
    }
}
