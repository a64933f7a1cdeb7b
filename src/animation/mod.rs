pub mod orbit;
pub mod sway;

pub use orbit::{tick_orbits, AngleAccumulator, Orbit, OrbitAnimator};
pub use sway::{sway_tilt, tick_sway, SwayAnimator, DEFAULT_SWAY_AMPLITUDE};
