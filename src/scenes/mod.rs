pub mod reef;
pub mod scatter;
pub mod school;
pub mod treasure;

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;

pub use reef::{build_reef, Reef};
pub use scatter::{crossed_pair, draw_placement, place_on_terrain, scatter, Placement, ScatterJob};
pub use school::{draw_orbit, init_orbits};
pub use treasure::place_treasure;

/// One RNG stream shared by every population task
pub type SharedRng = Rc<RefCell<SmallRng>>;
