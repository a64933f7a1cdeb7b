pub mod clock;
pub mod controller;
pub mod load_queue;
pub mod scheduler;
pub mod timer;
pub mod triangle_intersection;

pub use clock::{Clock, FixedStepClock, FrameClock};
pub use controller::{Button, Controller, ScriptedController};
pub use load_queue::{LoadQueue, LoadSpawner};
pub use scheduler::{FrameScheduler, FrameTask, InputTask};
pub use timer::{EveryNTicks, Window};
pub use triangle_intersection::{moller_trumbore_intersect, nearest_intersection, TriangleIntersection};
