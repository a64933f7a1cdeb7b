/// Frame metadata - carries frame number and timing info.
/// Every task run during a frame sees the same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Total seconds consumed from the clock, this frame included
    pub time: f64,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f64, delta: f32) -> Self {
        Self { number, time, delta }
    }
}
