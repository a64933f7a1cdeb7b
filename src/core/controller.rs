/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyC,
}

impl Button {
    /// Maps a typed character to the button it stands for
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Button::KeyC),
            _ => None,
        }
    }
}

/// Controller - source of button presses for a frame
pub trait Controller {
    /// Buttons pressed during the given frame
    fn pressed(&self, frame: u64) -> Vec<Button>;
}

/// Replays a fixed list of (frame, button) presses
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    presses: Vec<(u64, Button)>,
}

impl ScriptedController {
    pub fn new(presses: Vec<(u64, Button)>) -> Self {
        Self { presses }
    }

    /// Press `button` once on each listed frame
    pub fn on_frames(button: Button, frames: &[u64]) -> Self {
        Self::new(frames.iter().map(|&f| (f, button)).collect())
    }
}

impl Controller for ScriptedController {
    fn pressed(&self, frame: u64) -> Vec<Button> {
        self.presses
            .iter()
            .filter(|(f, _)| *f == frame)
            .map(|(_, b)| *b)
            .collect()
    }
}
