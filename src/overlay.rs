use std::path::{Path, PathBuf};

use crate::core::Button;

pub const DEFAULT_COCKPIT_IMAGE: &str = "cockpit.png";

/// Full-screen cockpit image drawn over the scene, toggled with `c`
#[derive(Debug, Clone)]
pub struct CockpitOverlay {
    image: PathBuf,
    visible: bool,
}

impl CockpitOverlay {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            visible: false,
        }
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::info!(
            "Cockpit overlay {}",
            if self.visible { "shown" } else { "hidden" }
        );
    }

    /// Returns whether the button was consumed
    pub fn handle_button(&mut self, button: Button) -> bool {
        match button {
            Button::KeyC => {
                self.toggle();
                true
            }
        }
    }
}

impl Default for CockpitOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_COCKPIT_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_starts_hidden() {
        let overlay = CockpitOverlay::default();
        assert!(!overlay.is_visible());
        assert_eq!(overlay.image(), Path::new("cockpit.png"));
    }

    #[test]
    fn test_key_c_toggles() {
        let mut overlay = CockpitOverlay::default();

        assert!(overlay.handle_button(Button::KeyC));
        assert!(overlay.is_visible());
        assert!(overlay.handle_button(Button::KeyC));
        assert!(!overlay.is_visible());
    }
}
