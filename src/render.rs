//! Frame description handed to the renderer
//!
//! The core never draws. Each frame it assembles a [`Scene`] (world
//! entities plus HUD text for the current screen) and hands it to
//! whatever [`Renderer`] the frontend plugged in.

use glam::Vec3;

/// Body paint of the player vehicle
pub const CAR_COLOR: Vec3 = Vec3::new(0.1, 0.6, 0.9);
/// Full-intensity collision flash
pub const FLASH_COLOR: Vec3 = Vec3::new(1.0, 0.15, 0.1);

/// Screen anchor for a HUD line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAnchor {
    TopLeft,
    TopRight,
    Center,
    BottomCenter,
}

/// Relative emphasis of a HUD line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Body,
    Hint,
}

/// One line of screen text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub text: String,
    pub anchor: HudAnchor,
    pub style: TextStyle,
}

impl HudText {
    pub fn new(text: impl Into<String>, anchor: HudAnchor, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            anchor,
            style,
        }
    }
}

/// Player vehicle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub pos: Vec3,
    /// Body color, already flash-blended
    pub color: Vec3,
}

/// One obstacle cube as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub pos: Vec3,
    pub half_size: f32,
    pub color: Vec3,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Ground-stripe scroll phase
    pub track_scroll: f32,
    /// Absent on menu screens
    pub player: Option<PlayerView>,
    pub obstacles: Vec<ObstacleView>,
    pub hud: Vec<HudText>,
}

/// Drawing backend boundary
pub trait Renderer {
    fn draw(&mut self, scene: &Scene);
}

/// Car paint blended toward the flash color
pub fn player_color(flash_intensity: f32) -> Vec3 {
    CAR_COLOR.lerp(FLASH_COLOR, flash_intensity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_blend_endpoints() {
        assert_eq!(player_color(0.0), CAR_COLOR);
        assert_eq!(player_color(1.0), FLASH_COLOR);
        // Out-of-range intensity clamps instead of extrapolating
        assert_eq!(player_color(5.0), FLASH_COLOR);
    }

    #[test]
    fn empty_scene_has_no_world() {
        let scene = Scene::default();
        assert!(scene.player.is_none());
        assert!(scene.obstacles.is_empty());
    }
}
