//! Demo state: the two screens and everything the frame loop updates.
//!
//! The demo is a tiny state machine. [`Screen::Menu`] shows the greeting
//! text, the bouncing sprite and a button; [`Screen::Wave`] fills the window
//! with an animated shader and offers a close button back to the menu.
//! Transitions happen when the left mouse button is released inside the
//! respective button, mirroring the usual press-then-release click contract.

pub mod audio;
pub mod sprite;

use self::sprite::{Sprite, Vec2};

/// Which screen the frame loop is updating and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Greeting text, bouncing sprite, shader button.
    Menu,
    /// Full-screen animated shader with a close button.
    Wave,
}

/// Seconds added to the shader clock per scroll line.
const SCROLL_TIME_STEP: f32 = 0.5;

/// An axis-aligned screen-space rectangle used for hit testing.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// A clickable region with a held-down visual state.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub bounds: Rect,
    pub pressed: bool,
}

impl Button {
    fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            pressed: false,
        }
    }
}

/// All mutable demo state owned by the frame loop.
pub struct DemoState {
    pub screen: Screen,
    pub sprite: Sprite,
    /// Shader clock in seconds; advanced per frame and by the scroll wheel.
    pub wave_time: f32,
    /// Last reported cursor position, physical pixels.
    pub cursor: Vec2,
    /// Menu screen: opens the wave screen.
    pub wave_button: Button,
    /// Wave screen: returns to the menu.
    pub close_button: Button,
}

impl DemoState {
    pub fn new(sprite_size: Vec2, window_width: f32) -> Self {
        Self {
            screen: Screen::Menu,
            sprite: Sprite::new(sprite_size),
            wave_time: 0.0,
            cursor: Vec2::new(0.0, 0.0),
            wave_button: Button::new(Rect::new(50.0, 50.0, 200.0, 50.0)),
            close_button: Button::new(close_button_bounds(window_width)),
        }
    }

    /// Advances the active screen by `dt` seconds.
    pub fn update(&mut self, dt: f32, bounds: Vec2) {
        match self.screen {
            Screen::Menu => self.sprite.advance(dt, bounds),
            Screen::Wave => self.wave_time += dt,
        }
    }

    /// Re-anchors window-relative widgets after a resize.
    pub fn update_layout(&mut self, window_width: f32) {
        self.close_button.bounds = close_button_bounds(window_width);
    }

    /// Scroll wheel input: on the wave screen it nudges the shader clock.
    pub fn scroll(&mut self, lines: f32) {
        if self.screen == Screen::Wave && lines != 0.0 {
            self.wave_time += lines * SCROLL_TIME_STEP;
        }
    }

    /// Left mouse button pressed at the current cursor position.
    pub fn press(&mut self) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        match self.screen {
            Screen::Menu => self.wave_button.pressed = self.wave_button.bounds.contains(x, y),
            Screen::Wave => self.close_button.pressed = self.close_button.bounds.contains(x, y),
        }
    }

    /// Left mouse button released: completes a click if the release still
    /// lands inside the active screen's button.
    pub fn release(&mut self) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        match self.screen {
            Screen::Menu => {
                if self.wave_button.bounds.contains(x, y) {
                    self.screen = Screen::Wave;
                }
            }
            Screen::Wave => {
                if self.close_button.bounds.contains(x, y) {
                    self.screen = Screen::Menu;
                }
            }
        }
        self.wave_button.pressed = false;
        self.close_button.pressed = false;
    }

    /// Cursor position mapped to the wave shader's pointer space:
    /// origin at the window center, Y up, normalized by half the height so
    /// the vertical range is [-1, 1] and the horizontal range widens with
    /// the aspect ratio.
    pub fn pointer(&self, width: f32, height: f32) -> [f32; 2] {
        let half_h = height / 2.0;
        [
            (self.cursor.x - width / 2.0) / half_h,
            -(self.cursor.y - height / 2.0) / half_h,
        ]
    }
}

fn close_button_bounds(window_width: f32) -> Rect {
    Rect::new(window_width - 40.0, 10.0, 30.0, 30.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> DemoState {
        DemoState::new(Vec2::new(26.0, 36.0), 1280.0)
    }

    /// A press-and-release inside the menu button opens the wave screen.
    #[test]
    fn click_on_wave_button_opens_wave_screen() {
        let mut state = demo();
        state.cursor = Vec2::new(150.0, 75.0);
        state.press();
        assert!(state.wave_button.pressed);

        state.release();
        assert_eq!(state.screen, Screen::Wave);
        assert!(!state.wave_button.pressed);
    }

    /// Dragging off the button before releasing cancels the click.
    #[test]
    fn release_outside_button_does_not_transition() {
        let mut state = demo();
        state.cursor = Vec2::new(150.0, 75.0);
        state.press();

        state.cursor = Vec2::new(600.0, 600.0);
        state.release();
        assert_eq!(state.screen, Screen::Menu);
        assert!(!state.wave_button.pressed);
    }

    /// The close button returns from the wave screen to the menu.
    #[test]
    fn close_button_returns_to_menu() {
        let mut state = demo();
        state.screen = Screen::Wave;
        state.cursor = Vec2::new(1255.0, 25.0);
        state.press();
        assert!(state.close_button.pressed);

        state.release();
        assert_eq!(state.screen, Screen::Menu);
    }

    /// The close button follows the right window edge on resize.
    #[test]
    fn close_button_tracks_window_width() {
        let mut state = demo();
        state.update_layout(800.0);
        assert!(state.close_button.bounds.contains(775.0, 25.0));
        assert!(!state.close_button.bounds.contains(1255.0, 25.0));
    }

    /// Scrolling only affects the shader clock on the wave screen.
    #[test]
    fn scroll_adjusts_wave_time_on_wave_screen_only() {
        let mut state = demo();
        state.scroll(2.0);
        assert_eq!(state.wave_time, 0.0);

        state.screen = Screen::Wave;
        state.scroll(2.0);
        assert_eq!(state.wave_time, 1.0);
        state.scroll(-4.0);
        assert_eq!(state.wave_time, -1.0);
    }

    /// The sprite only animates while the menu is visible.
    #[test]
    fn update_animates_active_screen_only() {
        let mut state = demo();
        let bounds = Vec2::new(1280.0, 800.0);

        state.update(0.5, bounds);
        assert_eq!(state.sprite.position, Vec2::new(500.0, 300.0));
        assert_eq!(state.wave_time, 0.0);

        state.screen = Screen::Wave;
        let parked = state.sprite.position;
        state.update(0.5, bounds);
        assert_eq!(state.sprite.position, parked);
        assert_eq!(state.wave_time, 0.5);
    }

    /// The window center maps to the pointer origin, corners to ±aspect/±1.
    #[test]
    fn pointer_mapping_is_centered_and_y_up() {
        let mut state = demo();
        state.cursor = Vec2::new(640.0, 400.0);
        assert_eq!(state.pointer(1280.0, 800.0), [0.0, 0.0]);

        // Bottom-right corner: +aspect on X, -1 on Y (screen Y points down).
        state.cursor = Vec2::new(1280.0, 800.0);
        assert_eq!(state.pointer(1280.0, 800.0), [1.6, -1.0]);

        // Top-left corner mirrors it.
        state.cursor = Vec2::new(0.0, 0.0);
        assert_eq!(state.pointer(1280.0, 800.0), [-1.6, 1.0]);
    }
}
