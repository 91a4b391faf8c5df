use std::collections::HashSet;

use winit::keyboard::KeyCode;

/// Key mapping configuration
#[derive(Clone)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }
}

/// Input accumulated by the event loop between frames. Mouse and scroll
/// deltas pile up here and are drained wholesale once per frame.
pub struct InputState {
    pub pressed_keys: HashSet<KeyCode>,
    pub look_delta: (f32, f32),
    pub scroll_delta: f32,
    pub cursor_grabbed: bool,
    bindings: KeyBindings,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            look_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            cursor_grabbed: false,
            bindings: KeyBindings::default(),
        }
    }

    pub fn key_pressed(&mut self, code: KeyCode) {
        self.pressed_keys.insert(code);
    }

    pub fn key_released(&mut self, code: KeyCode) {
        self.pressed_keys.remove(&code);
    }

    /// Dropped focus means key-up events can be lost; forget everything.
    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    /// Raw mouse motion. Ignored while the cursor is free so the camera does
    /// not jump when the window regains focus.
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.cursor_grabbed {
            self.look_delta.0 += dx;
            self.look_delta.1 += dy;
        }
    }

    pub fn scroll(&mut self, dy: f32) {
        self.scroll_delta += dy;
    }

    /// Drains the accumulated deltas into a value the camera update consumes
    /// without holding a borrow on the live state.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let look = self.look_delta;
        let scroll = self.scroll_delta;
        self.look_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;

        InputSnapshot {
            forward: self.pressed_keys.contains(&self.bindings.forward),
            backward: self.pressed_keys.contains(&self.bindings.backward),
            left: self.pressed_keys.contains(&self.bindings.left),
            right: self.pressed_keys.contains(&self.bindings.right),
            look,
            scroll,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame view of the input: held movement keys plus the mouse and scroll
/// deltas accumulated since the previous frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub look: (f32, f32),
    pub scroll: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_drains_deltas_but_keeps_keys() {
        let mut input = InputState::new();
        input.cursor_grabbed = true;
        input.mouse_motion(3.0, -2.0);
        input.scroll(1.5);
        input.key_pressed(KeyCode::KeyW);

        let first = input.snapshot();
        assert!(first.forward);
        assert_eq!(first.look, (3.0, -2.0));
        assert_eq!(first.scroll, 1.5);

        let second = input.snapshot();
        assert_eq!(second.look, (0.0, 0.0));
        assert_eq!(second.scroll, 0.0);
        assert!(second.forward, "held keys persist across snapshots");
    }

    #[test]
    fn test_mouse_motion_ignored_while_cursor_free() {
        let mut input = InputState::new();
        input.mouse_motion(10.0, 10.0);
        assert_eq!(input.snapshot().look, (0.0, 0.0));
    }

    #[test]
    fn test_key_release_clears_movement() {
        let mut input = InputState::new();
        input.key_pressed(KeyCode::KeyD);
        assert!(input.snapshot().right);
        input.key_released(KeyCode::KeyD);
        assert!(!input.snapshot().right);
    }
}
