//! Keyboard state tracked from winit events

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::{Key, KeyState};

/// Keys currently held, plus presses since the last [`take_pressed`](Self::take_pressed)
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    down: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition; OS auto-repeat does not count as a new press
    pub fn apply(&mut self, key: Key, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if self.down.insert(key) && !repeat {
                    self.pressed.insert(key);
                }
            }
            ElementState::Released => {
                self.down.remove(&key);
            }
        }
    }

    /// Edge-triggered check, consumes the press
    pub fn take_pressed(&mut self, key: Key) -> bool {
        self.pressed.remove(&key)
    }

    /// Drop everything (focus lost)
    pub fn clear(&mut self) {
        self.down.clear();
        self.pressed.clear();
    }
}

impl KeyState for KeyboardState {
    fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

/// Physical key → game key (layout independent, so W/S stay put on AZERTY too)
pub fn map_key(physical: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical else {
        return None;
    };
    let key = match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyboardState::new();
        keys.apply(Key::W, ElementState::Pressed, false);
        assert!(keys.is_down(Key::W));
        assert!(!keys.is_down(Key::S));

        keys.apply(Key::W, ElementState::Released, false);
        assert!(!keys.is_down(Key::W));
    }

    #[test]
    fn test_take_pressed_is_edge_triggered() {
        let mut keys = KeyboardState::new();
        keys.apply(Key::Space, ElementState::Pressed, false);
        keys.apply(Key::Space, ElementState::Pressed, true);

        assert!(keys.take_pressed(Key::Space));
        assert!(!keys.take_pressed(Key::Space));
        // Still held
        assert!(keys.is_down(Key::Space));
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowUp)), Some(Key::Up));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyS)), Some(Key::S));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), None);
    }
}
