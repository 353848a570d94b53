use std::collections::HashMap;

use macroquad::input::{
    is_key_down,
    KeyCode,
};

/// Sub-state of the blocking key-read instruction (FX0A). Two phases
/// are needed so that a held key neither re-triggers on every cycle
/// nor has its release missed when it happens on the tick of the
/// press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWait {
    Idle,
    WaitingForPress,
    WaitingForRelease(u8),
}

/// Latch of the 16 hex-key states, overwritten wholesale once per
/// scheduler tick from the host snapshot.
pub struct Keypad {
    keys: [bool; 16],
    wait: KeyWait,
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            keys: [false; 16],
            wait: KeyWait::Idle,
        }
    }

    pub fn set_keys(&mut self, snapshot: [bool; 16]) {
        self.keys = snapshot;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }

    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|pressed| *pressed).map(|key| key as u8)
    }

    pub fn wait(&self) -> KeyWait {
        self.wait
    }

    pub fn set_wait(&mut self, wait: KeyWait) {
        self.wait = wait;
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps host key codes to the 16 hex keys and snapshots their
/// pressed state once per tick.
pub struct HostKeys {
    key_code_hex_mapping: HashMap<KeyCode, u8>,
}

impl HostKeys {
    pub fn new() -> Self {
        let key_code_hex_mapping: HashMap<KeyCode, u8> = HashMap::from([
            (KeyCode::Key1, 0x1),
            (KeyCode::Key2, 0x2),
            (KeyCode::Key3, 0x3),
            (KeyCode::Key4, 0xC),
            (KeyCode::Q, 0x4),
            (KeyCode::W, 0x5),
            (KeyCode::E, 0x6),
            (KeyCode::R, 0xD),
            (KeyCode::A, 0x7),
            (KeyCode::S, 0x8),
            (KeyCode::D, 0x9),
            (KeyCode::F, 0xE),
            (KeyCode::Z, 0xA),
            (KeyCode::X, 0x0),
            (KeyCode::C, 0xB),
            (KeyCode::V, 0xF),
        ]);

        Self { key_code_hex_mapping }
    }

    pub fn snapshot(&self) -> [bool; 16] {
        let mut keys = [false; 16];
        for (code, hex) in &self.key_code_hex_mapping {
            if is_key_down(*code) {
                keys[*hex as usize] = true;
            }
        }

        keys
    }
}

impl Default for HostKeys {
    fn default() -> Self {
        Self::new()
    }
}
