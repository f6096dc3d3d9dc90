use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventKind, EventType};

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct KeyPressedEvent {
    key_code: i32,
    repeat_count: i32,
    #[serde(skip)]
    handled: bool,
}

impl KeyPressedEvent {
    pub fn new(key_code: i32, repeat_count: i32) -> Self {
        Self {
            key_code,
            repeat_count,
            handled: false,
        }
    }

    pub fn key_code(&self) -> i32 {
        self.key_code
    }

    /// How many times the key has auto-repeated while held down.
    pub fn repeat_count(&self) -> i32 {
        self.repeat_count
    }
}

impl EventType for KeyPressedEvent {
    const KIND: EventKind = EventKind::KeyPressed;
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} ({} repeats)", Self::NAME, self.key_code, self.repeat_count)
    }
}

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct KeyReleasedEvent {
    key_code: i32,
    #[serde(skip)]
    handled: bool,
}

impl KeyReleasedEvent {
    pub fn new(key_code: i32) -> Self {
        Self {
            key_code,
            handled: false,
        }
    }

    pub fn key_code(&self) -> i32 {
        self.key_code
    }
}

impl EventType for KeyReleasedEvent {
    const KIND: EventKind = EventKind::KeyReleased;
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.key_code)
    }
}
