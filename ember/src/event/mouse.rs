use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventKind, EventType};

// Coordinates use `%f`-style output: six fractional digits.

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct MouseMovedEvent {
    x: f32,
    y: f32,
    #[serde(skip)]
    handled: bool,
}

impl MouseMovedEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            handled: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

impl EventType for MouseMovedEvent {
    const KIND: EventKind = EventKind::MouseMoved;
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ({:.6}, {:.6})", Self::NAME, self.x, self.y)
    }
}

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct MouseButtonPressedEvent {
    button: i32,
    #[serde(skip)]
    handled: bool,
}

impl MouseButtonPressedEvent {
    pub fn new(button: i32) -> Self {
        Self {
            button,
            handled: false,
        }
    }

    pub fn button(&self) -> i32 {
        self.button
    }
}

impl EventType for MouseButtonPressedEvent {
    const KIND: EventKind = EventKind::MouseButtonPressed;
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.button)
    }
}

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct MouseButtonReleasedEvent {
    button: i32,
    #[serde(skip)]
    handled: bool,
}

impl MouseButtonReleasedEvent {
    pub fn new(button: i32) -> Self {
        Self {
            button,
            handled: false,
        }
    }

    pub fn button(&self) -> i32 {
        self.button
    }
}

impl EventType for MouseButtonReleasedEvent {
    const KIND: EventKind = EventKind::MouseButtonReleased;
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.button)
    }
}

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct MouseScrolledEvent {
    x_offset: f32,
    y_offset: f32,
    #[serde(skip)]
    handled: bool,
}

impl MouseScrolledEvent {
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self {
            x_offset,
            y_offset,
            handled: false,
        }
    }

    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }
}

impl EventType for MouseScrolledEvent {
    const KIND: EventKind = EventKind::MouseScrolled;
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ({:.6}, {:.6})", Self::NAME, self.x_offset, self.y_offset)
    }
}
