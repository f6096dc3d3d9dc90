//! Window and application lifecycle events.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::render::write_default;
use crate::event::{Event, EventKind, EventType};

macro_rules! bare_event {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Deserialize, Event, PartialEq, Serialize)]
        pub struct $name {
            #[serde(skip)]
            handled: bool,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl EventType for $name {
            const KIND: EventKind = EventKind::$kind;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write_default(f, Self::NAME)
            }
        }
    };
}

bare_event!(WindowCloseEvent, WindowClose);
bare_event!(WindowFocusEvent, WindowFocus);
bare_event!(WindowLostFocusEvent, WindowLostFocus);
bare_event!(
    /// Fixed-rate simulation step.
    AppTickEvent, AppTick
);
bare_event!(AppUpdateEvent, AppUpdate);
bare_event!(AppRenderEvent, AppRender);

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct WindowResizeEvent {
    width: u32,
    height: u32,
    #[serde(skip)]
    handled: bool,
}

impl WindowResizeEvent {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            handled: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl EventType for WindowResizeEvent {
    const KIND: EventKind = EventKind::WindowResize;
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}, {}", Self::NAME, self.width, self.height)
    }
}

#[derive(Clone, Debug, Deserialize, Event, PartialEq, Serialize)]
pub struct WindowMovedEvent {
    x: i32,
    y: i32,
    #[serde(skip)]
    handled: bool,
}

impl WindowMovedEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            handled: false,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl EventType for WindowMovedEvent {
    const KIND: EventKind = EventKind::WindowMoved;
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ({}, {})", Self::NAME, self.x, self.y)
    }
}
