//! The event model: a closed set of event variants sharing a common header.
//!
//! Every variant is its own type implementing [`Event`], so a `&dyn Event`
//! exposes the common fields without knowing the concrete kind, and
//! [`dispatch`](dispatch::dispatch) recovers the concrete type with the kind
//! and the handler's parameter type tied together by [`EventType`].

use std::any::Any;
use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub use ember_derive::Event;

pub use self::application::{
    AppRenderEvent,
    AppTickEvent,
    AppUpdateEvent,
    WindowCloseEvent,
    WindowFocusEvent,
    WindowLostFocusEvent,
    WindowMovedEvent,
    WindowResizeEvent,
};
pub use self::dispatch::{dispatch, EventDispatcher};
pub use self::key::{KeyPressedEvent, KeyReleasedEvent};
pub use self::mouse::{MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent};

pub mod application;
pub mod dispatch;
pub mod key;
pub mod mouse;
pub mod render;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum EventKind {
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,

    AppTick,
    AppUpdate,
    AppRender,

    KeyPressed,
    KeyReleased,

    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

impl EventKind {
    pub const ALL: [EventKind; 14] = [
        EventKind::WindowClose,
        EventKind::WindowResize,
        EventKind::WindowFocus,
        EventKind::WindowLostFocus,
        EventKind::WindowMoved,
        EventKind::AppTick,
        EventKind::AppUpdate,
        EventKind::AppRender,
        EventKind::KeyPressed,
        EventKind::KeyReleased,
        EventKind::MouseButtonPressed,
        EventKind::MouseButtonReleased,
        EventKind::MouseMoved,
        EventKind::MouseScrolled,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EventKind::WindowClose => "EventTypeWindowClose",
            EventKind::WindowResize => "EventTypeWindowResize",
            EventKind::WindowFocus => "EventTypeWindowFocus",
            EventKind::WindowLostFocus => "EventTypeWindowLostFocus",
            EventKind::WindowMoved => "EventTypeWindowMoved",
            EventKind::AppTick => "EventTypeAppTick",
            EventKind::AppUpdate => "EventTypeAppUpdate",
            EventKind::AppRender => "EventTypeAppRender",
            EventKind::KeyPressed => "EventTypeKeyPressed",
            EventKind::KeyReleased => "EventTypeKeyReleased",
            EventKind::MouseButtonPressed => "EventTypeMouseButtonPressed",
            EventKind::MouseButtonReleased => "EventTypeMouseButtonReleased",
            EventKind::MouseMoved => "EventTypeMouseMoved",
            EventKind::MouseScrolled => "EventTypeMouseScrolled",
        }
    }

    /// The categories every event of this kind belongs to.
    pub const fn categories(self) -> EventCategory {
        match self {
            EventKind::WindowClose
            | EventKind::WindowResize
            | EventKind::WindowFocus
            | EventKind::WindowLostFocus
            | EventKind::WindowMoved
            | EventKind::AppTick
            | EventKind::AppUpdate
            | EventKind::AppRender => EventCategory::APPLICATION,

            EventKind::KeyPressed | EventKind::KeyReleased => {
                EventCategory::INPUT.union(EventCategory::KEYBOARD)
            },

            EventKind::MouseMoved | EventKind::MouseScrolled => {
                EventCategory::INPUT.union(EventCategory::MOUSE)
            },

            EventKind::MouseButtonPressed | EventKind::MouseButtonReleased => {
                EventCategory::INPUT.union(EventCategory::MOUSE).union(EventCategory::MOUSE_BUTTON)
            },
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct EventCategory: u32 {
        const APPLICATION = 1 << 0;
        const INPUT = 1 << 1;
        const KEYBOARD = 1 << 2;
        const MOUSE = 1 << 3;
        const MOUSE_BUTTON = 1 << 4;
    }
}

/// The fields shared by every event, copied out of a `&dyn Event`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EventHeader {
    pub kind: EventKind,
    pub categories: EventCategory,
    pub name: &'static str,
    pub handled: bool,
}

pub trait Event: fmt::Debug + fmt::Display {
    fn kind(&self) -> EventKind;

    fn name(&self) -> &'static str;

    fn categories(&self) -> EventCategory;

    fn handled(&self) -> bool;

    /// Nothing stops a second dispatch from overwriting the first result.
    fn set_handled(&mut self, handled: bool);

    fn as_any(&self) -> &dyn Any;

    fn is_in_category(&self, category: EventCategory) -> bool {
        self.categories().intersects(category)
    }

    fn header(&self) -> EventHeader {
        EventHeader {
            kind: self.kind(),
            categories: self.categories(),
            name: self.name(),
            handled: self.handled(),
        }
    }

    /// Writes as much of this event's `Display` output as fits into `buffer`
    /// and returns the number of bytes written.
    fn render(&self, buffer: &mut [u8]) -> usize {
        render::render_bounded(self, buffer)
    }
}

/// Static description of a concrete variant. `KIND` must be unique to the
/// implementing type, since dispatch trusts it to pick the downcast target.
pub trait EventType: Event + Sized + 'static {
    const KIND: EventKind;
    const NAME: &'static str = Self::KIND.name();
    const CATEGORIES: EventCategory = Self::KIND.categories();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_variant() -> Vec<Box<dyn Event>> {
        vec![
            Box::new(WindowCloseEvent::new()),
            Box::new(WindowResizeEvent::new(1280, 720)),
            Box::new(WindowFocusEvent::new()),
            Box::new(WindowLostFocusEvent::new()),
            Box::new(WindowMovedEvent::new(10, -20)),
            Box::new(AppTickEvent::new()),
            Box::new(AppUpdateEvent::new()),
            Box::new(AppRenderEvent::new()),
            Box::new(KeyPressedEvent::new(65, 2)),
            Box::new(KeyReleasedEvent::new(65)),
            Box::new(MouseButtonPressedEvent::new(0)),
            Box::new(MouseButtonReleasedEvent::new(1)),
            Box::new(MouseMovedEvent::new(3.5, 4.25)),
            Box::new(MouseScrolledEvent::new(1.0, -2.5)),
        ]
    }

    #[test]
    fn event_category_bits() {
        assert_eq!(EventCategory::APPLICATION.bits(), 1);
        assert_eq!(EventCategory::INPUT.bits(), 2);
        assert_eq!(EventCategory::KEYBOARD.bits(), 4);
        assert_eq!(EventCategory::MOUSE.bits(), 8);
        assert_eq!(EventCategory::MOUSE_BUTTON.bits(), 16);
    }

    #[test]
    fn every_kind_has_one_variant() {
        let kinds: Vec<EventKind> = every_variant().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, EventKind::ALL.to_vec());
    }

    // Category bits written out by hand: APPLICATION=1, INPUT=2, KEYBOARD=4, MOUSE=8, MOUSE_BUTTON=16.
    const DOCUMENTED_CATEGORIES: [(EventKind, u32); 14] = [
        (EventKind::WindowClose, 1),
        (EventKind::WindowResize, 1),
        (EventKind::WindowFocus, 1),
        (EventKind::WindowLostFocus, 1),
        (EventKind::WindowMoved, 1),
        (EventKind::AppTick, 1),
        (EventKind::AppUpdate, 1),
        (EventKind::AppRender, 1),
        (EventKind::KeyPressed, 2 | 4),
        (EventKind::KeyReleased, 2 | 4),
        (EventKind::MouseButtonPressed, 2 | 8 | 16),
        (EventKind::MouseButtonReleased, 2 | 8 | 16),
        (EventKind::MouseMoved, 2 | 8),
        (EventKind::MouseScrolled, 2 | 8),
    ];

    fn documented_bits(kind: EventKind) -> u32 {
        DOCUMENTED_CATEGORIES
            .iter()
            .find(|(documented, _)| *documented == kind)
            .map(|&(_, bits)| bits)
            .unwrap_or_else(|| panic!("no documented categories for {:?}", kind))
    }

    #[test]
    fn documented_categories_cover_every_kind() {
        let kinds: Vec<EventKind> = DOCUMENTED_CATEGORIES.iter().map(|&(kind, _)| kind).collect();
        assert_eq!(kinds, EventKind::ALL.to_vec());

        for &kind in EventKind::ALL.iter() {
            assert_eq!(kind.categories().bits(), documented_bits(kind), "{:?}", kind);
        }
    }

    #[test]
    fn variant_header_matches_documentation() {
        for event in every_variant() {
            let header = event.header();
            assert_eq!(header.categories.bits(), documented_bits(header.kind), "{}", header.name);
            assert_eq!(header.name, format!("EventType{:?}", header.kind));
            assert!(!header.handled);
        }
    }

    #[test]
    fn event_type_consts_match_documentation() {
        assert_eq!(WindowCloseEvent::CATEGORIES.bits(), 1);
        assert_eq!(WindowResizeEvent::CATEGORIES.bits(), 1);
        assert_eq!(WindowFocusEvent::CATEGORIES.bits(), 1);
        assert_eq!(WindowLostFocusEvent::CATEGORIES.bits(), 1);
        assert_eq!(WindowMovedEvent::CATEGORIES.bits(), 1);
        assert_eq!(AppTickEvent::CATEGORIES.bits(), 1);
        assert_eq!(AppUpdateEvent::CATEGORIES.bits(), 1);
        assert_eq!(AppRenderEvent::CATEGORIES.bits(), 1);
        assert_eq!(KeyPressedEvent::CATEGORIES, EventCategory::INPUT | EventCategory::KEYBOARD);
        assert_eq!(KeyReleasedEvent::CATEGORIES, EventCategory::INPUT | EventCategory::KEYBOARD);
        assert_eq!(
            MouseButtonPressedEvent::CATEGORIES,
            EventCategory::INPUT | EventCategory::MOUSE | EventCategory::MOUSE_BUTTON,
        );
        assert_eq!(
            MouseButtonReleasedEvent::CATEGORIES,
            EventCategory::INPUT | EventCategory::MOUSE | EventCategory::MOUSE_BUTTON,
        );
        assert_eq!(MouseMovedEvent::CATEGORIES, EventCategory::INPUT | EventCategory::MOUSE);
        assert_eq!(MouseScrolledEvent::CATEGORIES, EventCategory::INPUT | EventCategory::MOUSE);
    }

    #[test]
    fn is_in_category_agrees_with_categories() {
        let categories = [
            EventCategory::empty(),
            EventCategory::APPLICATION,
            EventCategory::INPUT,
            EventCategory::KEYBOARD,
            EventCategory::MOUSE,
            EventCategory::MOUSE_BUTTON,
            EventCategory::KEYBOARD | EventCategory::MOUSE,
            EventCategory::all(),
        ];

        for event in every_variant() {
            for &category in categories.iter() {
                assert_eq!(
                    event.is_in_category(category),
                    event.categories().bits() & category.bits() != 0,
                    "{} / {:?}",
                    event.name(),
                    category,
                );
            }
        }
    }

    #[test]
    fn header_view_through_trait_object() {
        let mut pressed = KeyPressedEvent::new(32, 0);
        let event: &mut dyn Event = &mut pressed;

        assert_eq!(event.kind(), EventKind::KeyPressed);
        assert_eq!(event.name(), "EventTypeKeyPressed");
        assert!(event.is_in_category(EventCategory::KEYBOARD));
        assert!(!event.is_in_category(EventCategory::MOUSE));

        event.set_handled(true);
        assert!(event.header().handled);
        assert!(pressed.handled());
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(EventKind::MouseScrolled.to_string(), "EventTypeMouseScrolled");
    }
}
