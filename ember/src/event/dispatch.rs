//! Single-shot, type-checked handler invocation.
//!
//! The expected kind comes from the handler's parameter type, so a handler
//! can never be paired with a kind whose payload it does not understand.
//!
//! Dispatch does not look at `handled` before running a handler: if several
//! attempts against one event match, each overwrites the previous result.
//! Stopping once an event is handled is up to the caller.

use crate::event::{Event, EventType};

/// Runs `handler` on `event` if it is a `T`, storing the handler's result in
/// the event's handled flag. Returns `false` without running the handler
/// when there is no event or its kind is not `T::KIND`.
pub fn dispatch<T, F>(event: Option<&mut dyn Event>, handler: F) -> bool
where
    T: EventType,
    F: FnOnce(&T) -> bool,
{
    let event = match event {
        Some(event) => event,
        None => return false,
    };

    if event.kind() != T::KIND {
        return false;
    }

    let handled = match event.as_any().downcast_ref::<T>() {
        Some(concrete) => handler(concrete),
        None => {
            log!(ERROR, "dispatch: {} claims kind {} but is not a {}", event.name(), T::KIND, std::any::type_name::<T>());
            panic!("dispatch: event kind {} is not unique to {}", T::KIND, std::any::type_name::<T>());
        },
    };

    event.set_handled(handled);

    if handled {
        log!(VERBOSE, "{} handled", event.name());
    }

    handled
}

/// Wraps one event so several handlers can be tried against it in turn.
pub struct EventDispatcher<'a> {
    event: &'a mut dyn Event,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(event: &'a mut dyn Event) -> Self {
        Self {
            event,
        }
    }

    pub fn dispatch<T, F>(&mut self, handler: F) -> bool
    where
        T: EventType,
        F: FnOnce(&T) -> bool,
    {
        dispatch::<T, F>(Some(&mut *self.event), handler)
    }

    pub fn handled(&self) -> bool {
        self.event.handled()
    }
}
