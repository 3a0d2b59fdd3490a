//! Explicit listener lifecycle for widget markup
//!
//! A reload throws the widget's whole subtree away and re-renders it, so
//! listeners must be managed symmetrically: a `EventBindings` owns every
//! closure it attached and removes the listeners again on `detach` (or on
//! drop). Re-binding after a swap therefore can never stack duplicate
//! handlers on a surviving node.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::error::AdminError;

struct Listener {
    target: Element,
    event: &'static str,
    handler: Closure<dyn FnMut(Event)>,
}

/// Owns the listeners bound to one widget's current markup.
#[derive(Default)]
pub struct EventBindings {
    listeners: Vec<Listener>,
}

impl EventBindings {
    pub fn new() -> Self {
        EventBindings::default()
    }

    /// Attach a click handler to `target` and take ownership of its closure.
    pub fn on_click<F>(&mut self, target: &Element, handler: F) -> Result<(), AdminError>
    where
        F: FnMut(Event) + 'static,
    {
        self.listen(target, "click", handler)
    }

    pub fn listen<F>(
        &mut self,
        target: &Element,
        event: &'static str,
        handler: F,
    ) -> Result<(), AdminError>
    where
        F: FnMut(Event) + 'static,
    {
        let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .map_err(|_| AdminError::MissingNode(format!("{event} listener target")))?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            handler,
        });
        Ok(())
    }

    /// Remove every listener this binding set attached.
    pub fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.handler.as_ref().unchecked_ref(),
            );
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        self.detach();
    }
}
