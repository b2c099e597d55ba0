use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::EventTarget;

type Destructor = Box<dyn FnOnce(&EventTarget, &Function) -> std::result::Result<(), JsValue>>;

/// Attaches a closure to an event target and detaches it again on drop.
pub struct ElementEvent {
    element: EventTarget,
    function: Box<dyn AsRef<JsValue>>,

    destructor: Option<Destructor>,
}

impl ElementEvent {
    pub fn link<
        C: AsRef<JsValue> + 'static,
        F: FnOnce(&EventTarget, &Function) -> std::result::Result<(), JsValue>,
    >(
        element: EventTarget,
        function: C,
        creator: F,
        destructor: Destructor,
    ) -> Self {
        let this = Self {
            element,
            function: Box::new(function),
            destructor: Some(destructor),
        };

        creator(&this.element, (*this.function).as_ref().unchecked_ref()).unwrap_throw();

        this
    }

    /// Shorthand for `addEventListener` / `removeEventListener` with the same event name.
    pub fn listen<C: AsRef<JsValue> + 'static>(
        element: EventTarget,
        event: &'static str,
        function: C,
    ) -> Self {
        Self::link(
            element,
            function,
            |t, f| t.add_event_listener_with_callback(event, f),
            Box::new(move |t, f| t.remove_event_listener_with_callback(event, f)),
        )
    }
}

impl Drop for ElementEvent {
    fn drop(&mut self) {
        if let Some(dest) = self.destructor.take() {
            dest(&self.element, (*self.function).as_ref().unchecked_ref()).unwrap_throw();
        }
    }
}
