use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

pub static ACTION_ATTRIBUTE: &str = "data-form-action";

/// Walks up from `element` and returns the first `attribute` value found.
pub fn parents_attribute(element: Element, attribute: &str) -> Option<String> {
    if let Some(value) = element.get_attribute(attribute) {
        Some(value)
    } else if let Some(parent) = element.parent_element() {
        parents_attribute(parent, attribute)
    } else {
        None
    }
}

/// `#update`, `#/update` and `update` all give `update`.
pub fn strip_hash(hash: &str) -> &str {
    let hash = hash.strip_prefix('#').unwrap_or(hash);

    hash.strip_prefix('/').unwrap_or(hash)
}

// Coped from YEW
pub trait TargetCast
where
    Self: AsRef<Event>,
{
    #[inline]
    fn target_dyn_into<T>(&self) -> Option<T>
    where
        T: AsRef<EventTarget> + JsCast,
    {
        self.as_ref()
            .target()
            .and_then(|target| target.dyn_into().ok())
    }
}

impl<E: AsRef<Event>> TargetCast for E {}
