use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod document;
mod error;
mod form;
mod helper;
mod listener;
mod util;

pub type Result<V, E = RouteError> = std::result::Result<V, E>;

pub use error::RouteError;
pub use form::{ActiveForm, FormClasses, FormSlot};
pub use helper::ACTION_ATTRIBUTE;
pub use listener::{
    register, RouteEvent, RouteListener, RouterHandle, RouterId, RouterOptions,
};

/// Shows the form named by `tag` and hides the other three.
pub fn route(document: &Document, tag: &str) -> Result<FormClasses> {
    document::apply_route(document, ActiveForm::from_tag(tag))
}

fn form_from_js(action: &JsValue) -> ActiveForm {
    action
        .as_string()
        .map(|tag| ActiveForm::from_tag(&tag))
        .unwrap_or_default()
}

/// Non-string values (numbers, `null`, `undefined`) hide every form.
#[wasm_bindgen(js_name = componentRoute)]
pub fn component_route(action: &JsValue) -> Result<(), JsValue> {
    document::apply_route(&gloo_utils::document(), form_from_js(action))?;

    Ok(())
}

/// The classes `componentRoute` would apply, as a JSON object keyed by form id.
#[wasm_bindgen(js_name = formClasses)]
pub fn form_classes(action: &JsValue) -> Result<String, JsValue> {
    let classes = FormClasses::for_form(form_from_js(action));

    Ok(serde_json::to_string(&classes).map_err(RouteError::from)?)
}
