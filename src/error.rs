use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::RouterId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unable to find form element `{selector}`")]
    MissingElement { selector: &'static str },

    #[error("browser error: {0}")]
    Js(String),

    #[error("unable to serialize form classes: {0}")]
    Serialize(String),

    #[error("router {0:?} is not registered")]
    RouterGone(RouterId),
}

impl From<JsValue> for RouteError {
    fn from(value: JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}

impl From<RouteError> for JsValue {
    fn from(value: RouteError) -> Self {
        js_sys::Error::new(&value.to_string()).into()
    }
}
