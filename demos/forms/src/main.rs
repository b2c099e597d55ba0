#[macro_use]
extern crate log;

use wasm_bindgen::prelude::*;

mod app;

pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());

    info!("Starting forms demo");

    yew::start_app::<app::App>();

    Ok(())
}
