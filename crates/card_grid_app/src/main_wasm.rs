use wasm_bindgen::prelude::*;
use web_sys::console;

pub(crate) fn main_wasm() -> Result<(), JsValue> {
    console::log_1(
        &format!(
            "Starting {} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
        .into(),
    );
    card_grid::run().map_err(|err| JsValue::from_str(&err.to_string()))
}
