use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while mounting the garden into a page. The animation itself never
/// fails once mounted.
#[derive(Debug, Error)]
pub enum GardenError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotCanvas(String),
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("invalid config: {0}")]
    Config(String),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for GardenError {
    fn from(value: JsValue) -> Self {
        GardenError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GardenError> for JsValue {
    fn from(err: GardenError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
