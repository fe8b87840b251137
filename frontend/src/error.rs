use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => EffectError::Js(message),
            None => EffectError::Js(format!("{:?}", value)),
        }
    }
}

pub type Result<T> = std::result::Result<T, EffectError>;
