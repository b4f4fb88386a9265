use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("no browser window available")]
    NoWindow,

    #[error("platform primitive unavailable: {0}")]
    PrimitiveUnavailable(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("a carousel needs at least one slide")]
    EmptyCarousel,

    #[error("invalid root margin: {0}")]
    InvalidRootMargin(String),
}

impl From<wasm_bindgen::JsValue> for MotionError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MotionError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, MotionError>;
