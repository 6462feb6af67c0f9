use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(to_js_error)
}

/// JS numbers arrive as `f64`; anything that is not a whole number maps to
/// an index no list can hold.
pub fn js_index(value: f64) -> i64 {
    if value.is_finite() && value.fract() == 0.0 {
        value as i64
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_index() {
        assert_eq!(js_index(2.0), 2);
        assert_eq!(js_index(-3.0), -3);
        assert_eq!(js_index(1.5), -1);
        assert_eq!(js_index(f64::NAN), -1);
    }
}
