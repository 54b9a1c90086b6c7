//! WebAssembly bindings.
//!
//! Configs cross the boundary as plain JS objects in the same camelCase
//! shape as the JSON format.
//!
//! ```javascript
//! import { generate, generateCode, presetNames } from 'glass-codegen';
//!
//! const css = generate({ type: 'button', blur: 20 }, 'css');
//! const code = generateCode({ type: 'modal' }, 'react');
//! console.log(code.sourceText, code.generatedAt);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::StyleConfig;
use crate::format::OutputFormat;
use crate::generator;
use crate::preset;

fn config_from_js(config: JsValue) -> Result<StyleConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(StyleConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid style config: {}", e)))
}

/// Generates source text. Unknown format names fall back to `css`.
#[wasm_bindgen]
pub fn generate(config: JsValue, format: &str) -> Result<String, JsError> {
    let config = config_from_js(config)?;
    Ok(generator::generate(&config, OutputFormat::from(format)))
}

/// Generates a `GeneratedCode` record (`sourceText`, `declaredLanguage`,
/// `targetFormat`, `generatedAt`).
#[wasm_bindgen(js_name = "generateCode")]
pub fn generate_code(config: JsValue, format: &str) -> Result<JsValue, JsError> {
    let config = config_from_js(config)?;
    let code = generator::generate_code(&config, OutputFormat::from(format));
    code.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Failed to serialize output: {}", e)))
}

/// Ids of the built-in presets.
#[wasm_bindgen(js_name = "presetNames")]
pub fn preset_names() -> Vec<String> {
    preset::presets().iter().map(|p| p.id.to_string()).collect()
}

/// Config of a built-in preset as a JS object.
#[wasm_bindgen(js_name = "presetConfig")]
pub fn preset_config(id: &str) -> Result<JsValue, JsError> {
    let preset = preset::require_preset(id).map_err(|e| JsError::new(&e.to_string()))?;
    preset
        .config
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Failed to serialize preset: {}", e)))
}
