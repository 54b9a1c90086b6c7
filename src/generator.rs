//! Configuration-to-code generation entry points.
//!
//! [`generate`] is the pure core: same config and format in, same bytes out.
//! [`generate_code`] wraps its text in a [`GeneratedCode`] record stamped
//! with the generation time. The timestamp lives on the record and never in
//! the text.
//!
//! # Example
//!
//! ```
//! use glass_codegen::{generate, ComponentType, OutputFormat, StyleConfig};
//!
//! let config = StyleConfig::new().with_component_type(ComponentType::Button);
//! let css = generate(&config, OutputFormat::Css);
//! assert!(css.contains(".liquid-glass-button"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StyleConfig;
use crate::effect::StyleContext;
use crate::format::{Language, OutputFormat, renderer_for};
use crate::template::ComponentTemplate;

// ============================================================================
// GeneratedCode
// ============================================================================

/// The result of one generation call.
///
/// Serializes as:
///
/// ```json
/// {
///   "sourceText": ".liquid-glass { ... }",
///   "declaredLanguage": "css",
///   "targetFormat": "css",
///   "generatedAt": "2026-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    /// Generated source. Identical to [`generate`]'s return value.
    pub source_text: String,

    /// Highlighting language of `source_text`.
    pub declared_language: Language,

    /// Format that was requested.
    pub target_format: OutputFormat,

    /// When the code was generated (UTC).
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub generated_at: DateTime<Utc>,
}

impl GeneratedCode {
    /// Serializes to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Suggested file name, e.g. `LiquidGlassCard.tsx` or `liquid-glass-card.css`.
    pub fn file_name(&self, config: &StyleConfig) -> String {
        let template = ComponentTemplate::for_type(config.component_type);
        let stem = match self.target_format {
            OutputFormat::React | OutputFormat::Vue | OutputFormat::Typescript => {
                template.component_name
            }
            OutputFormat::Css | OutputFormat::Html | OutputFormat::Tailwind => template.class_name,
        };
        format!("{stem}.{}", self.target_format.file_extension())
    }
}

// ============================================================================
// CodeGenerator
// ============================================================================

/// Stateless generator. Every method delegates to the module functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// See [`generate`].
    pub fn generate(&self, config: &StyleConfig, format: OutputFormat) -> String {
        generate(config, format)
    }

    /// See [`generate_code`].
    pub fn generate_code(&self, config: &StyleConfig, format: OutputFormat) -> GeneratedCode {
        generate_code(config, format)
    }

    /// Every format for one config, in [`OutputFormat::ALL`] order.
    pub fn generate_all(&self, config: &StyleConfig) -> Vec<(OutputFormat, String)> {
        OutputFormat::ALL
            .iter()
            .map(|&format| (format, generate(config, format)))
            .collect()
    }
}

/// Generates source text for `config` in `format`.
///
/// Never fails. Out-of-range numbers are clamped, unparseable colors become
/// white, and unknown names were already resolved to defaults when the
/// config was built or deserialized.
pub fn generate(config: &StyleConfig, format: OutputFormat) -> String {
    let ctx = StyleContext::new(config);
    let template = ComponentTemplate::for_type(ctx.component_type);
    let text = renderer_for(format).render(&ctx, template);
    let text = text.trim().to_string();

    tracing::debug!(
        format = format.as_str(),
        component = ctx.component_type.as_str(),
        len = text.len(),
        "Generated code"
    );
    text
}

/// Generates code stamped with the current time.
pub fn generate_code(config: &StyleConfig, format: OutputFormat) -> GeneratedCode {
    generate_code_at(config, format, Utc::now())
}

/// Generates code stamped with `generated_at`.
pub fn generate_code_at(
    config: &StyleConfig,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> GeneratedCode {
    GeneratedCode {
        source_text: generate(config, format),
        declared_language: format.language(),
        target_format: format,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComponentType;
    use chrono::TimeZone;

    #[test]
    fn output_is_trimmed() {
        for format in OutputFormat::ALL {
            let text = generate(&StyleConfig::default(), format);
            assert_eq!(text, text.trim(), "{format}");
        }
    }

    #[test]
    fn generated_code_carries_language_and_time() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let code = generate_code_at(&StyleConfig::default(), OutputFormat::Vue, at);
        assert_eq!(code.declared_language, Language::Typescript);
        assert_eq!(code.target_format, OutputFormat::Vue);
        assert_eq!(code.generated_at, at);
        assert_eq!(code.source_text, generate(&StyleConfig::default(), OutputFormat::Vue));
    }

    #[test]
    fn generated_code_json_shape() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let code = generate_code_at(&StyleConfig::default(), OutputFormat::Tailwind, at);
        let value: serde_json::Value = serde_json::from_str(&code.to_json().unwrap()).unwrap();
        assert_eq!(value["declaredLanguage"], "html");
        assert_eq!(value["targetFormat"], "tailwind");
        assert_eq!(value["generatedAt"], "2026-01-02T03:04:05Z");
        assert!(value["sourceText"].as_str().unwrap().contains("backdrop-blur-"));
    }

    #[test]
    fn file_names_follow_format() {
        let config = StyleConfig::new().with_component_type(ComponentType::Toast);
        let generator = CodeGenerator::new();
        let tsx = generator.generate_code(&config, OutputFormat::React);
        assert_eq!(tsx.file_name(&config), "LiquidGlassToast.tsx");
        let css = generator.generate_code(&config, OutputFormat::Css);
        assert_eq!(css.file_name(&config), "liquid-glass-toast.css");
    }

    #[test]
    fn generate_all_covers_every_format() {
        let all = CodeGenerator::new().generate_all(&StyleConfig::default());
        assert_eq!(all.len(), OutputFormat::ALL.len());
        assert!(all.iter().all(|(_, text)| !text.is_empty()));
    }
}
