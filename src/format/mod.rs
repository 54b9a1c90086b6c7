//! Output formats and their renderers.
//!
//! Each [`OutputFormat`] has one [`FormatRenderer`]. Renderers are stateless
//! unit structs. They read the component's [`ComponentTemplate`] and the
//! call's [`StyleContext`] and return source text, so the same config always
//! yields the same bytes.

pub mod css;
pub mod html;
pub mod react;
pub mod tailwind;
pub mod typescript;
pub mod vue;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{lenient, strict};
use crate::effect::StyleContext;
use crate::error::GlassError;
use crate::template::ComponentTemplate;

pub use css::CssRenderer;
pub use html::HtmlRenderer;
pub use react::ReactRenderer;
pub use tailwind::TailwindRenderer;
pub use typescript::TypeScriptRenderer;
pub use vue::VueRenderer;

// ============================================================================
// OutputFormat
// ============================================================================

/// Target syntax of a generation call.
///
/// Lenient conversions (`From<&str>`, serde) fall back to [`OutputFormat::Css`];
/// [`FromStr`] is strict and reports [`GlassError::UnknownFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase", from = "String")]
pub enum OutputFormat {
    #[default]
    Css,
    Html,
    React,
    Vue,
    Typescript,
    Tailwind,
}

impl OutputFormat {
    /// Every format.
    pub const ALL: [Self; 6] = [
        Self::Css,
        Self::Html,
        Self::React,
        Self::Vue,
        Self::Typescript,
        Self::Tailwind,
    ];

    /// The serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Html => "html",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Typescript => "typescript",
            Self::Tailwind => "tailwind",
        }
    }

    /// Display label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Html => "HTML",
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Typescript => "TypeScript",
            Self::Tailwind => "Tailwind CSS",
        }
    }

    /// Language a code viewer should highlight the output as.
    pub fn language(self) -> Language {
        match self {
            Self::Css => Language::Css,
            Self::Html | Self::Tailwind => Language::Html,
            Self::React | Self::Vue | Self::Typescript => Language::Typescript,
        }
    }

    /// Conventional file extension for saving the output.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Html | Self::Tailwind => "html",
            Self::React | Self::Typescript => "tsx",
            Self::Vue => "vue",
        }
    }
}

impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        lenient(name, &Self::ALL, Self::as_str, "output format")
    }
}

impl From<String> for OutputFormat {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        strict(s, &Self::ALL, Self::as_str).ok_or_else(|| GlassError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highlighting language declared for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Css,
    Html,
    Typescript,
}

// ============================================================================
// Renderer Trait
// ============================================================================

/// Turns a style context and component template into source text.
pub trait FormatRenderer: Sync {
    /// The format this renderer produces.
    fn format(&self) -> OutputFormat;

    /// Renders the component. Must be deterministic and must not fail.
    fn render(&self, ctx: &StyleContext, template: &ComponentTemplate) -> String;
}

/// Returns the renderer for a format.
pub fn renderer_for(format: OutputFormat) -> &'static dyn FormatRenderer {
    match format {
        OutputFormat::Css => &CssRenderer,
        OutputFormat::Html => &HtmlRenderer,
        OutputFormat::React => &ReactRenderer,
        OutputFormat::Vue => &VueRenderer,
        OutputFormat::Typescript => &TypeScriptRenderer,
        OutputFormat::Tailwind => &TailwindRenderer,
    }
}

// ============================================================================
// Shared text helpers
// ============================================================================

/// Indents every non-empty line by `spaces`.
pub(crate) fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{pad}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quotes a value as a single-quoted JavaScript string.
pub(crate) fn js_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Escapes text for a JavaScript template literal.
pub(crate) fn template_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}
