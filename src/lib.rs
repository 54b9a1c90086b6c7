//! glass-codegen: Liquid glass (glassmorphism) code generator
//!
//! This crate turns a [`StyleConfig`] describing a frosted-glass surface
//! (blur, opacity, saturation, colors, animation and hover effects) into
//! ready-to-use source code for one of several targets: plain CSS, a
//! standalone HTML page, a React component, a Vue single-file component, a
//! documented TypeScript module, or Tailwind utility classes.
//!
//! # Example
//!
//! ```
//! use glass_codegen::{generate, AnimationKind, ComponentType, HoverEffect, OutputFormat, StyleConfig};
//!
//! let config = StyleConfig::new()
//!     .with_component_type(ComponentType::Modal)
//!     .with_animation(AnimationKind::Float, 3.0, 0.0)
//!     .with_hover(HoverEffect::Lift, 1.0, 0.3);
//!
//! let vue = generate(&config, OutputFormat::Vue);
//! assert!(vue.starts_with("<template>"));
//!
//! let tailwind = generate(&config, OutputFormat::Tailwind);
//! assert!(tailwind.contains("backdrop-blur-lg"));
//! ```
//!
//! # Never Fails
//!
//! [`generate`] always returns a string. Unknown component types, animation
//! kinds and hover effects resolve to `card` / `none` / `none`, unparseable
//! colors become white, and out-of-range numbers are clamped when the code
//! is emitted. The config itself is never modified.
//!
//! # Serializable Configs
//!
//! Configs use the same camelCase JSON shape as the web editor:
//!
//! ```
//! use glass_codegen::{generate_code, OutputFormat, StyleConfig};
//!
//! let config = StyleConfig::from_json(r#"{ "type": "toast", "blur": 20 }"#).unwrap();
//! let code = generate_code(&config, OutputFormat::React);
//! assert!(code.source_text.contains("LiquidGlassToast"));
//! let json = code.to_json().unwrap();
//! ```

pub mod color;
pub mod config;
pub mod effect;
pub mod error;
pub mod format;
pub mod generator;
pub mod preset;
pub mod preview;
pub mod template;
pub mod units;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "wasm")]
mod wasm;

pub use color::GlassColor;
pub use config::{AnimationConfig, AnimationKind, ComponentType, HoverConfig, HoverEffect, StyleConfig};
pub use effect::{CssEffect, StyleContext};
pub use error::{GlassError, GlassResult};
pub use format::{FormatRenderer, Language, OutputFormat, renderer_for};
pub use generator::{CodeGenerator, GeneratedCode, generate, generate_code, generate_code_at};
pub use preset::Preset;
pub use preview::{PreviewAdapter, StyleSheetBuffer, StyleSurface};
pub use template::ComponentTemplate;
