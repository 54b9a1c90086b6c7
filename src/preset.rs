//! Built-in style presets.
//!
//! ```
//! use glass_codegen::preset;
//!
//! let neon = preset::preset("neon-glow").unwrap();
//! assert_eq!(neon.name, "Neon Glow");
//! assert!(preset::presets_by_tag("animated").count() >= 3);
//! ```

use std::sync::LazyLock;

use serde::Serialize;

use crate::config::{AnimationKind, ComponentType, StyleConfig};
use crate::error::{GlassError, GlassResult};

/// A named starting configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Lookup key, e.g. `neon-glow`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub config: StyleConfig,
}

impl Preset {
    /// Returns true if the preset carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

static PRESETS: LazyLock<Vec<Preset>> = LazyLock::new(|| {
    vec![
        Preset {
            id: "modern",
            name: "Modern Glass",
            tags: &["modern", "clean", "card"],
            config: StyleConfig::default(),
        },
        Preset {
            id: "subtle",
            name: "Subtle Glass",
            tags: &["subtle", "minimal", "card"],
            config: StyleConfig::new()
                .with_blur(8.0, 120.0)
                .with_opacity(0.15)
                .with_colors("rgba(255, 255, 255, 0.15)", "rgba(255, 255, 255, 0.2)")
                .with_geometry(8.0, 16.0),
        },
        Preset {
            id: "bold",
            name: "Bold Glass",
            tags: &["bold", "prominent", "card"],
            config: StyleConfig::new()
                .with_blur(25.0, 200.0)
                .with_opacity(0.4)
                .with_colors("rgba(255, 255, 255, 0.4)", "rgba(255, 255, 255, 0.5)")
                .with_geometry(16.0, 32.0),
        },
        Preset {
            id: "neon-glow",
            name: "Neon Glow",
            tags: &["neon", "glow", "button", "animated"],
            config: StyleConfig::new()
                .with_component_type(ComponentType::Button)
                .with_blur(20.0, 200.0)
                .with_opacity(0.3)
                .with_colors("rgba(236, 72, 153, 0.3)", "rgba(236, 72, 153, 0.6)")
                .with_geometry(12.0, 20.0)
                .with_animation(AnimationKind::Glow, 2.0, 0.0),
        },
        Preset {
            id: "floating-panel",
            name: "Floating Panel",
            tags: &["floating", "panel", "animated", "modern"],
            config: StyleConfig::new()
                .with_component_type(ComponentType::Panel)
                .with_blur(12.0, 150.0)
                .with_opacity(0.2)
                .with_colors("rgba(255, 255, 255, 0.2)", "rgba(255, 255, 255, 0.3)")
                .with_geometry(20.0, 28.0)
                .with_animation(AnimationKind::Float, 3.0, 0.0),
        },
        Preset {
            id: "dark-hero",
            name: "Dark Hero Section",
            tags: &["hero", "dark", "large", "animated"],
            config: StyleConfig::new()
                .with_blur(30.0, 140.0)
                .with_opacity(0.15)
                .with_colors("rgba(15, 23, 42, 0.15)", "rgba(100, 116, 139, 0.3)")
                .with_geometry(24.0, 48.0)
                .with_animation(AnimationKind::Pulse, 4.0, 0.0),
        },
    ]
});

/// Every built-in preset, `modern` first.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Looks up a preset by id.
pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Like [`preset`], but reports a missing id as [`GlassError::UnknownPreset`].
pub fn require_preset(id: &str) -> GlassResult<&'static Preset> {
    preset(id).ok_or_else(|| GlassError::UnknownPreset(id.to_string()))
}

/// Presets tagged with `tag`.
pub fn presets_by_tag<'a>(tag: &'a str) -> impl Iterator<Item = &'static Preset> + 'a {
    PRESETS.iter().filter(move |p| p.has_tag(tag))
}

/// Config of the first preset for `component_type`, else `modern`'s.
pub fn default_config_for(component_type: ComponentType) -> StyleConfig {
    PRESETS
        .iter()
        .find(|p| p.config.component_type == component_type)
        .map(|p| p.config.clone())
        .unwrap_or_else(|| StyleConfig::default().with_component_type(component_type))
}
