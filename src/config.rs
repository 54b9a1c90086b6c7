//! Serializable style configuration consumed by the generator.
//!
//! A [`StyleConfig`] captures every editor setting in the same JSON shape the
//! editor stores, so configurations saved by the editor load directly.
//!
//! # Example
//!
//! ```
//! use glass_codegen::{AnimationKind, ComponentType, HoverEffect, StyleConfig};
//!
//! let config = StyleConfig::new()
//!     .with_component_type(ComponentType::Button)
//!     .with_animation(AnimationKind::Float, 3.0, 0.0)
//!     .with_hover(HoverEffect::Lift, 1.0, 0.3);
//!
//! let json = config.to_json().unwrap();
//! let restored = StyleConfig::from_json(&json).unwrap();
//! assert_eq!(restored, config);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GlassError, GlassResult};

// ============================================================================
// Lenient enum parsing
// ============================================================================

/// Resolves `name` against a fixed variant table, falling back to the
/// default variant for anything unknown.
pub(crate) fn lenient<T: Copy + Default>(
    name: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
    what: &str,
) -> T {
    let trimmed = name.trim();
    all.iter()
        .copied()
        .find(|v| as_str(*v).eq_ignore_ascii_case(trimmed))
        .unwrap_or_else(|| {
            let fallback = T::default();
            tracing::debug!("Unknown {what} {name:?}, falling back to {:?}", as_str(fallback));
            fallback
        })
}

pub(crate) fn strict<T: Copy>(name: &str, all: &[T], as_str: fn(T) -> &'static str) -> Option<T> {
    let trimmed = name.trim();
    all.iter().copied().find(|v| as_str(*v).eq_ignore_ascii_case(trimmed))
}

// ============================================================================
// ComponentType
// ============================================================================

/// Structural category of the widget being generated.
///
/// Unknown names (including the editor's template-less types such as
/// `dashboard` or `hero`) resolve to [`ComponentType::Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ComponentType {
    #[default]
    Card,
    Button,
    Modal,
    Panel,
    Navigation,
    Sidebar,
    Dropdown,
    Toast,
    Input,
}

impl ComponentType {
    /// Every component type, in editor order.
    pub const ALL: [Self; 9] = [
        Self::Card,
        Self::Button,
        Self::Modal,
        Self::Panel,
        Self::Navigation,
        Self::Sidebar,
        Self::Dropdown,
        Self::Toast,
        Self::Input,
    ];

    /// The serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Button => "button",
            Self::Modal => "modal",
            Self::Panel => "panel",
            Self::Navigation => "navigation",
            Self::Sidebar => "sidebar",
            Self::Dropdown => "dropdown",
            Self::Toast => "toast",
            Self::Input => "input",
        }
    }
}

impl From<&str> for ComponentType {
    fn from(name: &str) -> Self {
        lenient(name, &Self::ALL, Self::as_str, "component type")
    }
}

impl From<String> for ComponentType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        strict(s, &Self::ALL, Self::as_str)
            .ok_or_else(|| GlassError::UnknownComponentType(s.to_string()))
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// AnimationKind
// ============================================================================

/// Looping animation applied to the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum AnimationKind {
    #[default]
    None,
    Float,
    Glow,
    Pulse,
    Shimmer,
    Bounce,
}

impl AnimationKind {
    /// Every animation kind.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Float,
        Self::Glow,
        Self::Pulse,
        Self::Shimmer,
        Self::Bounce,
    ];

    /// The serialized name, also the keyframes suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Float => "float",
            Self::Glow => "glow",
            Self::Pulse => "pulse",
            Self::Shimmer => "shimmer",
            Self::Bounce => "bounce",
        }
    }
}

impl From<&str> for AnimationKind {
    fn from(name: &str) -> Self {
        lenient(name, &Self::ALL, Self::as_str, "animation")
    }
}

impl From<String> for AnimationKind {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// HoverEffect
// ============================================================================

/// `:hover`-triggered visual transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum HoverEffect {
    #[default]
    None,
    Lift,
    Glow,
    Blur,
    Brightness,
    Scale,
    Tilt,
    Rainbow,
    CursorFollow,
    CursorGlow,
    CursorTilt,
}

impl HoverEffect {
    /// Every hover effect.
    pub const ALL: [Self; 11] = [
        Self::None,
        Self::Lift,
        Self::Glow,
        Self::Blur,
        Self::Brightness,
        Self::Scale,
        Self::Tilt,
        Self::Rainbow,
        Self::CursorFollow,
        Self::CursorGlow,
        Self::CursorTilt,
    ];

    /// The serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Lift => "lift",
            Self::Glow => "glow",
            Self::Blur => "blur",
            Self::Brightness => "brightness",
            Self::Scale => "scale",
            Self::Tilt => "tilt",
            Self::Rainbow => "rainbow",
            Self::CursorFollow => "cursor-follow",
            Self::CursorGlow => "cursor-glow",
            Self::CursorTilt => "cursor-tilt",
        }
    }

    /// Effects that read `--cursor-x` / `--cursor-y` set by script.
    pub fn tracks_cursor(self) -> bool {
        matches!(self, Self::CursorFollow | Self::CursorGlow | Self::CursorTilt)
    }
}

impl From<&str> for HoverEffect {
    fn from(name: &str) -> Self {
        lenient(name, &Self::ALL, Self::as_str, "hover effect")
    }
}

impl From<String> for HoverEffect {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for HoverEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Animation / Hover settings
// ============================================================================

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    /// Whether the animation is emitted at all.
    pub enabled: bool,

    /// Which keyframes to use.
    #[serde(rename = "type")]
    pub kind: AnimationKind,

    /// Loop duration in seconds (> 0).
    pub duration: f64,

    /// Start delay in seconds (>= 0).
    pub delay: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: AnimationKind::None,
            duration: 2.0,
            delay: 0.0,
        }
    }
}

impl AnimationConfig {
    /// Returns true when enabled with a kind other than `none`.
    pub fn is_active(&self) -> bool {
        self.enabled && self.kind != AnimationKind::None
    }
}

/// Hover settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct HoverConfig {
    /// Whether hover rules are emitted at all.
    pub enabled: bool,

    /// Which hover fragment to use.
    pub effect: HoverEffect,

    /// Effect strength, 0.1-2.0.
    pub intensity: f64,

    /// Transition duration in seconds, 0.1-1.0.
    pub duration: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            effect: HoverEffect::None,
            intensity: 1.0,
            duration: 0.3,
        }
    }
}

impl HoverConfig {
    /// Returns true when enabled with an effect other than `none`.
    pub fn is_active(&self) -> bool {
        self.enabled && self.effect != HoverEffect::None
    }
}

// ============================================================================
// StyleConfig
// ============================================================================

/// Complete style configuration for one generation call.
///
/// # JSON Format
///
/// ```json
/// {
///   "type": "card",
///   "blur": 15,
///   "opacity": 0.25,
///   "saturation": 180,
///   "borderRadius": 12,
///   "backgroundColor": "rgba(255, 255, 255, 0.25)",
///   "borderColor": "rgba(255, 255, 255, 0.3)",
///   "padding": 24,
///   "animation": { "enabled": false, "type": "none", "duration": 2, "delay": 0 },
///   "hover": { "enabled": false, "effect": "none", "intensity": 1, "duration": 0.3 }
/// }
/// ```
///
/// Missing fields take the defaults of the "Modern Glass" preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Structural template selector.
    #[serde(rename = "type")]
    pub component_type: ComponentType,

    /// Backdrop blur in px.
    pub blur: f64,

    /// Background opacity, 0-1. Multiplied with the background color's alpha.
    pub opacity: f64,

    /// Backdrop saturation in percent (100 = unchanged).
    pub saturation: f64,

    /// Corner radius in px.
    pub border_radius: f64,

    /// `rgb()`, `rgba()` or 6-digit hex.
    pub background_color: String,

    /// `rgb()`, `rgba()` or 6-digit hex.
    pub border_color: String,

    /// Inner padding in px.
    pub padding: f64,

    /// Looping animation.
    pub animation: AnimationConfig,

    /// Hover transition.
    pub hover: HoverConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            component_type: ComponentType::Card,
            blur: 15.0,
            opacity: 0.25,
            saturation: 180.0,
            border_radius: 12.0,
            background_color: "rgba(255, 255, 255, 0.25)".to_string(),
            border_color: "rgba(255, 255, 255, 0.3)".to_string(),
            padding: 24.0,
            animation: AnimationConfig::default(),
            hover: HoverConfig::default(),
        }
    }
}

impl StyleConfig {
    /// Creates the default ("Modern Glass") configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the component type.
    pub fn with_component_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    /// Sets blur (px) and saturation (%).
    pub fn with_blur(mut self, blur: f64, saturation: f64) -> Self {
        self.blur = blur;
        self.saturation = saturation;
        self
    }

    /// Sets the background opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets background and border colors.
    pub fn with_colors(mut self, background: impl Into<String>, border: impl Into<String>) -> Self {
        self.background_color = background.into();
        self.border_color = border.into();
        self
    }

    /// Sets corner radius and padding (px).
    pub fn with_geometry(mut self, border_radius: f64, padding: f64) -> Self {
        self.border_radius = border_radius;
        self.padding = padding;
        self
    }

    /// Enables an animation.
    pub fn with_animation(mut self, kind: AnimationKind, duration: f64, delay: f64) -> Self {
        self.animation = AnimationConfig {
            enabled: true,
            kind,
            duration,
            delay,
        };
        self
    }

    /// Enables a hover effect.
    pub fn with_hover(mut self, effect: HoverEffect, intensity: f64, duration: f64) -> Self {
        self.hover = HoverConfig {
            enabled: true,
            effect,
            intensity,
            duration,
        };
        self
    }

    /// Returns a copy with every numeric field forced into its documented
    /// range. The receiver is left untouched.
    ///
    /// NaN values are replaced by the field's default. A non-positive
    /// animation duration is replaced by the default duration.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let anim_defaults = AnimationConfig::default();
        let hover_defaults = HoverConfig::default();

        let mut out = self.clone();
        out.blur = clamp_field("blur", self.blur, 0.0, f64::MAX, defaults.blur);
        out.opacity = clamp_field("opacity", self.opacity, 0.0, 1.0, defaults.opacity);
        out.saturation =
            clamp_field("saturation", self.saturation, 0.0, f64::MAX, defaults.saturation);
        out.border_radius =
            clamp_field("borderRadius", self.border_radius, 0.0, f64::MAX, defaults.border_radius);
        out.padding = clamp_field("padding", self.padding, 0.0, f64::MAX, defaults.padding);

        let duration = self.animation.duration;
        out.animation.duration = if duration.is_nan() || duration <= 0.0 {
            tracing::trace!(value = duration, "animation.duration replaced by default");
            anim_defaults.duration
        } else {
            duration
        };
        out.animation.delay = clamp_field(
            "animation.delay",
            self.animation.delay,
            0.0,
            f64::MAX,
            anim_defaults.delay,
        );

        out.hover.intensity = clamp_field(
            "hover.intensity",
            self.hover.intensity,
            0.1,
            2.0,
            hover_defaults.intensity,
        );
        out.hover.duration = clamp_field(
            "hover.duration",
            self.hover.duration,
            0.1,
            1.0,
            hover_defaults.duration,
        );
        out
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from JSON.
    ///
    /// Accepts both the nested shape (`animation` / `hover` objects) and the
    /// editor's older flat shape (`animationEnabled`, `hoverEffect`, ...).
    /// Nested objects win when both are present.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        // A null nested object counts as absent.
        if let Some(object) = value.as_object_mut() {
            object.retain(|key, v| !(v.is_null() && (key == "animation" || key == "hover")));
        }
        let has_animation = value.get("animation").is_some();
        let has_hover = value.get("hover").is_some();

        let mut config: Self = serde_json::from_value(value.clone())?;
        let flat: FlatFields = serde_json::from_value(value)?;
        if !has_animation {
            flat.apply_animation(&mut config.animation);
        }
        if !has_hover {
            flat.apply_hover(&mut config.hover);
        }
        Ok(config)
    }

    /// Loads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> GlassResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| GlassError::io(path, e))?;
        Ok(Self::from_json(&json)?)
    }

    /// Saves the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> GlassResult<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| GlassError::io(path, e))
    }
}

fn clamp_field(name: &str, value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_nan() {
        tracing::trace!(field = name, "NaN replaced by default");
        return default;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::trace!(field = name, value, clamped, "value clamped into range");
    }
    clamped
}

/// The editor's flat animation/hover fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FlatFields {
    animation_enabled: Option<bool>,
    animation_type: Option<AnimationKind>,
    animation_duration: Option<f64>,
    animation_delay: Option<f64>,
    hover_enabled: Option<bool>,
    hover_effect: Option<HoverEffect>,
    hover_intensity: Option<f64>,
    hover_duration: Option<f64>,
}

impl FlatFields {
    fn apply_animation(&self, animation: &mut AnimationConfig) {
        if let Some(enabled) = self.animation_enabled {
            animation.enabled = enabled;
        }
        if let Some(kind) = self.animation_type {
            animation.kind = kind;
        }
        if let Some(duration) = self.animation_duration {
            animation.duration = duration;
        }
        if let Some(delay) = self.animation_delay {
            animation.delay = delay;
        }
    }

    fn apply_hover(&self, hover: &mut HoverConfig) {
        if let Some(enabled) = self.hover_enabled {
            hover.enabled = enabled;
        }
        if let Some(effect) = self.hover_effect {
            hover.effect = effect;
        }
        if let Some(intensity) = self.hover_intensity {
            hover.intensity = intensity;
        }
        if let Some(duration) = self.hover_duration {
            hover.duration = duration;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
