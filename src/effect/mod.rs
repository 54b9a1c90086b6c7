//! Table-driven animation and hover fragments.
//!
//! Every [`AnimationKind`] and [`HoverEffect`] maps to one fixed CSS template
//! with `{{placeholder}}` markers. A template is filled against a
//! [`StyleContext`], the clamped and normalized view of a [`StyleConfig`]
//! that all renderers share.
//!
//! # Architecture
//!
//! Both tables implement [`CssEffect`], which separates:
//! - the rules applied to the component selector
//! - the `@keyframes` blocks those rules reference
//!
//! so a renderer can place the two wherever its output format needs them.
//! Tailwind output, for instance, scopes the rules under a utility class.

pub mod animation;
pub mod hover;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::GlassColor;
use crate::config::{AnimationConfig, AnimationKind, ComponentType, HoverConfig, HoverEffect, StyleConfig};
use crate::units::{css_number, percent, px};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Root selector used by the standalone CSS output.
pub const ROOT_SELECTOR: &str = ".liquid-glass";

// ============================================================================
// Style Context
// ============================================================================

/// Emission-time view of a config: numbers clamped, colors normalized.
///
/// Built once per generation call. Nothing here writes back to the config.
#[derive(Debug, Clone)]
pub struct StyleContext {
    pub component_type: ComponentType,
    pub blur: f64,
    pub opacity: f64,
    pub saturation: f64,
    pub border_radius: f64,
    pub padding: f64,
    /// Background color with its own alpha.
    pub background: GlassColor,
    /// Border color with its own alpha.
    pub border: GlassColor,
    pub animation: AnimationConfig,
    pub hover: HoverConfig,
}

impl StyleContext {
    /// Clamps and normalizes a config.
    pub fn new(config: &StyleConfig) -> Self {
        let config = config.clamped();
        Self {
            component_type: config.component_type,
            blur: config.blur,
            opacity: config.opacity,
            saturation: config.saturation,
            border_radius: config.border_radius,
            padding: config.padding,
            background: GlassColor::normalize(&config.background_color),
            border: GlassColor::normalize(&config.border_color),
            animation: config.animation,
            hover: config.hover,
        }
    }

    /// The active animation kind, or `None` when disabled.
    pub fn active_animation(&self) -> Option<AnimationKind> {
        self.animation.is_active().then_some(self.animation.kind)
    }

    /// The active hover effect, or `None` when disabled.
    pub fn active_hover(&self) -> Option<HoverEffect> {
        self.hover.is_active().then_some(self.hover.effect)
    }

    /// Background at the configured opacity.
    pub fn background_css(&self) -> String {
        self.background.composite(self.opacity)
    }

    /// Background at an explicit opacity, still scaled by the color's own alpha.
    pub fn background_at(&self, opacity: f64) -> String {
        self.background.composite(opacity.clamp(0.0, 1.0))
    }

    /// Normalized border color.
    pub fn border_css(&self) -> String {
        self.border.to_css()
    }

    /// `blur(15px) saturate(180%)`
    pub fn backdrop_filter(&self, blur: f64) -> String {
        format!("blur({}) saturate({})", px(blur), percent(self.saturation))
    }

    /// Placeholders every template may use.
    fn common_vars(&self, selector: &str) -> Vars {
        vec![
            ("selector", selector.to_string()),
            ("transition", format!("transition: all {}s ease;", css_number(self.hover.duration))),
            ("intensity", css_number(self.hover.intensity)),
            ("hover_duration", css_number(self.hover.duration)),
            ("opacity", css_number(self.opacity)),
        ]
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Placeholder values for one template.
pub type Vars = Vec<(&'static str, String)>;

/// One table entry: a CSS template and the values it is filled with.
pub struct EffectTemplate {
    /// CSS with `{{name}}` placeholders.
    pub css: &'static str,
    /// Computes the entry-specific placeholders.
    pub vars: fn(&StyleContext) -> Vars,
}

impl EffectTemplate {
    /// Fills the template. `selector` replaces `{{selector}}`.
    pub fn render(&self, ctx: &StyleContext, selector: &str) -> String {
        let mut vars = ctx.common_vars(selector);
        vars.extend((self.vars)(ctx));
        fill_template(self.css, &vars)
    }
}

/// Replaces every `{{name}}` with its value. Unknown names become empty.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match vars.iter().find(|(k, _)| *k == name) {
                Some((_, value)) => value.clone(),
                None => {
                    tracing::warn!("Template placeholder {name:?} has no value");
                    String::new()
                }
            }
        })
        .into_owned()
}

fn no_vars(_: &StyleContext) -> Vars {
    Vec::new()
}

// ============================================================================
// Effect Trait
// ============================================================================

/// A named effect that knows how to emit its CSS.
pub trait CssEffect {
    /// Rules that apply the effect to `selector`.
    fn rules(&self, ctx: &StyleContext, selector: &str) -> String;

    /// `@keyframes` blocks the rules reference. Empty when none are needed.
    fn keyframes(&self, ctx: &StyleContext) -> String;

    /// Rules followed by keyframes.
    fn css(&self, ctx: &StyleContext, selector: &str) -> String {
        join_blocks([self.rules(ctx, selector), self.keyframes(ctx)])
    }
}

/// Joins non-empty CSS blocks with a blank line.
pub fn join_blocks(blocks: impl IntoIterator<Item = String>) -> String {
    blocks
        .into_iter()
        .filter(|b| !b.trim().is_empty())
        .map(|b| b.trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
