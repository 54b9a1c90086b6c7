//! Tailwind CSS utility-class output.
//!
//! Continuous values are quantized onto fixed ladders. A value is rounded to
//! two decimals, then maps to the first step whose threshold it does not
//! exceed (`value <= threshold`), and
//! anything past the last threshold takes the ladder's final token. Rounding
//! to the nearest token is never used, so `0.11` opacity lands on
//! `bg-opacity-20`, not `bg-opacity-10`.
//!
//! Effects without a utility equivalent (tilt, rainbow and cursor hovers,
//! float/glow/shimmer animations) go into a `<style>` block that is only
//! emitted when one of them is active.

use super::{FormatRenderer, OutputFormat};
use crate::config::{AnimationKind, HoverEffect};
use crate::effect::{CssEffect, StyleContext, join_blocks};
use crate::template::{ComponentTemplate, Dialect};
use crate::units::css_number;

/// One quantization ladder: `(threshold, token)` pairs in ascending order
/// plus the token used above the last threshold.
#[derive(Debug, Clone, Copy)]
pub struct Ladder {
    pub steps: &'static [(f64, &'static str)],
    pub overflow: &'static str,
}

impl Ladder {
    /// Returns the token for `value`.
    pub fn token(&self, value: f64) -> &'static str {
        let value = (value * 100.0).round() / 100.0;
        self.steps
            .iter()
            .find(|(threshold, _)| value <= *threshold)
            .map_or(self.overflow, |(_, token)| token)
    }
}

/// Backdrop blur in px.
pub const BLUR: Ladder = Ladder {
    steps: &[
        (0.0, "none"),
        (4.0, "sm"),
        (12.0, "md"),
        (16.0, "lg"),
        (24.0, "xl"),
        (40.0, "2xl"),
    ],
    overflow: "3xl",
};

/// Opacity in percent.
pub const OPACITY: Ladder = Ladder {
    steps: &[
        (5.0, "5"),
        (10.0, "10"),
        (20.0, "20"),
        (25.0, "25"),
        (30.0, "30"),
        (40.0, "40"),
        (50.0, "50"),
        (60.0, "60"),
        (70.0, "70"),
        (75.0, "75"),
        (80.0, "80"),
        (90.0, "90"),
        (95.0, "95"),
    ],
    overflow: "100",
};

/// Backdrop saturation in percent.
pub const SATURATE: Ladder = Ladder {
    steps: &[(0.0, "0"), (50.0, "50"), (100.0, "100"), (150.0, "150")],
    overflow: "200",
};

/// Corner radius in px.
pub const RADIUS: Ladder = Ladder {
    steps: &[
        (0.0, "rounded-none"),
        (2.0, "rounded-sm"),
        (6.0, "rounded-md"),
        (8.0, "rounded-lg"),
        (12.0, "rounded-xl"),
        (16.0, "rounded-2xl"),
        (24.0, "rounded-3xl"),
    ],
    overflow: "rounded-full",
};

/// Padding in px.
pub const PADDING: Ladder = Ladder {
    steps: &[
        (0.0, "p-0"),
        (4.0, "p-1"),
        (8.0, "p-2"),
        (12.0, "p-3"),
        (16.0, "p-4"),
        (20.0, "p-5"),
        (24.0, "p-6"),
        (32.0, "p-8"),
        (40.0, "p-10"),
        (48.0, "p-12"),
        (64.0, "p-16"),
        (80.0, "p-20"),
    ],
    overflow: "p-24",
};

/// Transition duration in ms.
pub const DURATION: Ladder = Ladder {
    steps: &[
        (75.0, "75"),
        (100.0, "100"),
        (150.0, "150"),
        (200.0, "200"),
        (300.0, "300"),
        (500.0, "500"),
        (700.0, "700"),
    ],
    overflow: "1000",
};

/// Hover scale, intensity x 100.
pub const SCALE: Ladder = Ladder {
    steps: &[
        (90.0, "90"),
        (95.0, "95"),
        (100.0, "100"),
        (105.0, "105"),
        (110.0, "110"),
        (125.0, "125"),
    ],
    overflow: "150",
};

/// Lift distance in px, in Tailwind's 4px spacing units.
pub const LIFT: Ladder = Ladder {
    steps: &[(4.0, "1"), (8.0, "2"), (12.0, "3")],
    overflow: "4",
};

/// `bg-opacity-*` token for a 0-1 opacity.
pub fn opacity_token(opacity: f64) -> &'static str {
    OPACITY.token(opacity * 100.0)
}

/// Renders [`OutputFormat::Tailwind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindRenderer;

impl FormatRenderer for TailwindRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Tailwind
    }

    fn render(&self, ctx: &StyleContext, template: &ComponentTemplate) -> String {
        let classes = utility_classes(ctx, template).join(" ");
        let markup = template.markup(Dialect::Html, &format!("class=\"{classes}\""), 0);
        let custom = custom_css(ctx, template);

        let mut out = format!(
            "<!-- Liquid Glass {} (Tailwind CSS) -->\n{markup}",
            template.display_name()
        );
        if !custom.is_empty() {
            out.push_str(&format!("\n\n<style>\n{custom}\n</style>"));
        }
        out
    }
}

/// Utility classes for the root element, in a stable order.
pub fn utility_classes(ctx: &StyleContext, template: &ComponentTemplate) -> Vec<String> {
    let mut classes = vec![
        template.class_name.to_string(),
        "relative".to_string(),
        "overflow-hidden".to_string(),
        format!("backdrop-blur-{}", BLUR.token(ctx.blur)),
        format!("backdrop-saturate-{}", SATURATE.token(ctx.saturation)),
        background_class(ctx),
        format!("bg-opacity-{}", opacity_token(ctx.opacity)),
        "border".to_string(),
        format!("border-[{}]", ctx.border.to_compact_css()),
        RADIUS.token(ctx.border_radius).to_string(),
        PADDING.token(ctx.padding).to_string(),
        "shadow-[0_8px_32px_0_rgba(31,38,135,0.37)]".to_string(),
    ];

    if let Some(kind) = ctx.active_animation() {
        classes.push(animation_class(kind));
    }

    if let Some(effect) = ctx.active_hover() {
        classes.push("transition-all".to_string());
        classes.push(format!("duration-{}", DURATION.token(ctx.hover.duration * 1000.0)));
        classes.extend(hover_classes(ctx, effect));
    }

    classes
}

/// Background color utility. A translucent color keeps its own alpha and
/// multiplies it with the `bg-opacity-*` variable, the same product the CSS
/// output composites.
fn background_class(ctx: &StyleContext) -> String {
    let (r, g, b) = ctx.background.rgb_tuple();
    if ctx.background.alpha >= 1.0 {
        format!("bg-[rgb({r},{g},{b})]")
    } else {
        format!(
            "bg-[color:rgb({r}_{g}_{b}/calc({}*var(--tw-bg-opacity,1)))]",
            css_number(ctx.background.alpha)
        )
    }
}

fn animation_class(kind: AnimationKind) -> String {
    match kind {
        AnimationKind::Pulse => "animate-pulse".to_string(),
        AnimationKind::Bounce => "animate-bounce".to_string(),
        other => format!("animate-{}", other.keyframes_name()),
    }
}

/// Hover utilities. Empty for effects handled by custom CSS.
fn hover_classes(ctx: &StyleContext, effect: HoverEffect) -> Vec<String> {
    let i = ctx.hover.intensity;
    match effect {
        HoverEffect::Lift => vec![
            format!("hover:-translate-y-{}", LIFT.token(i * 8.0)),
            "hover:shadow-2xl".to_string(),
        ],
        HoverEffect::Glow => vec![format!(
            "hover:shadow-[0_0_{}px_rgba(255,255,255,{})]",
            css_number(i * 20.0),
            css_number((i * 0.4).min(1.0))
        )],
        HoverEffect::Blur => vec![format!("hover:backdrop-blur-{}", BLUR.token(ctx.blur * i))],
        HoverEffect::Brightness => vec![format!(
            "hover:bg-opacity-{}",
            opacity_token((ctx.opacity * i).min(1.0))
        )],
        HoverEffect::Scale => vec![format!("hover:scale-{}", SCALE.token(i * 100.0))],
        _ => Vec::new(),
    }
}

fn needs_custom_animation(kind: AnimationKind) -> bool {
    matches!(kind, AnimationKind::Float | AnimationKind::Glow | AnimationKind::Shimmer)
}

fn needs_custom_hover(effect: HoverEffect) -> bool {
    matches!(effect, HoverEffect::Tilt | HoverEffect::Rainbow) || effect.tracks_cursor()
}

/// CSS for effects with no utility equivalent. Empty when none are active.
pub fn custom_css(ctx: &StyleContext, template: &ComponentTemplate) -> String {
    let animation = ctx
        .active_animation()
        .filter(|kind| needs_custom_animation(*kind))
        .map(|kind| kind.css(ctx, &format!(".{}", animation_class(kind))))
        .unwrap_or_default();

    let hover = ctx
        .active_hover()
        .filter(|effect| needs_custom_hover(*effect))
        .map(|effect| effect.css(ctx, &format!(".{}", template.class_name)))
        .unwrap_or_default();

    join_blocks([animation, hover])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentType, StyleConfig};

    fn render(config: &StyleConfig) -> String {
        let ctx = StyleContext::new(config);
        TailwindRenderer.render(&ctx, ComponentTemplate::for_type(ctx.component_type))
    }

    #[test]
    fn opacity_boundaries_follow_thresholds() {
        assert_eq!(opacity_token(0.0), "5");
        assert_eq!(opacity_token(0.05), "5");
        assert_eq!(opacity_token(0.06), "10");
        assert_eq!(opacity_token(0.10), "10");
        assert_eq!(opacity_token(0.11), "20");
        assert_eq!(opacity_token(0.25), "25");
        assert_eq!(opacity_token(0.96), "100");
    }

    #[test]
    fn float_noise_does_not_cross_a_threshold() {
        assert_eq!(SCALE.token(1.05 * 100.0), "105");
        assert_eq!(DURATION.token(0.3 * 1000.0), "300");
        assert_eq!(opacity_token(0.1 + 0.2), "30");
    }

    #[test]
    fn blur_ladder() {
        assert_eq!(BLUR.token(0.0), "none");
        assert_eq!(BLUR.token(4.0), "sm");
        assert_eq!(BLUR.token(4.5), "md");
        assert_eq!(BLUR.token(15.0), "lg");
        assert_eq!(BLUR.token(41.0), "3xl");
    }

    #[test]
    fn radius_and_padding_ladders() {
        assert_eq!(RADIUS.token(0.0), "rounded-none");
        assert_eq!(RADIUS.token(12.0), "rounded-xl");
        assert_eq!(RADIUS.token(100.0), "rounded-full");
        assert_eq!(PADDING.token(24.0), "p-6");
        assert_eq!(PADDING.token(25.0), "p-8");
        assert_eq!(PADDING.token(500.0), "p-24");
    }

    #[test]
    fn default_config_classes() {
        let html = render(&StyleConfig::default());
        assert!(html.starts_with("<!-- Liquid Glass Card (Tailwind CSS) -->"));
        for class in [
            "liquid-glass-card",
            "backdrop-blur-lg",
            "backdrop-saturate-200",
            "bg-opacity-25",
            "rounded-xl",
            "p-6",
            "border-[rgba(255,255,255,0.3)]",
        ] {
            assert!(html.contains(class), "{class}");
        }
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn translucent_background_keeps_its_alpha() {
        let config = StyleConfig::new()
            .with_colors("rgba(255,255,255,0.25)", "rgba(255,255,255,0.3)")
            .with_opacity(1.0);
        let classes = utility_classes(
            &StyleContext::new(&config),
            ComponentTemplate::for_type(ComponentType::Card),
        );
        let translucent = "bg-[color:rgb(255_255_255/calc(0.25*var(--tw-bg-opacity,1)))]";
        assert!(classes.contains(&translucent.to_string()));
        assert!(classes.contains(&"bg-opacity-100".to_string()));
        assert!(!classes.contains(&"bg-[rgb(255,255,255)]".to_string()));

        let opaque = StyleConfig::new().with_colors("rgb(10, 20, 30)", "rgb(0, 0, 0)");
        let classes = utility_classes(
            &StyleContext::new(&opaque),
            ComponentTemplate::for_type(ComponentType::Card),
        );
        assert!(classes.contains(&"bg-[rgb(10,20,30)]".to_string()));
    }

    #[test]
    fn builtin_animations_use_builtin_classes() {
        let html = render(&StyleConfig::new().with_animation(AnimationKind::Pulse, 2.0, 0.0));
        assert!(html.contains("animate-pulse"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn custom_animations_emit_keyframes() {
        let html = render(&StyleConfig::new().with_animation(AnimationKind::Glow, 2.0, 0.0));
        assert!(html.contains("animate-liquid-glass-glow"));
        assert!(html.contains("@keyframes liquid-glass-glow"));
        assert!(html.contains(".animate-liquid-glass-glow {\n  animation: liquid-glass-glow 2s"));
    }

    #[test]
    fn hover_utilities() {
        let html = render(&StyleConfig::new().with_hover(HoverEffect::Lift, 1.0, 0.3));
        assert!(html.contains("transition-all duration-300 hover:-translate-y-2 hover:shadow-2xl"));

        let html = render(&StyleConfig::new().with_hover(HoverEffect::Scale, 1.05, 0.3));
        assert!(html.contains("hover:scale-105"));

        let html = render(&StyleConfig::new().with_hover(HoverEffect::Brightness, 2.0, 0.3));
        assert!(html.contains("hover:bg-opacity-50"));
    }

    #[test]
    fn rainbow_hover_is_scoped_to_component_class() {
        let html = render(
            &StyleConfig::new()
                .with_component_type(ComponentType::Button)
                .with_hover(HoverEffect::Rainbow, 1.0, 0.3),
        );
        assert!(html.contains("<style>"));
        assert!(html.contains(".liquid-glass-button:hover {"));
        assert!(html.contains("@keyframes liquid-glass-rainbow-shift"));
    }
}
