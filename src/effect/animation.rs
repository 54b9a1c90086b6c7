//! Looping animation keyframes.

use super::{CssEffect, EffectTemplate, StyleContext, Vars, fill_template, join_blocks, no_vars};
use crate::config::AnimationKind;
use crate::units::css_number;

static FLOAT: EffectTemplate = EffectTemplate {
    css: r#"@keyframes liquid-glass-float {
  0%, 100% { transform: translateY(0px); }
  50% { transform: translateY(-10px); }
}"#,
    vars: no_vars,
};

static GLOW: EffectTemplate = EffectTemplate {
    css: r#"@keyframes liquid-glass-glow {
  0%, 100% {
    box-shadow:
      0 8px 32px 0 rgba(31, 38, 135, 0.37),
      inset 0 0 0 1px rgba(255, 255, 255, 0.1);
  }
  50% {
    box-shadow:
      0 8px 32px 0 rgba(31, 38, 135, 0.37),
      inset 0 0 0 1px rgba(255, 255, 255, 0.1),
      0 0 20px rgba(255, 255, 255, 0.3);
  }
}"#,
    vars: no_vars,
};

static PULSE: EffectTemplate = EffectTemplate {
    css: r#"@keyframes liquid-glass-pulse {
  0%, 100% { transform: scale(1); opacity: {{opacity}}; }
  50% { transform: scale(1.05); opacity: {{peak_opacity}}; }
}"#,
    vars: pulse_vars,
};

static SHIMMER: EffectTemplate = EffectTemplate {
    css: r#"@keyframes liquid-glass-shimmer {
  0% { background-position: -200% 0; }
  100% { background-position: 200% 0; }
}"#,
    vars: no_vars,
};

static BOUNCE: EffectTemplate = EffectTemplate {
    css: r#"@keyframes liquid-glass-bounce {
  0%, 20%, 50%, 80%, 100% { transform: translateY(0); }
  40% { transform: translateY(-10px); }
  60% { transform: translateY(-5px); }
}"#,
    vars: no_vars,
};

/// Shimmer sweeps a lighter band of the background color across the surface.
const SHIMMER_BACKGROUND: &str = r#"  background: linear-gradient(
    90deg,
    {{base}} 25%,
    {{highlight}} 50%,
    {{base}} 75%
  );
  background-size: 200% 100%;"#;

fn pulse_vars(ctx: &StyleContext) -> Vars {
    vec![("peak_opacity", css_number((ctx.opacity + 0.1).min(1.0)))]
}

impl AnimationKind {
    /// Keyframes template for this kind. `None` has no table entry.
    pub fn template(self) -> Option<&'static EffectTemplate> {
        match self {
            Self::None => None,
            Self::Float => Some(&FLOAT),
            Self::Glow => Some(&GLOW),
            Self::Pulse => Some(&PULSE),
            Self::Shimmer => Some(&SHIMMER),
            Self::Bounce => Some(&BOUNCE),
        }
    }

    /// `liquid-glass-float`
    pub fn keyframes_name(self) -> String {
        format!("liquid-glass-{}", self.as_str())
    }

    /// The `animation:` shorthand for the configured timing.
    pub fn animation_property(self, ctx: &StyleContext) -> String {
        format!(
            "animation: {} {}s ease-in-out {}s infinite;",
            self.keyframes_name(),
            css_number(ctx.animation.duration),
            css_number(ctx.animation.delay)
        )
    }
}

impl CssEffect for AnimationKind {
    fn rules(&self, ctx: &StyleContext, selector: &str) -> String {
        if *self == Self::None {
            return String::new();
        }
        let mut body = format!("  {}", self.animation_property(ctx));
        if *self == Self::Shimmer {
            let vars = vec![
                ("base", ctx.background_css()),
                ("highlight", ctx.background_at(ctx.opacity + 0.1)),
            ];
            body.push('\n');
            body.push_str(&fill_template(SHIMMER_BACKGROUND, &vars));
        }
        format!("{selector} {{\n{body}\n}}")
    }

    fn keyframes(&self, ctx: &StyleContext) -> String {
        self.template()
            .map(|t| t.render(ctx, ""))
            .unwrap_or_default()
    }

    /// Keyframes come before the rule that uses them.
    fn css(&self, ctx: &StyleContext, selector: &str) -> String {
        join_blocks([self.keyframes(ctx), self.rules(ctx, selector)])
    }
}
