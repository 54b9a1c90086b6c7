//! Hover effect fragments.
//!
//! Each entry pairs a rules template (the resting transition plus the
//! `:hover` state) with the keyframes it needs, if any. Intensity scales
//! every distance, angle and alpha; alphas are capped at 1.

use super::{CssEffect, EffectTemplate, StyleContext, Vars};
use crate::config::HoverEffect;
use crate::units::css_number;

/// Rules plus optional keyframes for one hover effect.
pub struct HoverTemplate {
    pub rules: EffectTemplate,
    pub keyframes: Option<EffectTemplate>,
}

static LIFT: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
}

{{selector}}:hover {
  transform: translateY(-{{offset}}px);
  box-shadow:
    0 {{shadow_y}}px {{shadow_blur}}px 0 rgba(31, 38, 135, 0.37),
    inset 0 0 0 1px rgba(255, 255, 255, 0.1);
}"#,
        vars: |ctx| {
            let i = ctx.hover.intensity;
            vec![
                ("offset", css_number(i * 8.0)),
                ("shadow_y", css_number(8.0 + i * 12.0)),
                ("shadow_blur", css_number(32.0 + i * 20.0)),
            ]
        },
    },
    keyframes: None,
};

static GLOW: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
}

{{selector}}:hover {
  box-shadow:
    0 8px 32px 0 rgba(31, 38, 135, 0.37),
    inset 0 0 0 1px rgba(255, 255, 255, 0.1),
    0 0 {{spread}}px rgba(255, 255, 255, {{alpha}});
}"#,
        vars: glow_vars,
    },
    keyframes: None,
};

static BLUR: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
}

{{selector}}:hover {
  backdrop-filter: {{filter}};
  -webkit-backdrop-filter: {{filter}};
}"#,
        vars: |ctx| vec![("filter", ctx.backdrop_filter(ctx.blur * ctx.hover.intensity))],
    },
    keyframes: None,
};

static BRIGHTNESS: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
}

{{selector}}:hover {
  background: {{background}};
  border-color: {{border}};
}"#,
        vars: |ctx| {
            let i = ctx.hover.intensity;
            vec![
                ("background", ctx.background_at(ctx.opacity * i)),
                ("border", ctx.border.rgba_with_alpha(i * 0.5)),
            ]
        },
    },
    keyframes: None,
};

static SCALE: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
}

{{selector}}:hover {
  transform: scale({{intensity}});
}"#,
        vars: |_| Vec::new(),
    },
    keyframes: None,
};

static TILT: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
  transform-style: preserve-3d;
}

{{selector}}:hover {
  transform: perspective(1000px) rotateX({{angle}}deg) rotateY({{angle}}deg);
}"#,
        vars: |ctx| vec![("angle", css_number(ctx.hover.intensity * 5.0))],
    },
    keyframes: None,
};

static RAINBOW: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
}

{{selector}}:hover {
  background: linear-gradient(
    45deg,
    rgba(255, 0, 150, {{alpha}}) 0%,
    rgba(0, 204, 255, {{alpha}}) 25%,
    rgba(255, 204, 0, {{alpha}}) 50%,
    rgba(255, 0, 150, {{alpha}}) 75%,
    rgba(0, 204, 255, {{alpha}}) 100%
  );
  background-size: 400% 400%;
  animation: liquid-glass-rainbow-shift {{cycle}}s ease infinite;
}"#,
        vars: rainbow_vars,
    },
    keyframes: Some(EffectTemplate {
        css: r#"@keyframes liquid-glass-rainbow-shift {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}"#,
        vars: rainbow_vars,
    }),
};

static CURSOR_FOLLOW: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
  position: relative;
  overflow: hidden;
}

{{selector}}::after {
  content: '';
  position: absolute;
  top: var(--cursor-y, 50%);
  left: var(--cursor-x, 50%);
  width: {{size}}px;
  height: {{size}}px;
  background: radial-gradient(
    circle,
    rgba(255, 255, 255, {{inner}}) 0%,
    rgba(255, 255, 255, {{outer}}) 50%,
    transparent 100%
  );
  transform: translate(-50%, -50%);
  border-radius: 50%;
  pointer-events: none;
  opacity: 0;
  transition: opacity {{hover_duration}}s ease;
}

{{selector}}:hover::after {
  opacity: 1;
}"#,
        vars: |ctx| {
            let i = ctx.hover.intensity;
            vec![
                ("size", css_number(i * 100.0)),
                ("inner", css_number((i * 0.3).min(1.0))),
                ("outer", css_number((i * 0.1).min(1.0))),
            ]
        },
    },
    keyframes: None,
};

static CURSOR_GLOW: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
  position: relative;
  overflow: hidden;
}

{{selector}}::before {
  content: '';
  position: absolute;
  top: var(--cursor-y, 50%);
  left: var(--cursor-x, 50%);
  width: {{size}}px;
  height: {{size}}px;
  background: radial-gradient(
    circle,
    rgba(255, 255, 255, {{core}}) 0%,
    rgba(100, 200, 255, {{middle}}) 30%,
    rgba(255, 100, 200, {{edge}}) 60%,
    transparent 100%
  );
  transform: translate(-50%, -50%);
  border-radius: 50%;
  pointer-events: none;
  opacity: 0;
  transition: opacity {{hover_duration}}s ease;
  filter: blur({{soften}}px);
  animation: liquid-glass-cursor-glow {{cycle}}s ease-in-out infinite;
}

{{selector}}:hover::before {
  opacity: 1;
}"#,
        vars: cursor_glow_vars,
    },
    keyframes: Some(EffectTemplate {
        css: r#"@keyframes liquid-glass-cursor-glow {
  0%, 100% {
    transform: translate(-50%, -50%) scale(1);
    filter: blur({{soften}}px) brightness(1);
  }
  50% {
    transform: translate(-50%, -50%) scale(1.1);
    filter: blur({{soften_peak}}px) brightness(1.3);
  }
}"#,
        vars: cursor_glow_vars,
    }),
};

static CURSOR_TILT: HoverTemplate = HoverTemplate {
    rules: EffectTemplate {
        css: r#"{{selector}} {
  {{transition}}
  transform-style: preserve-3d;
  perspective: 1000px;
}

{{selector}}:hover {
  transform:
    perspective(1000px)
    rotateX(calc((var(--cursor-y, 50) - 50) * {{factor}}deg))
    rotateY(calc((var(--cursor-x, 50) - 50) * {{factor}}deg))
    translateZ({{depth}}px);
}"#,
        vars: |ctx| {
            let i = ctx.hover.intensity;
            vec![
                ("factor", css_number(i * 0.3)),
                ("depth", css_number(i * 10.0)),
            ]
        },
    },
    keyframes: None,
};

fn glow_vars(ctx: &StyleContext) -> Vars {
    let i = ctx.hover.intensity;
    vec![
        ("spread", css_number(i * 20.0)),
        ("alpha", css_number((i * 0.4).min(1.0))),
    ]
}

fn rainbow_vars(ctx: &StyleContext) -> Vars {
    vec![
        ("alpha", css_number((ctx.opacity * ctx.hover.intensity * 0.3).min(1.0))),
        ("cycle", css_number(ctx.hover.duration * 2.0)),
    ]
}

fn cursor_glow_vars(ctx: &StyleContext) -> Vars {
    let i = ctx.hover.intensity;
    vec![
        ("size", css_number(i * 150.0)),
        ("core", css_number((i * 0.4).min(1.0))),
        ("middle", css_number((i * 0.2).min(1.0))),
        ("edge", css_number((i * 0.1).min(1.0))),
        ("soften", css_number(i * 2.0)),
        ("soften_peak", css_number(i * 3.0)),
        ("cycle", css_number(ctx.hover.duration * 4.0)),
    ]
}

impl HoverEffect {
    /// Table entry for this effect. `None` has no entry.
    pub fn template(self) -> Option<&'static HoverTemplate> {
        match self {
            Self::None => None,
            Self::Lift => Some(&LIFT),
            Self::Glow => Some(&GLOW),
            Self::Blur => Some(&BLUR),
            Self::Brightness => Some(&BRIGHTNESS),
            Self::Scale => Some(&SCALE),
            Self::Tilt => Some(&TILT),
            Self::Rainbow => Some(&RAINBOW),
            Self::CursorFollow => Some(&CURSOR_FOLLOW),
            Self::CursorGlow => Some(&CURSOR_GLOW),
            Self::CursorTilt => Some(&CURSOR_TILT),
        }
    }
}

impl CssEffect for HoverEffect {
    fn rules(&self, ctx: &StyleContext, selector: &str) -> String {
        self.template()
            .map(|t| t.rules.render(ctx, selector))
            .unwrap_or_default()
    }

    fn keyframes(&self, ctx: &StyleContext) -> String {
        self.template()
            .and_then(|t| t.keyframes.as_ref())
            .map(|k| k.render(ctx, ""))
            .unwrap_or_default()
    }
}
