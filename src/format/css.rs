//! Plain CSS output.
//!
//! The stylesheet is assembled from four blocks, in order:
//! 1. the base glass surface under `.liquid-glass`
//! 2. the component's layout rules
//! 3. the animation (when active)
//! 4. the hover effect (when active)
//!
//! Every other format that embeds CSS calls [`stylesheet`].

use super::{FormatRenderer, OutputFormat};
use crate::effect::{CssEffect, ROOT_SELECTOR, StyleContext, join_blocks};
use crate::template::ComponentTemplate;
use crate::units::px;

const SHADOW: &str = "0 8px 32px 0 rgba(31, 38, 135, 0.37),\n    inset 0 0 0 1px rgba(255, 255, 255, 0.1)";

/// Renders [`OutputFormat::Css`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CssRenderer;

impl FormatRenderer for CssRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Css
    }

    fn render(&self, ctx: &StyleContext, template: &ComponentTemplate) -> String {
        stylesheet(ctx, template)
    }
}

/// The complete stylesheet for a component.
pub fn stylesheet(ctx: &StyleContext, template: &ComponentTemplate) -> String {
    let hover = ctx.active_hover();
    join_blocks([
        base_rules(ctx),
        template.stylesheet(hover.is_some()),
        ctx.active_animation()
            .map(|kind| kind.css(ctx, ROOT_SELECTOR))
            .unwrap_or_default(),
        hover.map(|effect| effect.css(ctx, ROOT_SELECTOR)).unwrap_or_default(),
    ])
}

/// `.liquid-glass` surface plus its highlight overlay.
pub fn base_rules(ctx: &StyleContext) -> String {
    let mut declarations = vec!["position: relative;".to_string()];
    declarations.extend(backdrop_declarations(ctx));
    declarations.extend(surface_declarations(ctx));
    declarations.push(format!("box-shadow:\n    {SHADOW};"));
    declarations.push("overflow: hidden;".to_string());

    format!("{}\n\n{}", rule(ROOT_SELECTOR, &declarations), overlay_rule())
}

/// `backdrop-filter` with its WebKit twin.
pub fn backdrop_declarations(ctx: &StyleContext) -> [String; 2] {
    let filter = ctx.backdrop_filter(ctx.blur);
    [
        format!("backdrop-filter: {filter};"),
        format!("-webkit-backdrop-filter: {filter};"),
    ]
}

/// Background, border, radius and padding.
pub fn surface_declarations(ctx: &StyleContext) -> [String; 4] {
    [
        format!("background: {};", ctx.background_css()),
        format!("border: 1px solid {};", ctx.border_css()),
        format!("border-radius: {};", px(ctx.border_radius)),
        format!("padding: {};", px(ctx.padding)),
    ]
}

fn overlay_rule() -> String {
    let declarations = [
        "content: '';",
        "position: absolute;",
        "top: 0;",
        "left: 0;",
        "right: 0;",
        "bottom: 0;",
        "background: linear-gradient(\n    135deg,\n    rgba(255, 255, 255, 0.1) 0%,\n    rgba(255, 255, 255, 0.05) 100%\n  );",
        "pointer-events: none;",
    ]
    .map(String::from);
    rule(&format!("{ROOT_SELECTOR}::before"), &declarations)
}

/// Formats a rule block with two-space indented declarations.
pub fn rule(selector: &str, declarations: &[String]) -> String {
    let body: String = declarations.iter().map(|d| format!("  {d}\n")).collect();
    format!("{selector} {{\n{body}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationKind, ComponentType, HoverEffect, StyleConfig};

    fn render(config: &StyleConfig) -> String {
        let ctx = StyleContext::new(config);
        CssRenderer.render(&ctx, ComponentTemplate::for_type(ctx.component_type))
    }

    #[test]
    fn base_block_reflects_config() {
        let css = render(&StyleConfig::default());
        assert!(css.starts_with(".liquid-glass {\n  position: relative;"));
        assert!(css.contains("backdrop-filter: blur(15px) saturate(180%);"));
        assert!(css.contains("-webkit-backdrop-filter: blur(15px) saturate(180%);"));
        assert!(css.contains("border: 1px solid rgba(255, 255, 255, 0.3);"));
        assert!(css.contains("border-radius: 12px;"));
        assert!(css.contains("padding: 24px;"));
        assert!(css.contains(".liquid-glass::before {"));
        assert!(css.contains(".liquid-glass-card .title {"));
    }

    #[test]
    fn disabled_effects_emit_nothing() {
        let mut config = StyleConfig::new()
            .with_component_type(ComponentType::Modal)
            .with_animation(AnimationKind::Glow, 2.0, 0.0)
            .with_hover(HoverEffect::Rainbow, 1.0, 0.3);
        config.animation.enabled = false;
        config.hover.enabled = false;

        let css = render(&config);
        assert!(!css.contains("@keyframes"));
        assert!(!css.contains(":hover"));
        assert!(!css.contains("animation:"));
    }

    #[test]
    fn blocks_are_ordered() {
        let config = StyleConfig::new()
            .with_animation(AnimationKind::Float, 3.0, 0.0)
            .with_hover(HoverEffect::Lift, 1.0, 0.3);
        let css = render(&config);

        let component = css.find(".liquid-glass-card .content").unwrap();
        let animation = css.find("@keyframes liquid-glass-float").unwrap();
        let hover = css.find(".liquid-glass:hover").unwrap();
        assert!(component < animation && animation < hover);
    }

    #[test]
    fn configured_padding_is_the_only_root_padding() {
        for component_type in ComponentType::ALL {
            let config = StyleConfig::new()
                .with_component_type(component_type)
                .with_geometry(12.0, 40.0);
            let css = render(&config);
            let root = format!(".{}", ComponentTemplate::for_type(component_type).class_name);
            let paddings: Vec<&str> = css
                .split("}\n")
                .filter_map(|block| block.trim_start().split_once(" {\n"))
                .filter(|(selector, _)| *selector == ".liquid-glass" || *selector == root)
                .flat_map(|(_, body)| body.lines().map(str::trim))
                .filter(|line| line.starts_with("padding:"))
                .collect();
            assert_eq!(paddings, ["padding: 40px;"], "{component_type}");
        }
    }

    #[test]
    fn output_is_trimmed() {
        let css = render(&StyleConfig::default());
        assert_eq!(css, css.trim());
    }

    #[test]
    fn rule_formatting() {
        assert_eq!(rule(".a", &["b: c;".to_string()]), ".a {\n  b: c;\n}");
    }
}
