//! Documented TypeScript React component output.
//!
//! Same runtime component as [`ReactRenderer`](super::ReactRenderer), wrapped
//! with a configuration summary, an exported props interface, a CSS custom
//! property sheet, a usage example and setup notes.

use super::{FormatRenderer, OutputFormat, react};
use crate::config::HoverEffect;
use crate::effect::StyleContext;
use crate::template::ComponentTemplate;
use crate::units::{css_number, percent, px, seconds};

/// Renders [`OutputFormat::Typescript`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl FormatRenderer for TypeScriptRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Typescript
    }

    fn render(&self, ctx: &StyleContext, template: &ComponentTemplate) -> String {
        let props_name = format!("{}Props", template.component_name);
        [
            header(ctx, template),
            "import React from 'react';".to_string(),
            props_interface(template, &props_name),
            custom_properties(ctx),
            usage_example(template),
            setup_notes(ctx, template),
            react::component(template, &props_name),
            react::styles_block(ctx, template),
            format!("export default {};", template.component_name),
        ]
        .join("\n\n")
    }
}

/// Writes `lines` as a `/** ... */` block, skipping `None` entries.
fn doc_block(lines: impl IntoIterator<Item = Option<String>>) -> String {
    let body: Vec<String> = lines
        .into_iter()
        .flatten()
        .map(|line| if line.is_empty() { " *".to_string() } else { format!(" * {line}") })
        .collect();
    format!("/**\n{}\n */", body.join("\n"))
}

fn header(ctx: &StyleContext, template: &ComponentTemplate) -> String {
    let animation = ctx.active_animation();
    let hover = ctx.active_hover();
    let cursor = hover.filter(|h| h.tracks_cursor());

    doc_block([
        Some(format!("Liquid Glass {} Component", template.display_name())),
        Some(String::new()),
        Some("A glassmorphism component built on backdrop filters.".to_string()),
        Some(String::new()),
        Some("Features:".to_string()),
        Some(match animation {
            Some(kind) => format!("- Animated with the {kind} effect"),
            None => "- Static design".to_string(),
        }),
        hover.map(|effect| format!("- Interactive hover effect ({effect})")),
        cursor.map(|_| "- Cursor tracking".to_string()),
        Some(String::new()),
        Some("Configuration:".to_string()),
        Some(format!("- Blur: {}", px(ctx.blur))),
        Some(format!("- Opacity: {}", css_number(ctx.opacity))),
        Some(format!("- Saturation: {}", percent(ctx.saturation))),
        Some(format!("- Border Radius: {}", px(ctx.border_radius))),
        Some(format!("- Padding: {}", px(ctx.padding))),
        animation.map(|kind| {
            format!(
                "- Animation: {kind} ({} duration, {} delay)",
                seconds(ctx.animation.duration),
                seconds(ctx.animation.delay)
            )
        }),
        hover.map(|effect| {
            format!(
                "- Hover Effect: {effect} (intensity: {}, duration: {})",
                css_number(ctx.hover.intensity),
                seconds(ctx.hover.duration)
            )
        }),
    ])
}

fn props_interface(template: &ComponentTemplate, props_name: &str) -> String {
    let members: Vec<String> = react::props(template)
        .iter()
        .map(|p| format!("  /** {} */\n  {}?: {};", p.doc, p.name, p.ts_type))
        .collect();
    format!(
        "/**\n * Props for the {} component\n */\nexport interface {props_name} {{\n{}\n}}",
        template.component_name,
        members.join("\n")
    )
}

fn custom_properties(ctx: &StyleContext) -> String {
    let mut vars = vec![
        format!("--liquid-glass-blur: {};", px(ctx.blur)),
        format!("--liquid-glass-opacity: {};", css_number(ctx.opacity)),
        format!("--liquid-glass-saturation: {};", percent(ctx.saturation)),
        format!("--liquid-glass-border-radius: {};", px(ctx.border_radius)),
        format!("--liquid-glass-padding: {};", px(ctx.padding)),
        format!("--liquid-glass-bg: {};", ctx.background_css()),
        format!("--liquid-glass-border: {};", ctx.border_css()),
    ];
    if ctx.active_animation().is_some() {
        vars.push(format!(
            "--liquid-glass-animation-duration: {};",
            seconds(ctx.animation.duration)
        ));
    }
    if ctx.active_hover().is_some() {
        vars.push(format!("--liquid-glass-hover-duration: {};", seconds(ctx.hover.duration)));
    }
    if let Some(effect) = ctx.active_hover().filter(|e| e.tracks_cursor()) {
        // The tilt rule does arithmetic on the raw number.
        let center = if effect == HoverEffect::CursorTilt { "50" } else { "50%" };
        vars.push(format!("--cursor-x: {center};"));
        vars.push(format!("--cursor-y: {center};"));
    }

    let body: Vec<String> = vars.iter().map(|v| format!(" *   {v}")).collect();
    format!(
        "/**\n * CSS custom properties for theming. Add to your root stylesheet:\n *\n * :root {{\n{}\n * }}\n */",
        body.join("\n")
    )
}

fn usage_example(template: &ComponentTemplate) -> String {
    let name = template.component_name;
    let mut attributes: Vec<String> = template
        .text_slots()
        .map(|s| format!("{}=\"{}\"", s.name, s.default))
        .collect();
    attributes.extend(
        template
            .events
            .iter()
            .map(|e| format!("{}={{() => console.log('{}')}}", e.prop_name(), e.name)),
    );

    let open = if attributes.is_empty() {
        format!("<{name}")
    } else {
        let lines: Vec<String> = attributes.iter().map(|a| format!("//       {a}")).collect();
        format!("<{name}\n{}\n//     ", lines.join("\n"))
    };
    let element = match template.children_slot() {
        Some(slot) => format!("{open}>\n//       {}\n//     </{name}>", slot.default),
        None if attributes.is_empty() => format!("{open} />"),
        None => format!("{open}/>"),
    };

    format!(
        "// Usage Example:\n\
         //\n\
         // import {name} from './components/{name}';\n\
         //\n\
         // function App() {{\n\
         //   return (\n\
         //     {element}\n\
         //   );\n\
         // }}"
    )
}

fn setup_notes(ctx: &StyleContext, template: &ComponentTemplate) -> String {
    let cursor = ctx.active_hover().filter(|h| h.tracks_cursor());

    let mut lines: Vec<Option<String>> = vec![
        Some("Installation & Setup:".to_string()),
        Some(String::new()),
        Some("1. Install dependencies: npm install react @types/react".to_string()),
        Some("2. Add the exported `styles` to your stylesheet".to_string()),
        Some(format!(
            "3. Import the component: import {0} from './components/{0}';",
            template.component_name
        )),
    ];

    if let Some(effect) = cursor {
        let (x, y) = if effect == HoverEffect::CursorTilt {
            (
                "Math.max(0, Math.min(100, x)).toString()",
                "Math.max(0, Math.min(100, y)).toString()",
            )
        } else {
            ("`${x}%`", "`${y}%`")
        };
        lines.extend(
            [
                String::new(),
                format!("4. Cursor tracking setup for the {effect} effect:"),
                "   const handleMouseMove = (e: MouseEvent) => {".to_string(),
                "     const rect = element.getBoundingClientRect();".to_string(),
                "     const x = ((e.clientX - rect.left) / rect.width) * 100;".to_string(),
                "     const y = ((e.clientY - rect.top) / rect.height) * 100;".to_string(),
                format!("     element.style.setProperty('--cursor-x', {x});"),
                format!("     element.style.setProperty('--cursor-y', {y});"),
                "   };".to_string(),
                "   element.addEventListener('mousemove', handleMouseMove);".to_string(),
            ]
            .map(Some),
        );
    }

    lines.extend([
        Some(String::new()),
        Some("Browser Support: Chrome 76+, Firefox 103+, Safari 9+, Edge 79+".to_string()),
        Some(String::new()),
        Some("Performance Notes:".to_string()),
        Some("- backdrop-filter is GPU accelerated".to_string()),
        Some("- Consider reducing blur on lower-end devices".to_string()),
        ctx.active_hover()
            .map(|_| "- Hover effects use CSS transitions".to_string()),
        ctx.active_animation()
            .map(|_| "- Animations only touch transform, opacity and shadows".to_string()),
    ]);

    doc_block(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationKind, ComponentType, StyleConfig};

    fn render(config: &StyleConfig) -> String {
        let ctx = StyleContext::new(config);
        TypeScriptRenderer.render(&ctx, ComponentTemplate::for_type(ctx.component_type))
    }

    #[test]
    fn header_summarizes_configuration() {
        let ts = render(
            &StyleConfig::new()
                .with_animation(AnimationKind::Float, 3.0, 0.5)
                .with_hover(HoverEffect::Lift, 1.2, 0.4),
        );
        assert!(ts.starts_with("/**\n * Liquid Glass Card Component"));
        assert!(ts.contains(" * - Blur: 15px"));
        assert!(ts.contains(" * - Animation: float (3s duration, 0.5s delay)"));
        assert!(ts.contains(" * - Hover Effect: lift (intensity: 1.2, duration: 0.4s)"));
        assert!(!ts.contains("Generated at"));
    }

    #[test]
    fn props_interface_is_exported_and_used() {
        let ts = render(&StyleConfig::new().with_component_type(ComponentType::Toast));
        assert!(ts.contains("export interface LiquidGlassToastProps {"));
        assert!(ts.contains("  /** Toast message */\n  message?: string;"));
        assert!(ts.contains("const LiquidGlassToast: React.FC<LiquidGlassToastProps> = ({"));
        assert!(ts.ends_with("export default LiquidGlassToast;"));
    }

    #[test]
    fn cursor_effects_add_tracking_notes() {
        let ts = render(&StyleConfig::new().with_hover(HoverEffect::CursorTilt, 1.0, 0.3));
        assert!(ts.contains("--cursor-x: 50;"));
        assert!(!ts.contains("--cursor-x: 50%;"));
        assert!(ts.contains("Cursor tracking setup for the cursor-tilt effect"));
        assert!(ts.contains("Math.max(0, Math.min(100, x)).toString()"));

        let glow = render(&StyleConfig::new().with_hover(HoverEffect::CursorGlow, 1.0, 0.3));
        assert!(glow.contains("--cursor-x: 50%;"));

        let plain = render(&StyleConfig::new());
        assert!(!plain.contains("--cursor-x"));
        assert!(plain.contains(" * - Static design"));
    }

    #[test]
    fn usage_example_is_commented_out() {
        let ts = render(&StyleConfig::new().with_component_type(ComponentType::Modal));
        assert!(ts.contains("// Usage Example:"));
        assert!(ts.contains("//       onClose={() => console.log('close')}"));
        assert!(ts.contains("//     </LiquidGlassModal>"));
    }
}
