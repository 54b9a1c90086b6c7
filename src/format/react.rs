//! React function component output.

use super::{FormatRenderer, OutputFormat, css, js_string, template_literal};
use crate::effect::StyleContext;
use crate::template::{ComponentTemplate, Dialect};

/// Renders [`OutputFormat::React`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactRenderer;

impl FormatRenderer for ReactRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::React
    }

    fn render(&self, ctx: &StyleContext, template: &ComponentTemplate) -> String {
        let props = props(template);
        let inline_type = format!(
            "{{\n{}\n}}",
            props
                .iter()
                .map(|p| format!("  {}?: {};", p.name, p.ts_type))
                .collect::<Vec<_>>()
                .join("\n")
        );

        [
            "import React from 'react';".to_string(),
            component(template, &inline_type),
            styles_block(ctx, template),
            format!("export default {};", template.component_name),
        ]
        .join("\n\n")
    }
}

/// One prop of the generated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
    pub name: String,
    pub ts_type: &'static str,
    pub doc: &'static str,
    /// JavaScript default expression, if any.
    pub default: Option<String>,
}

/// Props in declaration order: text slots, children, callbacks, `className`.
pub fn props(template: &ComponentTemplate) -> Vec<Prop> {
    let mut props: Vec<Prop> = template
        .text_slots()
        .map(|slot| Prop {
            name: slot.name.to_string(),
            ts_type: "string",
            doc: slot.doc,
            default: Some(js_string(slot.default)),
        })
        .collect();

    if let Some(slot) = template.children_slot() {
        props.push(Prop {
            name: slot.name.to_string(),
            ts_type: "React.ReactNode",
            doc: slot.doc,
            default: Some(js_string(slot.default)),
        });
    }

    props.extend(template.events.iter().map(|event| Prop {
        name: event.prop_name(),
        ts_type: "() => void",
        doc: event.doc,
        default: None,
    }));

    props.push(Prop {
        name: "className".to_string(),
        ts_type: "string",
        doc: "Additional CSS class names",
        default: Some("''".to_string()),
    });
    props
}

/// The `const X: React.FC<...> = (...) => { ... };` declaration.
pub fn component(template: &ComponentTemplate, props_type: &str) -> String {
    let destructured = props(template)
        .iter()
        .map(|p| match &p.default {
            Some(default) => format!("  {} = {},", p.name, default),
            None => format!("  {},", p.name),
        })
        .collect::<Vec<_>>()
        .join("\n");

    let root_class = format!(
        "className={{`{} ${{className}}`}}",
        template.root_classes()
    );
    let markup = template.markup(Dialect::Jsx, &root_class, 2);

    format!(
        "const {name}: React.FC<{props_type}> = ({{\n{destructured}\n}}) => {{\n  return (\n{markup}\n  );\n}};",
        name = template.component_name,
    )
}

/// The stylesheet as an exported template literal.
pub fn styles_block(ctx: &StyleContext, template: &ComponentTemplate) -> String {
    format!(
        "// CSS (add to your stylesheet)\nexport const styles = `\n{}\n`;",
        template_literal(&css::stylesheet(ctx, template))
    )
}
