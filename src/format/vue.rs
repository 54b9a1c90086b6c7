//! Vue single-file component output.

use super::{FormatRenderer, OutputFormat, css, js_string};
use crate::effect::StyleContext;
use crate::template::{ComponentTemplate, Dialect};

/// Renders [`OutputFormat::Vue`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VueRenderer;

impl FormatRenderer for VueRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Vue
    }

    fn render(&self, ctx: &StyleContext, template: &ComponentTemplate) -> String {
        let markup = template.markup(
            Dialect::Vue,
            &format!("class=\"{}\"", template.root_classes()),
            1,
        );

        let mut sections = vec![format!("<template>\n{markup}\n</template>")];
        if let Some(script) = script(template) {
            sections.push(script);
        }
        sections.push(format!(
            "<style scoped>\n{}\n</style>",
            css::stylesheet(ctx, template)
        ));
        sections.join("\n\n")
    }
}

/// `<script setup>` declaring props and emits. `None` when there is nothing
/// to declare.
fn script(template: &ComponentTemplate) -> Option<String> {
    let mut parts = Vec::new();

    let text_slots: Vec<_> = template.text_slots().collect();
    if !text_slots.is_empty() {
        let fields: Vec<String> = text_slots
            .iter()
            .map(|s| format!("  /** {} */\n  {}?: string;", s.doc, s.name))
            .collect();
        let defaults: Vec<String> = text_slots
            .iter()
            .map(|s| format!("  {}: {},", s.name, js_string(s.default)))
            .collect();
        parts.push(format!(
            "interface Props {{\n{}\n}}\n\nwithDefaults(defineProps<Props>(), {{\n{}\n}});",
            fields.join("\n"),
            defaults.join("\n")
        ));
    }

    if !template.events.is_empty() {
        let emits: Vec<String> = template
            .events
            .iter()
            .map(|e| format!("  {}: [];", e.name))
            .collect();
        parts.push(format!("defineEmits<{{\n{}\n}}>();", emits.join("\n")));
    }

    if parts.is_empty() {
        return None;
    }
    Some(format!(
        "<script setup lang=\"ts\">\n{}\n</script>",
        parts.join("\n\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentType, StyleConfig};

    fn render(component_type: ComponentType) -> String {
        let ctx = StyleContext::new(&StyleConfig::new().with_component_type(component_type));
        VueRenderer.render(&ctx, ComponentTemplate::for_type(component_type))
    }

    #[test]
    fn modal_declares_props_and_emits() {
        let vue = render(ComponentType::Modal);
        assert!(vue.starts_with("<template>\n  <div class=\"liquid-glass liquid-glass-modal\""));
        assert!(vue.contains("<h3 class=\"title\">{{ title }}</h3>"));
        assert!(vue.contains("<slot>This is a modal dialog"));
        assert!(vue.contains("<script setup lang=\"ts\">"));
        assert!(vue.contains("  title: 'Modal Title',"));
        assert!(vue.contains("  close: [];\n  confirm: [];"));
        assert!(vue.contains("@click=\"$emit('confirm')\""));
        assert!(vue.ends_with("</style>"));
    }

    #[test]
    fn style_block_is_scoped() {
        let vue = render(ComponentType::Card);
        assert!(vue.contains("<style scoped>\n.liquid-glass {"));
        assert!(!vue.contains("defineEmits"));
    }

    #[test]
    fn button_has_emits_but_no_props() {
        let vue = render(ComponentType::Button);
        assert!(vue.contains("defineEmits"));
        assert!(!vue.contains("defineProps"));
        assert!(vue.contains("<span class=\"content\"><slot>Click me</slot></span>"));
    }
}
