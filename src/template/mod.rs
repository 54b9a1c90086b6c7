//! Per-component-type template table.
//!
//! Each [`ComponentType`] maps to one [`ComponentTemplate`]: the class and
//! component names, a markup skeleton, the slots and events a framework
//! component exposes, and the layout rules scoped under the template's
//! class. Every output format reads from this table, so a change to a
//! template shows up identically in HTML, React, Vue and Tailwind output.
//!
//! # Architecture
//!
//! - [`markup`] holds the [`Element`] tree and the printer for each dialect
//! - `catalog` builds the nine templates
//! - `styles` holds their CSS fragments

mod catalog;
pub mod markup;
mod styles;

pub use markup::{Dialect, Element, MarkupWriter, Node};

use std::sync::LazyLock;

use crate::config::ComponentType;

static TEMPLATES: LazyLock<Vec<ComponentTemplate>> =
    LazyLock::new(|| ComponentType::ALL.into_iter().map(catalog::build).collect());

// ============================================================================
// Slots & Events
// ============================================================================

/// How a slot's content is supplied by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A plain string prop.
    Text,
    /// Arbitrary child content (`children` in React, default `<slot>` in Vue).
    Children,
}

/// A named piece of replaceable content inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Prop name.
    pub name: &'static str,
    /// Text or children.
    pub kind: SlotKind,
    /// Demo content used by HTML output and as the prop default.
    pub default: &'static str,
    /// One-line prop documentation.
    pub doc: &'static str,
}

impl Slot {
    /// A string prop.
    pub fn text(name: &'static str, default: &'static str, doc: &'static str) -> Self {
        Self {
            name,
            kind: SlotKind::Text,
            default,
            doc,
        }
    }

    /// The `children` slot.
    pub fn children(default: &'static str, doc: &'static str) -> Self {
        Self {
            name: "children",
            kind: SlotKind::Children,
            default,
            doc,
        }
    }
}

/// A callback the component exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event name as emitted by Vue (`close`).
    pub name: &'static str,
    /// One-line handler documentation.
    pub doc: &'static str,
}

impl Event {
    pub fn new(name: &'static str, doc: &'static str) -> Self {
        Self { name, doc }
    }

    /// React callback prop name: `close` -> `onClose`.
    pub fn prop_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => format!("on{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => "on".to_string(),
        }
    }
}

// ============================================================================
// ComponentTemplate
// ============================================================================

/// Structural description of one component type.
#[derive(Debug, Clone)]
pub struct ComponentTemplate {
    /// The type this template renders.
    pub component_type: ComponentType,
    /// Type-specific class, e.g. `liquid-glass-nav`.
    pub class_name: &'static str,
    /// Framework component name, e.g. `LiquidGlassNavigation`.
    pub component_name: &'static str,
    /// Root element. Its class list is supplied by the renderer.
    pub root: Element,
    /// Replaceable content.
    pub slots: Vec<Slot>,
    /// Exposed callbacks.
    pub events: Vec<Event>,
    /// Layout and typography rules scoped under `class_name`.
    pub css: &'static str,
    /// `:hover` rules for inner controls, emitted only with an active hover effect.
    pub interactive_css: Option<&'static str>,
}

impl ComponentTemplate {
    /// Returns the template for a component type.
    pub fn for_type(component_type: ComponentType) -> &'static Self {
        let index = ComponentType::ALL
            .iter()
            .position(|t| *t == component_type)
            .unwrap_or(0);
        &TEMPLATES[index]
    }

    /// Returns every template in editor order.
    pub fn all() -> &'static [Self] {
        &TEMPLATES
    }

    /// `liquid-glass liquid-glass-card`
    pub fn root_classes(&self) -> String {
        format!("liquid-glass {}", self.class_name)
    }

    /// Human title, e.g. `Navigation`.
    pub fn display_name(&self) -> &'static str {
        self.component_name
            .strip_prefix("LiquidGlass")
            .unwrap_or(self.component_name)
    }

    /// String-valued slots, in declaration order.
    pub fn text_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.kind == SlotKind::Text)
    }

    /// The `children` slot, if the template has one.
    pub fn children_slot(&self) -> Option<&Slot> {
        self.slots.iter().find(|s| s.kind == SlotKind::Children)
    }

    /// Component rules, with the interactive rules appended when requested.
    pub fn stylesheet(&self, interactive: bool) -> String {
        match (interactive, self.interactive_css) {
            (true, Some(extra)) => format!("{}\n\n{extra}", self.css),
            _ => self.css.to_string(),
        }
    }

    /// Prints the markup in `dialect` with the given root class attribute.
    pub fn markup(&self, dialect: Dialect, root_class_attr: &str, depth: usize) -> String {
        MarkupWriter::new(dialect, &self.slots, &self.events).render(&self.root, root_class_attr, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_its_own_template() {
        for component_type in ComponentType::ALL {
            let template = ComponentTemplate::for_type(component_type);
            assert_eq!(template.component_type, component_type);
            assert!(template.css.contains(template.class_name), "{component_type}");
        }
        assert_eq!(ComponentTemplate::all().len(), ComponentType::ALL.len());
    }

    #[test]
    fn navigation_and_input_use_short_class_names() {
        assert_eq!(ComponentTemplate::for_type(ComponentType::Navigation).class_name, "liquid-glass-nav");
        assert_eq!(ComponentTemplate::for_type(ComponentType::Input).class_name, "liquid-glass-form");
        assert_eq!(ComponentTemplate::for_type(ComponentType::Input).root.tag, "form");
    }

    #[test]
    fn slot_and_event_references_resolve() {
        for template in ComponentTemplate::all() {
            for element in template.root.walk() {
                if let Some(event) = element.on_click {
                    assert!(
                        template.events.iter().any(|e| e.name == event),
                        "{} references unknown event {event}",
                        template.component_name
                    );
                }
                for child in &element.children {
                    if let Node::Slot(name) = child {
                        assert!(
                            template.slots.iter().any(|s| s.name == *name),
                            "{} references unknown slot {name}",
                            template.component_name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn interactive_rules_are_opt_in() {
        let modal = ComponentTemplate::for_type(ComponentType::Modal);
        assert!(!modal.stylesheet(false).contains(":hover"));
        assert!(modal.stylesheet(true).contains(".close-button:hover"));

        let card = ComponentTemplate::for_type(ComponentType::Card);
        assert_eq!(card.stylesheet(true), card.stylesheet(false));
    }

    #[test]
    fn event_prop_names() {
        assert_eq!(Event::new("close", "").prop_name(), "onClose");
        assert_eq!(Event::new("click", "").prop_name(), "onClick");
    }

    #[test]
    fn display_names() {
        assert_eq!(ComponentTemplate::for_type(ComponentType::Toast).display_name(), "Toast");
    }
}
