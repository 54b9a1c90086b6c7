//! Markup skeletons and their printers.
//!
//! Each component template describes its DOM once as a small [`Element`]
//! tree. The same tree is printed as plain HTML, JSX or a Vue template, so
//! the structure never drifts between formats.

use super::{Event, Slot, SlotKind};

// ============================================================================
// Tree
// ============================================================================

/// A markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Literal text.
    Text(&'static str),
    /// A named content slot, resolved against the template's slot list.
    Slot(&'static str),
}

/// A markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: &'static str,
    /// Static class list.
    pub class: Option<&'static str>,
    /// Other attributes in HTML spelling (`stroke-width`, `style`, ...).
    pub attrs: Vec<(&'static str, &'static str)>,
    /// Event fired on click, by event name.
    pub on_click: Option<&'static str>,
    /// Child nodes.
    pub children: Vec<Node>,
}

/// Starts an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        class: None,
        attrs: Vec::new(),
        on_click: None,
        children: Vec::new(),
    }
}

/// Builds a 24x24 outline icon from SVG path data.
pub fn icon(class: Option<&'static str>, paths: &[&'static str]) -> Element {
    let mut svg = el("svg")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("viewBox", "0 0 24 24");
    svg.class = class;
    for d in paths {
        svg = svg.child(
            el("path")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", d),
        );
    }
    svg
}

impl Element {
    /// Sets the class list.
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Adds an attribute.
    pub fn attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attrs.push((name, value));
        self
    }

    /// Wires a click to the named event.
    pub fn on_click(mut self, event: &'static str) -> Self {
        self.on_click = Some(event);
        self
    }

    /// Appends a child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends literal text.
    pub fn text(self, text: &'static str) -> Self {
        self.child(Node::Text(text))
    }

    /// Appends a slot reference.
    pub fn slot(self, name: &'static str) -> Self {
        self.child(Node::Slot(name))
    }

    /// Returns true if every child is text or a slot, so the element fits
    /// on one line.
    fn is_inline(&self) -> bool {
        !self.children.is_empty()
            && self
                .children
                .iter()
                .all(|c| !matches!(c, Node::Element(_)))
    }

    /// Iterates over this element and all descendants, depth first.
    pub fn walk(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            if let Node::Element(e) = child {
                out.extend(e.walk());
            }
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

// ============================================================================
// Printing
// ============================================================================

/// Target markup syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain HTML5.
    Html,
    /// React JSX.
    Jsx,
    /// Vue single-file-component template.
    Vue,
}

const VOID_TAGS: [&str; 4] = ["input", "br", "img", "hr"];

/// Prints a markup tree.
pub struct MarkupWriter<'a> {
    dialect: Dialect,
    slots: &'a [Slot],
    events: &'a [Event],
    out: String,
}

impl<'a> MarkupWriter<'a> {
    /// Creates a writer resolving slots and events against the given lists.
    pub fn new(dialect: Dialect, slots: &'a [Slot], events: &'a [Event]) -> Self {
        Self {
            dialect,
            slots,
            events,
            out: String::new(),
        }
    }

    /// Prints `root` at `depth` (two spaces per level), with the root's
    /// class attribute supplied verbatim by the caller.
    pub fn render(mut self, root: &Element, root_class_attr: &str, depth: usize) -> String {
        self.write_element(root, depth, Some(root_class_attr));
        // No trailing newline
        while self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }

    fn write_element(&mut self, element: &Element, depth: usize, root_class_attr: Option<&str>) {
        let pad = "  ".repeat(depth);
        let mut open = format!("{pad}<{}", element.tag);

        if let Some(attr) = root_class_attr {
            open.push(' ');
            open.push_str(attr);
        } else if let Some(class) = element.class {
            let name = if self.dialect == Dialect::Jsx { "className" } else { "class" };
            open.push_str(&format!(" {name}=\"{class}\""));
        }

        for (name, value) in &element.attrs {
            open.push(' ');
            open.push_str(&self.attribute(name, value));
        }

        if let Some(event) = element.on_click {
            if let Some(handler) = self.click_handler(event) {
                open.push(' ');
                open.push_str(&handler);
            }
        }

        if element.children.is_empty() {
            let close = if VOID_TAGS.contains(&element.tag) {
                if self.dialect == Dialect::Html { ">".to_string() } else { " />".to_string() }
            } else if element.tag == "path" {
                " />".to_string()
            } else {
                format!("></{}>", element.tag)
            };
            self.line(&format!("{open}{close}"));
        } else if element.is_inline() {
            let inner: String = element.children.iter().map(|c| self.inline(c)).collect();
            self.line(&format!("{open}>{inner}</{}>", element.tag));
        } else {
            self.line(&format!("{open}>"));
            for child in &element.children {
                match child {
                    Node::Element(e) => self.write_element(e, depth + 1, None),
                    other => {
                        let text = self.inline(other);
                        self.line(&format!("{pad}  {text}"));
                    }
                }
            }
            self.line(&format!("{pad}</{}>", element.tag));
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn inline(&self, node: &Node) -> String {
        match node {
            Node::Text(text) => (*text).to_string(),
            Node::Slot(name) => self.slot_content(name),
            Node::Element(_) => String::new(),
        }
    }

    fn slot_content(&self, name: &str) -> String {
        let Some(slot) = self.slots.iter().find(|s| s.name == name) else {
            return String::new();
        };
        match (self.dialect, slot.kind) {
            (Dialect::Html, _) => slot.default.to_string(),
            (Dialect::Jsx, _) => format!("{{{}}}", slot.name),
            (Dialect::Vue, SlotKind::Text) => format!("{{{{ {} }}}}", slot.name),
            (Dialect::Vue, SlotKind::Children) => format!("<slot>{}</slot>", slot.default),
        }
    }

    fn click_handler(&self, event: &str) -> Option<String> {
        let event = self.events.iter().find(|e| e.name == event)?;
        match self.dialect {
            Dialect::Html => None,
            Dialect::Jsx => Some(format!("onClick={{{}}}", event.prop_name())),
            Dialect::Vue => Some(format!("@click=\"$emit('{}')\"", event.name)),
        }
    }

    fn attribute(&self, name: &str, value: &str) -> String {
        if self.dialect != Dialect::Jsx {
            return format!("{name}=\"{value}\"");
        }
        match name {
            "style" => format!("style={{{{ {} }}}}", jsx_style_object(value)),
            "for" => format!("htmlFor=\"{value}\""),
            _ if name.starts_with("aria-") || name.starts_with("data-") => format!("{name}=\"{value}\""),
            _ => format!("{}=\"{value}\"", camel_case(name)),
        }
    }
}

/// `stroke-linecap` -> `strokeLinecap`
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `width: 80%;` -> `width: '80%'`
fn jsx_style_object(style: &str) -> String {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            Some(format!("{}: '{}'", camel_case(prop.trim()), value.trim()))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Element, Vec<Slot>, Vec<Event>) {
        let root = el("div").child(
            el("div")
                .class("content")
                .child(el("h3").class("title").slot("title"))
                .child(el("button").class("close-button").on_click("close").text("x"))
                .child(el("input").attr("type", "email").class("input"))
                .child(el("div").class("slider-fill").attr("style", "width: 80%;")),
        );
        let slots = vec![Slot::text("title", "Hello", "Title")];
        let events = vec![Event::new("close", "Close handler")];
        (root, slots, events)
    }

    #[test]
    fn html_uses_slot_defaults_and_void_tags() {
        let (root, slots, events) = sample();
        let html = MarkupWriter::new(Dialect::Html, &slots, &events).render(&root, "class=\"glass\"", 1);
        assert!(html.starts_with("  <div class=\"glass\">"));
        assert!(html.contains("<h3 class=\"title\">Hello</h3>"));
        assert!(html.contains("<button class=\"close-button\">x</button>"));
        assert!(html.contains("<input class=\"input\" type=\"email\">"));
        assert!(html.contains("<div class=\"slider-fill\" style=\"width: 80%;\"></div>"));
    }

    #[test]
    fn jsx_uses_props_and_camel_case() {
        let (root, slots, events) = sample();
        let jsx = MarkupWriter::new(Dialect::Jsx, &slots, &events).render(&root, "className=\"glass\"", 0);
        assert!(jsx.contains("<h3 className=\"title\">{title}</h3>"));
        assert!(jsx.contains("onClick={onClose}"));
        assert!(jsx.contains("<input className=\"input\" type=\"email\" />"));
        assert!(jsx.contains("style={{ width: '80%' }}"));
    }

    #[test]
    fn vue_uses_interpolation_and_emits() {
        let (root, slots, events) = sample();
        let vue = MarkupWriter::new(Dialect::Vue, &slots, &events).render(&root, "class=\"glass\"", 0);
        assert!(vue.contains("<h3 class=\"title\">{{ title }}</h3>"));
        assert!(vue.contains("@click=\"$emit('close')\""));
    }

    #[test]
    fn icon_paths_self_close() {
        let svg = icon(Some("menu-icon"), &["M4 6h16"]);
        let html = MarkupWriter::new(Dialect::Html, &[], &[]).render(&el("div").child(svg), "class=\"x\"", 0);
        assert!(html.contains("<svg class=\"menu-icon\" fill=\"none\""));
        assert!(html.contains("d=\"M4 6h16\" />"));
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(camel_case("stroke-linecap"), "strokeLinecap");
        assert_eq!(camel_case("viewBox"), "viewBox");
    }
}
