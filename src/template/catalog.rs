//! The nine built-in component templates.

use super::markup::{el, icon};
use super::{ComponentTemplate, Event, Slot, styles};
use crate::config::ComponentType;

const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";
const ICON_CHEVRON: &str = "M19 9l-7 7-7-7";
const ICON_CHECK_CIRCLE: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";
const ICON_FOLDER: &str = "M3 7v10a2 2 0 002 2h14a2 2 0 002-2V9a2 2 0 00-2-2H5a2 2 0 00-2-2z";
const ICON_USER: &str = "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z";
const ICON_GEAR: &str = "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z";
const ICON_GEAR_CENTER: &str = "M15 12a3 3 0 11-6 0 3 3 0 016 0z";

pub(super) fn build(component_type: ComponentType) -> ComponentTemplate {
    match component_type {
        ComponentType::Card => card(),
        ComponentType::Button => button(),
        ComponentType::Modal => modal(),
        ComponentType::Panel => panel(),
        ComponentType::Navigation => navigation(),
        ComponentType::Sidebar => sidebar(),
        ComponentType::Dropdown => dropdown(),
        ComponentType::Toast => toast(),
        ComponentType::Input => input(),
    }
}

fn card() -> ComponentTemplate {
    ComponentTemplate {
        component_type: ComponentType::Card,
        class_name: "liquid-glass-card",
        component_name: "LiquidGlassCard",
        root: el("div").child(
            el("div")
                .class("content")
                .child(el("h3").class("title").slot("title"))
                .child(el("div").class("description").slot("children")),
        ),
        slots: vec![
            Slot::text("title", "Liquid Glass Card", "Component title"),
            Slot::children(
                "Beautiful glassmorphism effect with backdrop blur and transparency. Perfect for modern UI designs.",
                "Component content",
            ),
        ],
        events: Vec::new(),
        css: styles::CARD,
        interactive_css: None,
    }
}

fn button() -> ComponentTemplate {
    ComponentTemplate {
        component_type: ComponentType::Button,
        class_name: "liquid-glass-button",
        component_name: "LiquidGlassButton",
        root: el("button")
            .attr("type", "button")
            .on_click("click")
            .child(el("span").class("content").slot("children")),
        slots: vec![Slot::children("Click me", "Content to display inside the button")],
        events: vec![Event::new("click", "Click event handler")],
        css: styles::BUTTON,
        interactive_css: None,
    }
}

fn modal() -> ComponentTemplate {
    ComponentTemplate {
        component_type: ComponentType::Modal,
        class_name: "liquid-glass-modal",
        component_name: "LiquidGlassModal",
        root: el("div").attr("role", "dialog").child(
            el("div")
                .class("content")
                .child(
                    el("div")
                        .class("header")
                        .child(el("h3").class("title").slot("title"))
                        .child(
                            el("button")
                                .class("close-button")
                                .attr("aria-label", "Close")
                                .on_click("close")
                                .text("✕"),
                        ),
                )
                .child(el("div").class("body").slot("children"))
                .child(
                    el("div")
                        .class("actions")
                        .child(el("button").class("button secondary").on_click("close").text("Cancel"))
                        .child(el("button").class("button primary").on_click("confirm").text("Confirm")),
                ),
        ),
        slots: vec![
            Slot::text("title", "Modal Title", "Modal title"),
            Slot::children(
                "This is a modal dialog with liquid glass effect. It creates a beautiful frosted glass appearance.",
                "Modal content",
            ),
        ],
        events: vec![
            Event::new("close", "Close event handler"),
            Event::new("confirm", "Confirm event handler"),
        ],
        css: styles::MODAL,
        interactive_css: Some(styles::MODAL_INTERACTIVE),
    }
}

fn panel() -> ComponentTemplate {
    let control = |label: &'static str, value: &'static str| {
        el("div")
            .class("control-item")
            .child(el("span").class("control-label").text(label))
            .child(el("span").class("control-value").text(value))
    };
    let slider = |style: &'static str| {
        el("div")
            .class("slider-container")
            .child(el("div").class("slider-fill").attr("style", style))
    };

    ComponentTemplate {
        component_type: ComponentType::Panel,
        class_name: "liquid-glass-panel",
        component_name: "LiquidGlassPanel",
        root: el("div").child(
            el("div")
                .class("content")
                .child(el("h3").class("title").slot("title"))
                .child(control("Brightness", "85%"))
                .child(slider("width: 80%;"))
                .child(control("Volume", "62%"))
                .child(slider("width: 60%;")),
        ),
        slots: vec![Slot::text("title", "Control Panel", "Panel title")],
        events: Vec::new(),
        css: styles::PANEL,
        interactive_css: None,
    }
}

fn navigation() -> ComponentTemplate {
    let link = |label: &'static str| el("a").class("nav-link").attr("href", "#").text(label);

    ComponentTemplate {
        component_type: ComponentType::Navigation,
        class_name: "liquid-glass-nav",
        component_name: "LiquidGlassNavigation",
        root: el("div").child(
            el("div").class("content").child(
                el("nav")
                    .class("nav-container")
                    .child(
                        el("div")
                            .class("nav-left")
                            .child(el("a").class("brand").attr("href", "#").slot("brand"))
                            .child(
                                el("div")
                                    .class("nav-links")
                                    .child(link("Home"))
                                    .child(link("About"))
                                    .child(link("Services"))
                                    .child(link("Contact")),
                            ),
                    )
                    .child(
                        el("button")
                            .class("menu-button")
                            .attr("aria-label", "Open menu")
                            .on_click("menu")
                            .child(icon(Some("menu-icon"), &[ICON_MENU])),
                    ),
            ),
        ),
        slots: vec![Slot::text("brand", "Brand", "Brand label")],
        events: vec![Event::new("menu", "Menu button handler")],
        css: styles::NAVIGATION,
        interactive_css: Some(styles::NAVIGATION_INTERACTIVE),
    }
}

fn sidebar() -> ComponentTemplate {
    let item = |class: &'static str, paths: &[&'static str], label: &'static str| {
        el("a")
            .class(class)
            .attr("href", "#")
            .child(icon(Some("nav-icon"), paths))
            .child(el("span").text(label))
    };

    ComponentTemplate {
        component_type: ComponentType::Sidebar,
        class_name: "liquid-glass-sidebar",
        component_name: "LiquidGlassSidebar",
        root: el("div").child(
            el("div")
                .class("content")
                .child(el("h3").class("title").slot("title"))
                .child(
                    el("nav")
                        .class("nav")
                        .child(item("nav-item active", &[ICON_FOLDER], "Dashboard"))
                        .child(item("nav-item", &[ICON_USER], "Profile"))
                        .child(item("nav-item", &[ICON_GEAR, ICON_GEAR_CENTER], "Settings")),
                ),
        ),
        slots: vec![Slot::text("title", "Menu", "Sidebar title")],
        events: Vec::new(),
        css: styles::SIDEBAR,
        interactive_css: Some(styles::SIDEBAR_INTERACTIVE),
    }
}

fn dropdown() -> ComponentTemplate {
    ComponentTemplate {
        component_type: ComponentType::Dropdown,
        class_name: "liquid-glass-dropdown",
        component_name: "LiquidGlassDropdown",
        root: el("div").child(
            el("div")
                .class("content")
                .child(
                    el("button")
                        .class("trigger")
                        .attr("type", "button")
                        .on_click("toggle")
                        .child(el("span").class("trigger-text").slot("placeholder"))
                        .child(icon(Some("trigger-icon"), &[ICON_CHEVRON])),
                )
                .child(
                    el("div")
                        .class("options")
                        .child(el("div").class("option selected").text("Option 1"))
                        .child(el("div").class("option").text("Option 2"))
                        .child(el("div").class("option").text("Option 3")),
                ),
        ),
        slots: vec![Slot::text("placeholder", "Select an option", "Trigger text")],
        events: vec![Event::new("toggle", "Trigger click handler")],
        css: styles::DROPDOWN,
        interactive_css: Some(styles::DROPDOWN_INTERACTIVE),
    }
}

fn toast() -> ComponentTemplate {
    ComponentTemplate {
        component_type: ComponentType::Toast,
        class_name: "liquid-glass-toast",
        component_name: "LiquidGlassToast",
        root: el("div").attr("role", "status").child(
            el("div").class("content").child(
                el("div")
                    .class("toast-container")
                    .child(el("div").class("icon").child(icon(Some("success-icon"), &[ICON_CHECK_CIRCLE])))
                    .child(
                        el("div")
                            .class("message")
                            .child(el("h4").class("title").slot("title"))
                            .child(el("p").class("description").slot("message")),
                    )
                    .child(
                        el("button")
                            .class("close-button")
                            .attr("aria-label", "Dismiss")
                            .on_click("close")
                            .child(icon(None, &[ICON_CLOSE])),
                    ),
            ),
        ),
        slots: vec![
            Slot::text("title", "Success!", "Toast title"),
            Slot::text("message", "Your changes have been saved successfully.", "Toast message"),
        ],
        events: vec![Event::new("close", "Close event handler")],
        css: styles::TOAST,
        interactive_css: Some(styles::TOAST_INTERACTIVE),
    }
}

fn input() -> ComponentTemplate {
    let field = |label: &'static str, kind: &'static str, placeholder: &'static str| {
        el("div")
            .class("field")
            .child(el("label").class("label").text(label))
            .child(
                el("input")
                    .class("input")
                    .attr("type", kind)
                    .attr("name", kind)
                    .attr("placeholder", placeholder),
            )
    };

    ComponentTemplate {
        component_type: ComponentType::Input,
        class_name: "liquid-glass-form",
        component_name: "LiquidGlassInput",
        root: el("form").child(
            el("div")
                .class("content")
                .child(field("Email", "email", "Enter your email"))
                .child(field("Password", "password", "Enter your password"))
                .child(
                    el("button")
                        .class("submit-button")
                        .attr("type", "button")
                        .on_click("submit")
                        .slot("submitLabel"),
                ),
        ),
        slots: vec![Slot::text("submitLabel", "Sign In", "Submit button label")],
        events: vec![Event::new("submit", "Form submission handler")],
        css: styles::INPUT,
        interactive_css: Some(styles::INPUT_INTERACTIVE),
    }
}
