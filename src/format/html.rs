//! Standalone HTML document output.

use super::{FormatRenderer, OutputFormat, css, indent};
use crate::effect::StyleContext;
use crate::template::{ComponentTemplate, Dialect};

/// Demo page background so the glass has something to blur.
const PAGE_STYLE: &str = r#"body {
  margin: 0;
  padding: 40px;
  background:
    linear-gradient(135deg, #667eea 0%, #764ba2 100%),
    radial-gradient(circle at 20% 80%, rgba(255, 255, 255, 0.1) 0%, transparent 50%),
    radial-gradient(circle at 80% 20%, rgba(255, 119, 198, 0.15) 0%, transparent 50%),
    radial-gradient(circle at 40% 40%, rgba(120, 219, 255, 0.1) 0%, transparent 50%);
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}"#;

/// Renders [`OutputFormat::Html`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl FormatRenderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, ctx: &StyleContext, template: &ComponentTemplate) -> String {
        let stylesheet = format!("{PAGE_STYLE}\n\n{}", css::stylesheet(ctx, template));
        let markup = template.markup(
            Dialect::Html,
            &format!("class=\"{}\"", template.root_classes()),
            1,
        );

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n  \
             <meta charset=\"UTF-8\">\n  \
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
             <title>Liquid Glass {}</title>\n  \
             <style>\n{}\n  </style>\n\
             </head>\n\
             <body>\n{}\n</body>\n\
             </html>",
            template.display_name(),
            indent(&stylesheet, 4),
            markup
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentType, StyleConfig};

    fn render(component_type: ComponentType) -> String {
        let ctx = StyleContext::new(&StyleConfig::new().with_component_type(component_type));
        HtmlRenderer.render(&ctx, ComponentTemplate::for_type(component_type))
    }

    #[test]
    fn document_wraps_stylesheet_and_markup() {
        let html = render(ComponentType::Card);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("    backdrop-filter: blur(15px) saturate(180%);"));
        assert!(html.contains("  <div class=\"liquid-glass liquid-glass-card\">"));
        assert!(html.contains("<h3 class=\"title\">Liquid Glass Card</h3>"));
        assert!(html.ends_with("</body>\n</html>"));
    }

    #[test]
    fn button_renders_a_button_element() {
        let html = render(ComponentType::Button);
        assert!(html.contains("<button class=\"liquid-glass liquid-glass-button\" type=\"button\">"));
        assert!(html.contains("<span class=\"content\">Click me</span>"));
    }

    #[test]
    fn modal_has_header_body_and_actions() {
        let html = render(ComponentType::Modal);
        for class in ["header", "body", "actions", "button primary"] {
            assert!(html.contains(&format!("class=\"{class}\"")), "{class}");
        }
    }

    #[test]
    fn input_uses_void_inputs() {
        let html = render(ComponentType::Input);
        assert!(html.contains("<form class=\"liquid-glass liquid-glass-form\">"));
        assert!(html.contains("placeholder=\"Enter your email\">"));
        assert!(!html.contains("</input>"));
    }
}
