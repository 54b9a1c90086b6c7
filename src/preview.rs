//! Live preview plumbing.
//!
//! The generator is pure. Anything that has to push the generated CSS
//! somewhere (a `<style>` element, a canvas host, a test buffer) does it
//! through a [`StyleSurface`] driven by a [`PreviewAdapter`].

use crate::config::StyleConfig;
use crate::format::OutputFormat;
use crate::generator::generate;

// ============================================================================
// StyleSurface Trait
// ============================================================================

/// Something that can display a stylesheet.
pub trait StyleSurface {
    /// Replaces the surface's stylesheet with `css`.
    fn apply_stylesheet(&mut self, css: &str);

    /// Removes the stylesheet.
    fn clear(&mut self);
}

/// In-memory surface that records the current stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheetBuffer {
    css: Option<String>,
    applied: usize,
}

impl StyleSheetBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current stylesheet, if any.
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// How many times a stylesheet was applied.
    pub fn applied_count(&self) -> usize {
        self.applied
    }
}

impl StyleSurface for StyleSheetBuffer {
    fn apply_stylesheet(&mut self, css: &str) {
        self.css = Some(css.to_string());
        self.applied += 1;
    }

    fn clear(&mut self) {
        self.css = None;
    }
}

// ============================================================================
// PreviewAdapter
// ============================================================================

/// Keeps a surface in sync with a config.
///
/// CSS is regenerated only when the config differs from the last one
/// applied.
///
/// # Example
///
/// ```
/// use glass_codegen::{PreviewAdapter, StyleConfig, StyleSheetBuffer};
///
/// let mut preview = PreviewAdapter::new(StyleSheetBuffer::new());
/// assert!(preview.update(&StyleConfig::default()));
/// assert!(!preview.update(&StyleConfig::default()));
/// assert!(preview.surface().css().unwrap().contains("backdrop-filter"));
/// ```
#[derive(Debug)]
pub struct PreviewAdapter<S: StyleSurface> {
    surface: S,
    last: Option<StyleConfig>,
    version: u64,
}

impl<S: StyleSurface> PreviewAdapter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            last: None,
            version: 0,
        }
    }

    /// Pushes CSS for `config` if it changed. Returns whether it pushed.
    pub fn update(&mut self, config: &StyleConfig) -> bool {
        if self.last.as_ref() == Some(config) {
            return false;
        }
        let css = generate(config, OutputFormat::Css);
        self.surface.apply_stylesheet(&css);
        self.last = Some(config.clone());
        self.version += 1;
        tracing::trace!(version = self.version, "Preview stylesheet applied");
        true
    }

    /// Clears the surface and forgets the last config.
    pub fn reset(&mut self) {
        self.surface.clear();
        self.last = None;
    }

    /// Number of stylesheets pushed so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The last config pushed.
    pub fn current(&self) -> Option<&StyleConfig> {
        self.last.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
