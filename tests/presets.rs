//! Built-in presets through the full pipeline.

use glass_codegen::preset::{self, presets};
use glass_codegen::{OutputFormat, PreviewAdapter, StyleConfig, StyleSheetBuffer, generate};

#[test]
fn every_preset_renders_every_format() {
    for p in presets() {
        for format in OutputFormat::ALL {
            let text = generate(&p.config, format);
            assert!(!text.is_empty(), "{}/{format}", p.id);
        }
    }
}

#[test]
fn animated_presets_emit_keyframes() {
    for p in preset::presets_by_tag("animated") {
        let css = generate(&p.config, OutputFormat::Css);
        assert!(css.contains("@keyframes liquid-glass-"), "{}", p.id);
    }
}

#[test]
fn neon_glow_is_a_pink_button() {
    let neon = preset::preset("neon-glow").unwrap();
    let css = generate(&neon.config, OutputFormat::Css);
    assert!(css.contains(".liquid-glass-button"));
    assert!(css.contains("border: 1px solid rgba(236, 72, 153, 0.6)"));
    assert!(css.contains("animation: liquid-glass-glow 2s"));
}

#[test]
fn preset_configs_survive_json() {
    for p in presets() {
        let json = p.config.to_json().unwrap();
        assert_eq!(StyleConfig::from_json(&json).unwrap(), p.config, "{}", p.id);
    }
}

#[test]
fn preview_follows_preset_switches() {
    let mut preview = PreviewAdapter::new(StyleSheetBuffer::new());
    for p in presets() {
        assert!(preview.update(&p.config), "{}", p.id);
        assert_eq!(
            preview.surface().css(),
            Some(generate(&p.config, OutputFormat::Css).as_str())
        );
    }
    assert_eq!(preview.version(), presets().len() as u64);
}
