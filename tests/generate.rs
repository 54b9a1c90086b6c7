//! End-to-end generation tests against the public API.

use glass_codegen::{
    AnimationKind, ComponentType, GlassColor, HoverEffect, OutputFormat, StyleConfig, generate,
};
use proptest::prelude::*;

fn scenario_card() -> StyleConfig {
    StyleConfig::from_json(
        r#"{
            "type": "card",
            "blur": 15,
            "opacity": 0.25,
            "saturation": 180,
            "borderRadius": 12,
            "backgroundColor": "rgba(255,255,255,0.25)",
            "borderColor": "rgba(255,255,255,0.3)",
            "padding": 24,
            "animation": { "enabled": false, "type": "none", "duration": 2, "delay": 0 },
            "hover": { "enabled": false, "effect": "none", "intensity": 1, "duration": 0.3 }
        }"#,
    )
    .expect("scenario config parses")
}

fn structural_marker(format: OutputFormat) -> &'static [&'static str] {
    match format {
        OutputFormat::Css => &[".liquid-glass {", "backdrop-filter:"],
        OutputFormat::Html => &["<!DOCTYPE html>", "</html>"],
        OutputFormat::React => &["React.FC<", "export default LiquidGlass"],
        OutputFormat::Vue => &["<template>", "<style scoped>"],
        OutputFormat::Typescript => &["export interface LiquidGlass", "React.FC<LiquidGlass"],
        OutputFormat::Tailwind => &["backdrop-blur-"],
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn css_card_scenario() {
    let css = generate(&scenario_card(), OutputFormat::Css);
    assert!(css.contains("backdrop-filter: blur(15px) saturate(180%)"));
    assert!(css.contains("border-radius: 12px"));
    assert!(css.contains("padding: 24px"));
    assert!(!css.contains("@keyframes"));
}

#[test]
fn tailwind_opacity_boundary() {
    let at_ten = generate(&scenario_card().with_opacity(0.10), OutputFormat::Tailwind);
    assert!(at_ten.contains("bg-opacity-10 "));

    let past_ten = generate(&scenario_card().with_opacity(0.11), OutputFormat::Tailwind);
    assert!(past_ten.contains("bg-opacity-20 "));
    assert!(!past_ten.contains("bg-opacity-10 "));
}

#[test]
fn rainbow_hover_css() {
    let config = scenario_card().with_hover(HoverEffect::Rainbow, 1.0, 0.3);
    let css = generate(&config, OutputFormat::Css);
    assert!(css.contains("@keyframes liquid-glass-rainbow-shift"));
    assert!(css.contains("background-size: 400% 400%"));
}

#[test]
fn unknown_component_type_renders_as_card() {
    let unknown = StyleConfig::from_json(r#"{ "type": "unknown-type" }"#).unwrap();
    let card = StyleConfig::from_json(r#"{ "type": "card" }"#).unwrap();
    for format in OutputFormat::ALL {
        assert_eq!(generate(&unknown, format), generate(&card, format), "{format}");
    }
}

#[test]
fn unknown_effect_names_disable_the_effect() {
    let config = StyleConfig::from_json(
        r#"{
            "animation": { "enabled": true, "type": "wobble" },
            "hover": { "enabled": true, "effect": "explode" }
        }"#,
    )
    .unwrap();
    let css = generate(&config, OutputFormat::Css);
    assert!(!css.contains("@keyframes"));
    assert!(!css.contains(":hover"));
}

#[test]
fn color_normalization_extracts_the_same_triple() {
    for input in ["rgb(10,20,30)", "rgba(10,20,30,0.5)", "#0a141e"] {
        let color = GlassColor::parse(input).unwrap_or_else(|| panic!("{input} parses"));
        assert_eq!(color.rgb_tuple(), (10, 20, 30), "{input}");
    }
    assert_eq!(GlassColor::normalize("chartreuse").rgb_tuple(), (255, 255, 255));
}

#[test]
fn unparseable_background_renders_as_white() {
    let config = scenario_card().with_colors("not-a-color", "rgba(255,255,255,0.3)");
    let css = generate(&config, OutputFormat::Css);
    assert!(css.contains("background: rgba(255, 255, 255, 0.25)"));
}

#[test]
fn out_of_range_opacity_is_clamped() {
    let config = scenario_card().with_colors("rgb(0, 0, 0)", "rgb(0, 0, 0)").with_opacity(3.0);
    let css = generate(&config, OutputFormat::Css);
    assert!(css.contains("background: rgba(0, 0, 0, 1)"));
    assert_eq!(config.opacity, 3.0);
}

#[test]
fn huge_blur_stays_valid_css() {
    let config = StyleConfig::from_json(r#"{ "blur": 1e305 }"#).unwrap();
    let css = generate(&config, OutputFormat::Css);
    assert!(css.contains("backdrop-filter: blur(1000"));
    assert!(!css.contains("infpx"));
}

#[test]
fn button_honors_configured_padding() {
    let config = StyleConfig::new()
        .with_component_type(ComponentType::Button)
        .with_geometry(12.0, 36.0);
    for format in [OutputFormat::Css, OutputFormat::Html, OutputFormat::Vue, OutputFormat::React] {
        let text = generate(&config, format);
        assert!(text.contains("padding: 36px;"), "{format}");
        assert!(!text.contains("padding: 12px 24px"), "{format}");
    }
}

#[test]
fn tailwind_keeps_background_alpha_apart_from_opacity() {
    let config = scenario_card().with_opacity(1.0);
    let tailwind = generate(&config, OutputFormat::Tailwind);
    assert!(tailwind.contains("bg-[color:rgb(255_255_255/calc(0.25*var(--tw-bg-opacity,1)))]"));
    assert!(tailwind.contains("bg-opacity-100"));
}

// ============================================================================
// Coverage
// ============================================================================

#[test]
fn every_format_and_type_has_its_structural_marker() {
    for component_type in ComponentType::ALL {
        let config = StyleConfig::new().with_component_type(component_type);
        for format in OutputFormat::ALL {
            let text = generate(&config, format);
            for marker in structural_marker(format) {
                assert!(text.contains(marker), "{format}/{component_type}: missing {marker:?}");
            }
        }
    }
}

#[test]
fn disabled_effects_emit_no_keyframes_or_hover_rules() {
    for component_type in ComponentType::ALL {
        let mut config = StyleConfig::new()
            .with_component_type(component_type)
            .with_animation(AnimationKind::Shimmer, 2.0, 0.0)
            .with_hover(HoverEffect::CursorGlow, 1.0, 0.3);
        config.animation.enabled = false;
        config.hover.enabled = false;

        let css = generate(&config, OutputFormat::Css);
        assert!(!css.contains("@keyframes"), "{component_type}");
        assert!(!css.contains(":hover"), "{component_type}");
    }
}

#[test]
fn every_animation_emits_its_keyframes() {
    for kind in AnimationKind::ALL.into_iter().filter(|k| *k != AnimationKind::None) {
        let css = generate(&StyleConfig::new().with_animation(kind, 2.0, 0.5), OutputFormat::Css);
        assert!(css.contains(&format!("@keyframes liquid-glass-{kind}")), "{kind}");
        assert!(css.contains(&format!("animation: liquid-glass-{kind} 2s ease-in-out 0.5s infinite;")));
    }
}

#[test]
fn every_hover_effect_emits_a_hover_rule() {
    for effect in HoverEffect::ALL.into_iter().filter(|e| *e != HoverEffect::None) {
        let css = generate(&StyleConfig::new().with_hover(effect, 1.0, 0.3), OutputFormat::Css);
        assert!(css.contains(".liquid-glass:hover"), "{effect}");
    }
}

// ============================================================================
// Properties
// ============================================================================

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -50.0f64..300.0,
        1 => 1e300f64..f64::MAX,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn arb_color() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| format!("rgb({r}, {g}, {b})")),
        (any::<u8>(), any::<u8>(), any::<u8>(), 0.0f64..1.0)
            .prop_map(|(r, g, b, a)| format!("rgba({r},{g},{b},{a:.2})")),
        any::<[u8; 3]>().prop_map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}")),
        "[a-z ]{0,12}",
    ]
}

fn arb_config() -> impl Strategy<Value = StyleConfig> {
    (
        (
            prop::sample::select(ComponentType::ALL.to_vec()),
            arb_number(),
            arb_number(),
            arb_number(),
            arb_number(),
            arb_number(),
        ),
        (arb_color(), arb_color()),
        (
            any::<bool>(),
            prop::sample::select(AnimationKind::ALL.to_vec()),
            arb_number(),
            arb_number(),
        ),
        (
            any::<bool>(),
            prop::sample::select(HoverEffect::ALL.to_vec()),
            arb_number(),
            arb_number(),
        ),
    )
        .prop_map(
            |(
                (component_type, blur, opacity, saturation, radius, padding),
                (background, border),
                (anim_on, kind, anim_duration, delay),
                (hover_on, effect, intensity, hover_duration),
            )| {
                let mut config = StyleConfig::new()
                    .with_component_type(component_type)
                    .with_blur(blur, saturation)
                    .with_opacity(opacity)
                    .with_colors(background, border)
                    .with_geometry(radius, padding)
                    .with_animation(kind, anim_duration, delay)
                    .with_hover(effect, intensity, hover_duration);
                config.animation.enabled = anim_on;
                config.hover.enabled = hover_on;
                config
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 1_000_000, ..ProptestConfig::default() })]

    #[test]
    fn prop_generation_is_deterministic(config in arb_config()) {
        for format in OutputFormat::ALL {
            prop_assert_eq!(generate(&config, format), generate(&config, format));
        }
    }

    #[test]
    fn prop_generation_is_total(config in arb_config()) {
        for format in OutputFormat::ALL {
            let text = generate(&config, format);
            prop_assert!(!text.is_empty());
            prop_assert!(!text.contains("NaN"), "{} output contains NaN", format);
            for overflow in ["infpx", "inf%", "infs", "(inf", "-inf"] {
                prop_assert!(!text.contains(overflow), "{} output contains {}", format, overflow);
            }
        }
    }

    #[test]
    fn prop_emitted_css_numbers_are_in_range(config in arb_config()) {
        let css = generate(&config, OutputFormat::Css);
        prop_assert!(!css.contains("blur(-"));
        prop_assert!(!css.contains("border-radius: -"));
        prop_assert!(!css.contains("padding: -"));
        prop_assert!(!css.contains("saturate(-"));
    }

    #[test]
    fn prop_serialized_config_generates_identically(config in arb_config()) {
        prop_assume!(
            [config.blur, config.opacity, config.saturation, config.border_radius, config.padding]
                .iter()
                .all(|v| v.is_finite())
        );
        prop_assume!(
            [config.animation.duration, config.animation.delay, config.hover.intensity, config.hover.duration]
                .iter()
                .all(|v| v.is_finite())
        );
        let json = config.to_json().unwrap();
        let restored = StyleConfig::from_json(&json).unwrap();
        prop_assert_eq!(generate(&restored, OutputFormat::Tailwind), generate(&config, OutputFormat::Tailwind));
    }
}
