// Host-side tests for the pure web input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;
use scroll_core::{Rgb, SceneConfig, SceneEvent, SceneState, Viewport};

#[test]
fn h_toggles_controls_in_either_case() {
    assert!(is_toggle_controls_key("h"));
    assert!(is_toggle_controls_key("H"));
    assert!(!is_toggle_controls_key("g"));
    assert!(!is_toggle_controls_key("Shift"));
}

#[test]
fn color_input_value_becomes_event() {
    let ev = color_event_from_input("#ffeded");
    assert_eq!(
        ev,
        Some(SceneEvent::ColorChanged(Rgb::from_bytes(0xff, 0xed, 0xed)))
    );
}

#[test]
fn malformed_color_input_is_dropped() {
    assert_eq!(color_event_from_input(""), None);
    assert_eq!(color_event_from_input("#ggg000"), None);
    assert_eq!(color_event_from_input("rebeccapurple"), None);
}

#[test]
fn resize_event_carries_css_size_and_raw_ratio() {
    let ev = resize_event(1440.0, 900.0, 3.0);
    assert_eq!(
        ev,
        SceneEvent::Resized {
            width: 1440.0,
            height: 900.0,
            device_pixel_ratio: 3.0,
        }
    );
}

#[test]
fn high_dpi_resize_caps_backing_store_at_twice_css_size() {
    let config = SceneConfig {
        particle_count: 0,
        ..SceneConfig::default()
    };
    let max = config.max_pixel_ratio;
    let mut state = SceneState::new(config, Viewport::new(800.0, 600.0, 1.0, max));
    state.apply(resize_event(1440.0, 900.0, 3.0));
    assert_eq!(state.viewport.backing_size(), (2880, 1800));
    assert!((state.rig.aspect - 1.6).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_hooks_are_non_empty() {
    assert!(constants::CANVAS_SELECTOR.starts_with("canvas"));
    assert!(!constants::CONTROLS_PANEL_ID.is_empty());
    assert!(!constants::COLOR_INPUT_ID.is_empty());
    assert_eq!(constants::TOGGLE_CONTROLS_KEY.len(), 1);
}

const INDEX_HTML: &str = include_str!("../index.html");

#[test]
fn page_stylesheet_hides_controls_by_class() {
    // The panel toggle only flips a class; the page CSS must honour it.
    let rule = format!(
        "#{}.{}",
        constants::CONTROLS_PANEL_ID,
        constants::HIDDEN_CLASS
    );
    let at = INDEX_HTML
        .find(&rule)
        .unwrap_or_else(|| panic!("missing {rule} rule"));
    let body = &INDEX_HTML[at..];
    let block = &body[..body.find('}').unwrap()];
    assert!(block.contains("display: none"), "{block}");
}

#[test]
fn page_provides_every_dom_hook() {
    assert!(INDEX_HTML.contains(r#"<canvas class="webgl">"#));
    assert!(INDEX_HTML.contains(&format!(r#"id="{}""#, constants::CONTROLS_PANEL_ID)));
    assert!(INDEX_HTML.contains(&format!(r#"id="{}""#, constants::COLOR_INPUT_ID)));
}
