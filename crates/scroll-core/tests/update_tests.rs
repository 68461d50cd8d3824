// Host-side tests for the per-frame update: parallax, spin, scroll sections.

use glam::{Vec2, Vec3};
use scroll_core::*;

const W: f32 = 1280.0;
const H: f32 = 800.0;

fn make_state() -> SceneState {
    let config = SceneConfig {
        particle_seed: Some(42),
        particle_count: 64,
        ..SceneConfig::default()
    };
    SceneState::new(config, Viewport::new(W, H, 1.0, MAX_PIXEL_RATIO))
}

fn rotations(state: &SceneState) -> Vec<Vec3> {
    state.objects.iter().map(|o| o.rotation).collect()
}

#[test]
fn zero_delta_is_identity_step() {
    let mut state = make_state();
    state.apply(SceneEvent::PointerMoved {
        client_x: W,
        client_y: 0.0,
    });
    state.step(0.25);
    let rot_before = rotations(&state);
    let group_before = state.rig.group;

    state.step(0.0);

    assert_eq!(rotations(&state), rot_before);
    assert_eq!(state.rig.group, group_before);
}

#[test]
fn negative_and_nan_deltas_do_not_move_anything() {
    let mut state = make_state();
    state.step(-1.0);
    state.step(f32::NAN);
    assert!(rotations(&state).iter().all(|r| *r == Vec3::ZERO));
    assert_eq!(state.elapsed_sec, 0.0);
}

#[test]
fn parallax_converges_monotonically_toward_pointer() {
    let mut state = make_state();
    // bottom-right corner → pointer (0.5, 0.5) → target (0.5, -0.5)
    state.apply(SceneEvent::PointerMoved {
        client_x: W,
        client_y: H,
    });
    assert_eq!(state.pointer, Vec2::new(0.5, 0.5));
    let target = Vec2::new(0.5, -0.5);

    let mut prev = (target - state.rig.group).length();
    for _ in 0..180 {
        state.step(1.0 / 60.0);
        let d = (target - state.rig.group).length();
        assert!(d < prev, "distance did not shrink: {prev} -> {d}");
        prev = d;
    }
    assert!(prev < 1e-3, "not converged after 3s: {prev}");
}

#[test]
fn parallax_is_roughly_framerate_independent() {
    let mut fast = make_state();
    let mut slow = make_state();
    for s in [&mut fast, &mut slow] {
        s.apply(SceneEvent::PointerMoved {
            client_x: 0.0,
            client_y: 0.0,
        });
    }
    for _ in 0..120 {
        fast.step(1.0 / 120.0);
    }
    for _ in 0..30 {
        slow.step(1.0 / 30.0);
    }
    assert!((fast.rig.group - slow.rig.group).length() < 0.05);
}

#[test]
fn rotation_accumulates_linearly_without_section_change() {
    let mut state = make_state();
    let dt = 1.0 / 60.0;
    let frames = 300;
    for _ in 0..frames {
        state.step(dt);
    }
    let t = dt * frames as f32;
    for r in rotations(&state) {
        assert!((r.x - t * SPIN_RATE_X).abs() < 1e-4, "x {r:?}");
        assert!((r.y - t * SPIN_RATE_Y).abs() < 1e-4, "y {r:?}");
        assert_eq!(r.z, 0.0);
    }
}

#[test]
fn camera_height_follows_scroll() {
    let mut state = make_state();
    state.apply(SceneEvent::Scrolled { scroll_y: H * 1.5 });
    state.step(0.0);
    assert!((state.rig.camera_y - (-1.5 * OBJECTS_DISTANCE)).abs() < 1e-5);
    assert!((state.rig.eye().y - state.rig.camera_y).abs() < 1e-6);
}

#[test]
fn section_index_uses_ceil() {
    assert_eq!(section_for_scroll(0.0, H), 0);
    assert_eq!(section_for_scroll(H, H), 1);
    assert_eq!(section_for_scroll(H * 0.5, H), 1);
    assert_eq!(section_for_scroll(H * 1.01, H), 2);
}

#[test]
fn section_spin_fires_once_per_crossing() {
    let mut state = make_state();
    for y in [10.0, 100.0, 400.0, 799.0, H] {
        state.apply(SceneEvent::Scrolled { scroll_y: y });
    }
    assert_eq!(state.current_section(), 1);
    assert_eq!(state.objects[1].active_spins(), 1);
    assert!(!state.objects[0].is_spinning());
    assert!(!state.objects[2].is_spinning());

    state.apply(SceneEvent::Scrolled { scroll_y: H + 1.0 });
    assert_eq!(state.objects[2].active_spins(), 1);
    assert_eq!(state.objects[1].active_spins(), 1);
}

#[test]
fn section_spin_adds_fixed_delta_on_top_of_continuous_spin() {
    let mut state = make_state();
    state.apply(SceneEvent::Scrolled { scroll_y: H });
    let dt = 1.0 / 60.0;
    let frames = 120; // 2s, longer than the 1.5s spin
    for _ in 0..frames {
        state.step(dt);
    }
    let t = dt * frames as f32;
    let spun = state.objects[1].rotation;
    let still = state.objects[0].rotation;
    assert!(!state.objects[1].is_spinning());
    assert!((spun.x - (t * SPIN_RATE_X + SECTION_SPIN_DELTA[0])).abs() < 1e-3);
    assert!((spun.y - (t * SPIN_RATE_Y + SECTION_SPIN_DELTA[1])).abs() < 1e-3);
    assert!((still.x - t * SPIN_RATE_X).abs() < 1e-4);
}

#[test]
fn scrolling_back_up_spins_earlier_mesh_again() {
    let mut state = make_state();
    state.apply(SceneEvent::Scrolled { scroll_y: H });
    state.apply(SceneEvent::Scrolled { scroll_y: 0.0 });
    assert_eq!(state.current_section(), 0);
    assert_eq!(state.objects[0].active_spins(), 1);
}

#[test]
fn out_of_range_section_is_recorded_but_not_animated() {
    let mut state = make_state();
    state.apply(SceneEvent::Scrolled { scroll_y: H * 5.0 });
    assert_eq!(state.current_section(), 5);
    assert!(state.objects.iter().all(|o| !o.is_spinning()));
    state.step(0.1);
}

#[test]
fn initial_scroll_does_not_animate() {
    let state = make_state().with_initial_scroll(H * 2.0);
    assert_eq!(state.current_section(), 2);
    assert!(state.objects.iter().all(|o| !o.is_spinning()));
    assert!((state.rig.camera_y + 2.0 * OBJECTS_DISTANCE).abs() < 1e-5);
}

#[test]
fn queued_events_apply_in_order_before_step() {
    let mut state = make_state();
    let mut queue = EventQueue::new();
    queue.push(SceneEvent::Scrolled { scroll_y: H });
    queue.push(SceneEvent::Scrolled { scroll_y: H * 0.5 });
    queue.push(SceneEvent::PointerMoved {
        client_x: W * 0.75,
        client_y: H * 0.25,
    });
    state.apply_all(&mut queue);
    assert!(queue.is_empty());
    // both scroll events land in section 1: one crossing
    assert_eq!(state.objects[1].active_spins(), 1);
    assert_eq!(state.scroll_y, H * 0.5);
    assert_eq!(state.pointer, Vec2::new(0.25, -0.25));
}

#[test]
fn resize_updates_viewport_and_aspect() {
    let mut state = make_state();
    state.apply(SceneEvent::Resized {
        width: 400.0,
        height: 200.0,
        device_pixel_ratio: 3.0,
    });
    assert_eq!(state.viewport.pixel_ratio, 2.0);
    assert_eq!(state.viewport.backing_size(), (800, 400));
    assert!((state.rig.aspect - 2.0).abs() < 1e-6);
    // section math follows the new height
    state.apply(SceneEvent::Scrolled { scroll_y: 250.0 });
    assert_eq!(state.current_section(), 2);
}

#[test]
fn color_change_replaces_material_tint() {
    let mut state = make_state();
    assert_eq!(state.material_color.to_string(), DEFAULT_MATERIAL_COLOR);
    let c = Rgb::from_hex("#336699").unwrap();
    state.apply(SceneEvent::ColorChanged(c));
    assert_eq!(state.material_color, c);
}

#[test]
fn pointer_normalization_spans_half_unit() {
    assert_eq!(normalized_pointer(0.0, 0.0, W, H), Vec2::new(-0.5, -0.5));
    assert_eq!(normalized_pointer(W / 2.0, H / 2.0, W, H), Vec2::ZERO);
    assert_eq!(normalized_pointer(10.0, 10.0, 0.0, H), Vec2::ZERO);
}
