// Host-side end-to-end tests: input -> field -> frame -> draw calls.

mod common;

use common::{seeded_visualizer, DrawCall, FixedAnalyzer, RecordingSurface, ScriptedInput};
use glam::Vec2;
use particles_core::*;

#[test]
fn frame_starts_with_a_full_canvas_fade() {
    let mut vis = seeded_visualizer(5, 800.0, 600.0);
    let mut surface = RecordingSurface::default();
    vis.frame(&mut surface, Sensitivity::default());

    assert_eq!(surface.calls.len(), 1 + 5);
    assert_eq!(
        surface.calls[0],
        DrawCall::Rect {
            origin: Vec2::ZERO,
            size: Vec2::new(800.0, 600.0),
            color: Color::black(FADE_ALPHA),
        }
    );
    assert!(surface.calls[1..]
        .iter()
        .all(|c| matches!(c, DrawCall::Circle { .. })));
    assert_eq!(vis.frame_count(), 1);
}

#[test]
fn three_particles_without_audio_follow_position() {
    let mut vis = seeded_visualizer(3, 800.0, 600.0);
    let mut surface = RecordingSurface::default();
    vis.frame(&mut surface, Sensitivity::default());

    assert_eq!(vis.audio_state(), SourceState::Uninitialized);
    let circles = surface.circles();
    for (p, (center, radius, color)) in vis.field().particles().iter().zip(circles) {
        assert_eq!(p.hue, (p.position.x / 800.0) * 360.0);
        assert_eq!(p.current_size, p.base_size);
        assert_eq!(center, p.position);
        assert_eq!(radius, p.base_size);
        assert_eq!(color, Color::vivid(p.hue));
    }
}

#[test]
fn mid_scale_audio_sizes_every_particle_alike() {
    let mut vis = seeded_visualizer(50, 800.0, 600.0);
    assert_eq!(
        vis.handle_input(InputEvent::Start),
        InputOutcome::RequestAudioAccess
    );
    vis.resolve_audio(Ok(FixedAnalyzer::filled(128, 128)));
    assert_eq!(vis.audio_state(), SourceState::Connected);

    let sensitivity = Sensitivity::from_slider(30.0);
    let mut surface = RecordingSurface::default();
    vis.frame(&mut surface, sensitivity);
    for p in vis.field().particles() {
        assert_eq!(p.current_size, p.base_size + 10.0 * sensitivity.multiplier());
        assert_eq!(p.hue, 360.0);
    }
}

#[test]
fn snapshot_is_sampled_every_frame() {
    let analyzer = FixedAnalyzer::filled(128, 0);
    let handle = analyzer.clone();
    let mut vis = seeded_visualizer(10, 800.0, 600.0);
    vis.handle_input(InputEvent::Start);
    vis.resolve_audio(Ok(analyzer));

    let mut surface = RecordingSurface::default();
    vis.frame(&mut surface, Sensitivity::default());
    for p in vis.field().particles() {
        assert_eq!(p.current_size, p.base_size);
    }

    handle.set_all(64);
    vis.frame(&mut surface, Sensitivity::default());
    for p in vis.field().particles() {
        assert_eq!(p.current_size, p.base_size + 5.0);
    }
    assert_eq!(*handle.reads.borrow(), 2);
}

#[test]
fn start_requests_audio_only_once() {
    let mut vis = seeded_visualizer(1, 100.0, 100.0);
    let mut input = ScriptedInput::new([InputEvent::Start, InputEvent::Start]);
    assert_eq!(vis.pump_input(&mut input), InputOutcome::RequestAudioAccess);
    assert!(input.events.is_empty());

    let mut again = ScriptedInput::new([InputEvent::Start]);
    assert_eq!(vis.pump_input(&mut again), InputOutcome::Handled);
    assert_eq!(vis.audio_state(), SourceState::RequestingAccess);
}

#[test]
fn denied_microphone_keeps_the_loop_running() {
    let mut vis = seeded_visualizer(20, 800.0, 600.0);
    vis.handle_input(InputEvent::Start);

    let mut surface = RecordingSurface::default();
    // Frames keep rendering while the permission prompt is open.
    for _ in 0..3 {
        vis.frame(&mut surface, Sensitivity::default());
    }
    vis.resolve_audio(Err(VisualizerError::PermissionDenied(
        "NotAllowedError".into(),
    )));
    for _ in 0..3 {
        vis.frame(&mut surface, Sensitivity::default());
    }

    assert_eq!(vis.audio_state(), SourceState::Denied);
    assert_eq!(vis.frame_count(), 6);
    assert_eq!(surface.circles().len(), 6 * 20);
    for p in vis.field().particles() {
        assert_eq!(p.current_size, p.base_size);
    }
    assert_eq!(vis.handle_input(InputEvent::Start), InputOutcome::Handled);
}

#[test]
fn resize_changes_bounds_but_not_particles() {
    let mut vis = seeded_visualizer(30, 800.0, 600.0);
    let before: Vec<Vec2> = vis.field().particles().iter().map(|p| p.position).collect();

    vis.handle_input(InputEvent::Resize {
        width: 320.0,
        height: 200.0,
    });
    assert_eq!(vis.canvas(), CanvasSize::new(320.0, 200.0));
    let after: Vec<Vec2> = vis.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);

    let mut surface = RecordingSurface::default();
    vis.frame(&mut surface, Sensitivity::default());
    match &surface.calls[0] {
        DrawCall::Rect { size, .. } => assert_eq!(*size, Vec2::new(320.0, 200.0)),
        other => panic!("expected fade rect, got {:?}", other),
    }
}

#[test]
fn resize_with_bogus_dimensions_clamps_to_zero() {
    let mut vis = seeded_visualizer(2, 800.0, 600.0);
    vis.handle_input(InputEvent::Resize {
        width: -10.0,
        height: f32::NAN,
    });
    assert_eq!(vis.canvas(), CanvasSize::new(0.0, 0.0));
    let mut surface = RecordingSurface::default();
    vis.frame(&mut surface, Sensitivity::default());
    for p in vis.field().particles() {
        assert!(p.hue.is_finite());
    }
}

#[test]
fn pointer_moves_kick_nearby_particles_toward_pointer() {
    let canvas = CanvasSize::new(800.0, 600.0);
    let field = ParticleField::from_particles(vec![
        Particle::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 2.0, 0.0),
        Particle::new(Vec2::new(700.0, 300.0), Vec2::ZERO, 2.0, 0.0),
    ]);
    let mut vis: Visualizer<FixedAnalyzer> = Visualizer::with_field(field, canvas);
    let mut input = ScriptedInput::new([
        InputEvent::PointerMove { x: 350.0, y: 300.0 },
        InputEvent::PointerMove {
            x: f32::NAN,
            y: 0.0,
        },
    ]);
    assert_eq!(vis.pump_input(&mut input), InputOutcome::Handled);

    let near = &vis.field().particles()[0];
    assert!((near.velocity - Vec2::new(-REPULSION_IMPULSE, 0.0)).length() < 1e-6);
    let far = &vis.field().particles()[1];
    assert_eq!(far.velocity, Vec2::ZERO);
}

#[test]
fn invalid_config_is_rejected() {
    let config = VisualizerConfig::default().with_particle_count(0);
    let result: Result<Visualizer<FixedAnalyzer>, _> =
        Visualizer::new(&config, CanvasSize::new(10.0, 10.0));
    assert!(matches!(result, Err(VisualizerError::EmptyField)));
}

#[test]
fn default_config_builds_the_full_population() {
    let vis = seeded_visualizer(DEFAULT_PARTICLE_COUNT, 1280.0, 720.0);
    assert_eq!(vis.field().len(), 1000);
}
