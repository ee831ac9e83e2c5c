//! End-to-end behaviour of a render session against the recording renderer.

use std::f64::consts::TAU;

use kiepert_core::KiepertError;
use kiepert_geometry::{KiepertSurface, MarkerCommand, MarkerPosition, Surface};
use kiepert_math::{Point3, Transform};
use kiepert_render::{
    Camera, DrawUniforms, RecordingRenderer, RenderSession, SessionConfig, TextureConfig,
    TextureInfo,
};

fn config() -> SessionConfig {
    SessionConfig {
        grid_step_degrees: 20.0,
        ..SessionConfig::default()
    }
}

#[test]
fn test_pipeline_failure_is_fatal() {
    let mut renderer = RecordingRenderer::failing("fragment shader: 0:3 syntax error");
    let err = RenderSession::new(config(), &mut renderer).unwrap_err();
    assert!(matches!(err, KiepertError::Pipeline(_)));
    assert!(err.to_string().contains("syntax error"));
}

#[test]
fn test_frame_draws_surface_then_marker() {
    let mut renderer = RecordingRenderer::new();
    let session = RenderSession::new(config(), &mut renderer).unwrap();
    session.render_frame(&mut renderer).unwrap();

    let frame = renderer.last_frame();
    assert_eq!(frame.len(), 2);
    assert_eq!(renderer.label(frame[0].mesh), Some("surface"));
    assert_eq!(renderer.label(frame[1].mesh), Some("marker"));
    assert_eq!(frame[0].uniforms.color, [1.0, 1.0, 0.0, 1.0]);
    assert_eq!(frame[0].uniforms.use_texture, 0);
}

#[test]
fn test_marker_drawn_at_projected_point() {
    let mut renderer = RecordingRenderer::new();
    let mut session = RenderSession::new(config(), &mut renderer).unwrap();
    session.set_marker_position(MarkerPosition::new(1.3, 4.1));
    session.render_frame(&mut renderer).unwrap();

    let expected_point = KiepertSurface::new(session.config().surface).point_at(1.3, 4.1);
    assert_eq!(session.marker_translation(), expected_point);

    let expected = DrawUniforms::new(
        &Camera::default(),
        &Transform::from_translation(expected_point),
        session.config().marker.color,
        false,
    );
    assert_eq!(renderer.last_frame()[1].uniforms, expected);
}

#[test]
fn test_thousand_commands_clamp_exactly() {
    let mut renderer = RecordingRenderer::new();
    let mut session = RenderSession::new(config(), &mut renderer).unwrap();

    for _ in 0..1000 {
        session.handle_command(MarkerCommand::IncreaseU);
        session.handle_command(MarkerCommand::DecreaseV);
    }
    assert_eq!(session.marker_position().u(), TAU);
    assert_eq!(session.marker_position().v(), 0.0);

    for _ in 0..1000 {
        session.handle_command(MarkerCommand::DecreaseU);
        session.handle_command(MarkerCommand::IncreaseV);
    }
    assert_eq!(session.marker_position().u(), 0.0);
    assert_eq!(session.marker_position().v(), TAU);
}

#[test]
fn test_marker_follows_input_between_frames() {
    let mut renderer = RecordingRenderer::new();
    let mut session = RenderSession::new(config(), &mut renderer).unwrap();
    let surface = KiepertSurface::new(session.config().surface);

    session.render_frame(&mut renderer).unwrap();
    let first = renderer.last_frame()[1].uniforms;

    session.handle_command(MarkerCommand::IncreaseV);
    session.render_frame(&mut renderer).unwrap();
    let second = renderer.last_frame()[1].uniforms;

    assert_ne!(first.model_view_projection, second.model_view_projection);
    let pos = session.marker_position();
    assert_eq!(session.marker_translation(), surface.point_at(pos.u(), pos.v()));
    assert_eq!(renderer.frame_count(), 2);
}

#[test]
fn test_texture_load_requests_extra_pass() {
    let config = SessionConfig {
        texture: TextureConfig {
            enabled: true,
            path: Some("surface.png".into()),
        },
        ..config()
    };
    let mut renderer = RecordingRenderer::new();
    let mut session = RenderSession::new(config, &mut renderer).unwrap();
    session.render_frame(&mut renderer).unwrap();

    if session.texture_loaded(TextureInfo { width: 256, height: 256 }) {
        session.render_frame(&mut renderer).unwrap();
    }
    assert_eq!(renderer.frame_count(), 2);
    assert_eq!(renderer.last_frame()[0].uniforms.use_texture, 1);
    assert_eq!(renderer.last_frame()[1].uniforms.use_texture, 0);
}

#[test]
fn test_orbit_changes_surface_transform_only_through_camera() {
    let mut renderer = RecordingRenderer::new();
    let mut session = RenderSession::new(config(), &mut renderer).unwrap();
    session.render_frame(&mut renderer).unwrap();
    let before = renderer.last_frame()[0].uniforms;

    session.camera_mut().orbit(0.5, 0.0);
    session.render_frame(&mut renderer).unwrap();
    let after = renderer.last_frame()[0].uniforms;

    assert_ne!(before.model_view_projection, after.model_view_projection);
    assert_eq!(
        after,
        DrawUniforms::new(session.camera(), &Transform::identity(), [1.0, 1.0, 0.0, 1.0], false)
    );
}

#[test]
fn test_surface_bounds_contain_marker() {
    let mut renderer = RecordingRenderer::new();
    let config = SessionConfig {
        grid_step_degrees: 5.0,
        ..SessionConfig::default()
    };
    let mut session = RenderSession::new(config, &mut renderer).unwrap();
    let bounds = session.surface_stats().bounds.unwrap();

    // On a 5° grid the marker at a grid angle lies on a mesh vertex.
    session.set_marker_position(MarkerPosition::new(90f64.to_radians(), 45f64.to_radians()));
    let p: Point3 = session.marker_translation();
    assert!(bounds.expand(1e-9).contains_point(p), "{:?} outside {:?}", p, bounds);
}

#[test]
fn test_untessellatable_step_is_rejected_before_upload() {
    for step in [1e-12, 0.01] {
        let config = SessionConfig {
            grid_step_degrees: step,
            ..SessionConfig::default()
        };
        let mut renderer = RecordingRenderer::new();
        let err = RenderSession::new(config, &mut renderer).unwrap_err();
        assert!(matches!(err, KiepertError::Config(_)), "step {}: {}", step, err);
        assert!(renderer.uploads().is_empty());
    }
}
