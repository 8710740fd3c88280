//! Integration tests for the scene graph and frame building.

use approx::assert_relative_eq;
use cartviz_model::{CartpoleModel, CartpoleState};
use cartviz_protocol::ThemeMode;
use cartviz_scene::{
    CartpoleGeometry, ObjModel, Quat, SceneGraph, Vec3, build_frame, map_state, parse_obj, z_axis,
};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

/// A crude wheel: a square hub and a square tire, 36 units across before scaling.
fn wheel() -> ObjModel {
    parse_obj(
        "\
v -18 -18 -2
v 18 -18 -2
v 18 18 -2
v -18 18 -2
v -18 -18 2
v 18 -18 2
v 18 18 2
v -18 18 2
o plastic
f 1 2 3 4
o rubber
f 5 6 7 8
",
    )
    .unwrap()
}

fn ready_scene() -> SceneGraph {
    let mut scene = SceneGraph::new(CartpoleGeometry::default());
    scene.attach_rig(wheel(), 800.0, 600.0);
    scene
}

fn model(position: f64, angle: f64) -> CartpoleModel {
    CartpoleModel::from_state(CartpoleState::new(position, 0.0, angle))
}

#[test]
fn apply_is_a_noop_until_the_rig_loads() {
    let mut scene = SceneGraph::new(CartpoleGeometry::default());
    let before = scene.clone();

    assert!(!scene.apply(&model(1.0, 0.5), ThemeMode::Dark));
    assert!(!scene.resize(1024.0, 768.0));
    assert!(build_frame(&scene).is_none());
    assert_eq!(scene, before);
}

#[test]
fn apply_skips_invalid_models() {
    let mut scene = ready_scene();
    let mut m = model(1.0, 0.5);
    m.is_valid = false;
    assert!(!scene.apply(&m, ThemeMode::Light));
    assert_eq!(scene.pole.transform.position, Vec3::zeros());
}

#[test]
fn apply_moves_pole_cart_and_wheels() {
    let g = CartpoleGeometry::default();
    let mut scene = ready_scene();
    assert!(scene.apply(&model(2.0, FRAC_PI_2), ThemeMode::Light));

    assert_relative_eq!(
        scene.pole.transform.position,
        Vec3::new(2.0, g.pole_radius, 0.0),
        epsilon = 1e-15
    );
    assert_relative_eq!(
        scene.pole.transform.rotation.angle_about(&z_axis()),
        -FRAC_PI_2,
        epsilon = 1e-12
    );

    let rig = scene.rig.as_ref().unwrap();
    assert_relative_eq!(rig.cart.transform.position, Vec3::new(2.0, -g.cart_height / 2.0, 0.0));
    let expected = Quat::from_axis_angle(&z_axis(), -2.0 / g.wheel_radius);
    for wheel in &rig.wheels {
        assert_eq!(wheel.transform.rotation, expected);
    }
}

#[test]
fn wheels_are_mounted_under_the_cart_corners() {
    let g = CartpoleGeometry::default();
    let scene = ready_scene();
    let rig = scene.rig.as_ref().unwrap();
    for (wheel, (x, z)) in rig.wheels.iter().zip(g.wheel_offsets()) {
        assert_relative_eq!(wheel.transform.position, Vec3::new(x, -g.cart_height / 2.0, z));
        let plastic = wheel.meshes.iter().find(|m| m.name == "plastic").unwrap();
        assert_eq!(plastic.material.color.to_hex(), 0x666666);
        // 18 units scaled down.
        assert_relative_eq!(plastic.vertices[1].x, 18.0 * g.wheel_scale, epsilon = 1e-15);
    }
}

#[test]
fn full_wheel_turn_returns_to_start() {
    let g = CartpoleGeometry::default();
    let mut scene = ready_scene();
    scene.apply(&model(g.wheel_radius * TAU, 0.0), ThemeMode::Light);
    let wheel = &scene.rig.as_ref().unwrap().wheels[0];
    let p = wheel.transform.rotation.rotate(&Vec3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(p, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
}

#[test]
fn frame_background_follows_theme() {
    let mut scene = ready_scene();
    scene.apply(&model(0.0, 0.0), ThemeMode::Dark);
    assert_eq!(build_frame(&scene).unwrap().background.to_hex(), 0x1a1a1a);
    scene.apply(&model(0.0, 0.0), ThemeMode::Light);
    assert_eq!(build_frame(&scene).unwrap().background.to_hex(), 0xffffff);
}

#[test]
fn frame_is_painted_back_to_front() {
    let mut scene = ready_scene();
    scene.apply(&model(0.05, 0.2), ThemeMode::Light);
    let frame = build_frame(&scene).unwrap();

    assert!(!frame.triangles.is_empty());
    assert_eq!((frame.width, frame.height), (800.0, 600.0));
    for pair in frame.triangles.windows(2) {
        assert!(pair[0].depth >= pair[1].depth);
    }
}

#[test]
fn camera_centers_the_pivot_horizontally() {
    let scene = ready_scene();
    let camera = scene.camera().unwrap();
    let (x, y, depth) = camera.project(&Vec3::zeros()).unwrap();
    assert_relative_eq!(x, 400.0, epsilon = 1e-9);
    // Camera looks slightly down at a point above the pivot.
    assert!(y > 300.0);
    assert!(depth > 0.4 && depth < 0.6);
}

#[test]
fn resize_reaches_the_camera() {
    let mut scene = ready_scene();
    assert!(scene.resize(1200.0, 400.0));
    assert_relative_eq!(scene.camera().unwrap().aspect, 3.0);
    assert_eq!(build_frame(&scene).unwrap().width, 1200.0);
}

proptest! {
    #[test]
    fn pole_lift_is_bounded_and_symmetric(angle in -10.0..10.0_f64, position in -5.0..5.0_f64) {
        let g = CartpoleGeometry::default();
        let t = map_state(&CartpoleState::new(position, 0.0, angle), &g, ThemeMode::Light);
        let mirrored = map_state(&CartpoleState::new(position, 0.0, -angle), &g, ThemeMode::Light);
        prop_assert!(t.pole_position.y.abs() <= g.pole_radius);
        prop_assert_eq!(t.pole_position.y, mirrored.pole_position.y);
    }

    #[test]
    fn wheels_roll_without_slipping(position in -5.0..5.0_f64) {
        let g = CartpoleGeometry::default();
        let t = map_state(&CartpoleState::new(position, 0.0, 0.0), &g, ThemeMode::Light);
        prop_assert!((t.wheel_rotation_z * g.wheel_radius + position).abs() < 1e-12);
    }
}
