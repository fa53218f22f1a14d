//! Headless Bevy integration tests.
//!
//! These tests drive the star map core frame by frame without a window or GPU.

mod common;

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::mpsc::Sender;
use std::time::Duration;

use bevy::prelude::*;
use starmap::camera::{BODY_STANDOFF, CameraController, CameraPose, STAR_STANDOFF};
use starmap::feed::{FeedDelivery, FeedLink, FeedStats, FeedWorker};
use starmap::frame::FrameStats;
use starmap::scene::SceneGraph;
use starmap::search::SearchState;
use starmap::selection::{ClearSelection, NavigateRequest, PickRequest, ResetView, SelectedBody};
use starmap::types::{FrameSet, SimulationClock};

use common::{headless_app, registry, snapshot_descriptors};

#[test]
fn test_startup_populates_fixed_bodies() {
    let (app, _tx) = headless_app();

    let registry = registry(&app);
    assert_eq!(registry.len(), 7);
    assert_eq!(registry.as_slice()[0].name, "Sun");

    let scene = app.world().resource::<SceneGraph>();
    assert_eq!(scene.body_count(), registry.len());
}

#[test]
fn test_every_frame_visits_every_body() {
    let (mut app, _tx) = headless_app();
    for _ in 0..5 {
        app.update();
    }

    let stats = *app.world().resource::<FrameStats>();
    // Startup frame plus five more.
    assert_eq!(stats.passes, 6);
    assert_eq!(stats.last_visited, 7);

    let clock = app.world().resource::<SimulationClock>();
    assert_eq!(clock.frames, 6);
    assert!(clock.elapsed >= 0.0);
}

#[test]
fn test_delivery_is_visible_to_the_same_frame() {
    let (mut app, tx) = headless_app();

    tx.send(FeedDelivery::Snapshot(snapshot_descriptors())).unwrap();
    app.update();

    assert_eq!(registry(&app).len(), 10);
    let stats = *app.world().resource::<FrameStats>();
    assert_eq!(stats.last_visited, 10);
    let stats = *app.world().resource::<FeedStats>();
    assert_eq!(stats.neo_count, 3);
    assert_eq!(stats.latest_snapshot, 3);
}

/// Sends one snapshot from inside the frame, after ingest has already run.
#[derive(Resource)]
struct LateSender(Mutex<Option<Sender<FeedDelivery>>>);

fn send_late(late: Res<LateSender>) {
    let Ok(mut slot) = late.0.lock() else {
        return;
    };
    if let Some(tx) = slot.take() {
        tx.send(FeedDelivery::Snapshot(snapshot_descriptors())).unwrap();
    }
}

#[test]
fn test_mid_frame_delivery_waits_for_next_frame() {
    let (mut app, tx) = headless_app();
    app.insert_resource(LateSender(Mutex::new(Some(tx))))
        .add_systems(Update, send_late.in_set(FrameSet::Clock));

    app.update();
    assert_eq!(app.world().resource::<FrameStats>().last_visited, 7);
    assert_eq!(registry(&app).len(), 7);

    app.update();
    assert_eq!(app.world().resource::<FrameStats>().last_visited, 10);
}

#[test]
fn test_deliveries_accumulate_without_dedup() {
    let (mut app, tx) = headless_app();

    tx.send(FeedDelivery::Snapshot(snapshot_descriptors())).unwrap();
    tx.send(FeedDelivery::Snapshot(snapshot_descriptors())).unwrap();
    app.update();
    tx.send(FeedDelivery::Failed("timeout".into())).unwrap();
    app.update();

    let registry = registry(&app);
    assert_eq!(registry.len(), 13);
    let apophis: Vec<_> = registry
        .iter()
        .filter(|b| b.name == "99942 Apophis 2004 MN4")
        .map(|b| b.id)
        .collect();
    assert_eq!(apophis.len(), 2);
    assert_ne!(apophis[0], apophis[1]);
    let stats = *app.world().resource::<FeedStats>();
    assert_eq!(stats.deliveries, 2);
    assert_eq!(stats.neo_count, 6);
    // The HUD count tracks the latest snapshot, not the running total.
    assert_eq!(stats.latest_snapshot, 3);
}

#[test]
fn test_click_at_screen_center_selects_sun() {
    let (mut app, _tx) = headless_app();

    app.world_mut().write_message(PickRequest {
        ndc: Vec2::ZERO,
        aspect: 16.0 / 9.0,
    });
    app.update();

    let sun = registry(&app).find_by_name("Sun").unwrap().id;
    assert_eq!(app.world().resource::<SelectedBody>().body, Some(sun));
}

#[test]
fn test_click_on_empty_space_keeps_selection() {
    let (mut app, _tx) = headless_app();
    let sun = registry(&app).find_by_name("Sun").unwrap().id;
    app.world_mut().resource_mut::<SelectedBody>().select(sun);

    // Top-left corner looks far above the ecliptic.
    app.world_mut().write_message(PickRequest {
        ndc: Vec2::new(-1.0, 1.0),
        aspect: 16.0 / 9.0,
    });
    app.update();

    assert_eq!(app.world().resource::<SelectedBody>().body, Some(sun));
}

#[test]
fn test_navigate_request_moves_camera_and_clears_search() {
    let (mut app, _tx) = headless_app();
    app.world_mut().resource_mut::<SearchState>().open = true;

    app.world_mut().write_message(NavigateRequest("Jupiter".into()));
    app.update();

    let jupiter = registry(&app).find_by_name("Jupiter").unwrap().id;
    let camera = app.world().resource::<CameraController>();
    assert!((camera.pose.position.distance(camera.pose.target) - BODY_STANDOFF).abs() < 1e-2);
    assert_eq!(app.world().resource::<SelectedBody>().body, Some(jupiter));
    assert_eq!(*app.world().resource::<SearchState>(), SearchState::default());
}

#[test]
fn test_navigate_to_sun_uses_star_standoff() {
    let (mut app, _tx) = headless_app();
    app.world_mut().write_message(NavigateRequest("Sun".into()));
    app.update();

    let camera = app.world().resource::<CameraController>();
    assert!((camera.pose.position.length() - STAR_STANDOFF).abs() < 1e-2);
    assert_eq!(camera.pose.target, Vec3::ZERO);
}

#[test]
fn test_navigate_to_unknown_name_changes_nothing() {
    let (mut app, _tx) = headless_app();
    app.world_mut().write_message(NavigateRequest("Pluto".into()));
    app.update();

    let camera = app.world().resource::<CameraController>();
    assert_eq!(camera.pose, CameraPose::default());
    assert_eq!(app.world().resource::<SelectedBody>().body, None);
}

#[test]
fn test_reset_view_restores_pose_and_clears_selection() {
    let (mut app, _tx) = headless_app();
    app.world_mut().write_message(NavigateRequest("Mars".into()));
    app.update();
    {
        let mut camera = app.world_mut().resource_mut::<CameraController>();
        camera.pointer_down(Vec2::ZERO);
        camera.pointer_move(Vec2::new(80.0, 30.0));
        camera.pointer_up();
    }

    app.world_mut().write_message(ResetView);
    app.update();

    let camera = app.world().resource::<CameraController>();
    assert_eq!(camera.pose, CameraPose::default());
    assert_eq!(camera.rotation, Default::default());
    assert_eq!(app.world().resource::<SelectedBody>().body, None);

    let scene = app.world().resource::<SceneGraph>();
    assert_eq!(scene.root().transform.rotation, Quat::IDENTITY);
}

#[test]
fn test_clear_selection_leaves_camera() {
    let (mut app, _tx) = headless_app();
    app.world_mut().write_message(NavigateRequest("Venus".into()));
    app.update();
    let pose = app.world().resource::<CameraController>().pose;

    app.world_mut().write_message(ClearSelection);
    app.update();

    assert_eq!(app.world().resource::<SelectedBody>().body, None);
    assert_eq!(app.world().resource::<CameraController>().pose, pose);
}

#[test]
fn test_drag_rotation_reaches_scene_root() {
    let (mut app, _tx) = headless_app();
    {
        let mut camera = app.world_mut().resource_mut::<CameraController>();
        camera.pointer_down(Vec2::ZERO);
        camera.pointer_move(Vec2::new(100.0, 0.0));
    }
    app.update();

    let expected = app.world().resource::<CameraController>().rotation.quat();
    let scene = app.world().resource::<SceneGraph>();
    assert_eq!(scene.root().transform.rotation, expected);
    assert_ne!(expected, Quat::IDENTITY);
}

#[test]
fn test_app_exit_stops_feed_worker() {
    let (mut app, _tx) = headless_app();
    let (worker, rx) = FeedWorker::spawn(
        PathBuf::from("/nonexistent/starmap-feed.json"),
        Duration::from_secs(3600),
    );
    app.insert_resource(FeedLink::new(rx, Some(worker)));
    assert!(app.world().resource::<FeedLink>().is_worker_running());

    app.world_mut().write_message(AppExit::Success);
    app.update();

    assert!(!app.world().resource::<FeedLink>().is_worker_running());
}
