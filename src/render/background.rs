//! Background rendering: starfield and the Sun's light.

use bevy::prelude::*;
use rand::Rng;

use crate::scene::SceneGraph;
use crate::types::FrameSet;

/// Number of background stars.
const STAR_COUNT: usize = 3000;

/// Edge length of the cube the stars are scattered in.
const STARFIELD_EXTENT: f32 = 4000.0;

/// Starfield rotation about Y per frame.
const STARFIELD_DRIFT: f32 = 0.0001;

/// The starfield parent; carries its own slow drift.
#[derive(Component, Default)]
pub struct Starfield {
    drift: f32,
}

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting))
            .add_systems(Update, rotate_starfield.in_set(FrameSet::Present));
    }
}

/// Random star position inside the starfield cube.
pub fn star_position(rng: &mut impl Rng) -> Vec3 {
    let half = STARFIELD_EXTENT / 2.0;
    Vec3::new(
        rng.random_range(-half..half),
        rng.random_range(-half..half),
        rng.random_range(-half..half),
    )
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
        emissive: LinearRgba::WHITE * 0.5,
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));

    let mut rng = rand::rng();
    commands
        .spawn((Starfield::default(), Transform::IDENTITY, Visibility::default()))
        .with_children(|parent| {
            for _ in 0..STAR_COUNT {
                let scale = rng.random_range(0.5..1.5);
                parent.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(star_material.clone()),
                    Transform::from_translation(star_position(&mut rng))
                        .with_scale(Vec3::splat(scale)),
                ));
            }
        });

    info!("Spawned {} background stars", STAR_COUNT);
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        PointLight {
            intensity: 2.0e9,
            range: 3000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));
}

/// Turn the starfield with the scene root plus its own drift.
fn rotate_starfield(scene: Res<SceneGraph>, mut query: Query<(&mut Starfield, &mut Transform)>) {
    let root = scene.root().transform.rotation;
    for (mut starfield, mut transform) in query.iter_mut() {
        starfield.drift += STARFIELD_DRIFT;
        transform.rotation = root * Quat::from_rotation_y(starfield.drift);
    }
}
