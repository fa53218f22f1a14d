//! Near-Earth object feed.
//!
//! A background worker periodically loads a NeoWs feed snapshot and sends the
//! decoded descriptors over a channel. The frame loop drains that channel only
//! at the frame boundary and appends one body per descriptor, without
//! deduplicating against earlier deliveries.

mod types;
mod worker;

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::body::{BodyDetails, BodyKind, DEFAULT_RADIUS, NeoDetails, NewBody};
use crate::registry::BodyRegistry;
use crate::scene::SceneGraph;
use crate::search::SearchState;
use crate::settings::StarMapSettings;
use crate::types::{FrameSet, TAU};

pub use types::{FeedSnapshot, NeoDescriptor};
pub use worker::{FeedDelivery, FeedWorker};

/// Name used when a descriptor carries none.
pub const UNNAMED_NEO: &str = "Unnamed object";

/// Inner edge of the band NEOs are placed in.
pub const NEO_BAND_INNER: f32 = 300.0;

/// Radial width of the NEO band.
pub const NEO_BAND_WIDTH: f32 = 200.0;

/// Vertical spread of NEO placement (total height).
pub const NEO_VERTICAL_SPREAD: f32 = 100.0;

/// Errors from loading a feed snapshot.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("failed to read feed snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed feed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed snapshot has no near_earth_objects section")]
    MissingObjects,
}

/// Decode a snapshot into descriptors, flattened in date order.
pub fn parse_snapshot(json: &str) -> Result<Vec<NeoDescriptor>, FeedError> {
    let snapshot: FeedSnapshot = serde_json::from_str(json)?;
    let groups = snapshot.near_earth_objects.ok_or(FeedError::MissingObjects)?;
    Ok(groups
        .values()
        .flatten()
        .map(NeoDescriptor::from_value_lenient)
        .collect())
}

/// Read and decode a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Vec<NeoDescriptor>, FeedError> {
    let json = std::fs::read_to_string(path)?;
    parse_snapshot(&json)
}

/// Strip parentheses and surrounding whitespace from a feed name.
pub fn clean_name(raw: &str) -> String {
    raw.replace(['(', ')'], "").trim().to_string()
}

/// Render radius for an estimated maximum diameter in kilometers.
pub fn neo_radius(diameter_km: Option<f64>) -> f32 {
    match diameter_km {
        Some(d) => (d as f32 * 10.0).clamp(2.0, 10.0),
        None => DEFAULT_RADIUS,
    }
}

fn neo_details(descriptor: &NeoDescriptor, original_name: String) -> NeoDetails {
    let orbital = descriptor.orbital_data.as_ref();
    NeoDetails {
        original_name,
        hazardous: descriptor.hazardous(),
        diameter_km: descriptor.diameter_max_km(),
        miss_distance_km: descriptor.miss_distance_km(),
        relative_velocity_kmh: descriptor.relative_velocity_kmh(),
        absolute_magnitude: descriptor.absolute_magnitude_h,
        first_observation: orbital.and_then(|o| o.first_observation_date.clone()),
        orbit_determination: orbital.and_then(|o| o.orbit_determination_date.clone()),
        closest_approach: descriptor.closest_approach(),
    }
}

/// One body per descriptor, spread around the orbit system.
///
/// Descriptor `i` of `n` sits at angle `i / n · 2π`, at a random distance in
/// the NEO band and a random height. NEOs do not orbit or self-rotate.
pub fn neo_bodies(descriptors: &[NeoDescriptor], rng: &mut impl Rng) -> Vec<NewBody> {
    let count = descriptors.len().max(1) as f32;
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let original_name = descriptor.name.clone().unwrap_or_default();
            let mut name = clean_name(&original_name);
            if name.is_empty() {
                name = UNNAMED_NEO.to_string();
            }

            let angle = index as f32 / count * TAU;
            let distance = NEO_BAND_INNER + rng.random_range(0.0..NEO_BAND_WIDTH);
            let height = rng.random_range(-0.5..0.5) * NEO_VERTICAL_SPREAD;
            let placement = Vec3::new(angle.cos() * distance, height, angle.sin() * distance);

            let radius = neo_radius(descriptor.diameter_max_km());
            let details = BodyDetails::NearEarthObject(neo_details(descriptor, original_name));
            NewBody::new(name, BodyKind::NearEarthObject, radius, details).with_placement(placement)
        })
        .collect()
}

/// Feed worker settings.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedSettings {
    /// Snapshot file read on every refresh.
    pub snapshot_path: PathBuf,
    /// Time between refreshes.
    pub refresh_interval: Duration,
}

/// Environment variable overriding the snapshot path.
pub const FEED_PATH_ENV: &str = "STARMAP_FEED";

impl Default for FeedSettings {
    fn default() -> Self {
        let snapshot_path = std::env::var_os(FEED_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets/neo_feed.json"));
        Self {
            snapshot_path,
            refresh_interval: Duration::from_secs(30 * 60),
        }
    }
}

/// Receiving end of the feed plus the worker that fills it.
#[derive(Resource)]
pub struct FeedLink {
    inbox: Mutex<Receiver<FeedDelivery>>,
    worker: Option<FeedWorker>,
}

impl FeedLink {
    /// Link draining `inbox`, optionally owning the worker that feeds it.
    pub fn new(inbox: Receiver<FeedDelivery>, worker: Option<FeedWorker>) -> Self {
        Self {
            inbox: Mutex::new(inbox),
            worker,
        }
    }

    /// Everything delivered since the last drain.
    pub fn drain(&self) -> Vec<FeedDelivery> {
        let Ok(inbox) = self.inbox.lock() else {
            return Vec::new();
        };
        let mut deliveries = Vec::new();
        loop {
            match inbox.try_recv() {
                Ok(delivery) => deliveries.push(delivery),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        deliveries
    }

    pub fn is_worker_running(&self) -> bool {
        self.worker.as_ref().is_some_and(FeedWorker::is_running)
    }

    /// Stop and join the worker. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            worker.stop();
        }
    }
}

/// Feed ingest counters.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FeedStats {
    /// Objects in the most recent snapshot; this is what the HUD shows.
    pub latest_snapshot: usize,
    /// Objects appended over every delivery.
    pub neo_count: usize,
    pub deliveries: usize,
}

/// Plugin ingesting feed deliveries at the frame boundary.
///
/// Does nothing until a [`FeedLink`] exists; [`FeedWorkerPlugin`] provides one,
/// headless setups may insert their own.
pub struct FeedPlugin;

impl Plugin for FeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FeedStats>()
            .add_systems(
                Update,
                ingest_feed
                    .in_set(FrameSet::Ingest)
                    .run_if(resource_exists::<FeedLink>),
            )
            .add_systems(Last, shutdown_feed_on_exit.run_if(resource_exists::<FeedLink>));
    }
}

/// Plugin starting the background feed worker.
pub struct FeedWorkerPlugin;

impl Plugin for FeedWorkerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_feed_worker);
    }
}

fn start_feed_worker(mut commands: Commands, settings: Res<StarMapSettings>) {
    let (worker, inbox) = FeedWorker::spawn(
        settings.feed.snapshot_path.clone(),
        settings.feed.refresh_interval,
    );
    info!(
        "Feed worker started ({}, every {:?})",
        settings.feed.snapshot_path.display(),
        settings.feed.refresh_interval
    );
    commands.insert_resource(FeedLink::new(inbox, Some(worker)));
}

/// Append every pending delivery before this frame's simulation pass.
fn ingest_feed(
    link: Res<FeedLink>,
    mut registry: ResMut<BodyRegistry>,
    mut scene: ResMut<SceneGraph>,
    mut stats: ResMut<FeedStats>,
    mut search: ResMut<SearchState>,
    settings: Res<StarMapSettings>,
) {
    let deliveries = link.drain();
    if deliveries.is_empty() {
        return;
    }

    let mut rng = rand::rng();
    for delivery in deliveries {
        match delivery {
            FeedDelivery::Snapshot(descriptors) => {
                let bodies = neo_bodies(&descriptors, &mut rng);
                let ids = registry.append(&mut scene, bodies);
                stats.latest_snapshot = ids.len();
                stats.neo_count += ids.len();
                stats.deliveries += 1;
                info!(
                    "Appended {} near-Earth objects ({} bodies total)",
                    ids.len(),
                    registry.len()
                );
            }
            FeedDelivery::Failed(error) => warn!("Feed refresh failed: {error}"),
        }
    }

    if search.open {
        search.refresh(registry.as_slice(), settings.max_suggestions);
    }
}

fn shutdown_feed_on_exit(mut exits: MessageReader<AppExit>, mut link: ResMut<FeedLink>) {
    if exits.read().count() > 0 {
        link.shutdown();
        info!("Feed worker stopped");
    }
}
