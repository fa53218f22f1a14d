//! Runtime settings for the star map.

use bevy::prelude::*;

use crate::camera::CameraTuning;
use crate::feed::FeedSettings;
use crate::search::MAX_SUGGESTIONS;

/// Tunables read by the camera, search and feed systems.
///
/// Insert before [`crate::StarMapPlugin`] to override the defaults.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct StarMapSettings {
    pub camera: CameraTuning,
    pub max_suggestions: usize,
    pub feed: FeedSettings,
}

impl Default for StarMapSettings {
    fn default() -> Self {
        Self {
            camera: CameraTuning::default(),
            max_suggestions: MAX_SUGGESTIONS,
            feed: FeedSettings::default(),
        }
    }
}
