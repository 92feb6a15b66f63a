use bevy::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    #[default]
    Pending,
    Loaded,
    /// Not configured, nothing to wait for.
    Skipped,
    Failed,
}

impl AssetStatus {
    pub fn is_settled(self) -> bool {
        self != AssetStatus::Pending
    }
}

/// Outcome of each asynchronous load, reported to the frontend while loading.
#[derive(Resource, Default, Debug, Clone, Serialize)]
pub struct LoadingProgress {
    pub manifest: AssetStatus,
    pub model: AssetStatus,
    pub environment: AssetStatus,
}

impl LoadingProgress {
    /// Every load either succeeded or gave up.
    pub fn is_settled(&self) -> bool {
        self.manifest.is_settled() && self.model.is_settled() && self.environment.is_settled()
    }
}
