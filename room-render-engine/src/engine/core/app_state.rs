use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Transition to running once every load has succeeded or given up
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_settled() {
        info!("→ All assets settled, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

/// Push loading status to the embedding page whenever it changes.
pub fn update_loading_frontend(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.is_changed() {
        return;
    }
    match serde_json::to_value(&*loading_progress) {
        Ok(params) => rpc_interface.send_notification("loading_state", params),
        Err(e) => error!("Failed to serialise loading state: {}", e),
    }
}
