use axum::extract::FromRef;

use super::ServerConfig;
use crate::groupie::{Artist, GroupieClient};
use std::sync::Arc;

/// The artist list fetched once at startup. Read-only afterwards, so it is
/// shared without a lock.
pub type SharedArtists = Arc<Vec<Artist>>;
pub type SharedGroupieClient = Arc<GroupieClient>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub artists: SharedArtists,
    pub groupie_client: SharedGroupieClient,
}

impl FromRef<ServerState> for SharedArtists {
    fn from_ref(input: &ServerState) -> Self {
        input.artists.clone()
    }
}

impl FromRef<ServerState> for SharedGroupieClient {
    fn from_ref(input: &ServerState) -> Self {
        input.groupie_client.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
