use anyhow::Result;
use std::sync::Arc;

use askama::Template;
use tower_http::services::ServeDir;
use tracing::{error, warn};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};
use crate::groupie::{Artist, GroupieClient};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    artists: &'a [Artist],
}

#[derive(Template)]
#[template(path = "details.html")]
struct DetailsTemplate<'a> {
    artist: &'a Artist,
}

#[derive(Deserialize, Debug)]
struct DetailsParams {
    id: Option<String>,
}

async fn index(State(artists): State<SharedArtists>) -> Response {
    let template = IndexTemplate { artists: &artists };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Error rendering the artist list: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error rendering home page").into_response()
        }
    }
}

async fn artist_details(
    State(groupie_client): State<SharedGroupieClient>,
    Query(params): Query<DetailsParams>,
) -> Response {
    // An empty id parameter is indistinguishable from an absent one.
    let raw_id = params.id.unwrap_or_default();
    if raw_id.is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing artist ID").into_response();
    }

    let id = match raw_id.parse::<u32>() {
        Ok(id) => id,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid artist ID").into_response(),
    };

    let artist = match groupie_client.fetch_artist_details(id).await {
        Ok(artist) => artist,
        Err(err) => {
            // Every aggregation failure maps to the same 404; the real
            // cause is only visible in the logs.
            warn!("Could not aggregate artist {}: {}", id, err);
            return (StatusCode::NOT_FOUND, "Artist not found").into_response();
        }
    };

    let template = DetailsTemplate { artist: &artist };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Error rendering details for artist {}: {}", id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error rendering artist details",
            )
                .into_response()
        }
    }
}

pub fn make_app(
    config: ServerConfig,
    artists: Vec<Artist>,
    groupie_client: GroupieClient,
) -> Router {
    let state = ServerState {
        config: config.clone(),
        artists: Arc::new(artists),
        groupie_client: Arc::new(groupie_client),
    };

    let css_service = ServeDir::new(&config.css_dir_path);

    Router::new()
        .route("/", get(index))
        .route("/artist", get(artist_details))
        .nest_service("/css", css_service)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    artists: Vec<Artist>,
    groupie_client: GroupieClient,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    css_dir_path: String,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
        css_dir_path,
    };
    let app = make_app(config, artists, groupie_client);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
