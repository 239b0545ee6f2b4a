//! Mock groupie tracker upstream
//!
//! An in-process axum router serving the five upstream endpoints with
//! fixture data, so tests never touch the real API. Artist 3 exists but
//! its relation endpoint answers 500, which lets tests exercise the
//! all-or-nothing aggregation contract.

use super::constants::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counters shared between the mock upstream and the test, for asserting
/// how often an endpoint was actually hit.
#[derive(Clone, Default)]
pub struct UpstreamCounters {
    pub artists_list_hits: Arc<AtomicUsize>,
}

fn known_artists() -> Vec<(u32, &'static str)> {
    vec![
        (ARTIST_1_ID, ARTIST_1_NAME),
        (ARTIST_2_ID, ARTIST_2_NAME),
        (BROKEN_RELATION_ARTIST_ID, BROKEN_RELATION_ARTIST_NAME),
    ]
}

fn is_known(id: u32) -> bool {
    known_artists().iter().any(|(known, _)| *known == id)
}

fn artist_json(id: u32, name: &str) -> Value {
    // The URL fields mirror what the real upstream serves; the server
    // under test only uses them as diagnostics.
    json!({
        "id": id,
        "image": format!("https://upstream.test/images/{}.jpeg", id),
        "name": name,
        "members": ["Alice", "Bob"],
        "creationDate": 1990 + id,
        "firstAlbum": "01-01-1999",
        "locations": format!("https://upstream.test/api/locations/{}", id),
        "concertDates": format!("https://upstream.test/api/dates/{}", id),
        "relations": format!("https://upstream.test/api/relation/{}", id)
    })
}

fn locations_for(id: u32) -> Vec<&'static str> {
    if id == ARTIST_2_ID {
        ARTIST_2_LOCATIONS.to_vec()
    } else {
        vec!["berlin-germany"]
    }
}

fn dates_for(id: u32) -> Vec<&'static str> {
    if id == ARTIST_2_ID {
        ARTIST_2_DATES.to_vec()
    } else {
        vec!["14-02-2020"]
    }
}

fn relations_for(id: u32) -> Value {
    if id == ARTIST_2_ID {
        json!({
            "london-uk": ["23-08-2019", "24-08-2019"],
            "paris-france": ["30-11-2019"],
            "osaka-japan": ["05-12-2019", "06-12-2019"]
        })
    } else {
        json!({ "berlin-germany": ["14-02-2020"] })
    }
}

async fn list_artists(State(counters): State<UpstreamCounters>) -> Json<Value> {
    counters.artists_list_hits.fetch_add(1, Ordering::SeqCst);

    let artists: Vec<Value> = known_artists()
        .into_iter()
        .map(|(id, name)| artist_json(id, name))
        .collect();
    Json(Value::Array(artists))
}

async fn get_artist(Path(id): Path<u32>) -> Response {
    match known_artists().into_iter().find(|(known, _)| *known == id) {
        Some((id, name)) => Json(artist_json(id, name)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_locations(Path(id): Path<u32>) -> Response {
    if !is_known(id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "id": id, "locations": locations_for(id) })).into_response()
}

async fn get_dates(Path(id): Path<u32>) -> Response {
    if !is_known(id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "id": id, "dates": dates_for(id) })).into_response()
}

async fn get_relations(Path(id): Path<u32>) -> Response {
    if id == BROKEN_RELATION_ARTIST_ID {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if !is_known(id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "id": id, "datesLocations": relations_for(id) })).into_response()
}

/// Builds the mock upstream router.
pub fn make_upstream_app(counters: UpstreamCounters) -> Router {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/{id}", get(get_artist))
        .route("/locations/{id}", get(get_locations))
        .route("/dates/{id}", get(get_dates))
        .route("/relation/{id}", get(get_relations))
        .with_state(counters)
}
