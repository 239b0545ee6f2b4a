use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One musical act, as served by the upstream artist endpoints.
///
/// The three `*_url` fields are the upstream's own pointers to the
/// per-artist sub-collections, kept for diagnostics. The sub-collections
/// themselves are never part of the wire shape; they stay empty until a
/// details fetch fills them in.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct Artist {
    pub id: u32,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    #[serde(rename = "creationDate")]
    pub creation_date: u16,
    #[serde(rename = "firstAlbum")]
    pub first_album: String,
    #[serde(rename = "locations")]
    pub locations_url: String,
    #[serde(rename = "concertDates")]
    pub concert_dates_url: String,
    #[serde(rename = "relations")]
    pub relations_url: String,
    #[serde(skip)]
    pub locations: Vec<String>,
    #[serde(skip)]
    pub concert_dates: Vec<String>,
    #[serde(skip)]
    pub relations: BTreeMap<String, Vec<String>>,
}
