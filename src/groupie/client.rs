//! HTTP client for the groupie tracker API.

use anyhow::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::error::FetchError;
use super::models::Artist;

/// HTTP client for the groupie tracker API.
///
/// One instance is shared for the lifetime of the process; the underlying
/// `reqwest::Client` pools connections across requests.
pub struct GroupieClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct LocationsResponse {
    locations: Vec<String>,
}

#[derive(Deserialize)]
struct DatesResponse {
    dates: Vec<String>,
}

#[derive(Deserialize)]
struct RelationResponse {
    #[serde(rename = "datesLocations")]
    dates_locations: BTreeMap<String, Vec<String>>,
}

impl GroupieClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g., "https://groupietrackers.herokuapp.com/api")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: &str, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// GET `url`, require a 200, decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    url: url.to_owned(),
                    source,
                })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UpstreamStatus {
                url: url.to_owned(),
                status,
            });
        }

        response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_owned(),
            source,
        })
    }

    fn artists_url(&self) -> String {
        format!("{}/artists", self.base_url)
    }

    fn artist_url(&self, id: u32) -> String {
        format!("{}/artists/{}", self.base_url, id)
    }

    fn locations_url(&self, id: u32) -> String {
        format!("{}/locations/{}", self.base_url, id)
    }

    fn dates_url(&self, id: u32) -> String {
        format!("{}/dates/{}", self.base_url, id)
    }

    fn relations_url(&self, id: u32) -> String {
        format!("{}/relation/{}", self.base_url, id)
    }

    /// Fetch the full artist collection.
    ///
    /// The list endpoint never carries the per-artist sub-collections, so
    /// locations, concert dates and relations stay empty on every entry.
    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.get_json(&self.artists_url()).await
    }

    /// Fetch the core record for one artist.
    pub async fn fetch_artist(&self, id: u32) -> Result<Artist, FetchError> {
        self.get_json(&self.artist_url(id)).await
    }

    /// Fetch the concert locations for one artist.
    pub async fn fetch_locations(&self, id: u32) -> Result<Vec<String>, FetchError> {
        let response: LocationsResponse = self.get_json(&self.locations_url(id)).await?;
        Ok(response.locations)
    }

    /// Fetch the concert dates for one artist.
    pub async fn fetch_concert_dates(&self, id: u32) -> Result<Vec<String>, FetchError> {
        let response: DatesResponse = self.get_json(&self.dates_url(id)).await?;
        Ok(response.dates)
    }

    /// Fetch the location-to-dates mapping for one artist.
    pub async fn fetch_relations(
        &self,
        id: u32,
    ) -> Result<BTreeMap<String, Vec<String>>, FetchError> {
        let response: RelationResponse = self.get_json(&self.relations_url(id)).await?;
        Ok(response.dates_locations)
    }

    /// Fetch one artist with locations, concert dates and relations filled in.
    ///
    /// The core record is fetched first; the three sub-collections are then
    /// fetched concurrently and joined. The first failing sub-fetch fails
    /// the whole aggregation and no partial artist is ever returned.
    pub async fn fetch_artist_details(&self, id: u32) -> Result<Artist, FetchError> {
        let mut artist = self.fetch_artist(id).await?;

        // Recorded before the fetches run, as the intended source of each
        // sub-collection.
        artist.locations_url = self.locations_url(id);
        artist.concert_dates_url = self.dates_url(id);
        artist.relations_url = self.relations_url(id);

        let (locations, concert_dates, relations) = tokio::try_join!(
            self.fetch_locations(id),
            self.fetch_concert_dates(id),
            self.fetch_relations(id),
        )?;

        artist.locations = locations;
        artist.concert_dates = concert_dates;
        artist.relations = relations;

        Ok(artist)
    }
}
