//! Client for the remote groupie tracker API.
//!
//! The upstream exposes five JSON endpoints: the full artist collection,
//! one artist by id, and the per-artist locations, concert dates and
//! relations sub-collections.

mod client;
mod error;
mod models;

pub use client::GroupieClient;
pub use error::FetchError;
pub use models::Artist;
