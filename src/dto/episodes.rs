//! DTOs exposed by the episode endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::episode::{Episode, NewEpisode};
use crate::repository::SortDirection;

/// Query parameters accepted by `GET /v1/episodes`.
#[derive(Debug, Default, Deserialize)]
pub struct EpisodesQuery {
    pub season_id: Option<i32>,
    /// Sort key, validated against the episode allow-list.
    pub order_by: Option<String>,
    pub direction: Option<SortDirection>,
    /// Free-text search over episode names.
    pub query: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

/// Public representation of an episode.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EpisodeResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "airDate")]
    pub air_date: Option<NaiveDate>,
    #[serde(rename = "productionCode")]
    pub production_code: Option<String>,
    #[serde(rename = "seasonId")]
    pub season_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

impl From<Episode> for EpisodeResponse {
    fn from(episode: Episode) -> Self {
        Self {
            id: episode.id,
            name: episode.name,
            air_date: episode.air_date,
            production_code: episode.production_code,
            season_id: episode.season_id,
            created_at: episode.created_at,
        }
    }
}

/// Payload accepted by `POST /v1/episodes`.
#[derive(Debug, Deserialize, Validate)]
pub struct EpisodeForm {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[serde(rename = "airDate")]
    pub air_date: Option<NaiveDate>,
    #[validate(length(max = 8))]
    #[serde(rename = "productionCode")]
    pub production_code: Option<String>,
    #[serde(rename = "seasonId")]
    pub season_id: i32,
}

impl From<&EpisodeForm> for NewEpisode {
    fn from(form: &EpisodeForm) -> Self {
        NewEpisode::new(
            form.name.clone(),
            form.air_date,
            form.production_code.clone(),
            form.season_id,
        )
    }
}
