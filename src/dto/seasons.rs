//! DTOs exposed by the season endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::season::Season;
use crate::dto::episodes::EpisodeResponse;

/// Query parameters accepted by `GET /v1/seasons`.
#[derive(Debug, Default, Deserialize)]
pub struct SeasonsQuery {
    /// Seasons carry no searchable text; a present value is rejected.
    pub query: Option<String>,
    /// Eager-load the episodes of every listed season. Defaults to true,
    /// matching the shape single-season lookups return.
    pub include_episodes: Option<bool>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

/// Public representation of a season.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeasonResponse {
    pub id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<EpisodeResponse>>,
}

impl From<Season> for SeasonResponse {
    fn from(season: Season) -> Self {
        Self {
            id: season.id,
            created_at: season.created_at,
            episodes: season
                .episodes
                .map(|episodes| episodes.into_iter().map(Into::into).collect()),
        }
    }
}
