use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::episode::Episode;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub id: i32,
    pub created_at: NaiveDateTime,
    /// Present only when the list query asked for episodes to be loaded
    /// alongside the seasons.
    pub episodes: Option<Vec<Episode>>,
}
