use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub id: i32,
    pub name: String,
    pub air_date: Option<NaiveDate>,
    pub production_code: Option<String>,
    pub season_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewEpisode {
    pub name: String,
    pub air_date: Option<NaiveDate>,
    pub production_code: Option<String>,
    pub season_id: i32,
}

impl NewEpisode {
    #[must_use]
    pub fn new(
        name: String,
        air_date: Option<NaiveDate>,
        production_code: Option<String>,
        season_id: i32,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            air_date,
            production_code: production_code
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty()),
            season_id,
        }
    }
}
