use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::episode::Episode as DomainEpisode;
use crate::domain::season::Season as DomainSeason;
use crate::models::episode::Episode;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::seasons)]
/// Diesel model for [`crate::domain::season::Season`].
pub struct Season {
    pub id: i32,
    pub created_at: NaiveDateTime,
}

impl Season {
    /// Attaches an eager-loaded batch of episode rows, or `None` when the
    /// query did not ask for them.
    pub fn into_domain(self, episodes: Option<Vec<Episode>>) -> DomainSeason {
        DomainSeason {
            id: self.id,
            created_at: self.created_at,
            episodes: episodes
                .map(|rows| rows.into_iter().map(DomainEpisode::from).collect()),
        }
    }
}

impl From<Season> for DomainSeason {
    fn from(season: Season) -> Self {
        season.into_domain(None)
    }
}
