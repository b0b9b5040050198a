use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::episode::{Episode as DomainEpisode, NewEpisode as DomainNewEpisode};
use crate::models::season::Season;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::episodes)]
#[diesel(belongs_to(Season, foreign_key = season_id))]
/// Diesel model for [`crate::domain::episode::Episode`].
pub struct Episode {
    pub id: i32,
    pub name: String,
    pub air_date: Option<NaiveDate>,
    pub production_code: Option<String>,
    pub season_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::episodes)]
/// Insertable form of [`Episode`].
pub struct NewEpisode<'a> {
    pub name: &'a str,
    pub air_date: Option<NaiveDate>,
    pub production_code: Option<&'a str>,
    pub season_id: i32,
}

impl From<Episode> for DomainEpisode {
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

impl<'a> From<&'a DomainNewEpisode> for NewEpisode<'a> {
    fn from(episode: &'a DomainNewEpisode) -> Self {
        Self {
            name: &episode.name,
            air_date: episode.air_date,
            production_code: episode.production_code.as_deref(),
            season_id: episode.season_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn row_into_domain_keeps_nullable_fields() {
        let now = Utc::now().naive_utc();
        let row = Episode {
            id: 3,
            name: "Pilot".to_string(),
            air_date: None,
            production_code: Some("S01E01".to_string()),
            season_id: 1,
            created_at: now,
        };
        let domain: DomainEpisode = row.into();
        assert_eq!(domain.air_date, None);
        assert_eq!(domain.production_code, Some("S01E01".to_string()));
        assert_eq!(domain.season_id, 1);
    }
}
