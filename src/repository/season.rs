use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::season::Season;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SeasonListQuery, SeasonReader, SeasonWriter};
use crate::schema::{episodes, seasons};

/// Diesel implementation of [`SeasonReader`] and [`SeasonWriter`].
pub struct DieselSeasonRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselSeasonRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl SeasonReader for DieselSeasonRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Season>> {
        use crate::models::episode::Episode as DbEpisode;
        use crate::models::season::Season as DbSeason;

        let mut conn = self.pool.get()?;
        let season = seasons::table
            .find(id)
            .first::<DbSeason>(&mut conn)
            .optional()?;

        let Some(season) = season else {
            return Ok(None);
        };

        let season_episodes = DbEpisode::belonging_to(&season)
            .order(episodes::id.asc())
            .load::<DbEpisode>(&mut conn)?;

        Ok(Some(season.into_domain(Some(season_episodes))))
    }

    fn list(&self, query: SeasonListQuery) -> RepositoryResult<(usize, Vec<Season>)> {
        use crate::models::episode::Episode as DbEpisode;
        use crate::models::season::Season as DbSeason;

        let mut conn = self.pool.get()?;

        let total: i64 = seasons::table.count().get_result(&mut conn)?;

        let mut stmt = seasons::table.order(seasons::id.asc()).into_boxed();
        if let Some(pagination) = &query.pagination {
            stmt = stmt
                .limit(pagination.per_page as i64)
                .offset(pagination.offset() as i64);
        }
        let season_rows = stmt.load::<DbSeason>(&mut conn)?;

        // One grouped query for the whole page instead of one per season.
        let items = if query.with_episodes {
            let grouped = DbEpisode::belonging_to(&season_rows)
                .order(episodes::id.asc())
                .load::<DbEpisode>(&mut conn)?
                .grouped_by(&season_rows);

            season_rows
                .into_iter()
                .zip(grouped)
                .map(|(season, season_episodes)| season.into_domain(Some(season_episodes)))
                .collect()
        } else {
            season_rows.into_iter().map(Into::into).collect()
        };

        Ok((total as usize, items))
    }
}

impl SeasonWriter for DieselSeasonRepository<'_> {
    fn create(&self) -> RepositoryResult<Season> {
        use crate::models::season::Season as DbSeason;

        let mut conn = self.pool.get()?;
        let created = diesel::insert_into(seasons::table)
            .default_values()
            .get_result::<DbSeason>(&mut conn)?;

        Ok(created.into())
    }
}
