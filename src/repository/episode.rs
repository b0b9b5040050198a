use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::DbPool;
use crate::domain::episode::{Episode, NewEpisode};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    EpisodeListQuery, EpisodeReader, EpisodeSortField, EpisodeWriter, SortDirection,
};
use crate::schema::episodes;

/// Diesel implementation of [`EpisodeReader`] and [`EpisodeWriter`].
pub struct DieselEpisodeRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselEpisodeRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Shared predicate for the count and the page slice.
    fn filtered(query: &EpisodeListQuery) -> episodes::BoxedQuery<'static, Sqlite> {
        let mut stmt = episodes::table.into_boxed();

        if let Some(season_id) = query.season_id {
            stmt = stmt.filter(episodes::season_id.eq(season_id));
        }
        if let Some(term) = &query.search {
            stmt = stmt.filter(episodes::name.like(format!("%{term}%")));
        }

        stmt
    }
}

impl EpisodeReader for DieselEpisodeRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Episode>> {
        use crate::models::episode::Episode as DbEpisode;

        let mut conn = self.pool.get()?;
        let episode = episodes::table
            .find(id)
            .first::<DbEpisode>(&mut conn)
            .optional()?;

        Ok(episode.map(Into::into))
    }

    fn list(&self, query: EpisodeListQuery) -> RepositoryResult<(usize, Vec<Episode>)> {
        use crate::models::episode::Episode as DbEpisode;

        let mut conn = self.pool.get()?;

        let total: i64 = Self::filtered(&query).count().get_result(&mut conn)?;

        let mut stmt = match query.sort {
            None | Some((EpisodeSortField::Id, SortDirection::Asc)) => {
                Self::filtered(&query).order(episodes::id.asc())
            }
            Some((EpisodeSortField::Id, SortDirection::Desc)) => {
                Self::filtered(&query).order(episodes::id.desc())
            }
            Some((EpisodeSortField::Name, SortDirection::Asc)) => Self::filtered(&query)
                .order(episodes::name.asc())
                .then_order_by(episodes::id.asc()),
            Some((EpisodeSortField::Name, SortDirection::Desc)) => Self::filtered(&query)
                .order(episodes::name.desc())
                .then_order_by(episodes::id.asc()),
            Some((EpisodeSortField::AirDate, SortDirection::Asc)) => Self::filtered(&query)
                .order(episodes::air_date.asc())
                .then_order_by(episodes::id.asc()),
            Some((EpisodeSortField::AirDate, SortDirection::Desc)) => Self::filtered(&query)
                .order(episodes::air_date.desc())
                .then_order_by(episodes::id.asc()),
        };

        if let Some(pagination) = &query.pagination {
            stmt = stmt
                .limit(pagination.per_page as i64)
                .offset(pagination.offset() as i64);
        }

        let items = stmt
            .load::<DbEpisode>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Episode>>();

        Ok((total as usize, items))
    }
}

impl EpisodeWriter for DieselEpisodeRepository<'_> {
    fn create(&self, new_episodes: &[NewEpisode]) -> RepositoryResult<usize> {
        use crate::models::episode::NewEpisode as DbNewEpisode;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewEpisode> = new_episodes.iter().map(Into::into).collect();
        let affected = diesel::insert_into(episodes::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
