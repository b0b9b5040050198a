use crate::dto::seasons::{SeasonResponse, SeasonsQuery};
use crate::pagination::{DEFAULT_PAGE_SIZE, Page};
use crate::repository::errors::RepositoryError;
use crate::repository::{Pagination, SeasonListQuery, SeasonReader, SeasonWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of seasons, optionally with their episodes eager-loaded.
pub fn list_seasons<R>(repo: &R, params: SeasonsQuery) -> ServiceResult<Page<SeasonResponse>>
where
    R: SeasonReader + ?Sized,
{
    // Seasons have no text field a substring search could apply to.
    if params.query.is_some() {
        return Err(RepositoryError::UnsupportedFilter("query".to_string()).into());
    }

    let pagination = Pagination::new(
        params.page.unwrap_or(1),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;

    let mut query = SeasonListQuery::new().paginate(pagination);
    if params.include_episodes.unwrap_or(true) {
        query = query.with_episodes();
    }

    let (total, seasons) = repo.list(query)?;

    Ok(Page::new(seasons, total, pagination.page, pagination.per_page).map(Into::into))
}

pub fn get_season<R>(repo: &R, season_id: i32) -> ServiceResult<SeasonResponse>
where
    R: SeasonReader + ?Sized,
{
    match repo.get_by_id(season_id)? {
        Some(season) => Ok(season.into()),
        None => Err(ServiceError::NotFound),
    }
}

pub fn create_season<R>(repo: &R) -> ServiceResult<SeasonResponse>
where
    R: SeasonWriter + ?Sized,
{
    Ok(repo.create()?.into())
}
