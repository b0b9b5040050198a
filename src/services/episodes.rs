use std::str::FromStr;

use validator::Validate;

use crate::dto::episodes::{EpisodeForm, EpisodeResponse, EpisodesQuery};
use crate::pagination::{DEFAULT_PAGE_SIZE, Page};
use crate::repository::{
    EpisodeListQuery, EpisodeReader, EpisodeSortField, EpisodeWriter, Pagination,
};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of episodes matching the supplied filters.
pub fn list_episodes<R>(repo: &R, params: EpisodesQuery) -> ServiceResult<Page<EpisodeResponse>>
where
    R: EpisodeReader + ?Sized,
{
    let pagination = Pagination::new(
        params.page.unwrap_or(1),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;

    let mut query = EpisodeListQuery::new().paginate(pagination);

    if let Some(season_id) = params.season_id {
        query = query.season_id(season_id);
    }
    if let Some(order_by) = params.order_by.as_deref() {
        let field = EpisodeSortField::from_str(order_by)?;
        query = query.order_by(field, params.direction.unwrap_or_default());
    }
    if let Some(term) = params
        .query
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        query = query.search(term);
    }

    let (total, episodes) = repo.list(query)?;

    Ok(Page::new(episodes, total, pagination.page, pagination.per_page).map(Into::into))
}

pub fn get_episode<R>(repo: &R, episode_id: i32) -> ServiceResult<EpisodeResponse>
where
    R: EpisodeReader + ?Sized,
{
    match repo.get_by_id(episode_id)? {
        Some(episode) => Ok(episode.into()),
        None => Err(ServiceError::NotFound),
    }
}

/// Validates the payload and persists a new episode.
pub fn create_episode<R>(repo: &R, form: EpisodeForm) -> ServiceResult<()>
where
    R: EpisodeWriter + ?Sized,
{
    form.validate()?;
    repo.create(&[(&form).into()])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockEpisodeRepository;

    #[test]
    fn season_filter_reaches_the_query() {
        let mut repo = MockEpisodeRepository::new();
        repo.expect_list()
            .withf(|query| query.season_id == Some(2))
            .returning(|_| Ok((0, vec![])));

        let params = EpisodesQuery {
            season_id: Some(2),
            ..Default::default()
        };
        assert!(list_episodes(&repo, params).is_ok());
    }

    #[test]
    fn character_sort_keys_are_not_valid_for_episodes() {
        let mut repo = MockEpisodeRepository::new();
        repo.expect_list().never();

        let params = EpisodesQuery {
            order_by: Some("species".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            list_episodes(&repo, params).unwrap_err(),
            ServiceError::Repository(RepositoryError::InvalidSortField(_))
        ));
    }
}
