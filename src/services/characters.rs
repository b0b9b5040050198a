use std::str::FromStr;

use validator::Validate;

use crate::dto::characters::{CharacterForm, CharacterResponse, CharactersQuery};
use crate::models::config::ServerConfig;
use crate::pagination::{DEFAULT_PAGE_SIZE, Page};
use crate::repository::{
    CharacterListQuery, CharacterReader, CharacterSortField, CharacterWriter, Pagination,
};
use crate::services::{ServiceError, ServiceResult};

/// Translates the request parameters into a character list query and returns
/// one page of the filtered set.
pub fn list_characters<R>(
    repo: &R,
    config: &ServerConfig,
    params: CharactersQuery,
) -> ServiceResult<Page<CharacterResponse>>
where
    R: CharacterReader + ?Sized,
{
    let pagination = Pagination::new(
        params.page.unwrap_or(1),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;

    let mut query = CharacterListQuery::new().paginate(pagination);

    if let Some(gender) = params.gender {
        query = query.gender(gender);
    }
    if let Some(status) = params.status {
        query = query.status(status);
    }
    if let Some(species) = params.species {
        query = query.species(species);
    }
    if let Some(order_by) = params.order_by.as_deref() {
        // Allow-list check happens here; nothing reaches storage on failure.
        let field = CharacterSortField::from_str(order_by)?;
        query = query.order_by(field, params.direction.unwrap_or_default());
    }
    if let Some(term) = params
        .query
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        query = query.search(term);
    }

    let (total, characters) = repo.list(query)?;

    Ok(
        Page::new(characters, total, pagination.page, pagination.per_page)
            .map(|character| CharacterResponse::from_domain(character, config)),
    )
}

/// Fetches a single character; a missing id is a [`ServiceError::NotFound`],
/// unlike an empty filtered list.
pub fn get_character<R>(
    repo: &R,
    config: &ServerConfig,
    character_id: i32,
) -> ServiceResult<CharacterResponse>
where
    R: CharacterReader + ?Sized,
{
    match repo.get_by_id(character_id)? {
        Some(character) => Ok(CharacterResponse::from_domain(character, config)),
        None => Err(ServiceError::NotFound),
    }
}

/// Validates the payload and persists a new character.
pub fn create_character<R>(repo: &R, form: CharacterForm) -> ServiceResult<()>
where
    R: CharacterWriter + ?Sized,
{
    form.validate()?;
    repo.create(&[(&form).into()])?;
    Ok(())
}

/// Validates the payload and applies it to an existing character.
pub fn update_character<R>(
    repo: &R,
    config: &ServerConfig,
    character_id: i32,
    form: CharacterForm,
) -> ServiceResult<CharacterResponse>
where
    R: CharacterWriter + ?Sized,
{
    form.validate()?;
    let updated = repo.update(character_id, &(&form).into())?;
    Ok(CharacterResponse::from_domain(updated, config))
}

/// Deletes a character; a missing id is reported, not ignored.
pub fn delete_character<R>(repo: &R, character_id: i32) -> ServiceResult<()>
where
    R: CharacterWriter + ?Sized,
{
    repo.delete(character_id)?;
    Ok(())
}
