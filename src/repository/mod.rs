//! Repository traits and the list-query value objects they consume.
//!
//! A list query collects the optional filters, the sort specification, and
//! the page window for one request. Building a query performs no I/O; the
//! Diesel repositories translate it into exactly two reads per call (a count
//! over the filtered set, then the page slice over the same predicate).

use std::str::FromStr;

use serde::Deserialize;

use crate::domain::character::{
    Character, CharacterGender, CharacterSpecies, CharacterStatus, NewCharacter, UpdateCharacter,
};
use crate::domain::episode::{Episode, NewEpisode};
use crate::domain::notification::{NewNotification, Notification};
use crate::domain::season::Season;
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod character;
pub mod episode;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod notification;
pub mod season;
pub mod user;

/// A validated 1-indexed page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Page numbers start at 1; a zero page is a caller error, while an
    /// out-of-range size is silently clamped to the configured bounds.
    pub fn new(page: usize, per_page: usize) -> RepositoryResult<Self> {
        if page == 0 {
            return Err(RepositoryError::InvalidPageNumber(page));
        }
        Ok(Self {
            page,
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
        })
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort keys accepted for character lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSortField {
    Id,
    Name,
    CreatedAt,
}

impl FromStr for CharacterSortField {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "created_at" => Ok(Self::CreatedAt),
            other => Err(RepositoryError::InvalidSortField(other.to_string())),
        }
    }
}

/// Sort keys accepted for episode lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeSortField {
    Id,
    Name,
    AirDate,
}

impl FromStr for EpisodeSortField {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "air_date" => Ok(Self::AirDate),
            other => Err(RepositoryError::InvalidSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CharacterListQuery {
    pub gender: Option<CharacterGender>,
    pub status: Option<CharacterStatus>,
    pub species: Option<CharacterSpecies>,
    /// Case-insensitive substring match on the character name.
    pub search: Option<String>,
    pub sort: Option<(CharacterSortField, SortDirection)>,
    pub pagination: Option<Pagination>,
}

impl CharacterListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(mut self, gender: CharacterGender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn status(mut self, status: CharacterStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn species(mut self, species: CharacterSpecies) -> Self {
        self.species = Some(species);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn order_by(mut self, field: CharacterSortField, direction: SortDirection) -> Self {
        self.sort = Some((field, direction));
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct EpisodeListQuery {
    pub season_id: Option<i32>,
    /// Case-insensitive substring match on the episode name.
    pub search: Option<String>,
    pub sort: Option<(EpisodeSortField, SortDirection)>,
    pub pagination: Option<Pagination>,
}

impl EpisodeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn season_id(mut self, season_id: i32) -> Self {
        self.season_id = Some(season_id);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn order_by(mut self, field: EpisodeSortField, direction: SortDirection) -> Self {
        self.sort = Some((field, direction));
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeasonListQuery {
    /// Eager-load directive: fetch the episodes of every season on the page
    /// with one additional query.
    pub with_episodes: bool,
    pub pagination: Option<Pagination>,
}

impl SeasonListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_episodes(mut self) -> Self {
        self.with_episodes = true;
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

#[derive(Debug, Clone)]
pub struct NotificationListQuery {
    pub user_id: i32,
    pub unread_only: bool,
    pub pagination: Option<Pagination>,
}

impl NotificationListQuery {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            unread_only: false,
            pagination: None,
        }
    }

    pub fn unread_only(mut self) -> Self {
        self.unread_only = true;
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

pub trait CharacterReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Character>>;
    fn list(&self, query: CharacterListQuery) -> RepositoryResult<(usize, Vec<Character>)>;
}

pub trait CharacterWriter {
    fn create(&self, new_characters: &[NewCharacter]) -> RepositoryResult<usize>;
    fn update(&self, character_id: i32, updates: &UpdateCharacter) -> RepositoryResult<Character>;
    fn delete(&self, character_id: i32) -> RepositoryResult<()>;
}

pub trait EpisodeReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Episode>>;
    fn list(&self, query: EpisodeListQuery) -> RepositoryResult<(usize, Vec<Episode>)>;
}

pub trait EpisodeWriter {
    fn create(&self, new_episodes: &[NewEpisode]) -> RepositoryResult<usize>;
}

pub trait SeasonReader {
    /// Single-season lookups always carry their episodes.
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Season>>;
    fn list(&self, query: SeasonListQuery) -> RepositoryResult<(usize, Vec<Season>)>;
}

pub trait SeasonWriter {
    fn create(&self) -> RepositoryResult<Season>;
}

pub trait UserReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
    /// Flips the activation flag for the user carrying this signature.
    fn activate(&self, sig: &str) -> RepositoryResult<Option<User>>;
}

pub trait NotificationReader {
    fn list(&self, query: NotificationListQuery) -> RepositoryResult<(usize, Vec<Notification>)>;
}

pub trait NotificationWriter {
    fn create(&self, new_notification: &NewNotification) -> RepositoryResult<Notification>;
    fn mark_read(
        &self,
        notification_id: i32,
        user_id: i32,
    ) -> RepositoryResult<Option<Notification>>;
}
