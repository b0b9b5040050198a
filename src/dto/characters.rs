//! DTOs exposed by the character endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::character::{
    Character, CharacterGender, CharacterSpecies, CharacterStatus, NewCharacter, UpdateCharacter,
};
use crate::dto::build_static_url;
use crate::models::config::ServerConfig;
use crate::repository::SortDirection;

/// Query parameters accepted by `GET /v1/characters`.
#[derive(Debug, Default, Deserialize)]
pub struct CharactersQuery {
    pub gender: Option<CharacterGender>,
    pub status: Option<CharacterStatus>,
    pub species: Option<CharacterSpecies>,
    /// Sort key, validated against the character allow-list.
    pub order_by: Option<String>,
    pub direction: Option<SortDirection>,
    /// Free-text search over character names.
    pub query: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

/// Public representation of a character.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub gender: CharacterGender,
    pub status: CharacterStatus,
    pub species: CharacterSpecies,
    /// Absolute image URL; absent when no image was uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

impl CharacterResponse {
    pub fn from_domain(character: Character, config: &ServerConfig) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
            status: character.status,
            species: character.species,
            image: character
                .image
                .as_deref()
                .map(|path| build_static_url(config, path)),
            created_at: character.created_at,
        }
    }
}

/// Payload accepted by the character write endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct CharacterForm {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub gender: CharacterGender,
    pub status: CharacterStatus,
    pub species: CharacterSpecies,
    /// Relative path below the static mount.
    pub image: Option<String>,
}

impl From<&CharacterForm> for NewCharacter {
    fn from(form: &CharacterForm) -> Self {
        NewCharacter::new(
            form.name.clone(),
            form.gender,
            form.status,
            form.species,
            form.image.clone(),
        )
    }
}

impl From<&CharacterForm> for UpdateCharacter {
    fn from(form: &CharacterForm) -> Self {
        UpdateCharacter::new(
            form.name.clone(),
            form.gender,
            form.status,
            form.species,
            form.image.clone(),
        )
    }
}
