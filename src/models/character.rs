use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::character::{
    Character as DomainCharacter, NewCharacter as DomainNewCharacter,
    UpdateCharacter as DomainUpdateCharacter,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::characters)]
/// Diesel model for [`crate::domain::character::Character`].
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub status: String,
    pub species: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::characters)]
/// Insertable form of [`Character`].
pub struct NewCharacter<'a> {
    pub name: &'a str,
    pub gender: &'a str,
    pub status: &'a str,
    pub species: &'a str,
    pub image: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::characters)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Character`] record.
pub struct UpdateCharacter<'a> {
    pub name: &'a str,
    pub gender: &'a str,
    pub status: &'a str,
    pub species: &'a str,
    pub image: Option<&'a str>,
}

impl From<Character> for DomainCharacter {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender.as_str().into(),
            status: character.status.as_str().into(),
            species: character.species.as_str().into(),
            image: character.image,
            created_at: character.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCharacter> for NewCharacter<'a> {
    fn from(character: &'a DomainNewCharacter) -> Self {
        Self {
            name: &character.name,
            gender: character.gender.as_str(),
            status: character.status.as_str(),
            species: character.species.as_str(),
            image: character.image.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCharacter> for UpdateCharacter<'a> {
    fn from(character: &'a DomainUpdateCharacter) -> Self {
        Self {
            name: &character.name,
            gender: character.gender.as_str(),
            status: character.status.as_str(),
            species: character.species.as_str(),
            image: character.image.as_deref(),
        }
    }
}
