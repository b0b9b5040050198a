use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::DbPool;
use crate::domain::character::{Character, NewCharacter, UpdateCharacter};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CharacterListQuery, CharacterReader, CharacterSortField, CharacterWriter, SortDirection,
};
use crate::schema::characters;

/// Diesel implementation of [`CharacterReader`] and [`CharacterWriter`].
pub struct DieselCharacterRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselCharacterRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Applies every present filter. The count and the page slice both go
    /// through here, so they always share one predicate.
    fn filtered(query: &CharacterListQuery) -> characters::BoxedQuery<'static, Sqlite> {
        let mut stmt = characters::table.into_boxed();

        if let Some(gender) = query.gender {
            stmt = stmt.filter(characters::gender.eq(gender.as_str()));
        }
        if let Some(status) = query.status {
            stmt = stmt.filter(characters::status.eq(status.as_str()));
        }
        if let Some(species) = query.species {
            stmt = stmt.filter(characters::species.eq(species.as_str()));
        }
        if let Some(term) = &query.search {
            stmt = stmt.filter(characters::name.like(format!("%{term}%")));
        }

        stmt
    }
}

impl CharacterReader for DieselCharacterRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Character>> {
        use crate::models::character::Character as DbCharacter;

        let mut conn = self.pool.get()?;
        let character = characters::table
            .find(id)
            .first::<DbCharacter>(&mut conn)
            .optional()?;

        Ok(character.map(Into::into))
    }

    fn list(&self, query: CharacterListQuery) -> RepositoryResult<(usize, Vec<Character>)> {
        use crate::models::character::Character as DbCharacter;

        let mut conn = self.pool.get()?;

        let total: i64 = Self::filtered(&query).count().get_result(&mut conn)?;

        // Explicit sort first, id as tiebreak so page boundaries stay stable.
        let mut stmt = match query.sort {
            None | Some((CharacterSortField::Id, SortDirection::Asc)) => {
                Self::filtered(&query).order(characters::id.asc())
            }
            Some((CharacterSortField::Id, SortDirection::Desc)) => {
                Self::filtered(&query).order(characters::id.desc())
            }
            Some((CharacterSortField::Name, SortDirection::Asc)) => Self::filtered(&query)
                .order(characters::name.asc())
                .then_order_by(characters::id.asc()),
            Some((CharacterSortField::Name, SortDirection::Desc)) => Self::filtered(&query)
                .order(characters::name.desc())
                .then_order_by(characters::id.asc()),
            Some((CharacterSortField::CreatedAt, SortDirection::Asc)) => Self::filtered(&query)
                .order(characters::created_at.asc())
                .then_order_by(characters::id.asc()),
            Some((CharacterSortField::CreatedAt, SortDirection::Desc)) => Self::filtered(&query)
                .order(characters::created_at.desc())
                .then_order_by(characters::id.asc()),
        };

        if let Some(pagination) = &query.pagination {
            stmt = stmt
                .limit(pagination.per_page as i64)
                .offset(pagination.offset() as i64);
        }

        let items = stmt
            .load::<DbCharacter>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Character>>();

        Ok((total as usize, items))
    }
}

impl CharacterWriter for DieselCharacterRepository<'_> {
    fn create(&self, new_characters: &[NewCharacter]) -> RepositoryResult<usize> {
        use crate::models::character::NewCharacter as DbNewCharacter;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewCharacter> = new_characters.iter().map(Into::into).collect();
        let affected = diesel::insert_into(characters::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update(&self, character_id: i32, updates: &UpdateCharacter) -> RepositoryResult<Character> {
        use crate::models::character::{
            Character as DbCharacter, UpdateCharacter as DbUpdateCharacter,
        };

        let mut conn = self.pool.get()?;
        let db_updates: DbUpdateCharacter = updates.into();

        let updated = diesel::update(characters::table.find(character_id))
            .set(&db_updates)
            .get_result::<DbCharacter>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, character_id: i32) -> RepositoryResult<()> {
        let mut conn = self.pool.get()?;

        let affected =
            diesel::delete(characters::table.find(character_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
