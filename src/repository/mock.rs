//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::character::{Character, NewCharacter, UpdateCharacter};
use crate::domain::episode::{Episode, NewEpisode};
use crate::domain::notification::{NewNotification, Notification};
use crate::domain::season::Season;
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CharacterListQuery, CharacterReader, CharacterWriter, EpisodeListQuery, EpisodeReader,
    EpisodeWriter, NotificationListQuery, NotificationReader, NotificationWriter, SeasonListQuery,
    SeasonReader, SeasonWriter, UserReader, UserWriter,
};

mock! {
    pub CharacterRepository {}

    impl CharacterReader for CharacterRepository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Character>>;
        fn list(&self, query: CharacterListQuery) -> RepositoryResult<(usize, Vec<Character>)>;
    }

    impl CharacterWriter for CharacterRepository {
        fn create(&self, new_characters: &[NewCharacter]) -> RepositoryResult<usize>;
        fn update(
            &self,
            character_id: i32,
            updates: &UpdateCharacter,
        ) -> RepositoryResult<Character>;
        fn delete(&self, character_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub EpisodeRepository {}

    impl EpisodeReader for EpisodeRepository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Episode>>;
        fn list(&self, query: EpisodeListQuery) -> RepositoryResult<(usize, Vec<Episode>)>;
    }

    impl EpisodeWriter for EpisodeRepository {
        fn create(&self, new_episodes: &[NewEpisode]) -> RepositoryResult<usize>;
    }
}

mock! {
    pub SeasonRepository {}

    impl SeasonReader for SeasonRepository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Season>>;
        fn list(&self, query: SeasonListQuery) -> RepositoryResult<(usize, Vec<Season>)>;
    }

    impl SeasonWriter for SeasonRepository {
        fn create(&self) -> RepositoryResult<Season>;
    }
}

mock! {
    pub UserRepository {}

    impl UserReader for UserRepository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
        fn get_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for UserRepository {
        fn create(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
        fn activate(&self, sig: &str) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub NotificationRepository {}

    impl NotificationReader for NotificationRepository {
        fn list(
            &self,
            query: NotificationListQuery,
        ) -> RepositoryResult<(usize, Vec<Notification>)>;
    }

    impl NotificationWriter for NotificationRepository {
        fn create(&self, new_notification: &NewNotification) -> RepositoryResult<Notification>;
        fn mark_read(
            &self,
            notification_id: i32,
            user_id: i32,
        ) -> RepositoryResult<Option<Notification>>;
    }
}
