use chrono::NaiveDate;

use series_api::domain::character::{
    CharacterGender, CharacterSpecies, CharacterStatus, NewCharacter, UpdateCharacter,
};
use series_api::domain::episode::NewEpisode;
use series_api::domain::notification::NewNotification;
use series_api::domain::user::{NewUser, UpdateUser};
use series_api::pagination::Page;
use series_api::repository::character::DieselCharacterRepository;
use series_api::repository::episode::DieselEpisodeRepository;
use series_api::repository::notification::DieselNotificationRepository;
use series_api::repository::season::DieselSeasonRepository;
use series_api::repository::user::DieselUserRepository;
use series_api::repository::{
    CharacterListQuery, CharacterReader, CharacterSortField, CharacterWriter, EpisodeListQuery,
    EpisodeReader, EpisodeSortField, EpisodeWriter, NotificationListQuery, NotificationReader,
    NotificationWriter, Pagination, SeasonListQuery, SeasonReader, SeasonWriter, SortDirection,
    UserReader, UserWriter,
};

mod common;

fn character(
    name: &str,
    gender: CharacterGender,
    status: CharacterStatus,
    species: CharacterSpecies,
) -> NewCharacter {
    NewCharacter::new(name.to_string(), gender, status, species, None)
}

/// A small mixed cast used by the filter tests.
fn seed_cast(repo: &DieselCharacterRepository) {
    let cast = vec![
        character(
            "Rick Sanchez",
            CharacterGender::Male,
            CharacterStatus::Alive,
            CharacterSpecies::Human,
        ),
        character(
            "Morty Smith",
            CharacterGender::Male,
            CharacterStatus::Alive,
            CharacterSpecies::Human,
        ),
        character(
            "Summer Smith",
            CharacterGender::Female,
            CharacterStatus::Alive,
            CharacterSpecies::Human,
        ),
        character(
            "Birdperson",
            CharacterGender::Male,
            CharacterStatus::Dead,
            CharacterSpecies::Humanoid,
        ),
        character(
            "Butter Robot",
            CharacterGender::Genderless,
            CharacterStatus::Alive,
            CharacterSpecies::Robot,
        ),
        character(
            "Snuffles",
            CharacterGender::Male,
            CharacterStatus::Unknown,
            CharacterSpecies::Animal,
        ),
    ];
    assert_eq!(repo.create(&cast).unwrap(), cast.len());
}

#[test]
fn test_pagination_windows_over_25_items() {
    let test_db = common::TestDb::new("test_pagination_windows.db");
    let repo = DieselCharacterRepository::new(test_db.pool());

    let cast: Vec<NewCharacter> = (1..=25)
        .map(|i| {
            character(
                &format!("Character #{i:02}"),
                CharacterGender::Male,
                CharacterStatus::Alive,
                CharacterSpecies::Human,
            )
        })
        .collect();
    assert_eq!(repo.create(&cast).unwrap(), 25);

    let page_of = |page: usize| {
        let (total, items) = repo
            .list(CharacterListQuery::new().paginate(Pagination::new(page, 10).unwrap()))
            .unwrap();
        Page::new(items, total, page, 10)
    };

    let first = page_of(1);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, 25);
    assert_eq!(first.total_pages, 3);

    let third = page_of(3);
    assert_eq!(third.items.len(), 5);

    // Past the end is a valid, empty view with intact metadata.
    let fourth = page_of(4);
    assert!(fourth.items.is_empty());
    assert_eq!(fourth.total, 25);
    assert_eq!(fourth.total_pages, 3);
}

#[test]
fn test_no_filters_returns_full_collection_count() {
    let test_db = common::TestDb::new("test_no_filters.db");
    let repo = DieselCharacterRepository::new(test_db.pool());
    seed_cast(&repo);

    let (total, items) = repo.list(CharacterListQuery::new()).unwrap();
    assert_eq!(total, 6);
    assert_eq!(items.len(), 6);
}

#[test]
fn test_every_declared_filter_narrows() {
    let test_db = common::TestDb::new("test_each_filter_narrows.db");
    let repo = DieselCharacterRepository::new(test_db.pool());
    seed_cast(&repo);

    let (all, _) = repo.list(CharacterListQuery::new()).unwrap();

    let (by_gender, items) = repo
        .list(CharacterListQuery::new().gender(CharacterGender::Male))
        .unwrap();
    assert!(by_gender < all);
    assert!(items.iter().all(|c| c.gender == CharacterGender::Male));

    let (by_status, items) = repo
        .list(CharacterListQuery::new().status(CharacterStatus::Dead))
        .unwrap();
    assert_eq!(by_status, 1);
    assert!(items.iter().all(|c| c.status == CharacterStatus::Dead));

    let (by_species, items) = repo
        .list(CharacterListQuery::new().species(CharacterSpecies::Robot))
        .unwrap();
    assert_eq!(by_species, 1);
    assert!(items.iter().all(|c| c.species == CharacterSpecies::Robot));

    let (by_search, items) = repo
        .list(CharacterListQuery::new().search("smith"))
        .unwrap();
    assert_eq!(by_search, 2);
    assert!(items.iter().all(|c| c.name.contains("Smith")));
}

#[test]
fn test_combined_filters_intersect() {
    let test_db = common::TestDb::new("test_filters_intersect.db");
    let repo = DieselCharacterRepository::new(test_db.pool());
    seed_cast(&repo);

    let broad = CharacterListQuery::new().status(CharacterStatus::Alive);
    let narrow = CharacterListQuery::new()
        .status(CharacterStatus::Alive)
        .species(CharacterSpecies::Human);

    let (broad_total, broad_items) = repo.list(broad).unwrap();
    let (narrow_total, narrow_items) = repo.list(narrow).unwrap();

    assert!(narrow_total <= broad_total);
    assert!(
        narrow_items
            .iter()
            .all(|c| c.status == CharacterStatus::Alive && c.species == CharacterSpecies::Human)
    );

    // Adding a constraint can only shrink the result set.
    let broad_ids: Vec<i32> = broad_items.iter().map(|c| c.id).collect();
    assert!(narrow_items.iter().all(|c| broad_ids.contains(&c.id)));
}

#[test]
fn test_repeated_requests_are_deterministic() {
    let test_db = common::TestDb::new("test_determinism.db");
    let repo = DieselCharacterRepository::new(test_db.pool());
    seed_cast(&repo);

    let query = || {
        CharacterListQuery::new()
            .status(CharacterStatus::Alive)
            .order_by(CharacterSortField::Name, SortDirection::Asc)
            .paginate(Pagination::new(1, 3).unwrap())
    };

    let (_, first) = repo.list(query()).unwrap();
    let (_, second) = repo.list(query()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sorting_orders_and_default() {
    let test_db = common::TestDb::new("test_sorting.db");
    let repo = DieselCharacterRepository::new(test_db.pool());
    seed_cast(&repo);

    let (_, by_default) = repo.list(CharacterListQuery::new()).unwrap();
    let mut ids: Vec<i32> = by_default.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    assert_eq!(
        by_default.iter().map(|c| c.id).collect::<Vec<_>>(),
        ids,
        "default order is primary key ascending"
    );

    let (_, by_name) = repo
        .list(CharacterListQuery::new().order_by(CharacterSortField::Name, SortDirection::Asc))
        .unwrap();
    let mut names: Vec<String> = by_name.iter().map(|c| c.name.clone()).collect();
    names.sort();
    assert_eq!(by_name.iter().map(|c| c.name.clone()).collect::<Vec<_>>(), names);

    let (_, by_name_desc) = repo
        .list(CharacterListQuery::new().order_by(CharacterSortField::Name, SortDirection::Desc))
        .unwrap();
    names.reverse();
    assert_eq!(
        by_name_desc
            .iter()
            .map(|c| c.name.clone())
            .collect::<Vec<_>>(),
        names
    );
}

#[test]
fn test_pagination_does_not_skip_or_duplicate() {
    let test_db = common::TestDb::new("test_stable_windows.db");
    let repo = DieselCharacterRepository::new(test_db.pool());

    let cast: Vec<NewCharacter> = (1..=9)
        .map(|i| {
            // Equal names force the id tiebreak to decide page boundaries.
            character(
                "Mr. Meeseeks",
                CharacterGender::Male,
                if i % 2 == 0 {
                    CharacterStatus::Alive
                } else {
                    CharacterStatus::Unknown
                },
                CharacterSpecies::Humanoid,
            )
        })
        .collect();
    repo.create(&cast).unwrap();

    let mut seen = Vec::new();
    for page in 1..=3 {
        let (_, items) = repo
            .list(
                CharacterListQuery::new()
                    .order_by(CharacterSortField::Name, SortDirection::Asc)
                    .paginate(Pagination::new(page, 4).unwrap()),
            )
            .unwrap();
        seen.extend(items.into_iter().map(|c| c.id));
    }

    let mut deduped = seen.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(seen.len(), 9);
    assert_eq!(deduped.len(), 9);
}

#[test]
fn test_character_crud_round_trip() {
    let test_db = common::TestDb::new("test_character_crud.db");
    let repo = DieselCharacterRepository::new(test_db.pool());
    seed_cast(&repo);

    let (_, items) = repo.list(CharacterListQuery::new().search("Birdperson")).unwrap();
    let birdperson = items.first().cloned().unwrap();

    let updates = UpdateCharacter::new(
        "Phoenixperson".to_string(),
        birdperson.gender,
        CharacterStatus::Alive,
        birdperson.species,
        Some("phoenixperson.webp".to_string()),
    );
    let updated = repo.update(birdperson.id, &updates).unwrap();
    assert_eq!(updated.name, "Phoenixperson");
    assert_eq!(updated.status, CharacterStatus::Alive);
    assert_eq!(updated.image, Some("phoenixperson.webp".to_string()));

    repo.delete(updated.id).unwrap();
    assert!(repo.get_by_id(updated.id).unwrap().is_none());
    assert!(repo.delete(updated.id).is_err());
}

#[test]
fn test_episode_filters_and_sorting() {
    let test_db = common::TestDb::new("test_episode_repository.db");
    let season_repo = DieselSeasonRepository::new(test_db.pool());
    let episode_repo = DieselEpisodeRepository::new(test_db.pool());

    let season_one = season_repo.create().unwrap();
    let season_two = season_repo.create().unwrap();

    let episodes = vec![
        NewEpisode::new(
            "Pilot".to_string(),
            NaiveDate::from_ymd_opt(2013, 12, 2),
            Some("S01E01".to_string()),
            season_one.id,
        ),
        NewEpisode::new(
            "Lawnmower Dog".to_string(),
            NaiveDate::from_ymd_opt(2013, 12, 9),
            Some("S01E02".to_string()),
            season_one.id,
        ),
        NewEpisode::new("A Rickle in Time".to_string(), None, None, season_two.id),
    ];
    assert_eq!(episode_repo.create(&episodes).unwrap(), 3);

    let (total, items) = episode_repo
        .list(EpisodeListQuery::new().season_id(season_one.id))
        .unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|e| e.season_id == season_one.id));

    let (total, items) = episode_repo
        .list(EpisodeListQuery::new().search("rickle"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "A Rickle in Time");

    let (_, by_air_date) = episode_repo
        .list(EpisodeListQuery::new().order_by(EpisodeSortField::AirDate, SortDirection::Desc))
        .unwrap();
    assert_eq!(by_air_date.last().map(|e| e.air_date), Some(None));
}

#[test]
fn test_season_eager_loading() {
    let test_db = common::TestDb::new("test_season_eager_load.db");
    let season_repo = DieselSeasonRepository::new(test_db.pool());
    let episode_repo = DieselEpisodeRepository::new(test_db.pool());

    let season_one = season_repo.create().unwrap();
    let season_two = season_repo.create().unwrap();
    let season_three = season_repo.create().unwrap();

    episode_repo
        .create(&[
            NewEpisode::new("Pilot".to_string(), None, None, season_one.id),
            NewEpisode::new("Lawnmower Dog".to_string(), None, None, season_one.id),
            NewEpisode::new("A Rickle in Time".to_string(), None, None, season_two.id),
        ])
        .unwrap();

    let (total, seasons) = season_repo
        .list(SeasonListQuery::new().with_episodes())
        .unwrap();
    assert_eq!(total, 3);
    let episode_counts: Vec<usize> = seasons
        .iter()
        .map(|s| s.episodes.as_ref().map(Vec::len).unwrap())
        .collect();
    assert_eq!(episode_counts, vec![2, 1, 0]);

    let (_, without) = season_repo.list(SeasonListQuery::new()).unwrap();
    assert!(without.iter().all(|s| s.episodes.is_none()));

    let fetched = season_repo.get_by_id(season_three.id).unwrap().unwrap();
    assert_eq!(fetched.episodes, Some(vec![]));
}

#[test]
fn test_user_repository_lifecycle() {
    let test_db = common::TestDb::new("test_user_repository.db");
    let repo = DieselUserRepository::new(test_db.pool());

    let new_user = NewUser::new(
        "rick".to_string(),
        "Rick@Example.com".to_string(),
        "hash".to_string(),
        "activation-sig".to_string(),
    );
    let created = repo.create(&new_user).unwrap();
    assert!(!created.is_active);
    assert_eq!(created.email, "rick@example.com");

    assert!(repo.get_by_username("rick").unwrap().is_some());
    assert!(repo.get_by_email("rick@example.com").unwrap().is_some());

    // Duplicate usernames violate the unique constraint.
    assert!(repo.create(&new_user).is_err());

    assert!(repo.activate("bogus").unwrap().is_none());
    let activated = repo.activate("activation-sig").unwrap().unwrap();
    assert!(activated.is_active);

    let updated = repo
        .update(
            created.id,
            &UpdateUser::new(Some("new@example.com".to_string()), None),
        )
        .unwrap();
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.password_hash, "hash");
}

#[test]
fn test_notification_scoping_and_read_flag() {
    let test_db = common::TestDb::new("test_notification_repository.db");
    let user_repo = DieselUserRepository::new(test_db.pool());
    let repo = DieselNotificationRepository::new(test_db.pool());

    let rick = user_repo
        .create(&NewUser::new(
            "rick".to_string(),
            "rick@example.com".to_string(),
            "hash".to_string(),
            "sig-rick".to_string(),
        ))
        .unwrap();
    let morty = user_repo
        .create(&NewUser::new(
            "morty".to_string(),
            "morty@example.com".to_string(),
            "hash".to_string(),
            "sig-morty".to_string(),
        ))
        .unwrap();

    repo.create(&NewNotification::new(rick.id, "First".to_string()))
        .unwrap();
    let second = repo
        .create(&NewNotification::new(rick.id, "Second".to_string()))
        .unwrap();
    repo.create(&NewNotification::new(morty.id, "Other".to_string()))
        .unwrap();

    let (total, items) = repo.list(NotificationListQuery::new(rick.id)).unwrap();
    assert_eq!(total, 2);
    // Newest first.
    assert_eq!(items[0].body, "Second");
    assert!(items.iter().all(|n| n.user_id == rick.id));

    // Another user's notification id behaves like a missing one.
    assert!(repo.mark_read(second.id, morty.id).unwrap().is_none());

    let read = repo.mark_read(second.id, rick.id).unwrap().unwrap();
    assert!(read.is_read);

    let (unread_total, unread) = repo
        .list(NotificationListQuery::new(rick.id).unread_only())
        .unwrap();
    assert_eq!(unread_total, 1);
    assert_eq!(unread[0].body, "First");
}
