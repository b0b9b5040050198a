use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: CharacterGender,
    pub status: CharacterStatus,
    pub species: CharacterSpecies,
    /// Relative path below the static mount, if an image was uploaded.
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

macro_rules! character_enum {
    ($name:ident { $($variant:ident => $text:expr),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Text form stored in the database and accepted as a filter value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($text => Self::$variant,)+
                    _ => Self::Unknown,
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                s.as_str().into()
            }
        }
    };
}

character_enum!(CharacterGender {
    Female => "female",
    Male => "male",
    Genderless => "genderless",
    Unknown => "unknown",
});

character_enum!(CharacterStatus {
    Alive => "alive",
    Dead => "dead",
    Unknown => "unknown",
});

character_enum!(CharacterSpecies {
    Human => "human",
    Alien => "alien",
    Humanoid => "humanoid",
    Robot => "robot",
    Animal => "animal",
    Unknown => "unknown",
});

#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub gender: CharacterGender,
    pub status: CharacterStatus,
    pub species: CharacterSpecies,
    pub image: Option<String>,
}

impl NewCharacter {
    #[must_use]
    pub fn new(
        name: String,
        gender: CharacterGender,
        status: CharacterStatus,
        species: CharacterSpecies,
        image: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            gender,
            status,
            species,
            image: image
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCharacter {
    pub name: String,
    pub gender: CharacterGender,
    pub status: CharacterStatus,
    pub species: CharacterSpecies,
    pub image: Option<String>,
}

impl UpdateCharacter {
    #[must_use]
    pub fn new(
        name: String,
        gender: CharacterGender,
        status: CharacterStatus,
        species: CharacterSpecies,
        image: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            gender,
            status,
            species,
            image: image
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_round_trips_through_text() {
        assert_eq!(CharacterGender::from("female"), CharacterGender::Female);
        assert_eq!(CharacterStatus::Alive.as_str(), "alive");
        assert_eq!(CharacterSpecies::from("robot"), CharacterSpecies::Robot);
    }

    #[test]
    fn unrecognized_text_falls_back_to_unknown() {
        assert_eq!(CharacterGender::from("plumbus"), CharacterGender::Unknown);
        assert_eq!(CharacterStatus::from(""), CharacterStatus::Unknown);
    }

    #[test]
    fn new_character_trims_and_drops_empty_image() {
        let character = NewCharacter::new(
            "  Morty ".to_string(),
            CharacterGender::Male,
            CharacterStatus::Alive,
            CharacterSpecies::Human,
            Some("   ".to_string()),
        );
        assert_eq!(character.name, "Morty");
        assert_eq!(character.image, None);
    }
}
