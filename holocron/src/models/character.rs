use holocron_data::Entity;
use serde::{Deserialize, Serialize};

use super::ReferenceEntity;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Character {
    pub id: i64,
    pub name: Option<String>,
    pub height: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
}

impl Entity for Character {
    type Id = i64;

    fn table_name() -> &'static str {
        "character"
    }

    fn display_name() -> &'static str {
        "Character"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "height", "birth_year", "gender", "homeworld"]
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl ReferenceEntity for Character {
    fn collection() -> &'static str {
        "characters"
    }

    fn favorite_table() -> &'static str {
        "fav_character"
    }

    fn favorite_column() -> &'static str {
        "character_id"
    }
}
