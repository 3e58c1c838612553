use holocron_data::Entity;
use serde::{Deserialize, Serialize};

use super::ReferenceEntity;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub planet_name: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
}

impl Entity for Planet {
    type Id = i64;

    fn table_name() -> &'static str {
        "planet"
    }

    fn display_name() -> &'static str {
        "Planet"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "planet_name", "gravity", "population", "climate"]
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl ReferenceEntity for Planet {
    fn collection() -> &'static str {
        "planets"
    }

    fn favorite_table() -> &'static str {
        "fav_planet"
    }

    fn favorite_column() -> &'static str {
        "planet_id"
    }
}
