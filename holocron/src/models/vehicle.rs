use holocron_data::Entity;
use serde::{Deserialize, Serialize};

use super::ReferenceEntity;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub vehicle_name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
}

impl Entity for Vehicle {
    type Id = i64;

    fn table_name() -> &'static str {
        "vehicle"
    }

    fn display_name() -> &'static str {
        "Vehicle"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "vehicle_name", "model", "vehicle_class", "manufacturer"]
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl ReferenceEntity for Vehicle {
    fn collection() -> &'static str {
        "vehicles"
    }

    fn favorite_table() -> &'static str {
        "fav_vehicle"
    }

    fn favorite_column() -> &'static str {
        "vehicle_id"
    }
}
