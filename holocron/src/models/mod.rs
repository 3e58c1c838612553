pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::Character;
pub use favorite::{FavoriteRelation, FavoriteScope, FavoritesOverview, ReferenceEntity};
pub use planet::Planet;
pub use user::{NewUser, User};
pub use vehicle::Vehicle;
