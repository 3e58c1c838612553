pub mod catalog_service;
pub mod favorite_service;
pub mod user_service;

pub use catalog_service::CatalogService;
pub use favorite_service::FavoriteService;
pub use user_service::UserService;
