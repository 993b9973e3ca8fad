pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use config::PawmarkConfig;
pub use error::PawmarkError;
pub use models::Favorite;
