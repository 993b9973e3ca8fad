//! Client side of the favorites system: a wrapper over the Favorites API
//! (`api`), fetchers for the two public read-only pet APIs (`upstream`), and
//! HTML rendering of the favorites list (`render`).

pub mod api;
pub mod error;
pub mod render;
pub mod upstream;

pub use api::FavoritesClient;
pub use error::ClientError;
