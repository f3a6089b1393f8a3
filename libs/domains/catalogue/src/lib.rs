//! Catalogue Domain
//!
//! CRUD surface for catalogue items (menu entries) owned by providers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, validation, response mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity and payload DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalogue::{handlers, store::InMemoryCatalogueStore};
//!
//! let store = InMemoryCatalogueStore::new();
//! let router = handlers::router(store);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use error::{CatalogueError, CatalogueResult, StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use models::{CatalogueItem, CatalogueItemUpdate, NewCatalogueItem};
pub use store::{CatalogueItemStore, InMemoryCatalogueStore};
