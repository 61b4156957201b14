//! Category management feature.
//!
//! Categories are the top level of the catalog; each owns zero or more
//! services. Writes run inside a transaction, and the schema's unique
//! constraint on the name is the authoritative duplicate guard.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/category` | Yes | Create category |
//! | GET | `/api/categories` | Yes | List categories (newest first) |
//! | PUT | `/api/category/{category_id}` | Yes | Rename category |
//! | DELETE | `/api/category/{category_id}` | Yes | Delete empty category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
