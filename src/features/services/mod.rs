//! Service management feature.
//!
//! Services live under a category and carry one or more priced duration
//! options. Creating a service inserts the service row and every option in a
//! single transaction; updating with a `priceOptions` array atomically
//! replaces the whole option set.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/category/{category_id}/service` | Yes | Create service with options |
//! | GET | `/api/category/{category_id}/services` | Yes | List services with nested options |
//! | PUT | `/api/category/{category_id}/service/{service_id}` | Yes | Update service, optionally replacing options |
//! | DELETE | `/api/category/{category_id}/service/{service_id}` | Yes | Delete service (options cascade) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ServiceCatalogService;
