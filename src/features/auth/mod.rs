//! Authentication for the single administrative account.
//!
//! Login issues a signed, time-limited JWT; every catalog endpoint goes
//! through the bearer-token middleware in `core::middleware`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/login` | No | Exchange admin credentials for a token |

pub mod dtos;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
