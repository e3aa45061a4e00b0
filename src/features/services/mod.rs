//! Bookable services and their listing for the dashboard.
//!
//! A service is a priced offering requested by an end client, optionally
//! filed under one category and assigned to one professional (both foreign
//! keys are nullable; a service is valid with neither). The listing joins
//! the category title and the professional's name for the dashboard cards.
//! Unlike the other features, failures here propagate to the caller.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/services` | Yes | Create service |
//! | GET | `/api/services` | Yes | List services with relations |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ServiceService;
