//! Salon professionals (the original schema called them "Users").
//!
//! Staff register the people who can be assigned to services. Both the
//! create and the list operation swallow persistence failures: the caller
//! sees a missing value rather than an error, and cannot distinguish "no
//! professionals yet" from "the read failed". That asymmetry with the other
//! features is deliberate and load-bearing for the dashboard.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/professionals` | Yes | Register professional |
//! | GET | `/api/professionals` | Yes | List professionals |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProfessionalService;
