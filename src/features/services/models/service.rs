use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Service status enum matching database enum
///
/// Set at creation (defaults to `pending`); no operation transitions it
/// further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "service_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Pending,
    Completed,
    Confirmed,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Pending => write!(f, "pending"),
            ServiceStatus::Completed => write!(f, "completed"),
            ServiceStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// Database model for a bookable service
#[derive(Debug, Clone, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    /// Name of the end client who requested the service
    pub client_name: String,
    pub description: String,
    pub price: f64,
    pub status: ServiceStatus,
    pub category_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A service row joined with the title of its category and the name of its
/// professional, both through nullable foreign keys.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceWithRelations {
    #[sqlx(flatten)]
    pub service: Service,
    pub category_title: Option<String>,
    pub professional_name: Option<String>,
}

/// Insert payload; id, status default, and timestamps come from the store
#[derive(Debug, Clone)]
pub struct NewService {
    pub title: String,
    pub client_name: String,
    pub description: String,
    pub price: f64,
    pub category_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(ServiceStatus::default(), ServiceStatus::Pending);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(ServiceStatus::Completed.to_string(), "completed");
    }
}
