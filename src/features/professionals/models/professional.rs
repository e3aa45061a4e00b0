use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for professional (salon staff who can be assigned to services)
#[derive(Debug, Clone, FromRow)]
pub struct Professional {
    pub id: Uuid,
    pub full_name: String,
    pub city: String,
    pub specialty: String,
    /// Phone number, stored numerically as submitted by the dashboard form
    pub contact: i64,
    /// Base64 data URI or external URL, stored opaquely
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; id and timestamps are generated by the store
#[derive(Debug, Clone)]
pub struct NewProfessional {
    pub full_name: String,
    pub city: String,
    pub specialty: String,
    pub contact: i64,
    pub photo: Option<String>,
}
