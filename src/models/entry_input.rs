use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for creating a journal entry. `id` and `date` are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEntryInput {
    pub title: String,
    pub entry: String,
    pub mood: String,
    pub activity: String,
    #[serde(default)]
    pub private: Option<bool>,
}

/// Input for a partial update; only fields present in the payload change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEntryInput {
    pub title: Option<String>,
    pub entry: Option<String>,
    pub mood: Option<String>,
    pub activity: Option<String>,
    pub private: Option<bool>,
}
