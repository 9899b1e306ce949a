use serde::{Deserialize, Serialize};

use checklist_core::models::{Item, ItemChanges, NewItem};

/// Number of items returned by `GET /items` when no limit is given.
pub const DEFAULT_LIST_LIMIT: u32 = 10;

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Body of `POST /items` and `PUT /items/{id}`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ItemPayload {
    /// Free-text label
    pub text: String,
    /// Completion flag (create: defaults to false; update: left unchanged when omitted)
    pub is_done: Option<bool>,
}

impl ItemPayload {
    pub fn into_new_item(self) -> NewItem {
        NewItem::new(self.text, self.is_done)
    }

    pub fn into_changes(self) -> ItemChanges {
        ItemChanges::new(self.text, self.is_done)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct ItemResponse {
    pub id: i32,
    pub text: String,
    pub is_done: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            text: item.text,
            is_done: item.is_done,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Maximum number of items to return (default 10)
    pub limit: Option<u32>,
}

impl ListItemsQuery {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Root & health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GreetingResponse {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
