//! Wire DTOs for the todolist API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Field names follow
//! the remote API's camelCase JSON. Item status and priority travel as plain
//! integers so unknown clients and the server agree on the encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result code the API uses to signal success.
pub const RESULT_CODE_OK: i32 = 0;

/// Server-assigned identifier of a todolist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub String);

/// Server-assigned identifier of an item, unique within its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ListId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A todolist as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDto {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub added_date: Option<String>,
}

/// Lifecycle state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Draft,
}

impl From<ItemStatus> for u8 {
    fn from(value: ItemStatus) -> Self {
        match value {
            ItemStatus::New => 0,
            ItemStatus::InProgress => 1,
            ItemStatus::Completed => 2,
            ItemStatus::Draft => 3,
        }
    }
}

impl TryFrom<u8> for ItemStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::New),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            3 => Ok(Self::Draft),
            other => Err(format!("unknown item status {other}")),
        }
    }
}

/// Ordinal priority of an item, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemPriority {
    #[default]
    Low,
    Middle,
    Hi,
    Urgently,
    Later,
}

impl From<ItemPriority> for u8 {
    fn from(value: ItemPriority) -> Self {
        match value {
            ItemPriority::Low => 0,
            ItemPriority::Middle => 1,
            ItemPriority::Hi => 2,
            ItemPriority::Urgently => 3,
            ItemPriority::Later => 4,
        }
    }
}

impl TryFrom<u8> for ItemPriority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::Middle),
            2 => Ok(Self::Hi),
            3 => Ok(Self::Urgently),
            4 => Ok(Self::Later),
            other => Err(format!("unknown item priority {other}")),
        }
    }
}

/// A single item returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: ItemId,
    #[serde(rename = "todoListId")]
    pub list_id: ListId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub priority: ItemPriority,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub added_date: Option<String>,
}

impl ItemDto {
    /// The complete record the update endpoint expects for this item.
    pub fn update_model(&self) -> UpdateItemModel {
        UpdateItemModel {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            start_date: self.start_date.clone(),
            deadline: self.deadline.clone(),
        }
    }
}

/// Full record sent to the item update endpoint. The API replaces every
/// field, so omitted values would be cleared on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemModel {
    pub title: String,
    pub description: Option<String>,
    pub status: ItemStatus,
    pub priority: ItemPriority,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

/// Sparse set of item fields a caller wants to change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ItemStatus>,
    pub priority: Option<ItemPriority>,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

impl ItemPatch {
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Overlay the present fields onto a full update record.
    pub fn merge_into(&self, mut model: UpdateItemModel) -> UpdateItemModel {
        if let Some(title) = &self.title {
            model.title = title.clone();
        }
        if let Some(description) = &self.description {
            model.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            model.status = status;
        }
        if let Some(priority) = self.priority {
            model.priority = priority;
        }
        if let Some(start_date) = &self.start_date {
            model.start_date = Some(start_date.clone());
        }
        if let Some(deadline) = &self.deadline {
            model.deadline = Some(deadline.clone());
        }
        model
    }

    /// Overlay the present fields onto a stored item.
    pub fn apply_to(&self, item: &mut ItemDto) {
        let merged = self.merge_into(item.update_model());
        item.title = merged.title;
        item.description = merged.description;
        item.status = merged.status;
        item.priority = merged.priority;
        item.start_date = merged.start_date;
        item.deadline = merged.deadline;
    }
}

/// Body of the create and rename requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleInput {
    pub title: String,
}

/// Envelope wrapping every mutating response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<D> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub data: D,
}

impl<D> ApiResponse<D> {
    pub fn is_ok(&self) -> bool {
        self.result_code == RESULT_CODE_OK
    }
}

/// `data` payload of a create response. The server omits `item` when it
/// rejects the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedItem<T> {
    pub item: Option<T>,
}

impl<T> Default for CreatedItem<T> {
    fn default() -> Self {
        Self { item: None }
    }
}

/// `data` payload of responses that carry nothing the client reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Response of the item listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage {
    pub items: Vec<ItemDto>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_status_travels_as_integer() {
        let json = serde_json::to_value(ItemStatus::Completed).unwrap();
        assert_eq!(json, serde_json::json!(2));
        let back: ItemStatus = serde_json::from_value(serde_json::json!(3)).unwrap();
        assert_eq!(back, ItemStatus::Draft);
    }

    #[test]
    fn rejected_create_envelope_has_no_item() {
        let raw = r#"{"resultCode":1,"messages":["Title too long"],"data":{}}"#;
        let response: ApiResponse<CreatedItem<ListDto>> = serde_json::from_str(raw).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.data.item, None);

        let raw = r#"{"resultCode":1,"messages":[]}"#;
        let response: ApiResponse<CreatedItem<ItemDto>> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.data, CreatedItem::default());
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let result: Result<ItemPriority, _> = serde_json::from_value(serde_json::json!(9));
        assert!(result.is_err());
    }

    #[test]
    fn item_reads_todo_list_id() {
        let raw = r#"{"id":"t1","todoListId":"L1","title":"Milk","description":null,
            "status":1,"priority":2,"startDate":null,"deadline":"2024-01-01","order":0,"addedDate":"2023-12-01"}"#;
        let item: ItemDto = serde_json::from_str(raw).unwrap();
        assert_eq!(item.list_id, ListId::from("L1"));
        assert_eq!(item.status, ItemStatus::InProgress);
        assert_eq!(item.priority, ItemPriority::Hi);
        assert_eq!(item.deadline.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn rejected_create_has_no_item() {
        let raw = r#"{"resultCode":1,"messages":["Title too long"],"data":{}}"#;
        let response: ApiResponse<CreatedItem<ListDto>> = serde_json::from_str(raw).unwrap();
        assert!(!response.is_ok());
        assert!(response.data.item.is_none());
        assert_eq!(response.messages, vec!["Title too long".to_string()]);
    }

    #[test]
    fn envelope_without_data_defaults() {
        let response: ApiResponse<Empty> = serde_json::from_str(r#"{"resultCode":0}"#).unwrap();
        assert!(response.is_ok());
        assert!(response.messages.is_empty());
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let base = UpdateItemModel {
            title: "Milk".to_string(),
            description: Some("2 litres".to_string()),
            status: ItemStatus::New,
            priority: ItemPriority::Low,
            start_date: None,
            deadline: Some("2024-01-01".to_string()),
        };
        let merged = ItemPatch::status(ItemStatus::Completed).merge_into(base.clone());
        assert_eq!(merged.status, ItemStatus::Completed);
        assert_eq!(merged.title, base.title);
        assert_eq!(merged.description, base.description);
        assert_eq!(merged.deadline, base.deadline);
    }
}
