use std::collections::HashMap;

use crate::types::{ItemDto, ItemId, ItemStatus, ListDto, ListId};

/// Request lifecycle shared by the global record and every entity row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_loading(self) -> bool {
        self == RequestStatus::Loading
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// Process-wide network status and the user-visible error, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppStatus {
    pub status: RequestStatus,
    pub error: Option<String>,
}

/// Which items of a list the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterValue {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterValue {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn accepts(self, status: ItemStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status != ItemStatus::Completed,
            Self::Completed => status == ItemStatus::Completed,
        }
    }
}

/// A server list plus the client-only display filter and row status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDomain {
    pub list: ListDto,
    pub filter: FilterValue,
    pub entity_status: RequestStatus,
}

impl ListDomain {
    pub fn from_server(list: ListDto) -> Self {
        Self {
            list,
            filter: FilterValue::All,
            entity_status: RequestStatus::Idle,
        }
    }

    pub fn id(&self) -> &ListId {
        &self.list.id
    }

    pub fn title(&self) -> &str {
        &self.list.title
    }
}

/// A server item plus its row status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDomain {
    pub item: ItemDto,
    pub entity_status: RequestStatus,
}

impl ItemDomain {
    pub fn from_server(item: ItemDto) -> Self {
        Self {
            item,
            entity_status: RequestStatus::Idle,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.item.id
    }
}

/// Item sequences keyed by the id of the list that owns them.
pub type ItemsByList = HashMap<ListId, Vec<ItemDomain>>;

/// One immutable snapshot of everything the UI renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub app: AppStatus,
    pub lists: Vec<ListDomain>,
    pub items: ItemsByList,
}

impl RootState {
    pub fn list(&self, list_id: &ListId) -> Option<&ListDomain> {
        self.lists.iter().find(|list| list.id() == list_id)
    }

    pub fn items_of(&self, list_id: &ListId) -> &[ItemDomain] {
        self.items.get(list_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn item(&self, list_id: &ListId, item_id: &ItemId) -> Option<&ItemDomain> {
        self.items
            .get(list_id)
            .and_then(|items| items.iter().find(|item| item.id() == item_id))
    }

    /// Items of `list_id` that pass the list's display filter.
    pub fn visible_items(&self, list_id: &ListId) -> Vec<&ItemDomain> {
        let filter = self.list(list_id).map(|list| list.filter).unwrap_or_default();
        visible_items(filter, self.items_of(list_id))
    }
}

pub fn visible_items(filter: FilterValue, items: &[ItemDomain]) -> Vec<&ItemDomain> {
    items
        .iter()
        .filter(|item| filter.accepts(item.item.status))
        .collect()
}
