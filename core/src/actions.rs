use super::state::FilterValue;
use super::state::RequestStatus;
use super::types::ItemDto;
use super::types::ItemId;
use super::types::ItemPatch;
use super::types::ListDto;
use super::types::ListId;

/// Every intent the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    App(AppAction),
    Lists(ListsAction),
    Items(ItemsAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    SetStatus(RequestStatus),
    SetError(Option<String>),
}

/// List transitions. `Add`, `Remove` and `SetAll` also create, drop, or
/// reinitialize item sequences in the same transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListsAction {
    Add(ListDto),
    Remove {
        id: ListId,
    },
    ChangeTitle {
        id: ListId,
        title: String,
    },
    ChangeFilter {
        id: ListId,
        filter: FilterValue,
    },
    SetAll(Vec<ListDto>),
    SetEntityStatus {
        id: ListId,
        status: RequestStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsAction {
    Add(ItemDto),
    Remove {
        list_id: ListId,
        item_id: ItemId,
    },
    Update {
        list_id: ListId,
        item_id: ItemId,
        patch: ItemPatch,
    },
    SetEntityStatus {
        list_id: ListId,
        item_id: ItemId,
        status: RequestStatus,
    },
    SetAll {
        list_id: ListId,
        items: Vec<ItemDto>,
    },
}

impl From<AppAction> for StoreAction {
    fn from(action: AppAction) -> Self {
        StoreAction::App(action)
    }
}

impl From<ListsAction> for StoreAction {
    fn from(action: ListsAction) -> Self {
        StoreAction::Lists(action)
    }
}

impl From<ItemsAction> for StoreAction {
    fn from(action: ItemsAction) -> Self {
        StoreAction::Items(action)
    }
}

impl StoreAction {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::App(AppAction::SetStatus(_)) => "app/set-status",
            StoreAction::App(AppAction::SetError(_)) => "app/set-error",
            StoreAction::Lists(ListsAction::Add(_)) => "lists/add",
            StoreAction::Lists(ListsAction::Remove { .. }) => "lists/remove",
            StoreAction::Lists(ListsAction::ChangeTitle { .. }) => "lists/change-title",
            StoreAction::Lists(ListsAction::ChangeFilter { .. }) => "lists/change-filter",
            StoreAction::Lists(ListsAction::SetAll(_)) => "lists/set-all",
            StoreAction::Lists(ListsAction::SetEntityStatus { .. }) => "lists/set-entity-status",
            StoreAction::Items(ItemsAction::Add(_)) => "items/add",
            StoreAction::Items(ItemsAction::Remove { .. }) => "items/remove",
            StoreAction::Items(ItemsAction::Update { .. }) => "items/update",
            StoreAction::Items(ItemsAction::SetEntityStatus { .. }) => "items/set-entity-status",
            StoreAction::Items(ItemsAction::SetAll { .. }) => "items/set-all",
        }
    }
}
