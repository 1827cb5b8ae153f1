pub(super) use super::reduce;
pub(super) use super::reduce_app;
pub(super) use super::reduce_items;
pub(super) use super::reduce_lists;
pub(super) use crate::actions::AppAction;
pub(super) use crate::actions::ItemsAction;
pub(super) use crate::actions::ListsAction;
pub(super) use crate::actions::StoreAction;
pub(super) use crate::state::AppStatus;
pub(super) use crate::state::FilterValue;
pub(super) use crate::state::ItemDomain;
pub(super) use crate::state::ListDomain;
pub(super) use crate::state::RequestStatus;
pub(super) use crate::state::RootState;
pub(super) use crate::types::ItemDto;
pub(super) use crate::types::ItemId;
pub(super) use crate::types::ItemPatch;
pub(super) use crate::types::ItemPriority;
pub(super) use crate::types::ItemStatus;
pub(super) use crate::types::ListDto;
pub(super) use crate::types::ListId;


fn list(id: &str, title: &str) -> ListDto {
    ListDto {
        id: ListId::from(id),
        title: title.to_string(),
        order: 0,
        added_date: None,
    }
}

fn item(list_id: &str, id: &str, title: &str) -> ItemDto {
    ItemDto {
        id: ItemId::from(id),
        list_id: ListId::from(list_id),
        title: title.to_string(),
        description: None,
        status: ItemStatus::New,
        priority: ItemPriority::Low,
        start_date: None,
        deadline: None,
        order: 0,
        added_date: None,
    }
}

fn apply(state: &RootState, action: impl Into<StoreAction>) -> RootState {
    reduce(state, &action.into())
}

/// Snapshot with lists `L1`, `L2`; `L1` holds `t1`, `t2`, `L2` holds `t3`.
fn seeded() -> RootState {
    let state = apply(
        &RootState::default(),
        ListsAction::SetAll(vec![list("L1", "Groceries"), list("L2", "Work")]),
    );
    let state = apply(
        &state,
        ItemsAction::SetAll {
            list_id: ListId::from("L1"),
            items: vec![item("L1", "t1", "Milk"), item("L1", "t2", "Bread")],
        },
    );
    apply(
        &state,
        ItemsAction::SetAll {
            list_id: ListId::from("L2"),
            items: vec![item("L2", "t3", "Report")],
        },
    )
}

fn list_ids(state: &RootState) -> Vec<&str> {
    state.lists.iter().map(|tl| tl.id().as_str()).collect()
}

fn item_ids<'a>(state: &'a RootState, list_id: &str) -> Vec<&'a str> {
    state
        .items_of(&ListId::from(list_id))
        .iter()
        .map(|t| t.id().as_str())
        .collect()
}
