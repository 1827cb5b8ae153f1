use std::collections::HashSet;

use super::actions::AppAction;
use super::actions::ItemsAction;
use super::actions::ListsAction;
use super::actions::StoreAction;
use super::state::AppStatus;
use super::state::ItemDomain;
use super::state::ItemsByList;
use super::state::ListDomain;
use super::state::RequestStatus;
use super::state::RootState;
use super::types::ListId;

/// Apply one intent and return the next snapshot. `state` is never modified.
pub fn reduce(state: &RootState, action: &StoreAction) -> RootState {
    match action {
        StoreAction::App(app) => RootState {
            app: reduce_app(&state.app, app),
            lists: state.lists.clone(),
            items: state.items.clone(),
        },
        StoreAction::Lists(lists) => RootState {
            app: state.app.clone(),
            lists: reduce_lists(&state.lists, lists),
            items: reduce_items_for_lists(&state.items, lists),
        },
        StoreAction::Items(items) => RootState {
            app: state.app.clone(),
            lists: state.lists.clone(),
            items: reduce_items(&state.items, items),
        },
    }
}

pub fn reduce_app(state: &AppStatus, action: &AppAction) -> AppStatus {
    match action {
        AppAction::SetStatus(status) => AppStatus {
            status: *status,
            ..state.clone()
        },
        AppAction::SetError(error) => AppStatus {
            error: error.clone(),
            ..state.clone()
        },
    }
}

pub fn reduce_lists(state: &[ListDomain], action: &ListsAction) -> Vec<ListDomain> {
    match action {
        ListsAction::Add(list) => std::iter::once(ListDomain::from_server(list.clone()))
            .chain(state.iter().filter(|tl| tl.id() != &list.id).cloned())
            .collect(),
        ListsAction::Remove { id } => state.iter().filter(|tl| tl.id() != id).cloned().collect(),
        ListsAction::ChangeTitle { id, title } => map_list(state, id, |tl| {
            tl.list.title = title.clone();
        }),
        ListsAction::ChangeFilter { id, filter } => map_list(state, id, |tl| {
            tl.filter = *filter;
        }),
        ListsAction::SetAll(lists) => {
            let mut seen = HashSet::new();
            lists
                .iter()
                .filter(|list| seen.insert(list.id.clone()))
                .cloned()
                .map(ListDomain::from_server)
                .collect()
        }
        ListsAction::SetEntityStatus { id, status } => map_list(state, id, |tl| {
            tl.entity_status = *status;
        }),
    }
}

fn map_list(state: &[ListDomain], id: &ListId, update: impl Fn(&mut ListDomain)) -> Vec<ListDomain> {
    state
        .iter()
        .map(|tl| {
            let mut tl = tl.clone();
            if tl.id() == id {
                update(&mut tl);
            }
            tl
        })
        .collect()
}

/// Item-side effect of a list intent: the item map mirrors the list ids.
pub fn reduce_items_for_lists(state: &ItemsByList, action: &ListsAction) -> ItemsByList {
    match action {
        ListsAction::Add(list) => {
            let mut next = state.clone();
            next.insert(list.id.clone(), Vec::new());
            next
        }
        ListsAction::Remove { id } => {
            let mut next = state.clone();
            next.remove(id);
            next
        }
        ListsAction::SetAll(lists) => lists
            .iter()
            .map(|list| (list.id.clone(), Vec::new()))
            .collect(),
        ListsAction::ChangeTitle { .. }
        | ListsAction::ChangeFilter { .. }
        | ListsAction::SetEntityStatus { .. } => state.clone(),
    }
}

pub fn reduce_items(state: &ItemsByList, action: &ItemsAction) -> ItemsByList {
    match action {
        ItemsAction::Add(item) => {
            if !state.contains_key(&item.list_id) {
                tracing::error!(
                    list_id = %item.list_id,
                    item_id = %item.id,
                    "item added to a list with no item sequence; ignoring"
                );
                return state.clone();
            }
            replace_items(state, &item.list_id, |items| {
                std::iter::once(ItemDomain::from_server(item.clone()))
                    .chain(items.iter().filter(|t| t.id() != &item.id).cloned())
                    .collect()
            })
        }
        ItemsAction::Remove { list_id, item_id } => replace_items(state, list_id, |items| {
            items.iter().filter(|t| t.id() != item_id).cloned().collect()
        }),
        ItemsAction::Update {
            list_id,
            item_id,
            patch,
        } => replace_items(state, list_id, |items| {
            items
                .iter()
                .map(|t| {
                    let mut t = t.clone();
                    if t.id() == item_id {
                        patch.apply_to(&mut t.item);
                        t.entity_status = RequestStatus::Idle;
                    }
                    t
                })
                .collect()
        }),
        ItemsAction::SetEntityStatus {
            list_id,
            item_id,
            status,
        } => replace_items(state, list_id, |items| {
            items
                .iter()
                .map(|t| {
                    let mut t = t.clone();
                    if t.id() == item_id {
                        t.entity_status = *status;
                    }
                    t
                })
                .collect()
        }),
        ItemsAction::SetAll { list_id, items } => {
            if !state.contains_key(list_id) {
                tracing::warn!(%list_id, "items arrived for a list that is gone; dropping them");
                return state.clone();
            }
            let rows = items
                .iter()
                .filter(|item| {
                    let owned = &item.list_id == list_id;
                    if !owned {
                        tracing::warn!(
                            %list_id,
                            item_id = %item.id,
                            owner = %item.list_id,
                            "item belongs to another list; skipping"
                        );
                    }
                    owned
                })
                .cloned()
                .map(ItemDomain::from_server)
                .collect();
            let mut next = state.clone();
            next.insert(list_id.clone(), rows);
            next
        }
    }
}

/// Copy of `state` with the sequence of `list_id` rebuilt by `rebuild`.
/// Lists without a sequence are left alone.
fn replace_items(
    state: &ItemsByList,
    list_id: &ListId,
    rebuild: impl FnOnce(&[ItemDomain]) -> Vec<ItemDomain>,
) -> ItemsByList {
    let mut next = state.clone();
    if let Some(items) = next.get_mut(list_id) {
        let rebuilt = rebuild(items);
        *items = rebuilt;
    }
    next
}

#[cfg(test)]
mod tests;
