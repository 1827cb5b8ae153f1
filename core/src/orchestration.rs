//! Request orchestration: one async function per remote operation.
//!
//! # Design
//! Every operation follows the same shape:
//! 1. dispatch global `Loading` (and, for update/remove, the row's `Loading`);
//! 2. await the remote call;
//! 3. on success dispatch the data intent, then `Succeeded` globally and on
//!    the row; on an application rejection or transport failure dispatch the
//!    error message, then `Failed` globally and on the row. Entity data is
//!    left as it was.
//!
//! The outcome is also returned to the caller as `Result<T, SyncError>`, so a
//! UI can track each call on its own instead of relying on the shared status
//! record, which is last-write-wins when calls overlap.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::actions::{AppAction, ItemsAction, ListsAction, StoreAction};
use crate::api::TodolistApi;
use crate::error::{ApiError, SyncError};
use crate::state::{FilterValue, RequestStatus};
use crate::store::Store;
use crate::types::{ApiResponse, CreatedItem, ItemDto, ItemId, ItemPatch, ListDto, ListId};

/// Which row, if any, an operation reports its progress on.
#[derive(Debug, Clone, Copy)]
enum Target<'a> {
    List(&'a ListId),
    Item(&'a ListId, &'a ItemId),
}

/// Result of a full bootstrap. Lists always load first; per-list item
/// failures are collected here instead of aborting the other lists.
#[derive(Debug, Default)]
pub struct FetchAllReport {
    pub loaded: Vec<ListId>,
    pub failed: Vec<(ListId, SyncError)>,
}

impl FetchAllReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Orchestrator<A> {
    store: Store,
    api: A,
}

impl<A: TodolistApi> Orchestrator<A> {
    pub fn new(store: Store, api: A) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn fetch_lists(&self) -> Result<Vec<ListDto>, SyncError> {
        self.begin("fetch_lists", None);
        let outcome = self.api.get_lists().await.map_err(SyncError::from);
        self.settle("fetch_lists", None, outcome, |lists| {
            ListsAction::SetAll(lists.clone()).into()
        })
    }

    pub async fn add_list(&self, title: &str) -> Result<ListDto, SyncError> {
        self.begin("add_list", None);
        let outcome = self
            .api
            .create_list(title)
            .await
            .map_err(SyncError::from)
            .and_then(created);
        self.settle("add_list", None, outcome, |list| {
            ListsAction::Add(list.clone()).into()
        })
    }

    pub async fn remove_list(&self, list_id: &ListId) -> Result<(), SyncError> {
        let target = Target::List(list_id);
        self.begin("remove_list", Some(target));
        let outcome = self
            .api
            .delete_list(list_id)
            .await
            .map_err(SyncError::from)
            .and_then(accept)
            .map(drop);
        self.settle("remove_list", Some(target), outcome, |_| {
            ListsAction::Remove {
                id: list_id.clone(),
            }
            .into()
        })
    }

    pub async fn change_list_title(&self, list_id: &ListId, title: &str) -> Result<(), SyncError> {
        if self.store.state().list(list_id).is_none() {
            warn!(%list_id, "list not found in state; skipping title update");
            return Err(SyncError::UnknownList(list_id.clone()));
        }

        let target = Target::List(list_id);
        self.begin("change_list_title", Some(target));
        let outcome = self
            .api
            .update_list(list_id, title)
            .await
            .map_err(SyncError::from)
            .and_then(accept)
            .map(drop);
        self.settle("change_list_title", Some(target), outcome, |_| {
            ListsAction::ChangeTitle {
                id: list_id.clone(),
                title: title.to_string(),
            }
            .into()
        })
    }

    /// Local only; the filter never reaches the server.
    pub fn change_list_filter(&self, list_id: &ListId, filter: FilterValue) {
        self.store.dispatch(ListsAction::ChangeFilter {
            id: list_id.clone(),
            filter,
        });
    }

    pub async fn fetch_items(&self, list_id: &ListId) -> Result<Vec<ItemDto>, SyncError> {
        self.begin("fetch_items", None);
        let outcome = self
            .api
            .get_items(list_id)
            .await
            .map_err(SyncError::from)
            .and_then(|page| match page.error {
                Some(error) if !error.is_empty() => Err(SyncError::rejected(1, vec![error])),
                _ => Ok(page.items),
            });
        self.settle("fetch_items", None, outcome, |items| {
            ItemsAction::SetAll {
                list_id: list_id.clone(),
                items: items.clone(),
            }
            .into()
        })
    }

    pub async fn add_item(&self, list_id: &ListId, title: &str) -> Result<ItemDto, SyncError> {
        self.begin("add_item", None);
        let outcome = self
            .api
            .create_item(list_id, title)
            .await
            .map_err(SyncError::from)
            .and_then(created);
        self.settle("add_item", None, outcome, |item| {
            ItemsAction::Add(item.clone()).into()
        })
    }

    pub async fn remove_item(&self, list_id: &ListId, item_id: &ItemId) -> Result<(), SyncError> {
        let target = Target::Item(list_id, item_id);
        self.begin("remove_item", Some(target));
        let outcome = self
            .api
            .delete_item(list_id, item_id)
            .await
            .map_err(SyncError::from)
            .and_then(accept)
            .map(drop);
        self.settle("remove_item", Some(target), outcome, |_| {
            ItemsAction::Remove {
                list_id: list_id.clone(),
                item_id: item_id.clone(),
            }
            .into()
        })
    }

    /// The update endpoint replaces the whole record, so the patch is merged
    /// over the item's current fields before sending. An item missing from
    /// the local state aborts the call before anything is dispatched.
    pub async fn update_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        patch: ItemPatch,
    ) -> Result<(), SyncError> {
        let model = {
            let state = self.store.state();
            match state.item(list_id, item_id) {
                Some(current) => patch.merge_into(current.item.update_model()),
                None => {
                    warn!(%list_id, %item_id, "item not found in state; skipping update");
                    return Err(SyncError::UnknownItem {
                        list_id: list_id.clone(),
                        item_id: item_id.clone(),
                    });
                }
            }
        };

        let target = Target::Item(list_id, item_id);
        self.begin("update_item", Some(target));
        let outcome = self
            .api
            .update_item(list_id, item_id, &model)
            .await
            .map_err(SyncError::from)
            .and_then(accept)
            .map(drop);
        self.settle("update_item", Some(target), outcome, |_| {
            ItemsAction::Update {
                list_id: list_id.clone(),
                item_id: item_id.clone(),
                patch,
            }
            .into()
        })
    }

    /// Bootstrap: load every list, then every list's items concurrently.
    pub async fn fetch_all(&self) -> Result<FetchAllReport, SyncError> {
        let lists = self.fetch_lists().await?;
        let results = join_all(lists.iter().map(|list| async move {
            (list.id.clone(), self.fetch_items(&list.id).await)
        }))
        .await;

        let mut report = FetchAllReport::default();
        for (list_id, result) in results {
            match result {
                Ok(_) => report.loaded.push(list_id),
                Err(err) => report.failed.push((list_id, err)),
            }
        }
        debug!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "bootstrap finished"
        );
        Ok(report)
    }

    /// What the error banner's close button does.
    pub fn dismiss_error(&self) {
        self.store.dispatch(AppAction::SetError(None));
    }

    fn begin(&self, operation: &'static str, target: Option<Target<'_>>) {
        debug!(operation, "request started");
        self.store.dispatch(AppAction::SetStatus(RequestStatus::Loading));
        if let Some(target) = target {
            self.set_entity_status(target, RequestStatus::Loading);
        }
    }

    fn settle<T>(
        &self,
        operation: &'static str,
        target: Option<Target<'_>>,
        outcome: Result<T, SyncError>,
        on_success: impl FnOnce(&T) -> StoreAction,
    ) -> Result<T, SyncError> {
        match outcome {
            Ok(value) => {
                self.store.dispatch(on_success(&value));
                self.store
                    .dispatch(AppAction::SetStatus(RequestStatus::Succeeded));
                if let Some(target) = target {
                    self.set_entity_status(target, RequestStatus::Succeeded);
                }
                debug!(operation, "request succeeded");
                Ok(value)
            }
            Err(err) => {
                match &err {
                    SyncError::Rejected { result_code, .. } => {
                        warn!(operation, result_code, error = %err.user_message(), "request rejected")
                    }
                    _ => warn!(operation, error = %err, "request failed"),
                }
                self.store
                    .dispatch(AppAction::SetError(Some(err.user_message())));
                self.store.dispatch(AppAction::SetStatus(RequestStatus::Failed));
                if let Some(target) = target {
                    self.set_entity_status(target, RequestStatus::Failed);
                }
                Err(err)
            }
        }
    }

    fn set_entity_status(&self, target: Target<'_>, status: RequestStatus) {
        match target {
            Target::List(id) => self.store.dispatch(ListsAction::SetEntityStatus {
                id: id.clone(),
                status,
            }),
            Target::Item(list_id, item_id) => self.store.dispatch(ItemsAction::SetEntityStatus {
                list_id: list_id.clone(),
                item_id: item_id.clone(),
                status,
            }),
        }
    }
}

fn accept<D>(response: ApiResponse<D>) -> Result<D, SyncError> {
    if response.is_ok() {
        Ok(response.data)
    } else {
        Err(SyncError::rejected(response.result_code, response.messages))
    }
}

fn created<T>(response: ApiResponse<CreatedItem<T>>) -> Result<T, SyncError> {
    accept(response)?
        .item
        .ok_or(SyncError::Transport(ApiError::MissingPayload))
}
