//! Client-side state synchronization for the todolist service.
//!
//! # Overview
//! Keeps an in-memory mirror of the server's todolists and their items,
//! issues CRUD calls against the remote API, and reconciles the mirror with
//! what the server answers, including the per-row request status a UI uses to
//! disable controls while a call is in flight.
//!
//! # Design
//! - `reducer` holds pure transitions over immutable snapshots; `Store`
//!   applies them one at a time and publishes each new `Arc<RootState>`.
//! - `Orchestrator` sequences loading → remote call → reconciliation → status
//!   for every operation and returns the outcome to its caller.
//! - The remote side is the `TodolistApi` trait. `HttpTodolistApi` implements
//!   it with the host-does-IO `TodolistClient` (build/parse) plus a `Transport`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod actions;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod orchestration;
pub mod reducer;
pub mod state;
pub mod store;
pub mod transport;
pub mod types;

pub use actions::{AppAction, ItemsAction, ListsAction, StoreAction};
pub use api::{HttpTodolistApi, TodolistApi};
pub use client::TodolistClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, SyncError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use orchestration::{FetchAllReport, Orchestrator};
pub use reducer::reduce;
pub use state::{
    visible_items, AppStatus, FilterValue, ItemDomain, ItemsByList, ListDomain, RequestStatus,
    RootState,
};
pub use store::Store;
pub use transport::{Transport, UreqTransport};
pub use types::{
    ApiResponse, CreatedItem, Empty, ItemDto, ItemId, ItemPatch, ItemPriority, ItemStatus,
    ItemsPage, ListDto, ListId, UpdateItemModel,
};
