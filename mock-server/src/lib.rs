use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const MAX_TITLE_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: String,
    pub title: String,
    pub order: i64,
    pub added_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub todo_list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: u8,
    pub priority: u8,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
    pub order: i64,
    pub added_date: Option<String>,
}

#[derive(Deserialize)]
pub struct TitleInput {
    pub title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: String,
    pub description: Option<String>,
    pub status: u8,
    pub priority: u8,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

/// Envelope of every mutating response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub result_code: i32,
    pub messages: Vec<String>,
    pub data: Value,
}

impl Envelope {
    fn ok(data: Value) -> Json<Self> {
        Json(Self {
            result_code: 0,
            messages: Vec::new(),
            data,
        })
    }

    fn rejected(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            result_code: 1,
            messages: vec![message.into()],
            data: json!({}),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksPage {
    pub items: Vec<Task>,
    pub total_count: usize,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct Db {
    pub lists: Vec<TodoList>,
    pub tasks: HashMap<String, Vec<Task>>,
    next_order: i64,
}

impl Db {
    fn next_order(&mut self) -> i64 {
        self.next_order -= 1;
        self.next_order
    }
}

pub type SharedDb = Arc<RwLock<Db>>;

pub fn app() -> Router {
    app_with_db(SharedDb::default())
}

pub fn app_with_db(db: SharedDb) -> Router {
    Router::new()
        .route("/todo-lists", get(list_lists).post(create_list))
        .route("/todo-lists/{list_id}", put(update_list).delete(delete_list))
        .route("/todo-lists/{list_id}/tasks", get(list_tasks).post(create_task))
        .route(
            "/todo-lists/{list_id}/tasks/{task_id}",
            put(update_task).delete(delete_task),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required");
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err("Title too long");
    }
    Ok(())
}

async fn list_lists(State(db): State<SharedDb>) -> Json<Vec<TodoList>> {
    Json(db.read().await.lists.clone())
}

async fn create_list(State(db): State<SharedDb>, Json(input): Json<TitleInput>) -> Json<Envelope> {
    if let Err(message) = validate_title(&input.title) {
        return Envelope::rejected(message);
    }
    let mut db = db.write().await;
    let list = TodoList {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        order: db.next_order(),
        added_date: None,
    };
    db.lists.insert(0, list.clone());
    db.tasks.insert(list.id.clone(), Vec::new());
    tracing::info!(list_id = %list.id, "list created");
    Envelope::ok(json!({ "item": list }))
}

async fn update_list(
    State(db): State<SharedDb>,
    Path(list_id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Json<Envelope> {
    if let Err(message) = validate_title(&input.title) {
        return Envelope::rejected(message);
    }
    let mut db = db.write().await;
    match db.lists.iter_mut().find(|list| list.id == list_id) {
        Some(list) => {
            list.title = input.title;
            Envelope::ok(json!({}))
        }
        None => Envelope::rejected("Todolist not found"),
    }
}

async fn delete_list(State(db): State<SharedDb>, Path(list_id): Path<String>) -> Json<Envelope> {
    let mut db = db.write().await;
    let before = db.lists.len();
    db.lists.retain(|list| list.id != list_id);
    if db.lists.len() == before {
        return Envelope::rejected("Todolist not found");
    }
    db.tasks.remove(&list_id);
    tracing::info!(%list_id, "list deleted");
    Envelope::ok(json!({}))
}

async fn list_tasks(State(db): State<SharedDb>, Path(list_id): Path<String>) -> Json<TasksPage> {
    let db = db.read().await;
    let page = match db.tasks.get(&list_id) {
        Some(tasks) => TasksPage {
            items: tasks.clone(),
            total_count: tasks.len(),
            error: None,
        },
        None => TasksPage {
            items: Vec::new(),
            total_count: 0,
            error: Some("Todolist not found".to_string()),
        },
    };
    Json(page)
}

async fn create_task(
    State(db): State<SharedDb>,
    Path(list_id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Json<Envelope> {
    if let Err(message) = validate_title(&input.title) {
        return Envelope::rejected(message);
    }
    let mut db = db.write().await;
    let order = db.next_order();
    let Some(tasks) = db.tasks.get_mut(&list_id) else {
        return Envelope::rejected("Todolist not found");
    };
    let task = Task {
        id: Uuid::new_v4().to_string(),
        todo_list_id: list_id,
        title: input.title,
        description: None,
        status: 0,
        priority: 1,
        start_date: None,
        deadline: None,
        order,
        added_date: None,
    };
    tasks.insert(0, task.clone());
    Envelope::ok(json!({ "item": task }))
}

async fn update_task(
    State(db): State<SharedDb>,
    Path((list_id, task_id)): Path<(String, String)>,
    Json(input): Json<UpdateTask>,
) -> Json<Envelope> {
    if let Err(message) = validate_title(&input.title) {
        return Envelope::rejected(message);
    }
    if input.status > 3 || input.priority > 4 {
        return Envelope::rejected("Invalid status or priority");
    }
    let mut db = db.write().await;
    let task = db
        .tasks
        .get_mut(&list_id)
        .and_then(|tasks| tasks.iter_mut().find(|task| task.id == task_id));
    let Some(task) = task else {
        return Envelope::rejected("Task not found");
    };
    task.title = input.title;
    task.description = input.description;
    task.status = input.status;
    task.priority = input.priority;
    task.start_date = input.start_date;
    task.deadline = input.deadline;
    Envelope::ok(json!({ "item": task.clone() }))
}

async fn delete_task(
    State(db): State<SharedDb>,
    Path((list_id, task_id)): Path<(String, String)>,
) -> Json<Envelope> {
    let mut db = db.write().await;
    let Some(tasks) = db.tasks.get_mut(&list_id) else {
        return Envelope::rejected("Todolist not found");
    };
    let before = tasks.len();
    tasks.retain(|task| task.id != task_id);
    if tasks.len() == before {
        return Envelope::rejected("Task not found");
    }
    Envelope::ok(json!({}))
}
