//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde_json::Value;
use todolist_sync::{
    ApiError, ApiResponse, CreatedItem, Empty, HttpMethod, HttpRequest, HttpResponse, ItemDto,
    ItemId, ItemsPage, ListDto, ListId, TodolistClient, UpdateItemModel,
};

const BASE_URL: &str = "http://localhost:3000";

fn client_for(case: &Value) -> TodolistClient {
    let client = TodolistClient::new(BASE_URL);
    match case["api_key"].as_str() {
        Some(key) => client.with_api_key(key),
        None => client,
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn list_id(case: &Value) -> ListId {
    ListId::from(case["input"]["list_id"].as_str().unwrap())
}

fn item_id(case: &Value) -> ItemId {
    ItemId::from(case["input"]["item_id"].as_str().unwrap())
}

fn title(case: &Value) -> &str {
    case["input"]["title"].as_str().unwrap()
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn expected<T: DeserializeOwned>(case: &Value) -> T {
    serde_json::from_value(case["expected_result"].clone()).unwrap()
}

fn check_request(name: &str, req: &HttpRequest, expected_req: &Value) {
    assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected_req["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    let body = req
        .body
        .as_deref()
        .map(|raw| serde_json::from_str::<Value>(raw).unwrap())
        .unwrap_or(Value::Null);
    assert_eq!(body, expected_req["body"], "{name}: body");
}

/// Builds the request a case describes and parses its simulated response.
/// Parse results are compared as JSON so one runner covers every operation.
fn run_case(case: &Value) -> Result<Value, ApiError> {
    let c = client_for(case);
    let response = simulated(case);
    let value = match case["operation"].as_str().unwrap() {
        "get_lists" => serde_json::to_value(c.parse_get_lists(response)?),
        "create_list" => serde_json::to_value(c.parse_create_list(response)?),
        "update_list" => serde_json::to_value(c.parse_update_list(response)?),
        "delete_list" => serde_json::to_value(c.parse_delete_list(response)?),
        "get_items" => serde_json::to_value(c.parse_get_items(response)?),
        "create_item" => serde_json::to_value(c.parse_create_item(response)?),
        "update_item" => serde_json::to_value(c.parse_update_item(response)?),
        "delete_item" => serde_json::to_value(c.parse_delete_item(response)?),
        other => panic!("unknown operation: {other}"),
    };
    Ok(value.unwrap())
}

fn build_case(case: &Value) -> HttpRequest {
    let c = client_for(case);
    match case["operation"].as_str().unwrap() {
        "get_lists" => c.build_get_lists(),
        "create_list" => c.build_create_list(title(case)).unwrap(),
        "update_list" => c.build_update_list(&list_id(case), title(case)).unwrap(),
        "delete_list" => c.build_delete_list(&list_id(case)),
        "get_items" => c.build_get_items(&list_id(case)),
        "create_item" => c.build_create_item(&list_id(case), title(case)).unwrap(),
        "update_item" => {
            let model: UpdateItemModel =
                serde_json::from_value(case["input"]["model"].clone()).unwrap();
            c.build_update_item(&list_id(case), &item_id(case), &model).unwrap()
        }
        "delete_item" => c.build_delete_item(&list_id(case), &item_id(case)),
        other => panic!("unknown operation: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    for case in load(include_str!("../../test-vectors/lists.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &build_case(&case), &case["expected_request"]);

        let parsed = run_case(&case).unwrap();
        let expected = match case["operation"].as_str().unwrap() {
            "get_lists" => serde_json::to_value(expected::<Vec<ListDto>>(&case)),
            "create_list" => serde_json::to_value(expected::<ApiResponse<CreatedItem<ListDto>>>(&case)),
            _ => serde_json::to_value(expected::<ApiResponse<Empty>>(&case)),
        }
        .unwrap();
        assert_eq!(parsed, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[test]
fn item_test_vectors() {
    for case in load(include_str!("../../test-vectors/items.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &build_case(&case), &case["expected_request"]);

        let parsed = run_case(&case).unwrap();
        let expected = match case["operation"].as_str().unwrap() {
            "get_items" => serde_json::to_value(expected::<ItemsPage>(&case)),
            "create_item" => serde_json::to_value(expected::<ApiResponse<CreatedItem<ItemDto>>>(&case)),
            _ => serde_json::to_value(expected::<ApiResponse<Empty>>(&case)),
        }
        .unwrap();
        assert_eq!(parsed, expected, "{name}: parsed result");
    }
}

#[test]
fn rejected_create_has_no_item() {
    let case = load(include_str!("../../test-vectors/lists.json"))
        .into_iter()
        .find(|case| case["name"] == "create list rejected")
        .unwrap();
    let parsed = client_for(&case).parse_create_list(simulated(&case)).unwrap();
    assert!(!parsed.is_ok());
    assert_eq!(parsed.data.item, None);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn error_test_vectors() {
    for case in load(include_str!("../../test-vectors/errors.json")) {
        let name = case["name"].as_str().unwrap();
        let err = run_case(&case).unwrap_err();

        match case["expected_error"].as_str().unwrap() {
            "http" => {
                let status = case["simulated_response"]["status"].as_u64().unwrap() as u16;
                assert!(
                    matches!(&err, ApiError::Http { status: s, .. } if *s == status),
                    "{name}: expected Http({status}), got {err:?}"
                );
            }
            "deserialization" => {
                assert!(matches!(err, ApiError::Deserialization(_)), "{name}: got {err:?}");
            }
            other => panic!("unknown error kind: {other}"),
        }

        if let Some(message) = case["expected_message"].as_str() {
            assert_eq!(err.user_message(), message, "{name}: user message");
        }
    }
}
