use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use rsvp_shared::models::Intention;
use rsvp_shared::test_utils::http_test_utils::{create_test_request, response_to_json};
use serde_json::json;
use tower::ServiceExt;

use super::test_app::{create_test_app, pause_between_writes};
use crate::error::STORE_WRITE_FAILED;

#[tokio::test]
async fn test_declined_intention_is_listed_first() {
    let (app, store) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(create_test_request(
            "POST",
            "/intentions",
            Some(json!({ "name": "Duda", "willAttend": true })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    pause_between_writes().await;

    let response = app
        .clone()
        .oneshot(create_test_request(
            "POST",
            "/intentions",
            Some(json!({ "name": "Caio", "willAttend": false })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let caio_id = response_to_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let intentions = store.intentions().get_intentions().await.unwrap();
    assert_eq!(intentions[0].id, caio_id);
    assert_eq!(intentions[0].name, "Caio");
    assert!(!intentions[0].will_attend);

    let response = app
        .oneshot(create_test_request("GET", "/intentions", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json_resp = response_to_json(response).await;
    assert_eq!(json_resp["intentions"][0]["name"], "Caio");
    assert_eq!(json_resp["intentions"][0]["willAttend"], false);
}

#[tokio::test]
async fn test_record_intention_trims_name() {
    let (app, store) = create_test_app().await;

    let response = app
        .oneshot(create_test_request(
            "POST",
            "/intentions",
            Some(json!({ "name": "  Caio  ", "willAttend": false })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let intentions = store.intentions().get_intentions().await.unwrap();
    assert!(intentions.iter().any(|i| i.name == "Caio"));
}

#[tokio::test]
async fn test_record_intention_blank_name_is_rejected() {
    let (app, _store) = create_test_app().await;

    let response = app
        .oneshot(create_test_request(
            "POST",
            "/intentions",
            Some(json!({ "name": "", "willAttend": false })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_record_intention_missing_answer_is_a_json_bad_request() {
    let (app, _store) = create_test_app().await;

    let response = app
        .oneshot(create_test_request(
            "POST",
            "/intentions",
            Some(json!({ "name": "Caio" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json_resp = response_to_json(response).await;
    assert!(json_resp["error"].is_string());
}

#[tokio::test]
async fn test_declined_list_keeps_only_declines_in_order() {
    let (app, store) = create_test_app().await;
    let Some(mock) = store.mock() else {
        return;
    };

    let at = |minute| Utc.with_ymd_and_hms(2025, 2, 21, 10, minute, 0).unwrap();
    let seed = [
        ("i1", "Ana", false, at(1)),
        ("i2", "Bia", true, at(2)),
        ("i3", "Caio", false, at(3)),
        ("i4", "Duda", false, at(3)),
    ];
    for (id, name, will_attend, created_at) in seed {
        mock.intentions.insert_record(Intention {
            id: id.into(),
            name: name.into(),
            will_attend,
            created_at,
        });
    }

    let response = app
        .oneshot(create_test_request("GET", "/intentions/declined", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json_resp = response_to_json(response).await;
    assert_eq!(json_resp["count"], 3);
    assert_eq!(json_resp["label"], "3 absences");

    // i3 and i4 share a timestamp and fall back to id order
    let names: Vec<_> = json_resp["absences"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Caio", "Duda", "Ana"]);
}

#[tokio::test]
async fn test_record_intention_store_failure() {
    let (app, store) = create_test_app().await;
    let Some(mock) = store.mock() else {
        return;
    };
    mock.intentions.fail_writes(true);

    let response = app
        .oneshot(create_test_request(
            "POST",
            "/intentions",
            Some(json!({ "name": "Caio", "willAttend": false })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json_resp = response_to_json(response).await;
    assert_eq!(json_resp["error"], STORE_WRITE_FAILED);
    assert!(mock.intentions.records().is_empty());
}
