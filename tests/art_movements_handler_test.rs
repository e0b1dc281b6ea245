//! Integration tests for art movement handler routes

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use ismism::handlers;
use ismism::state::AppState;
use ismism::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes())
        .with_state(state.clone())
}

async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn names(body: &[Value]) -> Vec<&str> {
    body.iter().map(|m| m["name"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn test_list_movements_returns_summaries_by_name() {
    let state = setup_test_app_state().await;
    create_test_movement(&state.db, "Surrealism", 1924, &["dream"]).await;
    create_test_movement(&state.db, "Cubism", 1907, &[]).await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/api/art-movements")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(names(&body), vec!["Cubism", "Surrealism"]);

    // Summaries only carry the list fields
    let keys: Vec<&String> = body[1].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    assert_eq!(body[1]["description"], "Surrealism description");
    assert_eq!(body[1]["tags"], json!(["dream"]));
}

#[tokio::test]
async fn test_create_and_get_movement() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/api/art-movements",
            json!({
                "name": "Bauhaus",
                "description": "Art school uniting crafts and fine arts",
                "startYear": 1919,
                "endYear": 1933,
                "theoreticalFoundation": "Form follows function",
                "forms": ["architecture", "typography"],
                "representativeArtists": [
                    {"name": "Walter Gropius", "works": ["Bauhaus Dessau"]},
                    {"name": "Paul Klee"}
                ],
                "characteristics": ["geometric"],
                "tags": ["modernism", "design"],
                "context": "Weimar Republic"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = parse_json_response(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(get(&format!("/api/art-movements/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = parse_json_response(response).await;
    assert_eq!(body["name"], "Bauhaus");
    assert_eq!(body["start_year"], 1919);
    assert_eq!(body["end_year"], 1933);
    assert_eq!(body["theoretical_foundation"], "Form follows function");
    assert_eq!(body["forms"], json!(["architecture", "typography"]));
    assert_eq!(
        body["representative_artists"],
        json!([
            {"name": "Walter Gropius", "works": ["Bauhaus Dessau"]},
            {"name": "Paul Klee", "works": []}
        ])
    );
    assert_eq!(body["context"], "Weimar Republic");
}

#[tokio::test]
async fn test_create_movement_validation() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let cases = [
        json!({"description": "no name", "start_year": 1900}),
        json!({"name": "Nameless", "start_year": 1900}),
        json!({"name": "Yearless", "description": "x"}),
        json!({"name": "Backwards", "description": "x", "start_year": 1950, "end_year": 1940}),
    ];

    for payload in cases {
        let response = app
            .clone()
            .oneshot(with_json("POST", "/api/art-movements", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_create_duplicate_name_conflicts() {
    let state = setup_test_app_state().await;
    create_test_movement(&state.db, "Fauvism", 1905, &[]).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(with_json(
            "POST",
            "/api/art-movements",
            json!({"name": "Fauvism", "description": "again", "start_year": 1905}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_movement_errors() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/art-movements/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = parse_json_response(response).await;
    assert_eq!(body["error"], "Art movement not found");

    let response = app
        .oneshot(get("/api/art-movements/bogus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_movement() {
    let state = setup_test_app_state().await;
    let movement = create_test_movement(&state.db, "Futurism", 1909, &[]).await;
    create_test_movement(&state.db, "Vorticism", 1914, &[]).await;
    let app = create_test_router(&state);
    let uri = format!("/api/art-movements/{}", movement.id);

    let response = app
        .clone()
        .oneshot(with_json("PUT", &uri, json!({"end_year": 1944, "tags": ["speed"]})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = parse_json_response(response).await;
    assert_eq!(body["name"], "Futurism");
    assert_eq!(body["end_year"], 1944);
    assert_eq!(body["tags"], json!(["speed"]));

    // end_year before the stored start_year
    let response = app
        .clone()
        .oneshot(with_json("PUT", &uri, json!({"end_year": 1800})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Renaming onto another movement
    let response = app
        .clone()
        .oneshot(with_json("PUT", &uri, json!({"name": "Vorticism"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Keeping its own name is fine
    let response = app
        .oneshot(with_json("PUT", &uri, json!({"name": "Futurism"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_movement() {
    let state = setup_test_app_state().await;
    let movement = create_test_movement(&state.db, "Orphism", 1912, &[]).await;
    let app = create_test_router(&state);
    let uri = format!("/api/art-movements/{}", movement.id);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_movement_timeline_is_chronological() {
    let state = setup_test_app_state().await;
    create_test_movement(&state.db, "Pop Art", 1955, &[]).await;
    create_test_movement(&state.db, "Impressionism", 1867, &[]).await;
    create_test_movement(&state.db, "Expressionism", 1905, &[]).await;
    create_test_movement(&state.db, "Die Brücke", 1905, &[]).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(get("/api/art-movements/timeline/all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(
        names(&body),
        vec!["Impressionism", "Die Brücke", "Expressionism", "Pop Art"]
    );
    assert_eq!(body[0]["start_year"], 1867);
    assert!(body[0]["end_year"].is_null());
}

#[tokio::test]
async fn test_search_movements() {
    let state = setup_test_app_state().await;
    create_test_movement(&state.db, "Cubism", 1907, &[]).await;
    create_test_movement(&state.db, "Analytic Cubism", 1909, &[]).await;
    create_test_movement(&state.db, "Fauvism", 1905, &[]).await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(get("/api/art-movements/search?query=CUB"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(names(&body), vec!["Analytic Cubism", "Cubism"]);

    // Matches the description too
    let response = app
        .clone()
        .oneshot(get("/api/art-movements/search?query=fauvism%20desc"))
        .await
        .unwrap();
    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(names(&body), vec!["Fauvism"]);

    // LIKE wildcards are literal
    let response = app
        .clone()
        .oneshot(get("/api/art-movements/search?query=%25"))
        .await
        .unwrap();
    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(body.len(), 0);

    let response = app
        .oneshot(get("/api/art-movements/search?query=%20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filter_by_tags() {
    let state = setup_test_app_state().await;
    create_test_movement(&state.db, "Dada", 1916, &["anti-art", "Zurich"]).await;
    create_test_movement(&state.db, "Surrealism", 1924, &["dream"]).await;
    create_test_movement(&state.db, "Minimalism", 1960, &["geometric"]).await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(get("/api/art-movements/filter/tags?tags=zurich,%20dream"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(names(&body), vec!["Dada", "Surrealism"]);

    let response = app
        .clone()
        .oneshot(get("/api/art-movements/filter/tags?tags=baroque"))
        .await
        .unwrap();
    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(body.len(), 0);

    let response = app
        .oneshot(get("/api/art-movements/filter/tags?tags=,"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrent_duplicate_creates_conflict() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);
    let payload = json!({"name": "Fauvism", "description": "Wild beasts", "start_year": 1905});

    let (first, second) = tokio::join!(
        app.clone()
            .oneshot(with_json("POST", "/api/art-movements", payload.clone())),
        app.clone()
            .oneshot(with_json("POST", "/api/art-movements", payload.clone())),
    );

    let mut statuses = vec![first.unwrap().status(), second.unwrap().status()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);

    let response = app.oneshot(get("/api/art-movements")).await.unwrap();
    let body: Vec<Value> = parse_json_response(response).await;
    assert_eq!(names(&body), vec!["Fauvism"]);
}

#[tokio::test]
async fn test_long_names_are_stored() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);
    let name = "Neo-".repeat(80) + "Plasticism";

    let response = app
        .oneshot(with_json(
            "POST",
            "/api/art-movements",
            json!({"name": name, "description": "x".repeat(5000), "start_year": 1917}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = parse_json_response(response).await;
    assert_eq!(body["name"].as_str().unwrap().len(), 330);
}

#[tokio::test]
async fn test_update_null_clears_optional_fields() {
    let state = setup_test_app_state().await;
    let movement = create_test_movement(&state.db, "Suprematism", 1913, &[]).await;
    let app = create_test_router(&state);
    let uri = format!("/api/art-movements/{}", movement.id);

    let response = app
        .clone()
        .oneshot(with_json(
            "PUT",
            &uri,
            json!({"end_year": 1935, "context": "Moscow"}),
        ))
        .await
        .unwrap();
    let body: Value = parse_json_response(response).await;
    assert_eq!(body["end_year"], 1935);

    // Absent fields are kept
    let response = app
        .clone()
        .oneshot(with_json("PUT", &uri, json!({"tags": ["abstraction"]})))
        .await
        .unwrap();
    let body: Value = parse_json_response(response).await;
    assert_eq!(body["end_year"], 1935);
    assert_eq!(body["context"], "Moscow");

    // An explicit null clears
    let response = app
        .oneshot(with_json(
            "PUT",
            &uri,
            json!({"end_year": null, "context": null}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = parse_json_response(response).await;
    assert!(body["end_year"].is_null());
    assert!(body["context"].is_null());
}
