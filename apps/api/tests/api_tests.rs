#[allow(dead_code)]
mod common;

use axum::http::StatusCode;
use common::{build_app, test_llm, TestClient};

/// The read endpoints never touch the LLM; point it at a closed port.
async fn client() -> TestClient {
    TestClient::new(build_app(test_llm("http://127.0.0.1:9")).await)
}

#[tokio::test]
async fn test_health() {
    let response = client().await.get("/health").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_list_assignments_sorted_by_module_number() {
    let response = client().await.get("/api/assignments").await;
    response.assert_status(StatusCode::OK);

    let body = response.json();
    let assignments = body.as_array().expect("expected a JSON array");
    assert_eq!(assignments.len(), 5);

    let modules: Vec<i64> = assignments
        .iter()
        .map(|a| a["moduleNumber"].as_i64().expect("moduleNumber missing"))
        .collect();
    let mut sorted = modules.clone();
    sorted.sort_unstable();
    assert_eq!(modules, sorted);

    // camelCase wire contract
    assert!(assignments[0]["keyLearnings"].is_array());
    assert_eq!(assignments[0]["title"], "Strategisch belang van IT");
}

#[tokio::test]
async fn test_get_assignment_is_repeatable() {
    let client = client().await;

    let first = client.get("/api/assignments/1").await;
    first.assert_status(StatusCode::OK);
    assert_eq!(first.json()["id"], 1);

    let second = client.get("/api/assignments/1").await;
    second.assert_status(StatusCode::OK);
    assert_eq!(first.json(), second.json());
}

#[tokio::test]
async fn test_get_assignment_unknown_id_is_404() {
    let response = client().await.get("/api/assignments/999999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "Niet gevonden");
}

#[tokio::test]
async fn test_list_skills_with_bounded_levels() {
    let response = client().await.get("/api/skills").await;
    response.assert_status(StatusCode::OK);

    let body = response.json();
    let skills = body.as_array().expect("expected a JSON array");
    assert_eq!(skills.len(), 6);

    for skill in skills {
        for field in ["levelBefore", "levelAfter"] {
            let level = skill[field].as_i64().expect("level missing");
            assert!((0..=10).contains(&level), "{field} out of bounds: {level}");
        }
    }
}

#[tokio::test]
async fn test_list_reflections() {
    let response = client().await.get("/api/reflections").await;
    response.assert_status(StatusCode::OK);

    let body = response.json();
    let reflections = body.as_array().expect("expected a JSON array");
    assert_eq!(reflections.len(), 4);

    let topics: Vec<&str> = reflections
        .iter()
        .map(|r| r["topic"].as_str().expect("topic missing"))
        .collect();
    assert!(topics.contains(&"Persoonlijke Groei"));
}

#[tokio::test]
async fn test_random_fun_answer() {
    let response = client().await.get("/api/vlaai").await;
    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert!(body["id"].as_i64().is_some());
    let text = body["text"].as_str().expect("text missing");
    assert!(!text.is_empty());
}
