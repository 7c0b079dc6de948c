//! End-to-end router tests over an in-memory fixture docs directory.

use api_rest::{router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use warroom_core::CoreConfig;

const DAILY_TASKS_DOC: &str = "\
---
campaign: Summer Launch
week: 3
---

# Daily Task System

## 👤 PERSON 1: Content Creator

#### Monday - Content Day
- [ ] Design Instagram post - 30 mins
  - Use the approved brand palette
- [ ] Draft launch newsletter - 45 mins

#### Tuesday - Review Day
- [ ] Review analytics report - 20 mins

## 👤 PERSON 2: Community Manager

#### Monday - Engagement Day
- [ ] Reply to urgent comments - 25 mins

## 👤 PERSON 3: Strategy Lead

#### Monday - Planning Day
- [ ] Plan ad campaign budget - 120 mins

## 📊 Daily Task Summary

Totals are tracked per person.
";

const PROJECT_DASHBOARD_DOC: &str = "\
# Project Dashboard

## 🎯 Project Overview
Launch the summer campaign across all channels.

## 📊 Live Project Status
On track.

## 👥 Team Assignments
Three-person team.

## 📈 Key Performance Metrics
Reach and engagement.

## 📅 This Week's Execution Plan
Ship the landing page.
";

const PERFORMANCE_DASHBOARD_DOC: &str = "\
# Performance Dashboard

## 📊 Executive Summary
Strong week.

## 🎯 Key Performance Indicators
CTR 4.2%.

## 📈 Performance Analysis
Instagram outperforms.
";

const TEAM_COORDINATION_DOC: &str = "\
# Team Coordination

## 🎯 Communication Framework
Async first.

## 📞 Daily Communication Schedule
09:00 check-in.

#### Daily Check-In Agenda Template
1. Yesterday
2. Today

#### Round 1: Kickoff
notes
";

const TEAM_ROLES_DOC: &str = "\
# Team Roles Guide

## Person 1: Content Creator & Visual Designer
Owns visuals.

### Daily Tasks
**Monday**
- prepare assets
**Tuesday**
- review metrics

## Person 2: Social Engagement & Community Manager
Owns replies.

## Person 3: Analytics, Advertising & Strategic Coordination
Owns reporting.
";

const SOCIAL_TEMPLATES_DOC: &str = "\
# Social Media Templates

## Instagram Launch Post
Caption copy here.

## Twitter Thread
Thread copy here.
";

fn fixture() -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().unwrap();
    let docs = [
        ("DAILY-TASK-SYSTEM.md", DAILY_TASKS_DOC),
        ("PROJECT-DASHBOARD.md", PROJECT_DASHBOARD_DOC),
        ("PERFORMANCE-DASHBOARD.md", PERFORMANCE_DASHBOARD_DOC),
        ("TEAM-COORDINATION.md", TEAM_COORDINATION_DOC),
        ("O-team-roles-guide.md", TEAM_ROLES_DOC),
        ("J-templates-examples.md", SOCIAL_TEMPLATES_DOC),
    ];
    for (name, content) in docs {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    let cfg = Arc::new(CoreConfig::new(dir.path().to_path_buf()).unwrap());
    let app = router(AppState::new(cfg));
    (dir, app)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (_dir, app) = fixture();
    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_daily_tasks_envelope_and_parsing() {
    let (_dir, app) = fixture();
    let (status, body) = get_json(app, "/api/tasks/daily").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let person1 = body["data"]["person1"].as_array().unwrap();
    assert_eq!(person1.len(), 3);
    assert_eq!(person1[0]["id"], "design-instagram-post-30-mins");
    assert_eq!(person1[0]["day"], "monday");
    assert_eq!(person1[0]["estimatedTime"], 30);
    assert_eq!(
        person1[0]["description"],
        "Use the approved brand palette"
    );
    assert_eq!(person1[2]["day"], "tuesday");

    // Front matter surfaces as metadata.
    assert_eq!(body["data"]["metadata"]["campaign"], "Summer Launch");

    // 120-minute tasks are flagged high priority.
    let person3 = body["data"]["person3"].as_array().unwrap();
    assert_eq!(person3[0]["context"]["priority"], "high");
}

#[tokio::test]
async fn test_person_tasks_unknown_person_is_404() {
    let (_dir, app) = fixture();
    let (status, body) = get_json(app, "/api/tasks/person/person9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Person not found");
}

#[tokio::test]
async fn test_day_filter_is_case_insensitive() {
    let (_dir, app) = fixture();
    let (status, body) = get_json(app, "/api/tasks/day/MONDAY").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["person1"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["person2"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_complete_task_validates_ids() {
    let (_dir, app) = fixture();
    let (status, body) = post_json(
        app.clone(),
        "/api/tasks/complete",
        serde_json::json!({"taskId": "", "personId": "person1"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Task ID and Person ID required");

    let (status, body) = post_json(
        app,
        "/api/tasks/complete",
        serde_json::json!({"taskId": "design-instagram-post-30-mins", "personId": "person1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task status updated");
    assert_eq!(body["data"]["completed"], true);
}

#[tokio::test]
async fn test_progress_counts() {
    let (_dir, app) = fixture();
    let (status, body) = get_json(app, "/api/tasks/progress").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["overall"]["total"], 5);
    assert_eq!(body["data"]["overall"]["completed"], 0);
    assert_eq!(body["data"]["overall"]["percentage"], 0);
}

#[tokio::test]
async fn test_team_meeting_validation_and_listing() {
    let (_dir, app) = fixture();
    let (status, body) = post_json(
        app.clone(),
        "/api/team/meeting",
        serde_json::json!({"type": "daily"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Meeting type and attendees required");

    let (status, body) = post_json(
        app,
        "/api/team/meeting",
        serde_json::json!({"type": "daily", "attendees": ["person1", "person2"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Meeting logged successfully");
    assert_eq!(body["data"]["type"], "daily");
}

#[tokio::test]
async fn test_team_status_reflects_updates() {
    let (_dir, app) = fixture();
    let (status, body) = post_json(
        app.clone(),
        "/api/team/update-status",
        serde_json::json!({"personId": "person2", "status": "blocked", "progress": 40}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Status updated successfully");

    let (_, body) = get_json(app, "/api/team/status").await;
    assert_eq!(body["data"]["person2"]["status"], "blocked");
    assert_eq!(body["data"]["person2"]["progress"], 40);
    assert_eq!(body["data"]["person1"]["status"], "on-track");
}

#[tokio::test]
async fn test_dashboard_overview_sections() {
    let (_dir, app) = fixture();
    let (status, body) = get_json(app, "/api/dashboard/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["overview"]
        .as_str()
        .unwrap()
        .contains("summer campaign"));
    assert!(body["data"]["weekPlan"]
        .as_str()
        .unwrap()
        .contains("landing page"));
}

#[tokio::test]
async fn test_templates_keyed_and_categorized() {
    let (_dir, app) = fixture();
    let (_, body) = get_json(app.clone(), "/api/templates").await;
    assert_eq!(body["data"]["J"]["title"], "Social Media Templates");

    let (_, body) = get_json(app, "/api/templates/categorized").await;
    assert_eq!(body["data"]["social"]["title"], "Social Media Templates");
    let templates = body["data"]["social"]["templates"].as_array().unwrap();
    assert_eq!(templates[0]["key"], "J");
}

#[tokio::test]
async fn test_export_tasks_csv_download_headers() {
    let (_dir, app) = fixture();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/export/tasks/csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"campaign-tasks.csv\""
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = std::str::from_utf8(&bytes).unwrap();
    assert!(csv.starts_with("Person,Day,Task,Estimated Time,Completed"));
    assert!(csv.contains("Design Instagram post"));
}

#[tokio::test]
async fn test_export_rejects_unknown_format() {
    let (_dir, app) = fixture();
    let (status, body) = get_json(app.clone(), "/api/export/tasks/xml").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unsupported format. Use: json, csv, or markdown");

    let (status, body) = get_json(app, "/api/export/dashboard/markdown").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dashboard export supports: json, csv");
}

#[tokio::test]
async fn test_export_external_services() {
    let (_dir, app) = fixture();
    let (status, body) = post_json(
        app.clone(),
        "/api/export/external/asana",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Asana export prepared");

    let (status, body) = post_json(
        app,
        "/api/export/external/notion",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Unsupported service. Available: google-workspace, asana, slack"
    );
}
