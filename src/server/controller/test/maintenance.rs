use crate::model::{maintenance::MaintenanceDto, pagination::PageDto};

use super::*;

async fn create_motorcycle(app: &Router, token: &str, plate: &str) {
    let response = send(
        app,
        Method::POST,
        "/api/v1/motorcycles",
        Some(token),
        Some(json!({ "plate": plate, "year": 2022, "model": "Sport" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Tests the ticket lifecycle: open, list by status, complete, delete.
///
/// Expected: ticket opens with status Open, moves to Completed and is then gone
#[tokio::test]
async fn ticket_lifecycle() {
    let app = app().await;
    let token = register(&app, "mechanic@mottu.com").await;
    create_motorcycle(&app, &token, "ABC-1234").await;

    let response = send(
        &app,
        Method::POST,
        "/api/v1/maintenances",
        Some(&token),
        Some(json!({ "plate": "abc-1234", "problems": "flat tire" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket: MaintenanceDto = read_json(response).await;
    assert_eq!(ticket.status, "Open");
    assert_eq!(ticket.plate, "ABC-1234");
    assert_eq!(ticket.id.len(), 4);

    let uri = format!("/api/v1/maintenances/{}", ticket.id);

    let response = send(
        &app,
        Method::GET,
        "/api/v1/maintenances?status=open",
        Some(&token),
        None,
    )
    .await;
    let page: PageDto<MaintenanceDto> = read_json(response).await;
    assert_eq!(page.total, 1);

    let response = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "status": "Completed" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: MaintenanceDto = read_json(response).await;
    assert_eq!(updated.status, "Completed");
    assert_eq!(updated.problems, "flat tire");

    let response = send(
        &app,
        Method::GET,
        "/api/v1/maintenances?status=Open",
        Some(&token),
        None,
    )
    .await;
    let page: PageDto<MaintenanceDto> = read_json(response).await;
    assert_eq!(page.total, 0);

    let response = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests opening a ticket for an unregistered plate.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn unknown_plate_is_rejected() {
    let app = app().await;
    let token = register(&app, "mechanic@mottu.com").await;

    let response = send(
        &app,
        Method::POST,
        "/api/v1/maintenances",
        Some(&token),
        Some(json!({ "plate": "ZZZ-9999", "problems": "engine failing" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
