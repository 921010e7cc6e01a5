mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use rollcall::models::ScanResponse;
use tempfile::tempdir;

fn scan(employee_id: i64) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/mark_attendance")
        .cookie(common::session_cookie())
        .set_json(serde_json::json!({ "employee_id": employee_id }))
}

async fn stored_times(pool: &sqlx::SqlitePool, employee_id: i64) -> (Option<String>, Option<String>) {
    sqlx::query_as("SELECT sign_in, sign_out FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[actix_web::test]
async fn scan_walks_sign_in_sign_out_then_noop() {
    let pool = common::test_pool().await;
    let dir = tempdir().unwrap();
    let config = common::test_config(&dir);
    let id = common::insert_employee(&pool, "Jane Doe", "").await;
    let app = init_app!(pool, config);

    // First scan of the day: sign in.
    let first: ScanResponse =
        test::call_and_read_body_json(&app, scan(id).to_request()).await;
    assert_eq!(first.status, "success");
    assert!(
        first.message.starts_with("Sign In recorded at "),
        "{}",
        first.message
    );
    // "HH:MM:SS" suffix
    assert_eq!(first.message.len(), "Sign In recorded at ".len() + 8);

    // Second scan: sign out.
    let second: ScanResponse =
        test::call_and_read_body_json(&app, scan(id).to_request()).await;
    assert_eq!(second.status, "success");
    assert!(
        second.message.starts_with("Sign Out recorded at "),
        "{}",
        second.message
    );

    let before = stored_times(&pool, id).await;
    assert!(before.0.is_some() && before.1.is_some());

    // Third scan: terminal state, no mutation.
    let third: ScanResponse =
        test::call_and_read_body_json(&app, scan(id).to_request()).await;
    assert_eq!(third.status, "info");
    assert_eq!(third.message, "Already signed out today.");

    let after = stored_times(&pool, id).await;
    assert_eq!(before, after);
}

#[actix_web::test]
async fn one_day_yields_exactly_one_row() {
    let pool = common::test_pool().await;
    let dir = tempdir().unwrap();
    let config = common::test_config(&dir);
    let id = common::insert_employee(&pool, "Jane Doe", "").await;
    let app = init_app!(pool, config);

    for _ in 0..4 {
        let resp = test::call_service(&app, scan(id).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE employee_id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[actix_web::test]
async fn unknown_id_records_an_orphan_row() {
    let pool = common::test_pool().await;
    let dir = tempdir().unwrap();
    let config = common::test_config(&dir);
    let app = init_app!(pool, config);

    let resp: ScanResponse =
        test::call_and_read_body_json(&app, scan(999).to_request()).await;
    assert_eq!(resp.status, "success");

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE employee_id = 999")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[actix_web::test]
async fn dashboard_counts_balance_and_never_go_negative() {
    let pool = common::test_pool().await;
    let dir = tempdir().unwrap();
    let config = common::test_config(&dir);
    let present_id = common::insert_employee(&pool, "Jane Doe", "").await;
    common::insert_employee(&pool, "John Roe", "").await;
    let app = init_app!(pool, config);

    let resp = test::call_service(&app, scan(present_id).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get()
            .uri("/attendance_dashboard")
            .cookie(common::session_cookie())
            .to_request(),
    )
    .await;
    let html = String::from_utf8_lossy(&body);

    assert!(html.contains(r#"id="present">1</span>"#), "{html}");
    assert!(html.contains(r#"id="absent">1</span>"#), "{html}");
    assert!(html.contains(r#"id="total">2</span>"#), "{html}");
    assert!(html.contains("Jane Doe"));
    assert!(!html.contains("John Roe"));
}

#[actix_web::test]
async fn absent_is_clamped_when_orphan_rows_outnumber_the_roster() {
    let pool = common::test_pool().await;
    let dir = tempdir().unwrap();
    let config = common::test_config(&dir);
    let app = init_app!(pool, config);

    // Orphan scans only; no employees on the roster at all.
    for id in [101, 102] {
        let resp = test::call_service(&app, scan(id).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get()
            .uri("/attendance_dashboard")
            .cookie(common::session_cookie())
            .to_request(),
    )
    .await;
    let html = String::from_utf8_lossy(&body);

    assert!(html.contains(r#"id="present">2</span>"#), "{html}");
    assert!(html.contains(r#"id="absent">0</span>"#), "{html}");
    assert!(html.contains(r#"id="total">0</span>"#), "{html}");
}

#[actix_web::test]
async fn scan_page_renders_for_a_logged_in_operator() {
    let pool = common::test_pool().await;
    let dir = tempdir().unwrap();
    let config = common::test_config(&dir);
    let app = init_app!(pool, config);

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get()
            .uri("/attendance_scan")
            .cookie(common::session_cookie())
            .to_request(),
    )
    .await;

    assert!(String::from_utf8_lossy(&body).contains("/mark_attendance"));
}
