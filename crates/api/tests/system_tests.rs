mod common;

use async_graphql::Variables;
use chrono::NaiveDate;
use infra::models::AvailableSlotRow;
use serde_json::json;
use uuid::Uuid;

use common::*;

#[tokio::test]
async fn test_blocked_slots_rejects_malformed_date() {
    let app = setup_test_app();
    let court_id = app.store.add_court(Uuid::new_v4(), "Court 1", None, true).await;

    let query = r#"
        query Blocked($courtId: UUID!, $date: NaiveDate!) {
            blockedSlots(courtId: $courtId, date: $date) { id }
        }
    "#;
    let variables = Variables::from_json(json!({
        "courtId": court_id.to_string(),
        "date": "2024-13-45",
    }));

    let response = execute_graphql(&app.schema, query, Some(variables), None).await;

    assert!(
        !response.errors.is_empty(),
        "An impossible calendar date should be rejected"
    );
    assert!(response.errors[0].message.contains("date"));
}

#[tokio::test]
async fn test_block_slot_without_court_id_is_rejected() {
    let app = setup_test_app();
    let (_, claims) = claims_for(Some("admin"));

    let query = r#"
        mutation {
            blockSlot(input: {
                date: "2024-06-01",
                slot: { startTime: "10:00", endTime: "11:00", isAvailable: true }
            }) {
                courtsBlocked
            }
        }
    "#;

    let response = execute_graphql(&app.schema, query, None, Some(claims)).await;

    assert!(
        !response.errors.is_empty(),
        "blockSlot without a court should return errors"
    );
    assert!(response.errors[0].message.contains("courtId"));
    assert_eq!(app.store.batches_written(), 0);
}

#[tokio::test]
async fn test_unknown_court_field_is_rejected() {
    let app = setup_test_app();

    let query = r#"
        query Court($id: UUID!) {
            court(id: $id) { id openingHours }
        }
    "#;
    let variables = Variables::from_json(json!({ "id": Uuid::new_v4().to_string() }));

    let response = execute_graphql(&app.schema, query, Some(variables), None).await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("openingHours"));
}

#[tokio::test]
async fn test_courts_and_court_queries() {
    let app = setup_test_app();
    let venue_id = Uuid::new_v4();
    let court_b = app.store.add_court(venue_id, "Court B", Some("G"), true).await;
    app.store.add_court(venue_id, "Court A", None, false).await;
    app.store.add_court(Uuid::new_v4(), "Elsewhere", None, true).await;

    let query = r#"
        query Courts($venueId: UUID!, $courtId: UUID!) {
            courts(venueId: $venueId) { name isActive sharedGroupId }
            court(id: $courtId) { id name }
        }
    "#;
    let variables = Variables::from_json(json!({
        "venueId": venue_id.to_string(),
        "courtId": court_b.to_string(),
    }));

    let response = execute_graphql(&app.schema, query, Some(variables), None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let courts = data["courts"].as_array().unwrap();
    assert_eq!(courts.len(), 2);
    assert_eq!(courts[0]["name"], "Court A");
    assert_eq!(courts[0]["isActive"], false);
    assert_eq!(courts[1]["sharedGroupId"], "G");
    assert_eq!(data["court"]["id"], court_b.to_string());
}

#[tokio::test]
async fn test_unknown_court_query_returns_null() {
    let app = setup_test_app();

    let query = r#"
        query Court($id: UUID!) {
            court(id: $id) { id }
        }
    "#;
    let variables = Variables::from_json(json!({ "id": Uuid::new_v4().to_string() }));

    let response = execute_graphql(&app.schema, query, Some(variables), None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert!(response.data.into_json().unwrap()["court"].is_null());
}

#[tokio::test]
async fn test_available_slots_are_passed_through() {
    let app = setup_test_app();
    let court_id = app.store.add_court(Uuid::new_v4(), "Court 1", None, true).await;
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    app.store
        .set_available_slots(
            court_id,
            date,
            vec![
                AvailableSlotRow {
                    start_time: "14:00:00".to_string(),
                    end_time: "15:00:00".to_string(),
                    is_available: true,
                },
                AvailableSlotRow {
                    start_time: "15:00:00".to_string(),
                    end_time: "16:00:00".to_string(),
                    is_available: false,
                },
            ],
        )
        .await;

    let query = r#"
        query Slots($courtId: UUID!, $date: NaiveDate!) {
            availableSlots(courtId: $courtId, date: $date) { startTime endTime isAvailable }
        }
    "#;
    let variables = Variables::from_json(json!({
        "courtId": court_id.to_string(),
        "date": "2024-06-01",
    }));

    let response = execute_graphql(&app.schema, query, Some(variables), None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let slots = data["availableSlots"].as_array().unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["startTime"], "14:00:00");
    assert_eq!(slots[1]["isAvailable"], false);
}
