//! Mission API integration tests.
//!
//! Run with: cargo test --test mission_test -- --ignored

use reqwest::Client;
use std::time::Duration;

fn base_url() -> String {
    std::env::var("AGRO_TEST_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Drive a full mission through a running server: field, mission, flight,
/// observations, report.
#[tokio::test]
#[ignore]
async fn test_mission_lifecycle() {
    let client = Client::new();
    let base = base_url();

    // Create a field
    let field_body = serde_json::json!({
        "name": "Integration Wheat",
        "crop_type": "wheat",
        "area_ha": 12.5
    });

    let resp = client
        .post(format!("{}/v1/fields", base))
        .json(&field_body)
        .send()
        .await
        .expect("Failed to create field");

    assert!(resp.status().is_success(), "Should create field successfully");
    let field: serde_json::Value = resp.json().await.unwrap();
    let field_id = field["id"].as_i64().unwrap();

    // Create a mission over a small boundary
    let mission_body = serde_json::json!({
        "field_id": field_id,
        "altitude_m": 40.0,
        "speed_mps": 5.0,
        "task": "monitoring",
        "polygon": [
            [50.24400, 30.12200],
            [50.24400, 30.12260],
            [50.24445, 30.12260],
            [50.24445, 30.12200],
            [50.24400, 30.12200]
        ]
    });

    let resp = client
        .post(format!("{}/v1/missions", base))
        .json(&mission_body)
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success(), "Should create mission");
    let mission: serde_json::Value = resp.json().await.unwrap();
    let mission_id = mission["id"].as_i64().unwrap();

    // The planned path should cover the boundary
    let resp = client
        .get(format!("{}/v1/missions/{}/path", base, mission_id))
        .send()
        .await
        .unwrap();

    let path: serde_json::Value = resp.json().await.unwrap();
    assert!(path["waypoint_count"].as_u64().unwrap() > 0);

    // Fly it
    let resp = client
        .post(format!("{}/v1/missions/{}/start", base, mission_id))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success(), "Should start mission");

    // Poll telemetry until the flight finishes
    let mut finished = false;
    for _ in 0..300 {
        tokio::time::sleep(Duration::from_secs(1)).await;

        let resp = client
            .get(format!("{}/v1/missions/{}/telemetry", base, mission_id))
            .send()
            .await
            .unwrap();

        let telemetry: serde_json::Value = resp.json().await.unwrap();
        if telemetry["status"].as_str() == Some("completed") {
            finished = true;
            break;
        }
    }
    assert!(finished, "Mission should complete");

    // The flight should have recorded observations and a report
    let resp = client
        .get(format!("{}/v1/missions/{}/observations", base, mission_id))
        .send()
        .await
        .unwrap();

    let observations: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert!(!observations.is_empty(), "Flight should record observations");

    let resp = client
        .get(format!("{}/v1/missions/{}/report", base, mission_id))
        .send()
        .await
        .unwrap();

    let report: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(report["status"].as_str(), Some("completed"));
    assert!(report["observation_count"].as_u64().unwrap() > 0);
}

/// Spray planning from a field's registered area.
#[tokio::test]
#[ignore]
async fn test_spray_plan() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/v1/fields", base))
        .json(&serde_json::json!({
            "name": "Spray Field",
            "crop_type": "corn",
            "area_ha": 50.0
        }))
        .send()
        .await
        .unwrap();

    let field: serde_json::Value = resp.json().await.unwrap();
    let field_id = field["id"].as_i64().unwrap();

    let resp = client
        .get(format!(
            "{}/v1/fields/{}/spray-plan?rate_l_per_ha=2.0&tank_volume_l=40.0",
            base, field_id
        ))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    let plan: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(plan["tank_fills"].as_u64(), Some(3));
    assert_eq!(plan["total_product_l"].as_f64(), Some(100.0));
}
