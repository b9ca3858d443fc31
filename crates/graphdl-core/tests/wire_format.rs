//! Wire-format contract tests.
//!
//! These lock down the JSON shapes shared with the host backend: the
//! "progress" push payload and the cancel RPC bodies. If one of these fails,
//! the backend contract changed and both sides need a coordinated update.

use graphdl_core::{CancelOutcome, CancelRequest, CancelResponse, NodeId, ProgressEvent};
use serde_json::json;

#[test]
fn progress_payload_decodes_as_pushed_by_the_backend() {
    // The backend pushes value/max as percent units with max=100.
    let event: ProgressEvent =
        serde_json::from_value(json!({"node": "42", "value": 62.5, "max": 100})).unwrap();

    assert_eq!(event.node, Some(NodeId::from(42)));
    assert_eq!(event.fraction(), Some(0.625));
}

#[test]
fn progress_payload_tolerates_foreign_traffic() {
    // Other node types share the bus; their payloads may carry extra fields.
    let event: ProgressEvent = serde_json::from_value(json!({
        "node": 7,
        "value": 3,
        "max": 20,
        "prompt_id": "abc123"
    }))
    .unwrap();
    assert_eq!(event.fraction(), Some(0.15));
}

#[test]
fn cancel_request_body_matches_endpoint_contract() {
    let body = serde_json::to_value(CancelRequest {
        node_id: NodeId::from(9),
    })
    .unwrap();
    assert_eq!(body, json!({"node_id": "9"}));
}

#[test]
fn cancel_response_statuses_map_to_outcomes() {
    let cases = [
        (json!({"status": "cancelled"}), CancelOutcome::Cancelled),
        (
            json!({"status": "not_found", "error": "No active download found"}),
            CancelOutcome::NotFound,
        ),
        (
            json!({"status": "error", "error": "boom"}),
            CancelOutcome::Unknown("error".to_string()),
        ),
    ];

    for (body, expected) in cases {
        let response: CancelResponse = serde_json::from_value(body).unwrap();
        assert_eq!(CancelOutcome::from(&response), expected);
    }
}
