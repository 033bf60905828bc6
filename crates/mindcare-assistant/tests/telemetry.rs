use mindcare_assistant::events::AssistantEvent;
use mindcare_assistant::telemetry::{LogFormat, init};

#[test]
fn subscriber_installs_once() {
    init(LogFormat::Json).unwrap();
    assert!(init(LogFormat::Pretty).is_err());

    AssistantEvent::new("plan_accepted", "plan", "stress", "user-1")
        .with_details(serde_json::json!({ "saved": true }))
        .emit();
}
