//! Unit tests for the event forwarder

use std::sync::{Arc, Mutex};

use crate::domain::UiEvent;
use crate::services::classifier::ResultCodes;
use crate::services::events::EventForwarder;

fn recording(forwarder: &EventForwarder) -> Arc<Mutex<Vec<UiEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    forwarder.add_listener(move |event| sink.lock().unwrap().push(event.clone()));
    seen
}

#[test]
fn test_known_codes_decode() {
    let forwarder = EventForwarder::new(ResultCodes::ANDROID);
    assert_eq!(forwarder.decode("700000", None), Some(UiEvent::UserCancel));
    assert_eq!(forwarder.decode("700001", Some("")), Some(UiEvent::SwitchAccount));
    assert_eq!(
        forwarder.decode("700002", Some(r#"{"isChecked":true}"#)),
        Some(UiEvent::LoginButtonClick { checked: true })
    );
    assert_eq!(
        forwarder.decode("700003", Some(r#"{"isChecked":false}"#)),
        Some(UiEvent::CheckboxChange { checked: false })
    );
    assert_eq!(
        forwarder.decode(
            "700004",
            Some(r#"{"name":"《中国移动认证服务条款》","url":"https://wap.cmpassport.com/resources/html/contract.html"}"#)
        ),
        Some(UiEvent::ProtocolClick {
            name: "《中国移动认证服务条款》".into(),
            url: "https://wap.cmpassport.com/resources/html/contract.html".into(),
        })
    );
}

#[test]
fn test_missing_body_uses_defaults() {
    let forwarder = EventForwarder::new(ResultCodes::ANDROID);
    assert_eq!(
        forwarder.decode("700003", None),
        Some(UiEvent::CheckboxChange { checked: false })
    );
}

#[test]
fn test_unknown_code_is_forwarded() {
    let forwarder = EventForwarder::new(ResultCodes::ANDROID);
    let seen = recording(&forwarder);
    let event = forwarder.forward("700010", Some("{}"));
    assert_eq!(event, Some(UiEvent::Unknown { raw_code: "700010".into() }));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_malformed_payload_is_dropped() {
    let forwarder = EventForwarder::new(ResultCodes::ANDROID);
    let seen = recording(&forwarder);
    assert_eq!(forwarder.forward("700003", Some("{isChecked:")), None);
    assert!(seen.lock().unwrap().is_empty());

    // Payload-free events ignore the body entirely
    assert_eq!(forwarder.forward("700000", Some("{broken")), Some(UiEvent::UserCancel));
}

#[test]
fn test_all_listeners_receive_events() {
    let forwarder = EventForwarder::new(ResultCodes::ANDROID);
    let first = recording(&forwarder);
    let second = recording(&forwarder);

    forwarder.forward("700001", None);
    assert_eq!(*first.lock().unwrap(), vec![UiEvent::SwitchAccount]);
    assert_eq!(*second.lock().unwrap(), vec![UiEvent::SwitchAccount]);
}

#[test]
fn test_removed_listener_stops_receiving() {
    let forwarder = EventForwarder::new(ResultCodes::ANDROID);
    let seen = Arc::new(Mutex::new(0));
    let counter = seen.clone();
    let subscription = forwarder.add_listener(move |_| *counter.lock().unwrap() += 1);

    forwarder.forward("700001", None);
    assert!(subscription.remove());
    assert!(!subscription.remove());
    forwarder.forward("700001", None);

    assert_eq!(*seen.lock().unwrap(), 1);
    assert_eq!(forwarder.listener_count(), 0);
}

#[test]
fn test_listener_may_unsubscribe_itself() {
    let forwarder = Arc::new(EventForwarder::new(ResultCodes::ANDROID));
    let slot: Arc<Mutex<Option<crate::services::events::EventSubscription>>> =
        Arc::new(Mutex::new(None));
    let slot_in_handler = slot.clone();
    let subscription = forwarder.add_listener(move |_| {
        if let Some(sub) = slot_in_handler.lock().unwrap().take() {
            sub.remove();
        }
    });
    *slot.lock().unwrap() = Some(subscription);

    forwarder.forward("700000", None);
    assert_eq!(forwarder.listener_count(), 0);
}

#[test]
fn test_panicking_listener_does_not_stop_delivery() {
    let forwarder = EventForwarder::new(ResultCodes::ANDROID);
    forwarder.add_listener(|event| {
        if matches!(event, UiEvent::CheckboxChange { .. }) {
            panic!("listener failure");
        }
    });
    let seen = recording(&forwarder);

    forwarder.forward("700003", Some(r#"{"isChecked":true}"#));
    forwarder.forward("700001", None);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![UiEvent::CheckboxChange { checked: true }, UiEvent::SwitchAccount]
    );
    assert_eq!(forwarder.listener_count(), 2);
}
