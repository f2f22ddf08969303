use evhub_core::{EventHub, Listener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn counting_listener() -> (Arc<AtomicUsize>, Listener<()>) {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    let listener = Listener::infallible(move |_: &()| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });
    (count, listener)
}

#[test]
fn test_registration_order_preserved() {
    let hub: EventHub<()> = EventHub::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let c1 = calls.clone();
    hub.on("E", Listener::infallible(move |_: &()| c1.lock().unwrap().push("L1")));
    let c2 = calls.clone();
    hub.on("E", Listener::infallible(move |_: &()| c2.lock().unwrap().push("L2")));

    hub.emit("E", &()).expect("emit");
    assert_eq!(*calls.lock().unwrap(), vec!["L1", "L2"]);
}

#[test]
fn test_off_removes_exactly_one_occurrence() {
    let hub: EventHub<()> = EventHub::new();
    let (count, listener) = counting_listener();
    hub.on("E", listener.clone());
    hub.on("E", listener.clone());

    hub.off("E", &listener);
    hub.emit("E", &()).expect("emit");

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_off_keeps_other_listeners_in_place() {
    let hub: EventHub<()> = EventHub::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let listeners: Vec<Listener<()>> = ["a", "b", "c"]
        .into_iter()
        .map(|name| {
            let calls = calls.clone();
            Listener::infallible(move |_: &()| calls.lock().unwrap().push(name))
        })
        .collect();
    for listener in &listeners {
        hub.on("AJAX", listener.clone());
    }

    hub.off("AJAX", &listeners[1]);
    hub.emit("AJAX", &()).expect("emit");
    assert_eq!(*calls.lock().unwrap(), vec!["a", "c"]);
}

#[test]
fn test_repeated_dispatch_invokes_each_time() {
    let hub: EventHub<()> = EventHub::new();
    let (first, l1) = counting_listener();
    let (second, l2) = counting_listener();
    hub.on("E", l1);
    hub.on("E", l2);

    hub.emit("E", &()).expect("emit");
    hub.emit("E", &()).expect("emit");

    assert_eq!(first.load(Ordering::SeqCst), 2);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[test]
fn test_once_alongside_plain_listener() {
    let hub: EventHub<()> = EventHub::new();
    let (once_count, l) = counting_listener();
    let (plain_count, m) = counting_listener();
    hub.once("E", l);
    hub.on("E", m);
    assert_eq!(hub.listener_count("E"), 2);

    hub.emit("E", &()).expect("emit");
    hub.emit("E", &()).expect("emit");

    assert_eq!(once_count.load(Ordering::SeqCst), 1);
    assert_eq!(plain_count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_clear_by_name_is_scoped() {
    let hub: EventHub<()> = EventHub::new();
    let (e1_count, l1) = counting_listener();
    let (e2_count, l2) = counting_listener();
    hub.on("E1", l1);
    hub.on("E2", l2);

    hub.clear(Some("E1"));
    hub.emit("E1", &()).expect("emit");
    hub.emit("E2", &()).expect("emit");

    assert_eq!(e1_count.load(Ordering::SeqCst), 0);
    assert_eq!(e2_count.load(Ordering::SeqCst), 1);
    assert!(!hub.event_names().contains(&"E1".to_string()));
}

#[test]
fn test_full_clear() {
    let hub: EventHub<()> = EventHub::new();
    let (count, listener) = counting_listener();
    hub.on("E1", listener.clone());
    hub.on("E2", listener.clone());
    hub.once("E3", listener);

    hub.clear(None);
    assert!(hub.is_empty());

    for event in ["E1", "E2", "E3"] {
        hub.emit(event, &()).expect("emit");
    }
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unknown_event_is_noop() {
    let hub: EventHub<()> = EventHub::new();
    let (count, listener) = counting_listener();
    hub.on("known", listener.clone());

    assert!(hub.emit("never", &()).is_ok());
    assert!(!hub.off("never", &listener));
    hub.clear(Some("never"));

    assert_eq!(hub.event_names(), vec!["known".to_string()]);
    assert_eq!(hub.listener_count("known"), 1);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_identity_not_structure_drives_removal() {
    let hub: EventHub<()> = EventHub::new();
    let registered: Listener<()> = Listener::infallible(|_: &()| {});
    let lookalike: Listener<()> = Listener::infallible(|_: &()| {});
    hub.on("E", registered.clone());

    assert!(!hub.off("E", &lookalike));
    assert_eq!(hub.listener_count("E"), 1);
    assert!(hub.off("E", &registered));
    assert_eq!(hub.listener_count("E"), 0);
}

#[test]
fn test_same_listener_on_several_events() {
    let hub: EventHub<()> = EventHub::new();
    let (count, listener) = counting_listener();
    hub.on("E1", listener.clone());
    hub.on("E2", listener.clone());

    hub.off("E1", &listener);
    hub.emit("E1", &()).expect("emit");
    hub.emit("E2", &()).expect("emit");

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_off_does_not_reach_once_wrapper() {
    let hub: EventHub<()> = EventHub::new();
    let (count, listener) = counting_listener();
    hub.once("E", listener.clone());

    assert!(!hub.off("E", &listener));
    hub.emit("E", &()).expect("emit");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unsubscribe_removes_once_wrapper() {
    let hub: EventHub<()> = EventHub::new();
    let (count, listener) = counting_listener();
    let id = hub.once("E", listener);

    assert!(hub.unsubscribe("E", id));
    hub.emit("E", &()).expect("emit");
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unsubscribe_plain_listener() {
    let hub: EventHub<()> = EventHub::new();
    let (count, listener) = counting_listener();
    let first = hub.on("E", listener.clone());
    let _second = hub.on("E", listener);

    assert!(hub.unsubscribe("E", first));
    assert!(!hub.unsubscribe("other", first));
    hub.emit("E", &()).expect("emit");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_typed_payload_reaches_listener() {
    #[derive(Debug)]
    struct Request {
        url: String,
        retries: u8,
    }

    let hub: EventHub<Request> = EventHub::new();
    let seen = Arc::new(Mutex::new(None));
    let seen_clone = seen.clone();
    hub.on(
        "AJAX-CALL",
        Listener::infallible(move |req: &Request| {
            *seen_clone.lock().unwrap() = Some((req.url.clone(), req.retries));
        }),
    );

    hub.emit(
        "AJAX-CALL",
        &Request {
            url: "/api/items".to_string(),
            retries: 2,
        },
    )
    .expect("emit");

    assert_eq!(
        *seen.lock().unwrap(),
        Some(("/api/items".to_string(), 2))
    );
}
