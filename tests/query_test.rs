use chrono::{Duration, TimeZone, Utc};
use shipping_tracker::mock::{ManualClock, ScriptedIds};
use shipping_tracker::model::ShippingStatus;
use shipping_tracker::query::{
    classify, Intent, QueryInterpreter, LOCATION_UNAVAILABLE, ORDER_NOT_FOUND_REPLY,
};
use shipping_tracker::registry::{TrackingError, TrackingRegistry};

fn registry() -> (TrackingRegistry, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 12, 29, 18, 45, 0).unwrap());
    let registry = TrackingRegistry::new()
        .with_clock(clock.clone())
        .with_ids(ScriptedIds::new(["ORD-48213"]));
    (registry, clock)
}

#[test]
fn book_order_walkthrough() {
    let (mut registry, clock) = registry();
    let id = registry.create("C1", ["book"]);
    assert_eq!(id.as_str(), "ORD-48213");

    clock.advance(Duration::minutes(30));
    registry
        .update_status(id.as_str(), ShippingStatus::Shipped, Some("Warehouse A".into()))
        .unwrap();
    clock.advance(Duration::hours(10));
    registry
        .update_status(id.as_str(), ShippingStatus::InTransit, Some("Hub B".into()))
        .unwrap();

    let interpreter = QueryInterpreter::new(&registry);

    assert_eq!(
        interpreter.answer("where is it", id.as_str()),
        "Your order is currently Hub B"
    );
    // Five days after Dec 29 crosses the year boundary.
    assert_eq!(
        interpreter.answer("when will it arrive", id.as_str()),
        "Your order is estimated to be delivered by January 03, 2026"
    );
    assert_eq!(
        interpreter.answer("tell me the history", id.as_str()),
        "Tracking history for your order:\n\
         - 2025-12-29 19:15: Shipped Warehouse A\n\
         - 2025-12-30 05:15: In Transit Hub B"
    );
}

#[test]
fn fresh_order_location_is_not_available() {
    let (mut registry, _) = registry();
    let id = registry.create("C1", ["book"]);

    let answer = QueryInterpreter::new(&registry).answer("where", id.as_str());
    assert_eq!(answer, LOCATION_UNAVAILABLE);
}

#[test]
fn delivery_status_tracking_is_an_eta_question() {
    assert_eq!(classify("What's the delivery status tracking?"), Intent::Eta);

    let (mut registry, _) = registry();
    let id = registry.create("C1", ["book"]);
    let answer = QueryInterpreter::new(&registry)
        .answer("What's the delivery status tracking?", id.as_str());
    assert!(answer.starts_with("Your order is estimated to be delivered by"));
}

#[test]
fn unknown_ids() {
    let (mut registry, _) = registry();

    assert!(matches!(registry.get("nope"), Err(TrackingError::NotFound(_))));
    assert!(matches!(
        registry.update_status("nope", ShippingStatus::Delayed, None),
        Err(TrackingError::NotFound(_))
    ));
    assert_eq!(
        QueryInterpreter::new(&registry).answer("status?", "nope"),
        ORDER_NOT_FOUND_REPLY
    );
}

#[test]
fn location_survives_updates_without_one() {
    let (mut registry, _) = registry();
    let id = registry.create("C1", ["book"]);

    let steps: [(ShippingStatus, Option<&str>); 5] = [
        (ShippingStatus::Shipped, Some("Warehouse A")),
        (ShippingStatus::Delayed, None),
        (ShippingStatus::InTransit, Some("")),
        (ShippingStatus::InTransit, Some("Hub C")),
        (ShippingStatus::OutForDelivery, None),
    ];
    for (status, location) in steps {
        registry
            .update_status(id.as_str(), status, location.map(str::to_string))
            .unwrap();
    }

    let order = registry.get(id.as_str()).unwrap();
    assert_eq!(order.history().len(), steps.len());
    assert_eq!(order.current_location(), Some("Hub C"));
    assert_eq!(
        QueryInterpreter::new(&registry).answer("status", id.as_str()),
        "Your order is currently Out for Delivery"
    );
}
