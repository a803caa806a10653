use std::time::{Duration, Instant};

use puppy_shop::domain::filter::Criterion;
use puppy_shop::domain::order::DeliveryOption;
use puppy_shop::gateway::JsonlOutbox;
use puppy_shop::storefront::Event;
use rust_decimal::Decimal;

mod common;

use common::{DEBOUNCE, OfflineGateway, RecordingGateway};

fn event(line: &str) -> Event {
    Event::parse(line).unwrap().unwrap()
}

#[test]
fn rapid_filter_changes_are_coalesced() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 10);
    let start = Instant::now();

    assert!(shop.handle(event("filter breed=Boerboel"), start).is_none());
    assert!(
        shop.handle(
            event("filter breed=Cane+Corso&gender=Female"),
            start + Duration::from_millis(100)
        )
        .is_none()
    );

    // Still inside the window of the second change.
    assert!(shop.poll(start + Duration::from_millis(350)).is_none());
    assert_eq!(shop.criteria().breed, Criterion::Any);

    let html = shop
        .poll(start + Duration::from_millis(100) + DEBOUNCE)
        .expect("filter should be applied");
    assert_eq!(common::card_names(&html), vec!["Luna", "Miya", "Lexi", "Lucy"]);
    assert_eq!(
        shop.criteria().breed,
        Criterion::Exactly("Cane Corso".to_string())
    );
}

#[test]
fn filter_change_resets_page_position() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 3);
    let now = Instant::now();

    shop.handle(event("page 3"), now).unwrap();
    assert_eq!(shop.paginator().current_page(), 3);

    shop.handle(event("filter gender=Male"), now);
    let html = shop.flush_filters().unwrap();
    assert_eq!(shop.paginator().current_page(), 1);
    assert_eq!(common::card_names(&html), vec!["Bruno", "Rocky", "Zeus"]);
}

#[test]
fn navigation_applies_pending_filters_first() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 2);
    let now = Instant::now();

    shop.handle(event("filter breed=Presa+Canario"), now);
    let html = shop.handle(event("next"), now).unwrap();
    assert_eq!(shop.paginator().current_page(), 2);
    assert_eq!(common::card_names(&html), vec!["Roxy"]);

    let html = shop.handle(event("next"), now).unwrap();
    assert_eq!(shop.paginator().current_page(), 2);
    assert_eq!(common::card_names(&html), vec!["Roxy"]);

    let html = shop.handle(event("prev"), now).unwrap();
    assert_eq!(common::card_names(&html), vec!["Tank", "Nala"]);
    assert_eq!(shop.last_catalog(), Some(html.as_str()));
}

#[test]
fn delivery_changes_recompute_total_immediately() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 10);
    let now = Instant::now();

    shop.handle(event("select id=luna"), now).unwrap();
    assert_eq!(shop.total(), Some(Decimal::new(1500, 0)));

    let html = shop.handle(event("delivery option=handDelivery"), now).unwrap();
    assert_eq!(shop.delivery(), Some(DeliveryOption::HandDelivery));
    assert_eq!(shop.total(), Some(Decimal::new(1850, 0)));
    assert!(html.contains("$1,850.00"));

    shop.handle(event("delivery option=standard"), now).unwrap();
    assert_eq!(shop.total(), Some(Decimal::new(1650, 0)));

    shop.handle(event("delivery option=%20standard"), now).unwrap();
    assert_eq!(shop.delivery(), Some(DeliveryOption::Standard));

    shop.handle(event("delivery option=jetpack"), now).unwrap();
    assert_eq!(shop.delivery(), None);
    assert_eq!(shop.total(), Some(Decimal::new(1500, 0)));
}

#[test]
fn selecting_an_unknown_puppy_shows_empty_state() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 10);

    let html = shop.handle(event("select id=garfield"), Instant::now()).unwrap();
    assert!(html.contains("No puppy selected"));
    assert_eq!(shop.total(), None);
}

#[test]
fn submitting_uses_the_current_selection() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 10);
    let now = Instant::now();

    shop.handle(event("select id=lucy"), now);
    shop.handle(event("delivery option=handDelivery"), now);
    let html = shop
        .handle(
            event(
                "submit name=Jane+Doe&email=jane%40example.com&phone=%2B14155552671\
                 &address=12+Bark+Street&city=Springfield&state=IL&zip=62701&terms=on",
            ),
            now,
        )
        .unwrap();

    assert!(html.contains("Thank you!"));
    assert!(html.contains("$1,850.00"));

    let submissions = gateway.submissions.borrow();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].puppy_id.as_str(), "lucy");
    assert_eq!(submissions[0].total, Decimal::new(1850, 0));
    assert!(html.contains(&submissions[0].reference.to_string()));
}

#[test]
fn incomplete_submission_is_blocked() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 10);
    let now = Instant::now();

    shop.handle(event("select id=luna"), now);
    let html = shop
        .handle(event("submit delivery=pickup&name=Jane+Doe"), now)
        .unwrap();

    assert!(gateway.submissions.borrow().is_empty());
    assert!(html.contains(r#"data-focus="email""#));
    assert_eq!(shop.delivery(), Some(DeliveryOption::Pickup));
}

#[test]
fn orders_land_in_the_outbox() {
    let dir = tempfile::tempdir().unwrap();
    let outbox = JsonlOutbox::new(dir.path().join("outbox.jsonl"));
    let mut shop = common::storefront(outbox.clone(), 10);

    shop.handle(
        event(
            "submit puppy_id=tank&delivery=pickup&name=Sam+Lee&email=sam%40example.com\
             &phone=%2B442071838750&address=1+High+St&city=London&state=LDN&zip=SW1A1AA&terms=on",
        ),
        Instant::now(),
    )
    .unwrap();

    let contents = std::fs::read_to_string(outbox.path()).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("\"puppy_id\":\"tank\""));
    assert!(contents.contains("\"total\":\"1900\""));
}

#[test]
fn failed_hand_off_is_reported_and_can_be_retried() {
    let mut shop = common::storefront(OfflineGateway, 10);
    let now = Instant::now();

    let html = shop
        .handle(
            event(
                "submit puppy_id=luna&delivery=standard&name=Jane+Doe&email=jane%40example.com\
                 &phone=%2B14155552671&address=12+Bark+Street&city=Springfield&state=IL\
                 &zip=62701&terms=on",
            ),
            now,
        )
        .unwrap();

    assert!(html.contains(r#"<p class="form-alert" role="alert">We could not send your order."#));
    assert!(!html.contains("Thank you!"));
    assert!(html.contains(r#"<input name="name" value="Jane Doe">"#));
    assert_eq!(shop.delivery(), Some(DeliveryOption::Standard));
    assert_eq!(shop.total(), Some(Decimal::new(1650, 0)));
}

#[test]
fn blank_terms_checkbox_blocks_submission() {
    let gateway = RecordingGateway::default();
    let mut shop = common::storefront(&gateway, 10);

    let html = shop
        .handle(
            event(
                "submit puppy_id=luna&delivery=pickup&name=Jane+Doe&email=jane%40example.com\
                 &phone=%2B14155552671&address=12+Bark+Street&city=Springfield&state=IL\
                 &zip=62701&terms=",
            ),
            Instant::now(),
        )
        .unwrap();

    assert!(gateway.submissions.borrow().is_empty());
    assert!(html.contains(r#"data-focus="terms""#));
}
