//! Tests for travel package documents.

use super::*;
use rstest::rstest;
use serde_json::json;

fn package(id: &str, title: &str) -> TravelPackage {
    TravelPackage::new(
        TravelPackageId::new(id).expect("package id"),
        PackageTitle::new(title).expect("title"),
    )
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_titles_are_rejected(#[case] raw: &str) {
    assert_eq!(
        PackageTitle::new(raw),
        Err(TravelPackageValidationError::EmptyTitle)
    );
}

#[rstest]
fn titles_are_trimmed() {
    let title = PackageTitle::new("  Kyoto Autumn ").expect("title");
    assert_eq!(title.as_ref(), "Kyoto Autumn");
}

#[rstest]
fn serialises_with_camel_case_keys_and_nested_order() {
    let mut bali = package("5c1d6a7e-0000-4000-8000-000000000001", "Bali Escape");
    bali.review_count = Some(12);
    bali.itinerary = vec![
        ItineraryDay {
            day: Some(1),
            title: Some("Arrival".into()),
            description: None,
            activities: vec!["Check in".into(), "Beach walk".into()],
        },
        ItineraryDay {
            day: Some(2),
            title: Some("Temples".into()),
            ..ItineraryDay::default()
        },
    ];

    let value = serde_json::to_value(&bali).expect("serialise package");

    assert_eq!(value["reviewCount"], json!(12));
    assert_eq!(value["id"], json!("5c1d6a7e-0000-4000-8000-000000000001"));
    assert_eq!(value["location"], serde_json::Value::Null);
    assert_eq!(value["itinerary"][0]["activities"], json!(["Check in", "Beach walk"]));
    assert_eq!(value["itinerary"][1]["title"], json!("Temples"));
    assert!(value.get("createdAt").is_some());
}

#[rstest]
fn nested_entries_accept_missing_fields() {
    let review: PackageReview =
        serde_json::from_value(json!({ "name": "Sam" })).expect("partial review");
    assert_eq!(review.name.as_deref(), Some("Sam"));
    assert!(review.rating.is_none());
}

#[rstest]
fn listing_order_is_title_then_id() {
    let mut packages = vec![
        package("5c1d6a7e-0000-4000-8000-000000000003", "Zanzibar"),
        package("5c1d6a7e-0000-4000-8000-000000000002", "Alps"),
        package("5c1d6a7e-0000-4000-8000-000000000001", "Alps"),
    ];

    sort_for_listing(&mut packages);

    let ids: Vec<String> = packages.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(
        ids,
        vec![
            "5c1d6a7e-0000-4000-8000-000000000001",
            "5c1d6a7e-0000-4000-8000-000000000002",
            "5c1d6a7e-0000-4000-8000-000000000003",
        ]
    );
}
