//! Partial-update invariants across the compiler, the store grammar,
//! and the catalog facade.

use serde_json::json;

use eventdesk::events::{
    compile_update, needs_alias, Event, EventCatalog, EventError, EventField, EventPatch,
    EventStatus,
};
use eventdesk::store::{is_reserved_word, StoreError, Table, UpdateInput};

fn sample(id: &str, status: EventStatus) -> Event {
    Event {
        event_id: id.to_string(),
        title: "Conf".to_string(),
        description: "d".to_string(),
        date: "2024-12-15".to_string(),
        location: "SF".to_string(),
        capacity: 500,
        organizer: "Acme".to_string(),
        status,
    }
}

#[test]
fn aliasing_table_stays_in_sync_with_store_grammar() {
    // Every event field the store grammar reserves must be aliased by
    // the compiler, and only those.
    for field in EventField::ALL {
        assert_eq!(
            needs_alias(field),
            is_reserved_word(field.wire_name()),
            "aliasing mismatch for field: {}",
            field.wire_name()
        );
    }
}

#[test]
fn store_rejects_bare_reserved_attribute_and_accepts_the_alias() {
    let table = Table::new("events", "eventId");
    table
        .put_item(json!({"eventId": "e1", "status": "active"}))
        .unwrap();

    // Bare reserved identifier: refused by the grammar.
    let mut bare = UpdateInput {
        update_expression: "SET status = :status".to_string(),
        ..Default::default()
    };
    bare.expression_values
        .insert(":status".to_string(), json!("cancelled"));
    assert_eq!(
        table.update_item("e1", &bare),
        Err(StoreError::ReservedWord("status".to_string()))
    );

    // Same assignment through an alias: applies.
    let aliased = compile_update(&[(EventField::Status, json!("cancelled"))]).unwrap();
    let updated = table.update_item("e1", &aliased).unwrap();
    assert_eq!(updated["status"], "cancelled");
}

#[test]
fn compiled_updates_for_every_field_round_trip_through_the_store() {
    let table = Table::new("events", "eventId");
    table
        .put_item(serde_json::to_value(sample("e1", EventStatus::Active)).unwrap())
        .unwrap();

    let changes = vec![
        (EventField::Title, json!("Summit")),
        (EventField::Description, json!("dd")),
        (EventField::Date, json!("2025-01-01")),
        (EventField::Location, json!("Oakland")),
        (EventField::Capacity, json!(600)),
        (EventField::Organizer, json!("Initech")),
        (EventField::Status, json!("completed")),
    ];
    let input = compile_update(&changes).unwrap();
    let updated = table.update_item("e1", &input).unwrap();

    for (field, value) in &changes {
        assert_eq!(&updated[field.wire_name()], value);
    }
    assert_eq!(updated["eventId"], "e1");
}

#[test]
fn patch_applies_to_exactly_the_supplied_subset() {
    let catalog = EventCatalog::open("events");
    catalog.create(sample("e1", EventStatus::Active)).unwrap();

    let patch = EventPatch {
        capacity: Some(600),
        ..Default::default()
    };
    let updated = catalog.apply_patch("e1", &patch).unwrap();

    // The untouched fields stay byte-for-byte equal to their priors.
    let expected = Event {
        capacity: 600,
        ..sample("e1", EventStatus::Active)
    };
    assert_eq!(updated, expected);
    assert_eq!(
        serde_json::to_value(catalog.fetch("e1").unwrap()).unwrap(),
        serde_json::to_value(&expected).unwrap()
    );
}

#[test]
fn empty_patch_is_rejected_and_leaves_the_record_alone() {
    let catalog = EventCatalog::open("events");
    catalog.create(sample("e1", EventStatus::Active)).unwrap();

    let err = catalog
        .apply_patch("e1", &EventPatch::default())
        .unwrap_err();
    assert_eq!(err, EventError::NoFieldsProvided);
    assert_eq!(
        catalog.fetch("e1").unwrap(),
        sample("e1", EventStatus::Active)
    );
}

#[test]
fn operations_against_missing_ids_report_not_found() {
    let catalog = EventCatalog::open("events");

    let patch = EventPatch {
        capacity: Some(2),
        ..Default::default()
    };
    assert_eq!(
        catalog.apply_patch("ghost", &patch),
        Err(EventError::NotFound)
    );
    assert_eq!(catalog.remove("ghost"), Err(EventError::NotFound));
    assert_eq!(catalog.fetch("ghost"), Err(EventError::NotFound));
}

#[test]
fn duplicate_create_is_a_conflict_and_keeps_the_original() {
    let catalog = EventCatalog::open("events");
    catalog.create(sample("e1", EventStatus::Active)).unwrap();

    let mut impostor = sample("e1", EventStatus::Cancelled);
    impostor.title = "Impostor".to_string();
    assert_eq!(catalog.create(impostor), Err(EventError::DuplicateId));

    assert_eq!(
        catalog.fetch("e1").unwrap(),
        sample("e1", EventStatus::Active)
    );
}

#[test]
fn delete_is_idempotent_in_effect() {
    let catalog = EventCatalog::open("events");
    catalog.create(sample("e1", EventStatus::Active)).unwrap();

    assert!(catalog.remove("e1").is_ok());
    assert_eq!(catalog.remove("e1"), Err(EventError::NotFound));
}

#[test]
fn filtered_list_is_exact_for_every_status() {
    let catalog = EventCatalog::open("events");
    catalog.create(sample("e1", EventStatus::Active)).unwrap();
    catalog.create(sample("e2", EventStatus::Cancelled)).unwrap();
    catalog.create(sample("e3", EventStatus::Active)).unwrap();
    catalog.create(sample("e4", EventStatus::Completed)).unwrap();

    for status in EventStatus::ALL {
        let listed = catalog.list(Some(status)).unwrap();
        let all = catalog.list(None).unwrap();
        let expected: Vec<_> = all.into_iter().filter(|e| e.status == status).collect();
        assert_eq!(listed, expected, "status: {}", status.as_str());
    }
}
