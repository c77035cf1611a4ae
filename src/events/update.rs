//! # Partial Update Compiler
//!
//! Turns a typed change set into one store-native `SET` expression.
//! Fields whose attribute names collide with the store grammar's
//! reserved words are referenced through `#name` aliases; everything
//! else is referenced literally. All clauses land in a single
//! expression so the update applies as one atomic operation and the
//! store returns the full post-update record.

use serde_json::Value;

use super::errors::{EventError, EventResult};
use super::model::EventField;
use crate::store::UpdateInput;

/// Per-field indirection table.
///
/// This is backend-grammar knowledge kept next to the data model on
/// purpose: when the store's reserved-word list changes, this table
/// is the one place to update.
const FIELD_ALIASING: [(EventField, bool); 7] = [
    (EventField::Title, false),
    (EventField::Description, false),
    (EventField::Date, true),
    (EventField::Location, true),
    (EventField::Capacity, true),
    (EventField::Organizer, false),
    (EventField::Status, true),
];

/// Whether `field` must be referenced through a name alias.
pub fn needs_alias(field: EventField) -> bool {
    FIELD_ALIASING
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, aliased)| *aliased)
        .unwrap_or(false)
}

/// Compiles a change set into a single update request.
///
/// Rejects an empty change set with `NoFieldsProvided`; a no-op
/// update is not a valid request.
pub fn compile_update(changes: &[(EventField, Value)]) -> EventResult<UpdateInput> {
    if changes.is_empty() {
        return Err(EventError::NoFieldsProvided);
    }

    let mut input = UpdateInput::default();
    let mut clauses = Vec::with_capacity(changes.len());

    for (field, value) in changes {
        let attribute = field.wire_name();
        let token = format!(":{attribute}");

        if needs_alias(*field) {
            let alias = format!("#{attribute}");
            clauses.push(format!("{alias} = {token}"));
            input.expression_names.insert(alias, attribute.to_string());
        } else {
            clauses.push(format!("{attribute} = {token}"));
        }
        input.expression_values.insert(token, value.clone());
    }

    input.update_expression = format!("SET {}", clauses.join(", "));
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_change_set_rejected() {
        assert_eq!(compile_update(&[]), Err(EventError::NoFieldsProvided));
    }

    #[test]
    fn test_ordinary_field_referenced_literally() {
        let input = compile_update(&[(EventField::Title, json!("Summit"))]).unwrap();

        assert_eq!(input.update_expression, "SET title = :title");
        assert!(input.expression_names.is_empty());
        assert_eq!(input.expression_values[":title"], json!("Summit"));
    }

    #[test]
    fn test_reserved_field_goes_through_alias() {
        let input = compile_update(&[(EventField::Status, json!("cancelled"))]).unwrap();

        assert_eq!(input.update_expression, "SET #status = :status");
        assert_eq!(input.expression_names["#status"], "status");
        assert_eq!(input.expression_values[":status"], json!("cancelled"));
    }

    #[test]
    fn test_mixed_change_set_compiles_to_one_expression() {
        let input = compile_update(&[
            (EventField::Title, json!("Summit")),
            (EventField::Capacity, json!(600)),
            (EventField::Organizer, json!("Acme")),
        ])
        .unwrap();

        assert_eq!(
            input.update_expression,
            "SET title = :title, #capacity = :capacity, organizer = :organizer"
        );
        assert_eq!(input.expression_names.len(), 1);
        assert_eq!(input.expression_values.len(), 3);
    }

    #[test]
    fn test_aliasing_table_covers_the_reserved_fields() {
        assert!(needs_alias(EventField::Status));
        assert!(needs_alias(EventField::Capacity));
        assert!(needs_alias(EventField::Location));
        assert!(needs_alias(EventField::Date));
        assert!(!needs_alias(EventField::Title));
        assert!(!needs_alias(EventField::Description));
        assert!(!needs_alias(EventField::Organizer));
    }
}
