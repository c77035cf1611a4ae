//! # Update Expression Grammar
//!
//! Parses the `SET` clause used by [`Table::update_item`]:
//!
//! ```text
//! update      := "SET" assignment ("," assignment)*
//! assignment  := path "=" value-token
//! path        := "#" alias | identifier
//! value-token := ":" identifier
//! ```
//!
//! A bare identifier that collides with the reserved-word list is
//! rejected; callers must bind an alias in `expression_names` and
//! reference the attribute as `#alias`. Every `:token` must be bound
//! in `expression_values`. Parsing resolves all bindings before any
//! record is touched, so a malformed expression never applies partially.
//!
//! [`Table::update_item`]: super::table::Table::update_item

use std::collections::HashMap;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};

/// Identifiers the expression grammar claims for itself. Case-insensitive.
const RESERVED_WORDS: &[&str] = &[
    "add", "and", "begins_with", "between", "by", "capacity", "condition",
    "contains", "date", "delete", "exists", "from", "if", "in", "key",
    "keys", "location", "name", "not", "or", "remove", "select", "set",
    "size", "status", "timestamp", "update", "where",
];

/// Returns true if `ident` cannot be used as a bare attribute path.
pub fn is_reserved_word(ident: &str) -> bool {
    RESERVED_WORDS.iter().any(|w| w.eq_ignore_ascii_case(ident))
}

/// A store-native update request: one compound `SET` expression plus
/// the name and value bindings it references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateInput {
    /// The `SET ...` expression text
    pub update_expression: String,

    /// `#alias` -> real attribute name
    pub expression_names: HashMap<String, String>,

    /// `:token` -> literal value
    pub expression_values: HashMap<String, Value>,
}

/// One fully resolved assignment, ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Assignment {
    pub attribute: String,
    pub value: Value,
}

/// Parses and resolves an update expression into concrete assignments.
///
/// Fails without side effects on any grammar, reserved-word, or
/// binding violation.
pub(crate) fn parse_set_expression(input: &UpdateInput) -> StoreResult<Vec<Assignment>> {
    let expression = input.update_expression.trim();

    let body = match expression.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("set ") => &expression[4..],
        _ => {
            return Err(StoreError::ExpressionSyntax(
                "expected a SET clause".to_string(),
            ))
        }
    };

    let mut assignments: Vec<Assignment> = Vec::new();

    for clause in body.split(',') {
        let clause = clause.trim();
        let (path, token) = clause.split_once('=').ok_or_else(|| {
            StoreError::ExpressionSyntax(format!("assignment missing '=': {clause}"))
        })?;

        let attribute = resolve_path(path.trim(), &input.expression_names)?;
        let value = resolve_token(token.trim(), &input.expression_values)?;

        if assignments.iter().any(|a| a.attribute == attribute) {
            return Err(StoreError::ExpressionSyntax(format!(
                "duplicate assignment to attribute: {attribute}"
            )));
        }

        assignments.push(Assignment { attribute, value });
    }

    Ok(assignments)
}

/// Resolves an attribute path, either a bare identifier or a `#alias`.
fn resolve_path(path: &str, names: &HashMap<String, String>) -> StoreResult<String> {
    if let Some(alias) = path.strip_prefix('#') {
        if !is_identifier(alias) {
            return Err(StoreError::ExpressionSyntax(format!(
                "malformed name placeholder: {path}"
            )));
        }
        let attribute = names
            .get(path)
            .ok_or_else(|| StoreError::UnboundName(path.to_string()))?;
        if !is_identifier(attribute) {
            return Err(StoreError::ExpressionSyntax(format!(
                "alias {path} resolves to a malformed attribute name"
            )));
        }
        return Ok(attribute.clone());
    }

    if !is_identifier(path) {
        return Err(StoreError::ExpressionSyntax(format!(
            "malformed attribute path: {path}"
        )));
    }
    if is_reserved_word(path) {
        return Err(StoreError::ReservedWord(path.to_string()));
    }
    Ok(path.to_string())
}

/// Resolves a `:token` reference against the value bindings.
fn resolve_token(token: &str, values: &HashMap<String, Value>) -> StoreResult<Value> {
    let name = token.strip_prefix(':').filter(|t| is_identifier(t));
    if name.is_none() {
        return Err(StoreError::ExpressionSyntax(format!(
            "malformed value placeholder: {token}"
        )));
    }
    values
        .get(token)
        .cloned()
        .ok_or_else(|| StoreError::UnboundValue(token.to_string()))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
