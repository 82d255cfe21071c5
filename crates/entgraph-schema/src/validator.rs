//! Value validators carried by table declarations.
//!
//! Validators only describe document shape here. Checking values against them
//! belongs to the registration layer, so this module just builds and exports
//! the shapes.

use serde_json::{Map, Value as JsonValue, json};
use std::collections::BTreeMap;

///
/// Validator
///

#[derive(Clone, Debug, PartialEq)]
#[remain::sorted]
pub enum Validator {
    Any,
    Array(Box<Self>),
    Boolean,
    Bytes,
    Float64,
    Id(String),
    Int64,
    Literal(JsonValue),
    Null,
    Object(BTreeMap<String, Self>),
    Optional(Box<Self>),
    String,
    Union(Vec<Self>),
}

impl Validator {
    #[must_use]
    pub fn id(table: impl Into<String>) -> Self {
        Self::Id(table.into())
    }

    #[must_use]
    pub fn literal(value: impl Into<JsonValue>) -> Self {
        Self::Literal(value.into())
    }

    #[must_use]
    pub fn array(item: Self) -> Self {
        Self::Array(Box::new(item))
    }

    #[must_use]
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub fn union(variants: impl IntoIterator<Item = Self>) -> Self {
        Self::Union(variants.into_iter().collect())
    }

    /// Wrap in `Optional`, leaving already-optional validators unchanged.
    #[must_use]
    pub fn optional(self) -> Self {
        if self.is_optional() {
            self
        } else {
            Self::Optional(Box::new(self))
        }
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Table referenced by an `Id` validator, looking through `Optional`.
    #[must_use]
    pub fn id_table(&self) -> Option<&str> {
        match self {
            Self::Id(table) => Some(table),
            Self::Optional(inner) => inner.id_table(),
            _ => None,
        }
    }

    /// Render the registration JSON for this validator.
    ///
    /// `Optional` is a property of the enclosing object field, so a bare
    /// optional renders as its inner validator.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Any => json!({ "type": "any" }),
            Self::Array(item) => json!({ "type": "array", "value": item.to_json() }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Bytes => json!({ "type": "bytes" }),
            Self::Float64 => json!({ "type": "number" }),
            Self::Id(table) => json!({ "type": "id", "tableName": table }),
            Self::Int64 => json!({ "type": "bigint" }),
            Self::Literal(value) => json!({ "type": "literal", "value": value }),
            Self::Null => json!({ "type": "null" }),
            Self::Object(fields) => object_json(fields),
            Self::Optional(inner) => inner.to_json(),
            Self::String => json!({ "type": "string" }),
            Self::Union(variants) => json!({
                "type": "union",
                "value": variants.iter().map(Self::to_json).collect::<Vec<_>>(),
            }),
        }
    }
}

/// Render an object shape, recording optionality per field.
pub(crate) fn object_json(fields: &BTreeMap<String, Validator>) -> JsonValue {
    let mut value = Map::new();
    for (name, validator) in fields {
        value.insert(
            name.clone(),
            json!({
                "fieldType": validator.to_json(),
                "optional": validator.is_optional(),
            }),
        );
    }

    json!({ "type": "object", "value": value })
}
