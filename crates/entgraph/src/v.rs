//! Validator short-hands, so document shapes read as
//! `[("text", v::string()), ("author", v::id("users"))]`.

use entgraph_schema::validator::Validator;
use serde_json::Value as JsonValue;

#[must_use]
pub const fn any() -> Validator {
    Validator::Any
}

#[must_use]
pub const fn boolean() -> Validator {
    Validator::Boolean
}

#[must_use]
pub const fn bytes() -> Validator {
    Validator::Bytes
}

#[must_use]
pub const fn float64() -> Validator {
    Validator::Float64
}

#[must_use]
pub const fn int64() -> Validator {
    Validator::Int64
}

#[must_use]
pub const fn null() -> Validator {
    Validator::Null
}

#[must_use]
pub const fn string() -> Validator {
    Validator::String
}

#[must_use]
pub fn id(table: impl Into<String>) -> Validator {
    Validator::id(table)
}

#[must_use]
pub fn literal(value: impl Into<JsonValue>) -> Validator {
    Validator::literal(value)
}

#[must_use]
pub fn array(element: Validator) -> Validator {
    Validator::array(element)
}

#[must_use]
pub fn optional(inner: Validator) -> Validator {
    inner.optional()
}

#[must_use]
pub fn union<I>(variants: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    Validator::union(variants)
}

#[must_use]
pub fn object<K, I>(fields: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    Validator::object(fields)
}
