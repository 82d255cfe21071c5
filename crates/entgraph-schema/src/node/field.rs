use serde::Serialize;

///
/// FieldConfig
/// Uniqueness metadata for a declared field, exposed to downstream
/// query and mutation helpers.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldConfig {
    pub name: String,
    pub unique: bool,
}
