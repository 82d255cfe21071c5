use serde_json::Value as JsonValue;

///
/// FieldOptions
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldOptions {
    pub index: bool,
    pub unique: bool,
    pub default: Option<JsonValue>,
}

impl FieldOptions {
    #[must_use]
    pub fn index() -> Self {
        Self {
            index: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unique() -> Self {
        Self {
            unique: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn default_value(value: impl Into<JsonValue>) -> Self {
        Self {
            default: Some(value.into()),
            ..Self::default()
        }
    }
}

///
/// EdgeOptions
/// Options for `edge()`. Without `optional` the declaring table stores the
/// foreign key.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeOptions {
    pub optional: bool,
    pub field: Option<String>,
    pub ref_field: Option<String>,
}

impl EdgeOptions {
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Self::default()
        }
    }

    /// Name the field on the other table that stores the key.
    #[must_use]
    pub fn with_ref(mut self, name: impl Into<String>) -> Self {
        self.ref_field = Some(name.into());
        self
    }
}

///
/// EdgesOptions
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgesOptions {
    pub to: Option<String>,
    pub inverse: Option<String>,
}

impl EdgesOptions {
    #[must_use]
    pub fn to(table: impl Into<String>) -> Self {
        Self {
            to: Some(table.into()),
            inverse: None,
        }
    }

    #[must_use]
    pub fn with_inverse(mut self, name: impl Into<String>) -> Self {
        self.inverse = Some(name.into());
        self
    }
}
