use crate::CREATION_TIME_FIELD;
use serde::Serialize;
use std::fmt::{self, Display};

///
/// Index
/// Ordered single or compound index. The creation time is implicitly
/// appended as the last sort key when exported.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    #[serde(rename = "indexDescriptor")]
    pub name: String,
    pub fields: Vec<String>,
}

impl Index {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Field list as registered, with the creation time appended.
    #[must_use]
    pub fn sort_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(CREATION_TIME_FIELD))
            .collect()
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.sort_fields().join(", "))
    }
}

///
/// SearchIndex
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    #[serde(rename = "indexDescriptor")]
    pub name: String,
    pub search_field: String,
    pub filter_fields: Vec<String>,
}

///
/// VectorIndex
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorIndex {
    #[serde(rename = "indexDescriptor")]
    pub name: String,
    pub vector_field: String,
    pub dimensions: u32,
    pub filter_fields: Vec<String>,
}
