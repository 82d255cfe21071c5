use crate::{
    node::{EdgeDef, FieldConfig, Index, SearchIndex, VectorIndex},
    validator::{Validator, object_json},
};
use serde_json::{Value as JsonValue, json};
use std::collections::BTreeMap;

///
/// TableDef
///
/// Finalized snapshot of one table: document shape, indexes, defaults,
/// uniqueness map, and edges in declaration order. Resolution mutates edges
/// and may add fields or indexes; after that the table is read-only.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableDef {
    pub fields: BTreeMap<String, Validator>,
    pub indexes: Vec<Index>,
    pub search_indexes: Vec<SearchIndex>,
    pub vector_indexes: Vec<VectorIndex>,
    pub defaults: BTreeMap<String, JsonValue>,
    pub field_configs: BTreeMap<String, FieldConfig>,
    pub edges: Vec<EdgeDef>,
}

impl TableDef {
    #[must_use]
    pub fn edge(&self, name: &str) -> Option<&EdgeDef> {
        self.edges.iter().find(|edge| edge.name == name)
    }

    #[must_use]
    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|index| index.name == name)
    }

    #[must_use]
    pub fn is_unique(&self, field: &str) -> bool {
        self.field_configs.get(field).is_some_and(|config| config.unique)
    }

    /// Registration JSON for this table.
    #[must_use]
    pub fn export(&self) -> JsonValue {
        let indexes: Vec<JsonValue> = self
            .indexes
            .iter()
            .map(|index| {
                json!({
                    "indexDescriptor": index.name,
                    "fields": index.sort_fields(),
                })
            })
            .collect();

        json!({
            "indexes": indexes,
            "searchIndexes": self.search_indexes,
            "vectorIndexes": self.vector_indexes,
            "documentType": object_json(&self.fields),
        })
    }
}
