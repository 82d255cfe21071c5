use crate::{
    build::SchemaDefinition,
    node::{EdgeDef, FieldConfig},
};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

///
/// EntModel
/// Read-only per-table summary: write-time defaults, resolved edges by
/// name, and uniqueness configs.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EntModel {
    pub defaults: BTreeMap<String, JsonValue>,
    pub edges: BTreeMap<String, EdgeDef>,
    pub fields: BTreeMap<String, FieldConfig>,
}

///
/// EntDefinitions
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntDefinitions(BTreeMap<String, EntModel>);

impl EntDefinitions {
    #[must_use]
    pub fn get(&self, table: &str) -> Option<&EntModel> {
        self.0.get(table)
    }

    #[must_use]
    pub fn edge(&self, table: &str, edge: &str) -> Option<&EdgeDef> {
        self.get(table).and_then(|model| model.edges.get(edge))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntModel)> {
        self.0.iter().map(|(name, model)| (name.as_str(), model))
    }
}

/// Summarize a resolved schema for downstream consumers.
#[must_use]
pub fn get_ent_definitions(schema: &SchemaDefinition) -> EntDefinitions {
    EntDefinitions(
        schema
            .tables()
            .iter()
            .map(|(name, table)| {
                let model = EntModel {
                    defaults: table.defaults.clone(),
                    edges: table
                        .edges
                        .iter()
                        .map(|edge| (edge.name.clone(), edge.clone()))
                        .collect(),
                    fields: table.field_configs.clone(),
                };

                (name.clone(), model)
            })
            .collect(),
    )
}
