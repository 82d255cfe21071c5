//! Schema assembly: finalize builders, resolve edges, and produce the
//! registration payload plus the definitions summary read by downstream
//! query and mutation helpers.

mod definitions;


pub use definitions::{EntDefinitions, EntModel, get_ent_definitions};

use crate::{
    builder::TableBuilder,
    config::SchemaOptions,
    error::SchemaError,
    node::{EdgeDef, TableDef},
    resolve::resolve_edges,
};
use serde_json::{Map, Value as JsonValue, json};
use std::collections::BTreeMap;
use tracing::info;

/// Finalize every table, resolve edges across the whole set, and return
/// the registration-ready schema. Any failure aborts the build.
pub fn define_ent_schema<K, I>(
    tables: I,
    options: SchemaOptions,
) -> Result<SchemaDefinition, SchemaError>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, TableBuilder)>,
{
    // Phase 1: snapshot each builder, surfacing declaration conflicts.
    let mut defs = BTreeMap::new();
    for (name, builder) in tables {
        let name = name.into();
        if defs.contains_key(&name) {
            return Err(SchemaError::DuplicateTable { table: name });
        }
        let def = builder.finish(&name)?;
        defs.insert(name, def);
    }
    let declared = defs.len();

    // Phase 2: one global resolution pass.
    resolve_edges(&mut defs)?;

    info!(
        tables = declared,
        junction_tables = defs.len() - declared,
        edges = defs.values().map(|table| table.edges.len()).sum::<usize>(),
        "schema defined"
    );

    Ok(SchemaDefinition {
        tables: defs,
        options,
    })
}

///
/// SchemaDefinition
/// Fully resolved table set, including synthesized junction tables.
///

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    tables: BTreeMap<String, TableDef>,
    options: SchemaOptions,
}

impl SchemaDefinition {
    #[must_use]
    pub const fn tables(&self) -> &BTreeMap<String, TableDef> {
        &self.tables
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }

    #[must_use]
    pub fn edge(&self, table: &str, edge: &str) -> Option<&EdgeDef> {
        self.table(table).and_then(|def| def.edge(edge))
    }

    #[must_use]
    pub const fn options(&self) -> SchemaOptions {
        self.options
    }

    /// Registration JSON for the whole schema.
    #[must_use]
    pub fn export(&self) -> JsonValue {
        let tables: Map<String, JsonValue> = self
            .tables
            .iter()
            .map(|(name, table)| (name.clone(), table.export()))
            .collect();

        json!({
            "tables": tables,
            "schemaValidation": self.options.schema_validation,
        })
    }
}
