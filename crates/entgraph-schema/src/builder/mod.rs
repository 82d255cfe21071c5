//! Chained per-table declaration API.
//!
//! Every declaration mutates and returns the same builder. Name collisions
//! do not abort the chain: they are recorded and reported when the builder
//! is finalized into a [`TableDef`], where the table name is known.

mod options;


pub use options::{EdgeOptions, EdgesOptions, FieldOptions};

use crate::{
    ID_FIELD_SUFFIX,
    error::{DeclarationError, SchemaError},
    node::{EdgeDef, EdgeKind, FieldConfig, Index, SearchIndex, TableDef, VectorIndex},
    validator::Validator,
};

/// Start a table declaration from its initial document shape.
#[must_use]
pub fn define_ent<K, I>(document: I) -> TableBuilder
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    let mut builder = TableBuilder::new();
    for (name, validator) in document {
        builder.insert_field(name.into(), validator);
    }

    builder
}

///
/// TableBuilder
///

#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    table: TableDef,
    conflicts: Vec<DeclarationError>,
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a plain field.
    #[must_use]
    pub fn field(self, name: impl Into<String>, validator: Validator) -> Self {
        self.field_with(name, validator, FieldOptions::default())
    }

    /// Declare a field with indexing, uniqueness, or a write-time default.
    #[must_use]
    pub fn field_with(
        mut self,
        name: impl Into<String>,
        validator: Validator,
        options: FieldOptions,
    ) -> Self {
        let name = name.into();
        if self.table.fields.contains_key(&name) {
            self.conflict(DeclarationError::DuplicateField { field: name });
            return self;
        }

        // a defaulted field may be absent in storage
        let validator = if options.default.is_some() {
            validator.optional()
        } else {
            validator
        };
        self.insert_field(name.clone(), validator);

        if options.unique || options.index {
            self.push_index(Index::new(name.clone(), [name.clone()]));
        }
        if let Some(default) = options.default {
            self.table.defaults.insert(name.clone(), default);
        }
        if options.unique {
            self.table
                .field_configs
                .insert(name.clone(), FieldConfig { name, unique: true });
        }

        self
    }

    /// Declare a compound index over `fields`.
    #[must_use]
    pub fn index<I, S>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = Index::new(name, fields);
        if index.fields.is_empty() {
            self.conflict(DeclarationError::EmptyIndex { index: index.name });
            return self;
        }
        self.push_index(index);

        self
    }

    #[must_use]
    pub fn search_index<I, S>(
        mut self,
        name: impl Into<String>,
        search_field: impl Into<String>,
        filter_fields: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if self.has_index_name(&name) {
            self.conflict(DeclarationError::DuplicateIndex { index: name });
            return self;
        }
        self.table.search_indexes.push(SearchIndex {
            name,
            search_field: search_field.into(),
            filter_fields: filter_fields.into_iter().map(Into::into).collect(),
        });

        self
    }

    #[must_use]
    pub fn vector_index<I, S>(
        mut self,
        name: impl Into<String>,
        vector_field: impl Into<String>,
        dimensions: u32,
        filter_fields: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if self.has_index_name(&name) {
            self.conflict(DeclarationError::DuplicateIndex { index: name });
            return self;
        }
        self.table.vector_indexes.push(VectorIndex {
            name,
            vector_field: vector_field.into(),
            dimensions,
            filter_fields: filter_fields.into_iter().map(Into::into).collect(),
        });

        self
    }

    /// Declare a single edge stored as a foreign key on this table.
    #[must_use]
    pub fn edge(self, name: impl Into<String>) -> Self {
        self.edge_with(name, EdgeOptions::default())
    }

    /// Declare a single edge. The target table is the edge name plus `s`.
    #[must_use]
    pub fn edge_with(mut self, name: impl Into<String>, options: EdgeOptions) -> Self {
        let name = name.into();
        if self.table.edge(&name).is_some() {
            self.conflict(DeclarationError::DuplicateEdge { edge: name });
            return self;
        }
        let to = format!("{name}s");

        if options.optional {
            self.table.edges.push(EdgeDef {
                name,
                to,
                kind: EdgeKind::SingleRef {
                    ref_field: options.ref_field,
                },
            });
            return self;
        }

        let field = options
            .field
            .unwrap_or_else(|| format!("{name}{ID_FIELD_SUFFIX}"));
        if self.table.fields.contains_key(&field) {
            self.conflict(DeclarationError::DuplicateField { field });
            return self;
        }
        self.insert_field(field.clone(), Validator::id(to.clone()));
        self.push_index(Index::new(field.clone(), [field.clone()]));
        self.table.edges.push(EdgeDef {
            name,
            to,
            kind: EdgeKind::SingleField {
                field,
                unique: false,
            },
        });

        self
    }

    /// Declare a `multiple` edge targeting the table of the same name.
    #[must_use]
    pub fn edges(self, name: impl Into<String>) -> Self {
        self.edges_with(name, EdgesOptions::default())
    }

    /// Declare a `multiple` edge, optionally with a designated inverse on
    /// this same table.
    #[must_use]
    pub fn edges_with(mut self, name: impl Into<String>, options: EdgesOptions) -> Self {
        let name = name.into();
        let to = options.to.unwrap_or_else(|| name.clone());

        if self.table.edge(&name).is_some() {
            self.conflict(DeclarationError::DuplicateEdge { edge: name });
            return self;
        }
        if let Some(inverse) = &options.inverse
            && (*inverse == name || self.table.edge(inverse).is_some())
        {
            self.conflict(DeclarationError::DuplicateEdge {
                edge: inverse.clone(),
            });
            return self;
        }

        self.table.edges.push(EdgeDef {
            name: name.clone(),
            to: to.clone(),
            kind: EdgeKind::MultipleUnresolved { inverse_of: None },
        });
        if let Some(inverse) = options.inverse {
            self.table.edges.push(EdgeDef {
                name: inverse,
                to,
                kind: EdgeKind::MultipleUnresolved {
                    inverse_of: Some(name),
                },
            });
        }

        self
    }

    /// Finalize into an immutable snapshot, surfacing the first recorded
    /// declaration conflict.
    pub fn finish(self, table: &str) -> Result<TableDef, SchemaError> {
        match self.conflicts.into_iter().next() {
            Some(conflict) => Err(SchemaError::declaration(table, conflict)),
            None => Ok(self.table),
        }
    }

    // insert_field
    fn insert_field(&mut self, name: String, validator: Validator) {
        if self.table.fields.contains_key(&name) {
            self.conflict(DeclarationError::DuplicateField { field: name });
        } else {
            self.table.fields.insert(name, validator);
        }
    }

    // push_index
    fn push_index(&mut self, index: Index) {
        if self.has_index_name(&index.name) {
            self.conflict(DeclarationError::DuplicateIndex { index: index.name });
        } else {
            self.table.indexes.push(index);
        }
    }

    fn has_index_name(&self, name: &str) -> bool {
        self.table.indexes.iter().any(|index| index.name == name)
            || self.table.search_indexes.iter().any(|index| index.name == name)
            || self.table.vector_indexes.iter().any(|index| index.name == name)
    }

    fn conflict(&mut self, err: DeclarationError) {
        self.conflicts.push(err);
    }
}
