use thiserror::Error as ThisError;

///
/// DeclarationError
/// Name collisions and malformed declarations recorded by a single table
/// builder; the table name is attached when the builder is finalized.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum DeclarationError {
    #[error("duplicate edge \"{edge}\"")]
    DuplicateEdge { edge: String },

    #[error("duplicate field \"{field}\"")]
    DuplicateField { field: String },

    #[error("duplicate index \"{index}\"")]
    DuplicateIndex { index: String },

    #[error("index \"{index}\" must specify at least one field")]
    EmptyIndex { index: String },
}

///
/// SchemaError
/// Fatal schema-build failures. Every variant names the offending table
/// and edge so the declaration can be fixed at its source.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SchemaError {
    #[error(
        "too many potential inverse edges for \"{edge}\" in table \"{table}\", all eligible: {}",
        quoted_list(.candidates)
    )]
    AmbiguousInverseEdge {
        table: String,
        edge: String,
        candidates: Vec<String>,
    },

    #[error(
        "both edge \"{edge}\" in table \"{table}\" and edge \"{other_edge}\" in table \"{other_table}\" are marked as optional, choose one to be required"
    )]
    ConflictingOptionalEdges {
        table: String,
        edge: String,
        other_table: String,
        other_edge: String,
    },

    #[error("table \"{table}\": {source}")]
    Declaration {
        table: String,
        #[source]
        source: DeclarationError,
    },

    #[error("duplicate table \"{table}\"")]
    DuplicateTable { table: String },

    #[error(
        "optional edge \"{edge}\" in table \"{table}\" must be paired with a required single edge in table \"{target}\", found {}",
        describe_inverse(.inverse.as_deref())
    )]
    InvalidInverseEdgeType {
        table: String,
        edge: String,
        target: String,
        inverse: Option<String>,
    },

    #[error(
        "the edge \"{inverse_edge}\" in table \"{inverse_table}\" cannot be optional, as it must store the 1:many edge as a field; check its inverse edge \"{edge}\" in table \"{table}\""
    )]
    InvalidManyToOneInverse {
        table: String,
        edge: String,
        inverse_table: String,
        inverse_edge: String,
    },

    #[error(
        "junction table \"{junction}\" for edge \"{edge}\" in table \"{table}\" collides with an existing table"
    )]
    JunctionTableConflict {
        table: String,
        edge: String,
        junction: String,
    },

    #[error(
        "edges {} in table \"{table}\" all resolve to field \"{field}\" in table \"{target}\"",
        quoted_list(.edges)
    )]
    ManyToOneFieldConflict {
        table: String,
        target: String,
        field: String,
        edges: Vec<String>,
    },

    #[error(
        "the edge \"{inverse_edge}\" in table \"{inverse_table}\" must have its `field` option set to \"{ref_field}\", to match the inverse edge \"{edge}\" in table \"{table}\" (found \"{inverse_field}\")"
    )]
    RefFieldMismatch {
        table: String,
        edge: String,
        ref_field: String,
        inverse_table: String,
        inverse_edge: String,
        inverse_field: String,
    },
}

impl SchemaError {
    pub(crate) fn declaration(table: &str, source: DeclarationError) -> Self {
        Self::Declaration {
            table: table.to_string(),
            source,
        }
    }
}

// describe_inverse
fn describe_inverse(inverse: Option<&str>) -> String {
    inverse.map_or_else(|| "none".to_string(), |name| format!("\"{name}\""))
}

// quoted_list
fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
