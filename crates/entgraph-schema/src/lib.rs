//! ## Crate layout
//! - `node`: table, field, index and edge shapes read and written by resolution.
//! - `builder`: the chained per-table declaration API.
//! - `resolve`: the global edge-resolution pass.
//! - `build`: schema assembly, export, and the downstream definitions summary.

pub mod build;
pub mod builder;
pub mod config;
pub mod error;
pub mod node;
pub mod resolve;
pub mod types;
pub mod validator;

/// System field implicitly appended to every index as the final sort key.
pub const CREATION_TIME_FIELD: &str = "_creationTime";

/// Suffix used to derive foreign-key field names from edge or table names.
pub const ID_FIELD_SUFFIX: &str = "Id";

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{EntDefinitions, EntModel, SchemaDefinition, define_ent_schema, get_ent_definitions},
        builder::{EdgeOptions, EdgesOptions, FieldOptions, TableBuilder, define_ent},
        config::SchemaOptions,
        error::{DeclarationError, SchemaError},
        node::*,
        types::{Cardinality, EdgeType},
        validator::Validator,
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    SchemaError(#[from] error::SchemaError),

    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
}
