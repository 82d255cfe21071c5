//! ## Crate layout
//! - `schema`: validators, node types, the table builder, edge resolution,
//!   and schema assembly.
//! - `v`: short-hand validator constructors for document shapes.
//!
//! Downstream schema code imports `entgraph::prelude::*` and nothing else.

pub use entgraph_schema as schema;

pub mod v;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use schema::{Error, build::define_ent_schema, builder::define_ent};

///
/// Prelude
///

pub mod prelude {
    pub use crate::v;
    pub use entgraph_schema::prelude::*;
    pub use serde_json::json;
}
