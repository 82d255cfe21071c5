//! Fixture schema covering every edge shape: one-to-one with inferred and
//! explicit foreign keys, one-to-many, many-to-many across tables, and both
//! self-referential many-to-many forms.

use entgraph::prelude::*;
use std::path::Path;

/// Options file shipped alongside the fixtures.
pub const OPTIONS_FILE: &str = "entgraph.toml";

/// Table declarations, not yet finalized.
#[must_use]
pub fn tables() -> Vec<(&'static str, TableBuilder)> {
    vec![
        (
            "messages",
            define_ent([("text", v::string())])
                .edge("user")
                .edges("tags"),
        ),
        (
            "users",
            define_ent([("name", v::string())])
                .field_with("email", v::string(), FieldOptions::unique())
                .edge_with("profile", EdgeOptions::optional())
                .edges("messages")
                .edges_with("followers", EdgesOptions::to("users").with_inverse("followees"))
                .edges_with("friends", EdgesOptions::to("users"))
                .edge_with("secret", EdgeOptions::optional().with_ref("ownerId")),
        ),
        (
            "profiles",
            define_ent([("bio", v::string())]).edge("user"),
        ),
        (
            "tags",
            define_ent([("name", v::string())]).edges("messages"),
        ),
        (
            "posts",
            define_ent([("text", v::string())])
                .field_with("numLikes", v::float64(), FieldOptions::default_value(0))
                .field_with(
                    "type",
                    v::union([v::literal("text"), v::literal("video")]),
                    FieldOptions::default_value("text"),
                )
                .index("numLikesAndType", ["type", "numLikes"])
                .search_index("text", "text", ["type"]),
        ),
        (
            "secrets",
            define_ent([("value", v::string())]).edge_with("user", EdgeOptions::field("ownerId")),
        ),
    ]
}

/// The fixture schema with default options.
pub fn schema() -> Result<SchemaDefinition, SchemaError> {
    define_ent_schema(tables(), SchemaOptions::default())
}

/// The fixture schema with options loaded from `dir`/[`OPTIONS_FILE`].
pub fn schema_from_dir(dir: impl AsRef<Path>) -> Result<SchemaDefinition, entgraph::Error> {
    let options = SchemaOptions::from_path(dir.as_ref().join(OPTIONS_FILE))?;

    Ok(define_ent_schema(tables(), options)?)
}
