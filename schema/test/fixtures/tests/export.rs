use entgraph::prelude::*;
use entgraph_testing_test_fixtures::{schema, schema_from_dir};

#[test]
fn export_renders_indexes_with_creation_time() {
    let json = schema().unwrap().export();
    let posts = &json["tables"]["posts"];

    assert_eq!(
        posts["indexes"],
        json!([{
            "indexDescriptor": "numLikesAndType",
            "fields": ["type", "numLikes", "_creationTime"],
        }])
    );
    assert_eq!(
        posts["searchIndexes"],
        json!([{
            "indexDescriptor": "text",
            "searchField": "text",
            "filterFields": ["type"],
        }])
    );
    assert_eq!(json["tables"]["messages"]["indexes"][0]["indexDescriptor"], "userId");
}

#[test]
fn export_marks_defaulted_fields_optional() {
    let json = schema().unwrap().export();
    let fields = &json["tables"]["posts"]["documentType"]["value"];

    assert_eq!(fields["numLikes"]["optional"], true);
    assert_eq!(fields["type"]["optional"], true);
    assert_eq!(fields["text"]["optional"], false);
    assert_eq!(fields["type"]["fieldType"]["type"], "union");
}

#[test]
fn options_file_is_honored() {
    let schema = schema_from_dir(env!("CARGO_MANIFEST_DIR")).unwrap();

    assert!(schema.options().schema_validation);
    assert!(!schema.options().strict_table_name_types);
    assert_eq!(schema.export()["schemaValidation"], true);
}

#[test]
fn missing_options_file_is_a_config_error() {
    let err = schema_from_dir("/nonexistent").unwrap_err();

    assert!(matches!(err, entgraph::Error::ConfigError(_)));
}

#[test]
fn definitions_summarize_each_table() {
    let defs = get_ent_definitions(&schema().unwrap());

    let posts = defs.get("posts").unwrap();
    assert_eq!(posts.defaults["numLikes"], json!(0));
    assert_eq!(posts.defaults["type"], json!("text"));

    let users = defs.get("users").unwrap();
    assert!(users.fields["email"].unique);
    assert_eq!(
        defs.edge("users", "friends").unwrap().edge_type(),
        Some(EdgeType::Ref)
    );

    let profiles = defs.get("profiles").unwrap();
    assert_eq!(
        profiles.edges["user"].field(),
        Some("userId")
    );
    assert!(defs.get("users_friends").unwrap().edges.is_empty());
}
