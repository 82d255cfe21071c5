use entgraph::prelude::*;
use entgraph::schema::resolve::resolve_edges;
use entgraph_testing_test_fixtures::{schema, tables};
use std::collections::BTreeMap;

fn kind<'a>(schema: &'a SchemaDefinition, table: &str, edge: &str) -> &'a EdgeKind {
    &schema
        .edge(table, edge)
        .unwrap_or_else(|| panic!("missing edge {table}.{edge}"))
        .kind
}

fn junction(schema: &SchemaDefinition, table: &str, edge: &str) -> JunctionRef {
    match kind(schema, table, edge) {
        EdgeKind::MultipleRef(junction) => junction.clone(),
        other => panic!("expected junction edge for {table}.{edge}, got {other:?}"),
    }
}

#[test]
fn fixture_schema_resolves() {
    let schema = schema().unwrap();
    let names: Vec<&str> = schema.tables().keys().map(String::as_str).collect();

    assert_eq!(
        names,
        vec![
            "messages",
            "messages_to_tags",
            "posts",
            "profiles",
            "secrets",
            "tags",
            "users",
            "users_followees_to_followers",
            "users_friends",
        ]
    );
    assert!(
        schema
            .tables()
            .values()
            .flat_map(|table| &table.edges)
            .all(|edge| !edge.is_unresolved()),
        "every fixture edge has an inverse or is self-directed"
    );
}

#[test]
fn one_to_one_marks_field_side_unique() {
    let schema = schema().unwrap();

    assert_eq!(
        kind(&schema, "users", "profile"),
        &EdgeKind::SingleRef {
            ref_field: Some("userId".to_string())
        }
    );
    assert_eq!(
        kind(&schema, "profiles", "user"),
        &EdgeKind::SingleField {
            field: "userId".to_string(),
            unique: true
        }
    );
}

#[test]
fn one_to_one_with_explicit_foreign_key() {
    let schema = schema().unwrap();

    assert_eq!(
        kind(&schema, "users", "secret"),
        &EdgeKind::SingleRef {
            ref_field: Some("ownerId".to_string())
        }
    );
    assert_eq!(schema.edge("secrets", "user").unwrap().field(), Some("ownerId"));
    assert_eq!(
        schema.table("secrets").unwrap().fields["ownerId"],
        v::id("users")
    );
}

#[test]
fn one_to_many_reads_inverse_field() {
    let schema = schema().unwrap();

    assert_eq!(
        kind(&schema, "users", "messages"),
        &EdgeKind::MultipleField {
            ref_field: "userId".to_string()
        }
    );
}

#[test]
fn many_to_many_across_tables_shares_one_junction() {
    let schema = schema().unwrap();
    let forward = junction(&schema, "messages", "tags");
    let backward = junction(&schema, "tags", "messages");

    assert_eq!(forward.table, "messages_to_tags");
    assert_eq!(backward.table, forward.table);
    assert_eq!((forward.field.as_str(), forward.ref_field.as_str()), ("messagesId", "tagsId"));
    assert_eq!((backward.field.as_str(), backward.ref_field.as_str()), ("tagsId", "messagesId"));
    assert!(!forward.symmetric && !backward.symmetric);

    let table = schema.table("messages_to_tags").unwrap();
    assert_eq!(table.fields["messagesId"], v::id("messages"));
    assert_eq!(table.fields["tagsId"], v::id("tags"));
}

#[test]
fn self_edge_without_inverse_is_symmetric() {
    let schema = schema().unwrap();
    let friends = junction(&schema, "users", "friends");

    assert_eq!(friends.table, "users_friends");
    assert_eq!((friends.field.as_str(), friends.ref_field.as_str()), ("aId", "bId"));
    assert!(friends.symmetric);

    let table = schema.table("users_friends").unwrap();
    assert_eq!(
        table.indexes,
        vec![Index::new("aId", ["aId", "bId"]), Index::new("bId", ["bId", "aId"])]
    );
}

#[test]
fn designated_inverse_pair_swaps_key_roles() {
    let schema = schema().unwrap();
    let followers = junction(&schema, "users", "followers");
    let followees = junction(&schema, "users", "followees");

    assert_eq!(followers.table, "users_followees_to_followers");
    assert_eq!(followees.table, followers.table);
    assert_eq!(followers.field, followees.ref_field);
    assert_eq!(followers.ref_field, followees.field);
    assert!(!followers.symmetric && !followees.symmetric);
    assert!(!followers.inverse);
    assert!(followees.inverse);
}

#[test]
fn resolved_pairs_are_mutually_consistent() {
    let schema = schema().unwrap();

    for (table_name, table) in schema.tables() {
        for edge in &table.edges {
            match &edge.kind {
                EdgeKind::SingleRef {
                    ref_field: Some(ref_field),
                } => {
                    let target = schema.table(&edge.to).unwrap();
                    assert!(
                        target.edges.iter().any(|other| other.field() == Some(ref_field.as_str())),
                        "{table_name}.{} reads {ref_field} but {} stores no such key",
                        edge.name,
                        edge.to
                    );
                }
                EdgeKind::MultipleField { ref_field } => {
                    let target = schema.table(&edge.to).unwrap();
                    assert!(target.edges.iter().any(|other| other.field() == Some(ref_field.as_str())));
                }
                EdgeKind::MultipleRef(junction) if !junction.symmetric => {
                    let partner = schema
                        .table(&edge.to)
                        .unwrap()
                        .edges
                        .iter()
                        .filter(|other| other.name != edge.name)
                        .find_map(|other| match &other.kind {
                            EdgeKind::MultipleRef(j) if j.table == junction.table => Some(j),
                            _ => None,
                        })
                        .unwrap();
                    assert_eq!(partner.field, junction.ref_field);
                    assert_eq!(partner.ref_field, junction.field);
                }
                _ => {}
            }
        }
    }
}

#[test]
fn resolving_resolved_schema_is_a_no_op() {
    let schema = schema().unwrap();
    let mut tables: BTreeMap<String, TableDef> = schema.tables().clone();

    resolve_edges(&mut tables).unwrap();

    assert_eq!(&tables, schema.tables());
}

#[test]
fn adding_a_conflicting_optional_edge_fails() {
    let mut decls = tables();
    decls.push((
        "avatars",
        define_ent([("url", v::string())]).edge_with("user", EdgeOptions::optional()),
    ));
    for (name, builder) in &mut decls {
        if *name == "users" {
            *builder = std::mem::take(builder).edge_with("avatar", EdgeOptions::optional());
        }
    }

    let err = define_ent_schema(decls, SchemaOptions::default()).unwrap_err();

    assert_eq!(
        err,
        SchemaError::ConflictingOptionalEdges {
            table: "avatars".to_string(),
            edge: "user".to_string(),
            other_table: "users".to_string(),
            other_edge: "avatar".to_string(),
        }
    );
}

#[test]
fn ambiguous_inverse_lists_candidates() {
    let mut decls = tables();
    for (name, builder) in &mut decls {
        if *name == "users" {
            *builder = std::mem::take(builder).edges_with("drafts", EdgesOptions::to("messages"));
        }
    }

    let err = define_ent_schema(decls, SchemaOptions::default()).unwrap_err();

    assert_eq!(
        err,
        SchemaError::AmbiguousInverseEdge {
            table: "messages".to_string(),
            edge: "user".to_string(),
            candidates: vec!["messages".to_string(), "drafts".to_string()],
        }
    );
}
