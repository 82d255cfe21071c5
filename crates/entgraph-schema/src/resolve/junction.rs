use crate::{
    ID_FIELD_SUFFIX,
    node::{Index, TableDef},
    validator::Validator,
};
use std::collections::BTreeMap;

///
/// JunctionPlan
/// Naming decided for one many-to-many pair before the table is built.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct JunctionPlan {
    pub(super) name: String,
    pub(super) forward_field: String,
    pub(super) inverse_field: String,
}

impl JunctionPlan {
    /// Plan the junction table for `edge` on `table` targeting `target`.
    ///
    /// Self-referential pairs whose inverse is named after the table
    /// collapse to `{inverse}_to_{edge}` regardless of which side is seen
    /// first; an edge with no inverse gets generic `aId`/`bId` keys.
    pub(super) fn new(table: &str, target: &str, edge: &str, inverse: Option<&str>) -> Self {
        let name = match inverse {
            None => format!("{table}_{edge}"),
            Some(inverse) if inverse != table => format!("{table}_{inverse}_to_{edge}"),
            Some(inverse) => format!("{inverse}_to_{edge}"),
        };

        let (forward_field, inverse_field) = match inverse {
            None => ("aId".to_string(), "bId".to_string()),
            Some(inverse) if table == target => (id_field(inverse), id_field(edge)),
            Some(_) => (id_field(table), id_field(target)),
        };

        Self {
            name,
            forward_field,
            inverse_field,
        }
    }

    /// Build the junction table: both keys, each leading one index that
    /// carries the partner key as secondary sort.
    pub(super) fn build(&self, table: &str, target: &str) -> TableDef {
        let forward = &self.forward_field;
        let inverse = &self.inverse_field;

        TableDef {
            fields: BTreeMap::from([
                (forward.clone(), Validator::id(table)),
                (inverse.clone(), Validator::id(target)),
            ]),
            indexes: vec![
                Index::new(forward.clone(), [forward.clone(), inverse.clone()]),
                Index::new(inverse.clone(), [inverse.clone(), forward.clone()]),
            ],
            ..TableDef::default()
        }
    }
}

fn id_field(name: &str) -> String {
    format!("{name}{ID_FIELD_SUFFIX}")
}
