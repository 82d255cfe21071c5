use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Cardinality
/// How many documents an edge can relate to.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "camelCase")]
pub enum Cardinality {
    Multiple,
    Single,
}

impl Cardinality {
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::Single)
    }

    #[must_use]
    pub const fn is_multiple(self) -> bool {
        matches!(self, Self::Multiple)
    }
}

///
/// EdgeType
/// Storage strategy of a resolved edge.
///
/// `Field` means the declaring table holds the foreign key, `Ref` means the
/// key lives on the other side or in a junction table.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "camelCase")]
pub enum EdgeType {
    Field,
    Ref,
}
