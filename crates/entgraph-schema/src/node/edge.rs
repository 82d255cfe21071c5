use crate::types::{Cardinality, EdgeType};
use serde::{Serialize, Serializer, ser::SerializeMap};

///
/// EdgeDef
/// One declared edge on a table. `kind` starts partially specified and is
/// completed by the resolver.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeDef {
    pub name: String,
    pub to: String,
    pub kind: EdgeKind,
}

impl EdgeDef {
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.kind.cardinality()
    }

    /// Storage strategy, or `None` while a `multiple` edge is unresolved.
    #[must_use]
    pub const fn edge_type(&self) -> Option<EdgeType> {
        self.kind.edge_type()
    }

    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(self.kind, EdgeKind::MultipleUnresolved { .. })
    }

    /// Name of the edge this one was declared as the inverse of, if it is
    /// still unresolved.
    #[must_use]
    pub fn inverse_of(&self) -> Option<&str> {
        match &self.kind {
            EdgeKind::MultipleUnresolved { inverse_of } => inverse_of.as_deref(),
            _ => None,
        }
    }

    /// Foreign-key field owned by this edge (`single` + `field` only).
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match &self.kind {
            EdgeKind::SingleField { field, .. } => Some(field),
            _ => None,
        }
    }
}

///
/// EdgeKind
///
/// The four resolved shapes plus the pending `multiple` state.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EdgeKind {
    /// This table stores the foreign key in `field`.
    SingleField { field: String, unique: bool },

    /// The other table stores the key in `ref_field`; `None` until resolved.
    SingleRef { ref_field: Option<String> },

    /// Declared by `edges()`; storage decided by the resolver.
    MultipleUnresolved { inverse_of: Option<String> },

    /// Many-to-one collapse onto the other side's `ref_field`.
    MultipleField { ref_field: String },

    /// Stored as rows in a junction table.
    MultipleRef(JunctionRef),
}

impl EdgeKind {
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        match self {
            Self::SingleField { .. } | Self::SingleRef { .. } => Cardinality::Single,
            Self::MultipleUnresolved { .. } | Self::MultipleField { .. } | Self::MultipleRef(_) => {
                Cardinality::Multiple
            }
        }
    }

    #[must_use]
    pub const fn edge_type(&self) -> Option<EdgeType> {
        match self {
            Self::SingleField { .. } | Self::MultipleField { .. } => Some(EdgeType::Field),
            Self::SingleRef { .. } | Self::MultipleRef(_) => Some(EdgeType::Ref),
            Self::MultipleUnresolved { .. } => None,
        }
    }
}

///
/// JunctionRef
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JunctionRef {
    pub table: String,
    /// This side's key field in the junction table.
    pub field: String,
    /// The partner's key field in the junction table.
    pub ref_field: String,
    pub symmetric: bool,
    pub inverse: bool,
}

impl Serialize for EdgeDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("to", &self.to)?;
        map.serialize_entry("cardinality", &self.cardinality())?;
        map.serialize_entry("type", &self.edge_type())?;

        match &self.kind {
            EdgeKind::SingleField { field, unique } => {
                map.serialize_entry("field", field)?;
                map.serialize_entry("unique", unique)?;
            }
            EdgeKind::SingleRef { ref_field } => {
                map.serialize_entry("ref", ref_field)?;
            }
            EdgeKind::MultipleUnresolved { inverse_of } => {
                if inverse_of.is_some() {
                    map.serialize_entry("inverse", &true)?;
                }
            }
            EdgeKind::MultipleField { ref_field } => {
                map.serialize_entry("ref", ref_field)?;
            }
            EdgeKind::MultipleRef(junction) => {
                map.serialize_entry("table", &junction.table)?;
                map.serialize_entry("field", &junction.field)?;
                map.serialize_entry("ref", &junction.ref_field)?;
                map.serialize_entry("inverse", &junction.inverse)?;
                map.serialize_entry("symmetric", &junction.symmetric)?;
            }
        }

        map.end()
    }
}
