use crate::node::{EdgeDef, TableDef};
use std::{collections::BTreeMap, ops::Range};

///
/// EdgeSlot
/// One edge lifted out of its table for the duration of resolution.
///

#[derive(Debug)]
pub(super) struct EdgeSlot {
    pub(super) table: String,
    pub(super) edge: EdgeDef,
}

///
/// EdgeGraph
///
/// Flat view of every declared edge, in table order then declaration order.
/// Each table's edges occupy one contiguous range, so lookups by
/// (table, edge name) never touch another table's declaration.
///

#[derive(Debug)]
pub(super) struct EdgeGraph {
    slots: Vec<EdgeSlot>,
    ranges: BTreeMap<String, Range<usize>>,
}

impl EdgeGraph {
    /// Move every table's edges into the graph.
    pub(super) fn take_from(tables: &mut BTreeMap<String, TableDef>) -> Self {
        let mut slots = Vec::new();
        let mut ranges = BTreeMap::new();

        for (name, table) in tables.iter_mut() {
            let start = slots.len();
            slots.extend(table.edges.drain(..).map(|edge| EdgeSlot {
                table: name.clone(),
                edge,
            }));
            ranges.insert(name.clone(), start..slots.len());
        }

        Self { slots, ranges }
    }

    /// Return every edge to its table, preserving declaration order.
    pub(super) fn restore_into(self, tables: &mut BTreeMap<String, TableDef>) {
        for slot in self.slots {
            if let Some(table) = tables.get_mut(&slot.table) {
                table.edges.push(slot.edge);
            }
        }
    }

    pub(super) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(super) fn slot(&self, id: usize) -> &EdgeSlot {
        &self.slots[id]
    }

    pub(super) fn edge_mut(&mut self, id: usize) -> &mut EdgeDef {
        &mut self.slots[id].edge
    }

    /// Slot ids of the edges declared on `table`.
    pub(super) fn table_ids(&self, table: &str) -> Range<usize> {
        self.ranges.get(table).cloned().unwrap_or(0..0)
    }

    #[cfg(test)]
    pub(super) fn find(&self, table: &str, edge: &str) -> Option<usize> {
        self.table_ids(table)
            .find(|&id| self.slots[id].edge.name == edge)
    }

    /// Eligible inverse edges for the edge at `id`.
    ///
    /// A candidate lives on the target table, points back at the origin
    /// table, and has a different name. For self-directed edges only the
    /// unresolved edge forming the designated pair qualifies.
    pub(super) fn inverse_candidates(&self, id: usize) -> Vec<usize> {
        let origin = &self.slots[id];
        let self_directed = origin.edge.to == origin.table;

        self.table_ids(&origin.edge.to)
            .filter(|&candidate_id| {
                let candidate = &self.slots[candidate_id].edge;

                candidate.to == origin.table
                    && candidate.name != origin.edge.name
                    && (!self_directed
                        || (candidate.is_unresolved()
                            && is_designated_pair(&origin.edge, candidate)))
            })
            .collect()
    }
}

// is_designated_pair
// true when one edge was declared as the inverse of the other
fn is_designated_pair(a: &EdgeDef, b: &EdgeDef) -> bool {
    b.inverse_of() == Some(a.name.as_str()) || a.inverse_of() == Some(b.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{EdgesOptions, TableBuilder};

    fn tables() -> BTreeMap<String, TableDef> {
        BTreeMap::from([
            (
                "users".to_string(),
                TableBuilder::new()
                    .edges("messages")
                    .edges_with("followers", EdgesOptions::to("users").with_inverse("followees"))
                    .edges_with("friends", EdgesOptions::to("users"))
                    .finish("users")
                    .unwrap(),
            ),
            (
                "messages".to_string(),
                TableBuilder::new().edge("user").finish("messages").unwrap(),
            ),
        ])
    }

    #[test]
    fn take_and_restore_preserves_declaration_order() {
        let mut tables = tables();
        let before = tables.clone();

        let graph = EdgeGraph::take_from(&mut tables);
        assert_eq!(graph.len(), 5);
        assert!(tables.values().all(|table| table.edges.is_empty()));

        graph.restore_into(&mut tables);
        assert_eq!(tables, before);
    }

    #[test]
    fn cross_table_candidates_point_back_at_origin() {
        let mut tables = tables();
        let graph = EdgeGraph::take_from(&mut tables);

        let messages = graph.find("users", "messages").unwrap();
        let user = graph.find("messages", "user").unwrap();
        assert_eq!(graph.inverse_candidates(messages), vec![user]);
        assert_eq!(graph.inverse_candidates(user), vec![messages]);
    }

    #[test]
    fn self_directed_candidates_are_limited_to_designated_pair() {
        let mut tables = tables();
        let graph = EdgeGraph::take_from(&mut tables);

        let followers = graph.find("users", "followers").unwrap();
        let followees = graph.find("users", "followees").unwrap();
        let friends = graph.find("users", "friends").unwrap();

        assert_eq!(graph.inverse_candidates(followers), vec![followees]);
        assert_eq!(graph.inverse_candidates(followees), vec![followers]);
        assert!(graph.inverse_candidates(friends).is_empty());
    }
}
