//! Global edge resolution.
//!
//! Runs once over the complete table set: pairs every edge with its inverse,
//! decides whether the relation lives in a foreign-key field or a junction
//! table, and injects synthesized junction tables.
//!
//! Invariants:
//! - An edge has at most one inverse; more than one eligible candidate fails.
//! - Each pair is resolved from one side; the partner is written in the same
//!   step and skipped on its own turn.
//! - Resolving an already-resolved table set changes nothing.

mod graph;
mod junction;


use crate::{
    error::SchemaError,
    node::{EdgeKind, JunctionRef, TableDef},
};
use graph::EdgeGraph;
use junction::JunctionPlan;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Resolve every edge in `tables` in place.
///
/// Edges whose target table is not declared are left as declared. On error
/// the table set is left partially resolved and must be discarded.
pub fn resolve_edges(tables: &mut BTreeMap<String, TableDef>) -> Result<(), SchemaError> {
    let mut resolver = Resolver {
        graph: EdgeGraph::take_from(tables),
        tables,
        junctions: BTreeMap::new(),
        claims: BTreeMap::new(),
    };
    resolver.seed_claims();

    let result = (0..resolver.graph.len()).try_for_each(|id| resolver.resolve(id));

    let Resolver {
        graph,
        tables,
        junctions,
        ..
    } = resolver;
    graph.restore_into(tables);
    result?;

    for (name, table) in junctions {
        tables.insert(name, table);
    }

    Ok(())
}

///
/// Resolver
///

struct Resolver<'a> {
    graph: EdgeGraph,
    tables: &'a mut BTreeMap<String, TableDef>,
    junctions: BTreeMap<String, TableDef>,

    /// (target table, foreign-key field) -> many-to-one edge collapsed onto it
    claims: BTreeMap<(String, String), String>,
}

impl Resolver<'_> {
    // seed_claims
    // record collapses made by an earlier pass so reruns see them
    fn seed_claims(&mut self) {
        for id in 0..self.graph.len() {
            let slot = self.graph.slot(id);
            if let EdgeKind::MultipleField { ref_field } = &slot.edge.kind {
                self.claims.insert(
                    (slot.edge.to.clone(), ref_field.clone()),
                    slot.edge.name.clone(),
                );
            }
        }
    }

    fn is_known_table(&self, name: &str) -> bool {
        self.tables.contains_key(name) || self.junctions.contains_key(name)
    }

    fn resolve(&mut self, id: usize) -> Result<(), SchemaError> {
        let slot = self.graph.slot(id);
        if !self.is_known_table(&slot.edge.to) {
            debug!(
                table = %slot.table,
                edge = %slot.edge.name,
                target = %slot.edge.to,
                "edge target is not a declared table; leaving edge as declared"
            );
            return Ok(());
        }

        let candidates = self.graph.inverse_candidates(id);
        if candidates.len() > 1 {
            return Err(SchemaError::AmbiguousInverseEdge {
                table: slot.table.clone(),
                edge: slot.edge.name.clone(),
                candidates: candidates
                    .iter()
                    .map(|&c| self.graph.slot(c).edge.name.clone())
                    .collect(),
            });
        }
        let inverse = candidates.first().copied();

        let single_ref = matches!(slot.edge.kind, EdgeKind::SingleRef { .. });
        if single_ref {
            return self.resolve_single_ref(id, inverse);
        }
        if slot.edge.is_unresolved() {
            return self.resolve_multiple(id, inverse);
        }

        trace!(table = %slot.table, edge = %slot.edge.name, "edge needs no resolution");
        Ok(())
    }

    // resolve_single_ref
    // an optional single edge reads the key stored by a required single edge
    fn resolve_single_ref(&mut self, id: usize, inverse: Option<usize>) -> Result<(), SchemaError> {
        let origin = self.graph.slot(id);
        let EdgeKind::SingleRef { ref_field } = &origin.edge.kind else {
            return Ok(());
        };

        let Some(inverse_id) = inverse else {
            return Err(SchemaError::InvalidInverseEdgeType {
                table: origin.table.clone(),
                edge: origin.edge.name.clone(),
                target: origin.edge.to.clone(),
                inverse: None,
            });
        };
        let other = self.graph.slot(inverse_id);

        let field = match &other.edge.kind {
            EdgeKind::SingleField { field, .. } => field.clone(),
            EdgeKind::SingleRef { .. } => {
                return Err(SchemaError::ConflictingOptionalEdges {
                    table: origin.table.clone(),
                    edge: origin.edge.name.clone(),
                    other_table: other.table.clone(),
                    other_edge: other.edge.name.clone(),
                });
            }
            _ => {
                return Err(SchemaError::InvalidInverseEdgeType {
                    table: origin.table.clone(),
                    edge: origin.edge.name.clone(),
                    target: origin.edge.to.clone(),
                    inverse: Some(other.edge.name.clone()),
                });
            }
        };

        if let Some(ref_field) = ref_field
            && *ref_field != field
        {
            return Err(SchemaError::RefFieldMismatch {
                table: origin.table.clone(),
                edge: origin.edge.name.clone(),
                ref_field: ref_field.clone(),
                inverse_table: other.table.clone(),
                inverse_edge: other.edge.name.clone(),
                inverse_field: field,
            });
        }

        debug!(
            table = %origin.table,
            edge = %origin.edge.name,
            inverse_table = %other.table,
            inverse_edge = %other.edge.name,
            field = %field,
            "resolved one-to-one edge"
        );

        self.graph.edge_mut(id).kind = EdgeKind::SingleRef {
            ref_field: Some(field),
        };
        if let EdgeKind::SingleField { unique, .. } = &mut self.graph.edge_mut(inverse_id).kind {
            *unique = true;
        }

        Ok(())
    }

    // resolve_multiple
    fn resolve_multiple(&mut self, id: usize, inverse: Option<usize>) -> Result<(), SchemaError> {
        let origin = self.graph.slot(id);
        let self_directed = origin.edge.to == origin.table;

        match inverse {
            Some(inverse_id) if self.graph.slot(inverse_id).edge.cardinality().is_single() => {
                self.collapse_many_to_one(id, inverse_id)
            }
            Some(inverse_id) => {
                if let EdgeKind::MultipleRef(junction) = &self.graph.slot(inverse_id).edge.kind {
                    let mirrored = mirror(junction, self.graph.slot(id).edge.inverse_of().is_some());
                    self.graph.edge_mut(id).kind = EdgeKind::MultipleRef(mirrored);
                    return Ok(());
                }
                self.synthesize_junction(id, Some(inverse_id))
            }
            None if self_directed => self.synthesize_junction(id, None),
            None => {
                debug!(
                    table = %origin.table,
                    edge = %origin.edge.name,
                    target = %origin.edge.to,
                    "no inverse edge found; leaving edge unresolved"
                );
                Ok(())
            }
        }
    }

    // collapse_many_to_one
    // the `multiple` side reads the foreign key stored by its single inverse
    fn collapse_many_to_one(&mut self, id: usize, inverse_id: usize) -> Result<(), SchemaError> {
        let origin = self.graph.slot(id);
        let other = self.graph.slot(inverse_id);

        let field = match &other.edge.kind {
            EdgeKind::SingleField { field, .. } => field.clone(),
            _ => {
                return Err(SchemaError::InvalidManyToOneInverse {
                    table: origin.table.clone(),
                    edge: origin.edge.name.clone(),
                    inverse_table: other.table.clone(),
                    inverse_edge: other.edge.name.clone(),
                });
            }
        };

        let claim = (other.table.clone(), field.clone());
        if let Some(existing) = self.claims.get(&claim)
            && *existing != origin.edge.name
        {
            return Err(SchemaError::ManyToOneFieldConflict {
                table: origin.table.clone(),
                target: other.table.clone(),
                field,
                edges: vec![existing.clone(), origin.edge.name.clone()],
            });
        }

        debug!(
            table = %origin.table,
            edge = %origin.edge.name,
            inverse_table = %other.table,
            inverse_edge = %other.edge.name,
            field = %field,
            "resolved many-to-one edge"
        );
        self.claims.insert(claim, origin.edge.name.clone());
        self.graph.edge_mut(id).kind = EdgeKind::MultipleField { ref_field: field };

        Ok(())
    }

    // synthesize_junction
    fn synthesize_junction(&mut self, id: usize, inverse: Option<usize>) -> Result<(), SchemaError> {
        let origin = self.graph.slot(id);
        let inverse_name = inverse.map(|inverse_id| self.graph.slot(inverse_id).edge.name.as_str());
        let plan = JunctionPlan::new(&origin.table, &origin.edge.to, &origin.edge.name, inverse_name);

        if self.is_known_table(&plan.name) {
            return Err(SchemaError::JunctionTableConflict {
                table: origin.table.clone(),
                edge: origin.edge.name.clone(),
                junction: plan.name,
            });
        }

        debug!(
            table = %origin.table,
            edge = %origin.edge.name,
            inverse_edge = inverse_name.unwrap_or_default(),
            junction = %plan.name,
            "synthesized junction table"
        );

        let junction_table = plan.build(&origin.table, &origin.edge.to);
        let designated = origin.edge.inverse_of().is_some();
        self.junctions.insert(plan.name.clone(), junction_table);

        let forward = JunctionRef {
            table: plan.name.clone(),
            field: plan.forward_field.clone(),
            ref_field: plan.inverse_field.clone(),
            symmetric: inverse.is_none(),
            inverse: designated,
        };

        if let Some(inverse_id) = inverse {
            let partner = self.graph.edge_mut(inverse_id);
            let partner_designated = partner.inverse_of().is_some();
            partner.kind = EdgeKind::MultipleRef(mirror(&forward, partner_designated));
        }
        self.graph.edge_mut(id).kind = EdgeKind::MultipleRef(forward);

        Ok(())
    }
}

// mirror
// the partner's view of a junction: same table, key roles swapped
fn mirror(junction: &JunctionRef, inverse: bool) -> JunctionRef {
    JunctionRef {
        table: junction.table.clone(),
        field: junction.ref_field.clone(),
        ref_field: junction.field.clone(),
        symmetric: false,
        inverse,
    }
}
