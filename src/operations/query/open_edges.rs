use crate::topology::{Dcel, HalfEdgeId};

/// Lists half-edges whose edge is not closed yet: no twin, or a missing
/// target on either side.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenEdges;

impl OpenEdges {
    /// Creates a new `OpenEdges` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query. Half-edges come back in creation order, so both
    /// halves of an open pair are listed.
    #[must_use]
    pub fn execute<V, F, H>(&self, dcel: &Dcel<V, F, H>) -> Vec<HalfEdgeId> {
        dcel.half_edges()
            .map(|(id, _)| id)
            .filter(|&id| !matches!(dcel.is_closed(id), Ok(true)))
            .collect()
    }
}
