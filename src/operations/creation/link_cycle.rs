use std::collections::HashSet;

use tracing::trace;

use crate::error::{Result, TopologyError};
use crate::topology::{Dcel, HalfEdgeId};

/// Links half-edges of one face into a closed boundary cycle.
pub struct LinkCycle {
    half_edges: Vec<HalfEdgeId>,
}

impl LinkCycle {
    /// Creates a new `LinkCycle` operation. The half-edges are linked in the
    /// given order, and the last one back to the first.
    #[must_use]
    pub fn new(half_edges: Vec<HalfEdgeId>) -> Self {
        Self { half_edges }
    }

    /// Executes the operation, setting `next`/`prev` on every half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a half-edge is unknown or
    /// listed twice, or the half-edges do not all bound the same face. No
    /// link is changed then.
    pub fn execute<V, F, H>(&self, dcel: &mut Dcel<V, F, H>) -> Result<()> {
        let (&first, rest) = self
            .half_edges
            .split_first()
            .ok_or(TopologyError::EmptyCycle)?;
        let face = dcel.half_edge(first)?.face();
        for &he in rest {
            if dcel.half_edge(he)?.face() != face {
                return Err(TopologyError::FaceMismatch.into());
            }
        }
        let mut seen = HashSet::with_capacity(self.half_edges.len());
        if !self.half_edges.iter().all(|&he| seen.insert(he)) {
            return Err(TopologyError::RepeatedHalfEdge.into());
        }

        let following = self.half_edges.iter().skip(1).chain(std::iter::once(&first));
        for (&he, &next) in self.half_edges.iter().zip(following) {
            dcel.set_next(he, next)?;
        }
        trace!(?face, len = self.half_edges.len(), "linked boundary cycle");
        Ok(())
    }
}
