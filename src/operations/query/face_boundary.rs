use crate::error::{Result, TopologyError};
use crate::topology::{Dcel, FaceId, HalfEdgeId};

/// Walks the boundary cycle of a face along `next` links.
pub struct FaceBoundary {
    face: FaceId,
}

impl FaceBoundary {
    /// Creates a new `FaceBoundary` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the walk, starting at the face's bound half-edge and
    /// returning the cycle in `next` order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is unknown or unbound, if a half-edge on
    /// the way has no `next`, bounds another face, or if the walk never gets
    /// back to its start.
    pub fn execute<V, F, H>(&self, dcel: &Dcel<V, F, H>) -> Result<Vec<HalfEdgeId>> {
        let start = dcel
            .face(self.face)?
            .half_edge()
            .ok_or(TopologyError::UnboundFace)?;

        let mut cycle = Vec::new();
        let mut current = start;
        loop {
            let he = dcel.half_edge(current)?;
            if he.face() != self.face {
                return Err(TopologyError::FaceMismatch.into());
            }
            cycle.push(current);

            let next = he.next().ok_or(TopologyError::MissingNext)?;
            if next == start {
                return Ok(cycle);
            }
            if cycle.len() >= dcel.num_half_edges() {
                return Err(TopologyError::BrokenCycle.into());
            }
            current = next;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DcelError;

    fn square(d: &mut Dcel) -> (FaceId, Vec<HalfEdgeId>) {
        let inner = d.create_face();
        let outer = d.create_face();
        let corners = [(0, 0), (2, 0), (2, 2), (0, 2)].map(|(x, y)| d.create_vertex(x, y));
        let mut inside = Vec::new();
        for i in 0..4 {
            let (he, twin) = d.create_edge(inner, outer, corners[(i + 1) % 4]).unwrap();
            d.set_target(twin, corners[i]).unwrap();
            inside.push(he);
        }
        (inner, inside)
    }

    #[test]
    fn walks_linked_square() {
        let mut d: Dcel = Dcel::new();
        let (inner, inside) = square(&mut d);
        for i in 0..4 {
            d.set_next(inside[i], inside[(i + 1) % 4]).unwrap();
        }
        assert_eq!(FaceBoundary::new(inner).execute(&d).unwrap(), inside);
    }

    #[test]
    fn missing_next_fails_at_the_gap() {
        let mut d: Dcel = Dcel::new();
        let (inner, inside) = square(&mut d);
        d.set_next(inside[0], inside[1]).unwrap();
        assert_eq!(
            FaceBoundary::new(inner).execute(&d),
            Err(DcelError::Topology(TopologyError::MissingNext))
        );
    }

    #[test]
    fn loop_that_skips_the_start_is_broken() {
        let mut d: Dcel = Dcel::new();
        let (inner, inside) = square(&mut d);
        d.set_next(inside[0], inside[1]).unwrap();
        d.set_next(inside[1], inside[2]).unwrap();
        d.set_next(inside[2], inside[1]).unwrap();
        assert_eq!(
            FaceBoundary::new(inner).execute(&d),
            Err(DcelError::Topology(TopologyError::BrokenCycle))
        );
    }

    #[test]
    fn unbound_face_is_rejected() {
        let mut d: Dcel = Dcel::new();
        let f = d.create_face();
        assert_eq!(
            FaceBoundary::new(f).execute(&d),
            Err(DcelError::Topology(TopologyError::UnboundFace))
        );
    }
}
