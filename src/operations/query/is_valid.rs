use thiserror::Error;
use tracing::debug;

use crate::topology::{Dcel, FaceId, HalfEdgeId, VertexId};

/// A broken linking invariant found by [`IsValid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("vertex {vertex:?} is bound to {half_edge:?}, which does not target it")]
    VertexBinding {
        vertex: VertexId,
        half_edge: HalfEdgeId,
    },

    #[error("face {face:?} is bound to {half_edge:?}, which does not bound it")]
    FaceBinding { face: FaceId, half_edge: HalfEdgeId },

    #[error("{half_edge:?} refers to a missing {entity}")]
    Dangling {
        half_edge: HalfEdgeId,
        entity: &'static str,
    },

    #[error("twin of {half_edge:?} is {twin:?}, whose twin is not {half_edge:?}")]
    AsymmetricTwin {
        half_edge: HalfEdgeId,
        twin: HalfEdgeId,
    },

    #[error("next of {half_edge:?} is {next:?}, whose prev is not {half_edge:?}")]
    AsymmetricNext {
        half_edge: HalfEdgeId,
        next: HalfEdgeId,
    },

    #[error("prev of {half_edge:?} is {prev:?}, whose next is not {half_edge:?}")]
    AsymmetricPrev {
        half_edge: HalfEdgeId,
        prev: HalfEdgeId,
    },

    #[error("next of {half_edge:?} is {next:?}, which bounds another face")]
    NextCrossesFace {
        half_edge: HalfEdgeId,
        next: HalfEdgeId,
    },
}

/// Checks the linking invariants of a whole DCEL.
///
/// Open edges (twin without a target) are legal during construction and are
/// not reported; use [`super::OpenEdges`] for those.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsValid;

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation, returning `true` if no invariant is broken.
    #[must_use]
    pub fn execute<V, F, H>(&self, dcel: &Dcel<V, F, H>) -> bool {
        self.violations(dcel).is_empty()
    }

    /// Lists every broken invariant, vertices first, then faces, then half-edges.
    #[must_use]
    pub fn violations<V, F, H>(&self, dcel: &Dcel<V, F, H>) -> Vec<Violation> {
        let mut found = Vec::new();

        for (vertex, data) in dcel.vertices() {
            if let Some(half_edge) = data.half_edge() {
                let targets_vertex = dcel
                    .half_edge(half_edge)
                    .is_ok_and(|he| he.target() == Some(vertex));
                if !targets_vertex {
                    found.push(Violation::VertexBinding { vertex, half_edge });
                }
            }
        }

        for (face, data) in dcel.faces() {
            if let Some(half_edge) = data.half_edge() {
                let bounds_face = dcel.half_edge(half_edge).is_ok_and(|he| he.face() == face);
                if !bounds_face {
                    found.push(Violation::FaceBinding { face, half_edge });
                }
            }
        }

        for (half_edge, he) in dcel.half_edges() {
            if dcel.face(he.face()).is_err() {
                found.push(Violation::Dangling {
                    half_edge,
                    entity: "face",
                });
            }
            if he.target().is_some_and(|v| dcel.vertex(v).is_err()) {
                found.push(Violation::Dangling {
                    half_edge,
                    entity: "vertex",
                });
            }

            if let Some(twin) = he.twin() {
                match dcel.half_edge(twin) {
                    Ok(t) if t.twin() == Some(half_edge) && twin != half_edge => {}
                    Ok(_) => found.push(Violation::AsymmetricTwin { half_edge, twin }),
                    Err(_) => found.push(Violation::Dangling {
                        half_edge,
                        entity: "twin",
                    }),
                }
            }

            if let Some(next) = he.next() {
                match dcel.half_edge(next) {
                    Ok(n) => {
                        if n.prev() != Some(half_edge) {
                            found.push(Violation::AsymmetricNext { half_edge, next });
                        }
                        if n.face() != he.face() {
                            found.push(Violation::NextCrossesFace { half_edge, next });
                        }
                    }
                    Err(_) => found.push(Violation::Dangling {
                        half_edge,
                        entity: "next",
                    }),
                }
            }

            if let Some(prev) = he.prev() {
                match dcel.half_edge(prev) {
                    Ok(p) if p.next() == Some(half_edge) => {}
                    Ok(_) => found.push(Violation::AsymmetricPrev { half_edge, prev }),
                    Err(_) => found.push(Violation::Dangling {
                        half_edge,
                        entity: "prev",
                    }),
                }
            }
        }

        debug!(
            vertices = dcel.num_vertices(),
            faces = dcel.num_faces(),
            half_edges = dcel.num_half_edges(),
            violations = found.len(),
            "validated dcel"
        );
        found
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::LinkCycle;

    #[test]
    fn empty_dcel_is_valid() {
        let d: Dcel = Dcel::new();
        assert!(IsValid::new().execute(&d));
    }

    #[test]
    fn open_edges_are_not_violations() {
        let mut d: Dcel = Dcel::new();
        let f1 = d.create_face();
        let f2 = d.create_face();
        let v = d.create_vertex(0, 0);
        d.create_edge(f1, f2, v).unwrap();
        assert!(IsValid::new().violations(&d).is_empty());
    }

    #[test]
    fn linked_triangle_is_valid() {
        let mut d: Dcel = Dcel::new();
        let inner = d.create_face();
        let outer = d.create_face();
        let vs = [
            d.create_vertex(0, 0),
            d.create_vertex(4, 0),
            d.create_vertex(0, 4),
        ];
        let mut inside = Vec::new();
        for i in 0..3 {
            let (he, twin) = d.create_edge(inner, outer, vs[(i + 1) % 3]).unwrap();
            d.set_target(twin, vs[i]).unwrap();
            inside.push(he);
        }
        LinkCycle::new(inside).execute(&mut d).unwrap();
        assert!(IsValid::new().execute(&d));
    }

    #[test]
    fn one_sided_twin_is_reported() {
        let mut d: Dcel = Dcel::new();
        let f = d.create_face();
        let v = d.create_vertex(0, 0);
        let a = d.create_half_edge(f, v).unwrap();
        let b = d.create_half_edge(f, v).unwrap();
        let c = d.create_half_edge(f, v).unwrap();
        d.set_twin(a, b).unwrap();
        // Rewiring `b` leaves `a` pointing at it one-sidedly.
        d.set_twin(b, c).unwrap();

        assert_eq!(
            IsValid::new().violations(&d),
            vec![Violation::AsymmetricTwin { half_edge: a, twin: b }]
        );
    }

    #[test]
    fn stale_next_is_reported() {
        let mut d: Dcel = Dcel::new();
        let f = d.create_face();
        let v = d.create_vertex(0, 0);
        let a = d.create_half_edge(f, v).unwrap();
        let b = d.create_half_edge(f, v).unwrap();
        let c = d.create_half_edge(f, v).unwrap();
        d.set_next(a, b).unwrap();
        d.set_next(c, b).unwrap();

        let violations = IsValid::new().violations(&d);
        assert_eq!(
            violations,
            vec![Violation::AsymmetricNext { half_edge: a, next: b }]
        );
        assert!(violations[0].to_string().starts_with("next of"));
    }
}
