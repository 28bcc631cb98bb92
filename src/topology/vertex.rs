use crate::math::Point2;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the DCEL.
    pub struct VertexId;
}

/// Data associated with a vertex.
///
/// If `half_edge` is set, that half-edge targets this vertex.
#[derive(Debug, Clone)]
pub struct VertexData<V = ()> {
    point: Point2,
    pub(super) half_edge: Option<HalfEdgeId>,
    /// Caller annotation; never interpreted by the DCEL.
    pub data: V,
}

impl<V> VertexData<V> {
    pub(super) fn new(point: Point2, data: V) -> Self {
        Self {
            point,
            half_edge: None,
            data,
        }
    }

    /// The position of the vertex.
    #[must_use]
    pub fn point(&self) -> Point2 {
        self.point
    }

    #[must_use]
    pub fn x(&self) -> i64 {
        self.point.x
    }

    #[must_use]
    pub fn y(&self) -> i64 {
        self.point.y
    }

    /// Some half-edge targeting this vertex, `None` until the first one is created.
    #[must_use]
    pub fn half_edge(&self) -> Option<HalfEdgeId> {
        self.half_edge
    }
}
