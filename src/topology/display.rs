use std::fmt;

use crate::math::Point2;

use super::face::{FaceData, FaceId};
use super::half_edge::HalfEdgeId;
use super::vertex::{VertexData, VertexId};

fn write_key<K: fmt::Debug>(f: &mut fmt::Formatter<'_>, key: Option<K>) -> fmt::Result {
    match key {
        Some(key) => write!(f, "{key:?}"),
        None => f.write_str("-"),
    }
}

/// Debug rendering of a vertex: key, coordinates and bound half-edge.
pub struct VertexDisplay<'a, V> {
    pub(super) id: VertexId,
    pub(super) vertex: &'a VertexData<V>,
}

impl<V> fmt::Display for VertexDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Vertex {:?}; X,Y: {},{}; Edge: ",
            self.id,
            self.vertex.x(),
            self.vertex.y()
        )?;
        write_key(f, self.vertex.half_edge())?;
        f.write_str("}")
    }
}

/// Debug rendering of a face: caller id and key.
pub struct FaceDisplay<'a, F> {
    pub(super) id: FaceId,
    pub(super) face: &'a FaceData<F>,
}

impl<F> fmt::Display for FaceDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Face #{} {:?}}}", self.face.id, self.id)
    }
}

/// Debug rendering of a half-edge: key, target coordinates and twin.
pub struct HalfEdgeDisplay {
    pub(super) id: HalfEdgeId,
    pub(super) target: Option<Point2>,
    pub(super) twin: Option<HalfEdgeId>,
}

impl fmt::Display for HalfEdgeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Edge {:?}; Target: ", self.id)?;
        match self.target {
            Some(p) => write!(f, "{},{}", p.x, p.y)?,
            None => f.write_str("-")?,
        }
        f.write_str("; Twin: ")?;
        write_key(f, self.twin)?;
        f.write_str("}")
    }
}
