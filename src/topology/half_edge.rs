use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the DCEL.
    pub struct HalfEdgeId;
}

/// Data associated with a half-edge.
///
/// Two twinned half-edges make up one undirected edge. Each one points at a
/// target vertex and bounds one face. `next` and `prev` walk the boundary of
/// that face and are only ever set explicitly by the caller.
#[derive(Debug, Clone)]
pub struct HalfEdgeData<H = ()> {
    pub(super) target: Option<VertexId>,
    pub(super) face: FaceId,
    pub(super) twin: Option<HalfEdgeId>,
    pub(super) next: Option<HalfEdgeId>,
    pub(super) prev: Option<HalfEdgeId>,
    /// Caller annotation; never interpreted by the DCEL.
    pub data: H,
}

impl<H> HalfEdgeData<H> {
    pub(super) fn new(face: FaceId, target: Option<VertexId>, data: H) -> Self {
        Self {
            target,
            face,
            twin: None,
            next: None,
            prev: None,
            data,
        }
    }

    /// The vertex this half-edge points to. `None` for a twin whose endpoint
    /// has not been determined yet.
    #[must_use]
    pub fn target(&self) -> Option<VertexId> {
        self.target
    }

    /// The face this half-edge bounds.
    #[must_use]
    pub fn face(&self) -> FaceId {
        self.face
    }

    #[must_use]
    pub fn twin(&self) -> Option<HalfEdgeId> {
        self.twin
    }

    #[must_use]
    pub fn next(&self) -> Option<HalfEdgeId> {
        self.next
    }

    #[must_use]
    pub fn prev(&self) -> Option<HalfEdgeId> {
        self.prev
    }
}
