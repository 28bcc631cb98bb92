use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the DCEL.
    pub struct FaceId;
}

/// Data associated with a face.
///
/// A face is a region of the plane. It keeps one half-edge of its boundary
/// cycle as an entry point; that half-edge's face is this face.
#[derive(Debug, Clone)]
pub struct FaceData<F = ()> {
    pub(super) half_edge: Option<HalfEdgeId>,
    /// Caller-assigned identifier, zero unless set. Unrelated to the [`FaceId`] key
    /// and not checked for uniqueness.
    pub id: i64,
    /// Caller annotation; never interpreted by the DCEL.
    pub data: F,
}

impl<F> FaceData<F> {
    pub(super) fn new(id: i64, data: F) -> Self {
        Self {
            half_edge: None,
            id,
            data,
        }
    }

    /// Some half-edge on the boundary, `None` until the first one is created.
    #[must_use]
    pub fn half_edge(&self) -> Option<HalfEdgeId> {
        self.half_edge
    }
}
