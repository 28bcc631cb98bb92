mod display;
pub mod face;
pub mod half_edge;
pub mod vertex;

pub use display::{FaceDisplay, HalfEdgeDisplay, VertexDisplay};
pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use vertex::{VertexData, VertexId};

use crate::error::{Result, TopologyError};
use crate::math::Point2;
use slotmap::SlotMap;
use tracing::trace;

/// Initial arena sizes for a [`Dcel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DcelParams {
    /// Vertices to reserve room for.
    pub vertex_capacity: usize,
    /// Faces to reserve room for.
    pub face_capacity: usize,
    /// Half-edges to reserve room for.
    pub half_edge_capacity: usize,
}

/// Central arena that owns every vertex, face and half-edge of a planar
/// subdivision.
///
/// Entities reference each other via typed IDs, so the cyclic
/// vertex/half-edge/face graph needs no shared ownership. Nothing is ever
/// removed: each arena only grows, and iteration yields entities in creation
/// order.
///
/// Creating a half-edge binds it as the entry point of its face and target
/// vertex if they have none yet ("first touch"). `next`/`prev` links and
/// deferred twin targets are left to the caller.
///
/// Keys are not tied to the `Dcel` that minted them. A key from another
/// `Dcel` fails with `EntityNotFound` only when no live slot here has the
/// same index and version; otherwise it silently names that entity.
#[derive(Debug, Clone)]
pub struct Dcel<V = (), F = (), H = ()> {
    vertices: SlotMap<VertexId, VertexData<V>>,
    faces: SlotMap<FaceId, FaceData<F>>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData<H>>,
}

impl<V, F, H> Default for Dcel<V, F, H> {
    fn default() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            half_edges: SlotMap::with_key(),
        }
    }
}

impl<V, F, H> Dcel<V, F, H> {
    /// Creates a new, empty DCEL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty DCEL with pre-sized arenas.
    #[must_use]
    pub fn with_params(params: DcelParams) -> Self {
        Self {
            vertices: SlotMap::with_capacity_and_key(params.vertex_capacity),
            faces: SlotMap::with_capacity_and_key(params.face_capacity),
            half_edges: SlotMap::with_capacity_and_key(params.half_edge_capacity),
        }
    }

    // --- Counts and enumeration ---

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    /// All vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData<V>)> + '_ {
        self.vertices.iter()
    }

    /// All faces in creation order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceData<F>)> + '_ {
        self.faces.iter()
    }

    /// All half-edges in creation order.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdgeData<H>)> + '_ {
        self.half_edges.iter()
    }

    // --- Accessors ---

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the DCEL.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData<V>> {
        Ok(self
            .vertices
            .get(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))?)
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    /// Only the annotation is writable through it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the DCEL.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData<V>> {
        Ok(self
            .vertices
            .get_mut(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))?)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the DCEL.
    pub fn face(&self, id: FaceId) -> Result<&FaceData<F>> {
        Ok(self
            .faces
            .get(id)
            .ok_or(TopologyError::EntityNotFound("face"))?)
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    /// The caller id and annotation are writable through it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the DCEL.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData<F>> {
        Ok(self
            .faces
            .get_mut(id)
            .ok_or(TopologyError::EntityNotFound("face"))?)
    }

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the DCEL.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData<H>> {
        Ok(self
            .half_edges
            .get(id)
            .ok_or(TopologyError::EntityNotFound("half-edge"))?)
    }

    /// Returns a mutable reference to the half-edge data, or an error if not found.
    /// Only the annotation is writable through it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the DCEL.
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> Result<&mut HalfEdgeData<H>> {
        Ok(self
            .half_edges
            .get_mut(id)
            .ok_or(TopologyError::EntityNotFound("half-edge"))?)
    }

    // --- Creation ---

    /// Creates a face with a zero caller id and a default annotation.
    pub fn create_face(&mut self) -> FaceId
    where
        F: Default,
    {
        self.create_face_with(0, F::default())
    }

    /// Creates a face with the given caller id and annotation.
    pub fn create_face_with(&mut self, id: i64, data: F) -> FaceId {
        let face = self.faces.insert(FaceData::new(id, data));
        trace!(?face, id, "created face");
        face
    }

    /// Creates an isolated vertex at `(x, y)` with a default annotation.
    pub fn create_vertex(&mut self, x: i64, y: i64) -> VertexId
    where
        V: Default,
    {
        self.create_vertex_with(x, y, V::default())
    }

    /// Creates an isolated vertex at `(x, y)` carrying `data`.
    pub fn create_vertex_with(&mut self, x: i64, y: i64, data: V) -> VertexId {
        let vertex = self.vertices.insert(VertexData::new(Point2::new(x, y), data));
        trace!(?vertex, x, y, "created vertex");
        vertex
    }

    /// Creates a half-edge bounding `face` and targeting `vertex`.
    ///
    /// # Errors
    ///
    /// Returns an error if `face` or `vertex` is not in the DCEL. Nothing is
    /// created in that case.
    pub fn create_half_edge(&mut self, face: FaceId, vertex: VertexId) -> Result<HalfEdgeId>
    where
        H: Default,
    {
        self.create_half_edge_with(face, vertex, H::default())
    }

    /// Creates a half-edge bounding `face` and targeting `vertex`, carrying `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if `face` or `vertex` is not in the DCEL. Nothing is
    /// created in that case.
    pub fn create_half_edge_with(
        &mut self,
        face: FaceId,
        vertex: VertexId,
        data: H,
    ) -> Result<HalfEdgeId> {
        self.face(face)?;
        self.vertex(vertex)?;

        let half_edge = self
            .half_edges
            .insert(HalfEdgeData::new(face, Some(vertex), data));
        self.bind_face(face, half_edge);
        self.bind_vertex(vertex, half_edge);
        trace!(?half_edge, ?face, ?vertex, "created half-edge");
        Ok(half_edge)
    }

    /// Creates a twinned pair of half-edges. The primary bounds `face1` and
    /// targets `vertex`; the twin bounds `face2` and gets its target later
    /// via [`Dcel::set_target`].
    ///
    /// Returns `(primary, twin)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a face or the vertex is not in the DCEL. Nothing
    /// is created in that case.
    pub fn create_edge(
        &mut self,
        face1: FaceId,
        face2: FaceId,
        vertex: VertexId,
    ) -> Result<(HalfEdgeId, HalfEdgeId)>
    where
        H: Default,
    {
        self.create_edge_with(face1, face2, vertex, H::default(), H::default())
    }

    /// Like [`Dcel::create_edge`], with explicit annotations for the primary
    /// and the twin.
    ///
    /// # Errors
    ///
    /// Returns an error if a face or the vertex is not in the DCEL. Nothing
    /// is created in that case.
    pub fn create_edge_with(
        &mut self,
        face1: FaceId,
        face2: FaceId,
        vertex: VertexId,
        primary_data: H,
        twin_data: H,
    ) -> Result<(HalfEdgeId, HalfEdgeId)> {
        self.face(face2)?;
        let primary = self.create_half_edge_with(face1, vertex, primary_data)?;

        let twin = self
            .half_edges
            .insert(HalfEdgeData::new(face2, None, twin_data));
        self.link_twins(primary, twin);
        self.bind_face(face2, twin);
        trace!(?primary, ?twin, ?face1, ?face2, "created edge");
        Ok((primary, twin))
    }

    // --- Linking ---

    /// Sets the target of a half-edge whose target is still open, and binds
    /// `vertex` to it if the vertex has no half-edge yet.
    ///
    /// # Errors
    ///
    /// Returns an error if either entity is not found, or if the half-edge
    /// already has a target.
    pub fn set_target(&mut self, half_edge: HalfEdgeId, vertex: VertexId) -> Result<()> {
        self.vertex(vertex)?;
        let he = self.half_edge_mut(half_edge)?;
        if he.target.is_some() {
            return Err(TopologyError::TargetAlreadySet.into());
        }
        he.target = Some(vertex);
        self.bind_vertex(vertex, half_edge);
        trace!(?half_edge, ?vertex, "set target");
        Ok(())
    }

    /// Makes `a` and `b` twins of each other. Previous twins of `a` or `b`
    /// are not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if either half-edge is not found or if `a == b`.
    pub fn set_twin(&mut self, a: HalfEdgeId, b: HalfEdgeId) -> Result<()> {
        if a == b {
            return Err(TopologyError::SelfTwin.into());
        }
        self.half_edge(a)?;
        self.half_edge(b)?;
        self.link_twins(a, b);
        trace!(?a, ?b, "set twin");
        Ok(())
    }

    /// Sets `half_edge.next = next` and `next.prev = half_edge`. A previous
    /// `next` of `half_edge` keeps its `prev` pointing back here; [`IsValid`]
    /// reports such stale links.
    ///
    /// [`IsValid`]: crate::operations::query::IsValid
    ///
    /// # Errors
    ///
    /// Returns an error if either half-edge is not found or if they bound
    /// different faces.
    pub fn set_next(&mut self, half_edge: HalfEdgeId, next: HalfEdgeId) -> Result<()> {
        if self.half_edge(half_edge)?.face != self.half_edge(next)?.face {
            return Err(TopologyError::FaceMismatch.into());
        }
        self.half_edges[half_edge].next = Some(next);
        self.half_edges[next].prev = Some(half_edge);
        trace!(?half_edge, ?next, "set next");
        Ok(())
    }

    /// Sets `half_edge.prev = prev` and `prev.next = half_edge`.
    ///
    /// # Errors
    ///
    /// Returns an error if either half-edge is not found or if they bound
    /// different faces.
    pub fn set_prev(&mut self, half_edge: HalfEdgeId, prev: HalfEdgeId) -> Result<()> {
        self.set_next(prev, half_edge)
    }

    // --- Queries ---

    /// Whether both endpoints of the edge containing `half_edge` are known:
    /// the half-edge has a twin and both have targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is not found.
    pub fn is_closed(&self, half_edge: HalfEdgeId) -> Result<bool> {
        let he = self.half_edge(half_edge)?;
        let Some(twin) = he.twin else {
            return Ok(false);
        };
        Ok(he.target.is_some() && self.half_edge(twin)?.target.is_some())
    }

    /// The vertex a half-edge leaves from, i.e. its twin's target.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its twin is not found.
    pub fn origin(&self, half_edge: HalfEdgeId) -> Result<Option<VertexId>> {
        match self.half_edge(half_edge)?.twin {
            Some(twin) => Ok(self.half_edge(twin)?.target),
            None => Ok(None),
        }
    }

    // --- Rendering ---

    /// Returns a human-readable view of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn display_vertex(&self, id: VertexId) -> Result<VertexDisplay<'_, V>> {
        Ok(VertexDisplay {
            id,
            vertex: self.vertex(id)?,
        })
    }

    /// Returns a human-readable view of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn display_face(&self, id: FaceId) -> Result<FaceDisplay<'_, F>> {
        Ok(FaceDisplay {
            id,
            face: self.face(id)?,
        })
    }

    /// Returns a human-readable view of a half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its target is not found.
    pub fn display_half_edge(&self, id: HalfEdgeId) -> Result<HalfEdgeDisplay> {
        let he = self.half_edge(id)?;
        let target = match he.target {
            Some(v) => Some(self.vertex(v)?.point()),
            None => None,
        };
        Ok(HalfEdgeDisplay {
            id,
            target,
            twin: he.twin,
        })
    }

    // --- Internal helpers ---

    fn link_twins(&mut self, a: HalfEdgeId, b: HalfEdgeId) {
        self.half_edges[a].twin = Some(b);
        self.half_edges[b].twin = Some(a);
    }

    fn bind_face(&mut self, face: FaceId, half_edge: HalfEdgeId) {
        if let Some(f) = self.faces.get_mut(face) {
            if f.half_edge.is_none() {
                f.half_edge = Some(half_edge);
            }
        }
    }

    fn bind_vertex(&mut self, vertex: VertexId, half_edge: HalfEdgeId) {
        if let Some(v) = self.vertices.get_mut(vertex) {
            if v.half_edge.is_none() {
                v.half_edge = Some(half_edge);
            }
        }
    }
}
