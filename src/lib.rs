pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{DcelError, Result, TopologyError};
pub use topology::{
    Dcel, DcelParams, FaceData, FaceId, HalfEdgeData, HalfEdgeId, VertexData, VertexId,
};
