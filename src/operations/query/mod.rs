mod face_boundary;
mod is_valid;
mod open_edges;

pub use face_boundary::FaceBoundary;
pub use is_valid::{IsValid, Violation};
pub use open_edges::OpenEdges;
