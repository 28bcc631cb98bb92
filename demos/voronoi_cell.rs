//! Builds two unit cells sharing a wall, the way a sweep would hand them
//! over, and logs the result.
//!
//! Run with `RUST_LOG=trace` to see every mint and link.

use dcel::operations::creation::LinkCycle;
use dcel::operations::query::{FaceBoundary, IsValid, OpenEdges};
use dcel::{Dcel, FaceId, HalfEdgeId, Result, VertexId};
use tracing_subscriber::EnvFilter;

/// Creates an edge from `from` to `to` with `left` on its own side.
fn wall(
    d: &mut Dcel<(), &'static str>,
    left: FaceId,
    right: FaceId,
    from: VertexId,
    to: VertexId,
) -> Result<(HalfEdgeId, HalfEdgeId)> {
    let (he, twin) = d.create_edge(left, right, to)?;
    d.set_target(twin, from)?;
    Ok((he, twin))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut d: Dcel<(), &'static str> = Dcel::new();
    let outside = d.create_face_with(0, "outside");
    let west = d.create_face_with(1, "west");
    let east = d.create_face_with(2, "east");

    let p = [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)].map(|(x, y)| d.create_vertex(x, y));

    let (w0, o0) = wall(&mut d, west, outside, p[0], p[1])?;
    let (shared, e3) = wall(&mut d, west, east, p[1], p[4])?;
    let (w2, o2) = wall(&mut d, west, outside, p[4], p[5])?;
    let (w3, o3) = wall(&mut d, west, outside, p[5], p[0])?;
    let (e0, o4) = wall(&mut d, east, outside, p[1], p[2])?;
    let (e1, o5) = wall(&mut d, east, outside, p[2], p[3])?;
    let (e2, o6) = wall(&mut d, east, outside, p[3], p[4])?;

    LinkCycle::new(vec![w0, shared, w2, w3]).execute(&mut d)?;
    LinkCycle::new(vec![e0, e1, e2, e3]).execute(&mut d)?;
    LinkCycle::new(vec![o0, o3, o2, o6, o5, o4]).execute(&mut d)?;

    for (face, data) in d.faces() {
        println!("{} ({})", d.display_face(face)?, data.data);
        for he in FaceBoundary::new(face).execute(&d)? {
            println!("  {}", d.display_half_edge(he)?);
        }
    }
    for (vertex, _) in d.vertices() {
        println!("{}", d.display_vertex(vertex)?);
    }

    println!("open edges: {}", OpenEdges::new().execute(&d).len());
    println!("valid: {}", IsValid::new().execute(&d));
    Ok(())
}
