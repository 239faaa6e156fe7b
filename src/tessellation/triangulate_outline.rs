use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{Result, TessellationError};
use crate::joint::PlateOutline;
use crate::math::polygon_2d::{dedup_closed_2d, is_simple_2d};
use crate::math::Point2;

use super::{TessellateOutline, TessellationParams, TriangleMesh};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Fills a plate outline with triangles, for renderers that fill meshes.
///
/// Arcs are flattened first, then the boundary is inserted as a constraint
/// loop of a constrained Delaunay triangulation and the interior faces are
/// kept.
pub struct TriangulateOutline<'a> {
    outline: &'a PlateOutline,
    params: TessellationParams,
}

impl<'a> TriangulateOutline<'a> {
    /// Creates a new `TriangulateOutline` operation.
    #[must_use]
    pub fn new(outline: &'a PlateOutline, params: TessellationParams) -> Self {
        Self { outline, params }
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// - `TessellationError::InvalidParameters` if the parameters are unusable
    /// - `TessellationError::Failed` if the flattened outline is degenerate or
    ///   self-intersecting, or the triangulation rejects a vertex
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let polyline = TessellateOutline::new(self.outline, self.params).execute()?;
        let boundary = dedup_closed_2d(&polyline.points);
        if !is_simple_2d(&boundary) {
            return Err(TessellationError::Failed(format!(
                "{} outline is degenerate or self-intersecting",
                self.outline.side()
            ))
            .into());
        }

        let mut cdt = Cdt::new();
        let loop_2d: Vec<_> = boundary
            .iter()
            .map(|p| SpadePoint2::new(p.x, p.y))
            .collect();
        insert_constraint_loop(&mut cdt, &loop_2d)?;

        let interior_faces = classify_interior_faces(&cdt);

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            if !interior_faces.contains(&face_handle.fix().index()) {
                continue;
            }

            let mut tri_indices = [0u32; 3];
            for (i, vh) in face_handle.vertices().iter().enumerate() {
                let idx = vh.fix().index();
                tri_indices[i] = *vertex_map.entry(idx).or_insert_with(|| {
                    let pos = vh.position();
                    mesh.vertices.push(Point2::new(pos.x, pos.y));
                    (mesh.vertices.len() - 1) as u32
                });
            }
            mesh.indices.push(tri_indices);
        }

        tracing::debug!(
            side = %self.outline.side(),
            boundary = boundary.len(),
            triangles = mesh.indices.len(),
            "triangulated outline"
        );
        Ok(mesh)
    }
}

/// Inserts a closed polygon as constraint edges into the CDT.
fn insert_constraint_loop(cdt: &mut Cdt, points: &[SpadePoint2<f64>]) -> Result<()> {
    if points.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut handles = Vec::with_capacity(points.len());
    for &pt in points {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    Ok(())
}

/// Classifies which inner faces of the CDT are inside the outline using
/// flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each
/// time a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
