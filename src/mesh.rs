//! Minimal triangle-mesh text reader and wireframe rendering.
//!
//! Understands two directives, one per line:
//!
//! - `v x y z`: a vertex.
//! - `f a b c`: a triangle. Components may carry `/`-separated suffixes
//!   (`3/1/2`), only the leading vertex index is used.
//!
//! A line reading exactly `g 1` ends the model. Blank lines and any other
//! directives are ignored.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::pixel::Color;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<[f32; 3]>,
    /// Vertex references as written in the source; see [`Mesh::resolve_index`].
    pub faces: Vec<[i32; 3]>,
}

impl Mesh {
    pub fn parse(text: &str) -> Result<Self, RasterError> {
        let mut mesh = Self::default();
        for (n, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            if line == "g 1" {
                break;
            }
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("v") => mesh.vertices.push(parse_triple(parts, n + 1, |s| {
                    s.parse::<f32>().ok()
                })?),
                Some("f") => mesh.faces.push(parse_triple(parts, n + 1, |s| {
                    s.split('/').next().and_then(|i| i.parse::<i32>().ok())
                })?),
                _ => {}
            }
        }
        log::debug!(
            "mesh: {} vertices, {} faces",
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Zero-based vertex position for a face component.
    ///
    /// Positive values are 1-based; zero and negative values count back from
    /// the end (`count - |index|`). `None` when the result is out of range.
    pub fn resolve_index(&self, index: i32) -> Option<usize> {
        let count = self.vertices.len();
        let resolved = if index > 0 {
            index as usize - 1
        } else {
            count.checked_sub(index.unsigned_abs() as usize)?
        };
        (resolved < count).then_some(resolved)
    }

    /// Resolved vertices of face `face`.
    pub fn triangle(&self, face: usize) -> Result<[[f32; 3]; 3], RasterError> {
        let indices = self.faces.get(face).ok_or_else(|| RasterError::InvalidMesh {
            line: 0,
            reason: alloc::format!("no face {face}"),
        })?;
        let mut out = [[0f32; 3]; 3];
        for (slot, &index) in out.iter_mut().zip(indices) {
            let v = self
                .resolve_index(index)
                .ok_or_else(|| RasterError::InvalidMesh {
                    line: 0,
                    reason: alloc::format!(
                        "face {face} references vertex {index} of {}",
                        self.vertices.len()
                    ),
                })?;
            *slot = self.vertices[v];
        }
        Ok(out)
    }
}

fn parse_triple<'a, T: Copy + Default>(
    parts: impl Iterator<Item = &'a str>,
    line: usize,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<[T; 3], RasterError> {
    let mut out = [T::default(); 3];
    let mut count = 0;
    for part in parts {
        if count == 3 {
            return Err(RasterError::InvalidMesh {
                line,
                reason: "more than three components".to_string(),
            });
        }
        out[count] = parse(part).ok_or_else(|| RasterError::InvalidMesh {
            line,
            reason: alloc::format!("cannot parse {part:?}"),
        })?;
        count += 1;
    }
    if count < 3 {
        return Err(RasterError::InvalidMesh {
            line,
            reason: alloc::format!("expected three components, found {count}"),
        });
    }
    Ok(out)
}

/// Draw every face edge of `mesh` into `buffer`.
///
/// Vertices are projected orthographically from the `[-1, 1]` square:
/// `x = (vx + 1) * width / 2`, `y = (vy + 1) * height / 2`. Row 0 is
/// `vy = -1`, so flip the buffer vertically afterwards for a y-up image.
pub fn render_wireframe(
    buffer: &mut PixelBuffer,
    mesh: &Mesh,
    color: &Color,
) -> Result<(), RasterError> {
    buffer.check_color(color)?;
    let (w, h) = (f64::from(buffer.width()), f64::from(buffer.height()));
    let project = |v: [f32; 3]| {
        (
            ((f64::from(v[0]) + 1.0) * w / 2.0) as i32,
            ((f64::from(v[1]) + 1.0) * h / 2.0) as i32,
        )
    };
    for face in 0..mesh.faces.len() {
        let tri = mesh.triangle(face)?;
        for j in 0..3 {
            let (x0, y0) = project(tri[j]);
            let (x1, y1) = project(tri[(j + 1) % 3]);
            buffer.draw_line(x0, y0, x1, y1, color)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelLayout;

    const CUBE_CORNER: &str = "\
# comment
v 0.0 0.0 0.0
v 1.0 0.0 0.0

v 0.0 1.0 0.5
vt 0.5 0.5
f 1/1/1 2/2/2 3/3/3
f -1 -2 -3
g 1
v 9 9 9
f 1 1 1
";

    #[test]
    fn parses_vertices_and_faces() {
        let mesh = Mesh::parse(CUBE_CORNER).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.vertices[2], [0.0, 1.0, 0.5]);
        assert_eq!(mesh.faces, [[1, 2, 3], [-1, -2, -3]]);
    }

    #[test]
    fn resolves_positive_and_relative_indices() {
        let mesh = Mesh::parse(CUBE_CORNER).unwrap();
        assert_eq!(mesh.resolve_index(1), Some(0));
        assert_eq!(mesh.resolve_index(3), Some(2));
        assert_eq!(mesh.resolve_index(4), None);
        assert_eq!(mesh.resolve_index(-1), Some(2));
        assert_eq!(mesh.resolve_index(-3), Some(0));
        assert_eq!(mesh.resolve_index(-4), None);
        assert_eq!(mesh.resolve_index(0), None);
        assert_eq!(mesh.triangle(1).unwrap()[0], [0.0, 1.0, 0.5]);
    }

    #[test]
    fn malformed_lines_report_line_numbers() {
        let err = Mesh::parse("v 1 2 3\nv 1 two 3\n").unwrap_err();
        assert!(matches!(err, RasterError::InvalidMesh { line: 2, .. }));
        assert!(Mesh::parse("f 1 2\n").is_err());
        assert!(Mesh::parse("v 1 2 3 4\n").is_err());
    }

    #[test]
    fn wireframe_draws_triangle_edges() {
        let mesh = Mesh::parse("v -1 -1 0\nv 0.5 -1 0\nv -1 0.5 0\nf 1 2 3\n").unwrap();
        let mut buf = PixelBuffer::new(8, 8, PixelLayout::Gray8).unwrap();
        render_wireframe(&mut buf, &mesh, &Color::gray(255)).unwrap();
        // Corners at (0,0), (6,0) and (0,6).
        for (x, y) in [(0, 0), (3, 0), (6, 0), (0, 3), (0, 6), (3, 3)] {
            assert_eq!(buf.get(x, y), Color::gray(255), "({x},{y})");
        }
        assert_eq!(buf.get(5, 5), Color::gray(0));
    }

    #[test]
    fn wireframe_tolerates_far_away_vertices() {
        let mesh = Mesh::parse("v -1 -1 0\nv 1e30 -1 0\nv -1 -1e30 0\nf 1 2 3\n").unwrap();
        let mut buf = PixelBuffer::new(4, 4, PixelLayout::Gray8).unwrap();
        render_wireframe(&mut buf, &mesh, &Color::gray(9)).unwrap();
        assert_eq!(buf.get(0, 0), Color::gray(9));
        assert_eq!(buf.get(3, 0), Color::gray(9));
    }

    #[test]
    fn wireframe_rejects_dangling_faces() {
        let mesh = Mesh::parse("v 0 0 0\nf 1 2 3\n").unwrap();
        let mut buf = PixelBuffer::new(4, 4, PixelLayout::Gray8).unwrap();
        assert!(matches!(
            render_wireframe(&mut buf, &mesh, &Color::gray(1)),
            Err(RasterError::InvalidMesh { .. })
        ));
    }
}
