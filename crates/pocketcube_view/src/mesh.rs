use pocketcube_core::{CUBIE_COLOR_COUNT, EngineError, EngineResult, Face, Rgb, facelet_rgb};

/// One cell of the unfolded mesh: a sticker's fixed grid position and its
/// current display color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshCell {
    /// Grid row, counted from the top.
    pub row: usize,
    /// Grid column, counted from the left.
    pub col: usize,
    /// Current display color.
    pub color: Rgb,
}

/// Unfolded-cross presentation of the cube's 24 stickers.
///
/// Cells sit at fixed positions in a grid of [`FaceletMesh::GRID_COLS`]
/// columns by [`FaceletMesh::GRID_ROWS`] rows: the up face on top, the
/// left/front/right/back band across the middle, and the down face on the
/// bottom. Cell `i` always shows byte `i` of the engine's color snapshot, so
/// face `i / 4` with the face's four stickers row-major.
///
/// The cell array is built once; refreshing only overwrites colors.
#[derive(Debug)]
pub struct FaceletMesh {
    cells: [MeshCell; CUBIE_COLOR_COUNT],
}

impl FaceletMesh {
    /// Number of rows in the unfolded grid.
    pub const GRID_ROWS: usize = 6;
    /// Number of columns in the unfolded grid.
    pub const GRID_COLS: usize = 8;

    /// Constructs the mesh with every cell in place and colored black.
    pub fn new() -> Self {
        let mut cells = [MeshCell {
            row: 0,
            col: 0,
            color: Rgb::BLACK,
        }; CUBIE_COLOR_COUNT];
        let faces = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];
        for (f, &face) in faces.iter().enumerate() {
            let (row, col) = face_origin(face);
            for quadrant in 0..4 {
                cells[f * 4 + quadrant].row = row + quadrant / 2;
                cells[f * 4 + quadrant].col = col + quadrant % 2;
            }
        }
        Self { cells }
    }

    /// Returns all 24 cells, in snapshot order.
    pub fn cells(&self) -> &[MeshCell] {
        &self.cells
    }

    /// Overwrites every cell's color from a 24-byte engine color snapshot.
    pub fn refresh(&mut self, colors: &[u8]) -> EngineResult {
        if colors.len() != CUBIE_COLOR_COUNT {
            return Err(EngineError::BufferSizeMismatch {
                expected: CUBIE_COLOR_COUNT,
                actual: colors.len(),
            });
        }
        for (cell, &byte) in self.cells.iter_mut().zip(colors) {
            cell.color = facelet_rgb(byte);
        }
        Ok(())
    }
}

impl Default for FaceletMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the `(row, col)` of a face's top-left cell in the unfolded grid.
fn face_origin(face: Face) -> (usize, usize) {
    match face {
        Face::U => (0, 2),
        Face::L => (2, 0),
        Face::F => (2, 2),
        Face::R => (2, 4),
        Face::B => (2, 6),
        Face::D => (4, 2),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_cell_positions() {
        let mesh = FaceletMesh::new();
        assert_eq!(CUBIE_COLOR_COUNT, mesh.cells().len());

        // Every cell is inside the grid, and no two cells collide.
        let mut seen = HashSet::new();
        for cell in mesh.cells() {
            assert!(cell.row < FaceletMesh::GRID_ROWS);
            assert!(cell.col < FaceletMesh::GRID_COLS);
            assert!(seen.insert((cell.row, cell.col)));
        }

        // Each face occupies a 2×2 block at its unfolded-cross origin.
        let origins = [(0, 2), (2, 0), (2, 2), (2, 4), (2, 6), (4, 2)];
        for (f, &(row, col)) in origins.iter().enumerate() {
            let block: Vec<(usize, usize)> =
                mesh.cells()[f * 4..f * 4 + 4].iter().map(|c| (c.row, c.col)).collect();
            let expected = [
                (row, col),
                (row, col + 1),
                (row + 1, col),
                (row + 1, col + 1),
            ];
            assert_eq!(expected.to_vec(), block, "face {f}");
        }
    }

    #[test]
    fn test_refresh_maps_bytes_to_cells() {
        let mut mesh = FaceletMesh::new();
        let snapshot: Vec<u8> = (0..CUBIE_COLOR_COUNT as u8).map(|i| i % 6).collect();
        mesh.refresh(&snapshot).unwrap();
        for (cell, &byte) in mesh.cells().iter().zip(&snapshot) {
            assert_eq!(facelet_rgb(byte), cell.color);
        }
    }

    #[test]
    fn test_refresh_uniform_snapshot() {
        let mut mesh = FaceletMesh::new();
        mesh.refresh(&[3; 24]).unwrap();
        for cell in mesh.cells() {
            assert_eq!("#ff0000", cell.color.to_string());
        }
    }

    #[test]
    fn test_refresh_rejects_wrong_length() {
        let mut mesh = FaceletMesh::new();
        for len in [0, 23, 25, 48] {
            assert_eq!(
                Err(EngineError::BufferSizeMismatch {
                    expected: 24,
                    actual: len,
                }),
                mesh.refresh(&vec![0; len]),
            );
        }
        // A failed refresh leaves the cells untouched.
        assert!(mesh.cells().iter().all(|c| c.color == Rgb::BLACK));
    }
}
