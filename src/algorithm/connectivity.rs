//! Breadth-first connectivity checking under 4-neighbor adjacency
//!
//! Determines whether a path of occupied cells joins two endpoints of a
//! grid. Traversal is level-synchronous: each round expands the whole
//! frontier before the next begins. Reached cells are tracked in a dense
//! bit mask keyed by flattened coordinate, so one check allocates two
//! buffers regardless of grid size.

use bitvec::bitvec;
use bitvec::vec::BitVec;

use crate::io::error::{PercolationError, Result};
use crate::spatial::Grid;

/// Von Neumann neighborhood: right, left, down, up. No diagonal moves.
const NEIGHBOR_OFFSETS: [[i32; 2]; 4] = [[0, 1], [0, -1], [1, 0], [-1, 0]];

/// Check whether the grid percolates corner to corner
///
/// Equivalent to [`is_connected_between`] with the top-left cell as source
/// and the bottom-right cell as target. The corners of a constructed grid
/// are always in bounds, so this form cannot fail.
pub fn is_connected(grid: &Grid) -> bool {
    breadth_first_reach(grid, grid.top_left(), grid.bottom_right())
}

/// Check whether a path of occupied cells connects `source` to `target`
///
/// Returns `false` immediately when the source cell is unoccupied; no
/// traversal is performed. With `source == target`, the answer is the
/// occupation state of that single cell.
///
/// # Errors
///
/// Returns [`PercolationError::CellOutOfBounds`] when either endpoint lies
/// outside the grid. Endpoints are never clamped.
pub fn is_connected_between(
    grid: &Grid,
    source: [usize; 2],
    target: [usize; 2],
) -> Result<bool> {
    for cell in [source, target] {
        if !grid.contains(cell) {
            return Err(PercolationError::CellOutOfBounds {
                cell,
                dimensions: grid.dimensions(),
            });
        }
    }

    Ok(breadth_first_reach(grid, source, target))
}

/// Level-synchronous breadth-first traversal over occupied cells
///
/// Both endpoints must already be bounds-checked. Each occupied cell enters
/// the frontier at most once, so the traversal is linear in cell count and
/// terminates once no new cells are discoverable. The target membership test
/// happens after the frontier empties, mirroring the run-to-exhaustion shape
/// of the estimator's per-trial check.
fn breadth_first_reach(grid: &Grid, source: [usize; 2], target: [usize; 2]) -> bool {
    if !grid.is_occupied(source) {
        return false;
    }

    let mut reached: BitVec = bitvec![0; grid.cell_count()];
    reached.set(grid.flat_index(source), true);

    let mut frontier = vec![source];

    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();

        for &cell in &frontier {
            for offset in NEIGHBOR_OFFSETS {
                let Some(neighbor) = offset_cell(cell, offset) else {
                    continue;
                };
                if !grid.contains(neighbor) {
                    continue;
                }

                let index = grid.flat_index(neighbor);
                if already_reached(&reached, index) || !grid.is_occupied(neighbor) {
                    continue;
                }

                reached.set(index, true);
                next_frontier.push(neighbor);
            }
        }

        frontier = next_frontier;
    }

    already_reached(&reached, grid.flat_index(target))
}

/// Apply a signed offset to an unsigned coordinate
///
/// `None` when the move would leave the coordinate space on the negative
/// side; positive overruns are caught by the grid bounds check instead.
fn offset_cell(cell: [usize; 2], offset: [i32; 2]) -> Option<[usize; 2]> {
    let row = cell[0].checked_add_signed(offset[0] as isize)?;
    let col = cell[1].checked_add_signed(offset[1] as isize)?;
    Some([row, col])
}

fn already_reached(reached: &BitVec, index: usize) -> bool {
    reached.get(index).is_some_and(|bit| *bit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_has_exactly_four_axis_moves() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), 4);
        for offset in NEIGHBOR_OFFSETS {
            assert_eq!(offset[0].abs() + offset[1].abs(), 1);
        }
    }

    #[test]
    fn offsets_from_origin_stay_in_unsigned_space_or_vanish() {
        assert_eq!(offset_cell([0, 0], [0, 1]), Some([0, 1]));
        assert_eq!(offset_cell([0, 0], [-1, 0]), None);
        assert_eq!(offset_cell([0, 0], [0, -1]), None);
        assert_eq!(offset_cell([3, 0], [-1, 0]), Some([2, 0]));
    }
}
