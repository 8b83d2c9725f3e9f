use std::fmt;

use crate::grids::wall_grid::WallGrid;
use crate::grids::Coords;

const CORNER: char = '+';
const WALL_H: &str = "---";
const WALL_V: char = '|';
const OPEN_H: &str = "   ";
const OPEN_V: char = ' ';

/// Draws the maze as text, `S` marks the entrance and `E` the exit.
pub fn render(grid: &WallGrid) -> String {
    render_with_path(grid, &[])
}

/// Same as [`render`], with `.` on every plain tile of `path`.
pub fn render_with_path(grid: &WallGrid, path: &[Coords]) -> String {
    let mut on_path = vec![false; grid.len()];
    for &(row, col) in path {
        if grid.contains(row, col) {
            on_path[grid.index_of(row, col)] = true;
        }
    }

    let mut out = String::with_capacity((grid.columns() * 4 + 2) * (grid.rows() * 2 + 1));

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            out.push(CORNER);
            out.push_str(if grid.tile(row, col).top_wall() {
                WALL_H
            } else {
                OPEN_H
            });
        }
        out.push(CORNER);
        out.push('\n');

        for col in 0..grid.columns() {
            let tile = grid.tile(row, col);
            out.push(if tile.left_wall() { WALL_V } else { OPEN_V });
            out.push_str(if tile.is_start() {
                " S "
            } else if tile.is_end() {
                " E "
            } else if on_path[grid.index_of(row, col)] {
                " . "
            } else {
                "   "
            });
        }
        let last = grid.tile(row, grid.columns() - 1);
        out.push(if last.right_wall() { WALL_V } else { OPEN_V });
        out.push('\n');
    }

    let bottom = grid.rows() - 1;
    for col in 0..grid.columns() {
        out.push(CORNER);
        out.push_str(if grid.tile(bottom, col).bottom_wall() {
            WALL_H
        } else {
            OPEN_H
        });
    }
    out.push(CORNER);
    out.push('\n');

    out
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
