//! Shared utilities for k-in-a-row game implementations
//!
//! Both rule engines detect wins by counting runs of identical marks along
//! the four line axes of a grid. The scanning lives here so the variants only
//! decide *where* to scan from.

use crate::board_game::{Grid, Player};

/// The four line axes as (row step, col step): horizontal, vertical, and the
/// two diagonals. Each axis appears once, pointing "forward".
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Count consecutive cells holding `player`, starting one step past
/// (row, col) and walking along (dr, dc). Stops once `limit` is reached.
#[inline]
pub fn count_direction(
    grid: &Grid,
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
    player: Player,
    limit: usize,
) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row as isize + dr, col as isize + dc);
    while count < limit && grid.contains(r, c) && grid.get(r as usize, c as usize) == Some(player) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the run that starts at (row, col) and extends forward along
/// `dir`, counting the starting cell itself. Zero if the start is empty.
///
/// # Example
/// ```
/// use engine_core::{Grid, Player};
/// use engine_core::game_utils::run_from;
///
/// let mut grid = Grid::new(3, 3);
/// grid.set(0, 0, Player::One);
/// grid.set(0, 1, Player::One);
/// assert_eq!(run_from(&grid, 0, 0, (0, 1), 3), 2);
/// ```
pub fn run_from(grid: &Grid, row: usize, col: usize, dir: (isize, isize), limit: usize) -> usize {
    match grid.get(row, col) {
        Some(player) => 1 + count_direction(grid, row, col, dir, player, limit.saturating_sub(1)),
        None => 0,
    }
}

/// Length of the line through (row, col) along the axis `dir`, counting both
/// directions plus the cell itself. Zero if the cell is empty.
pub fn line_through(grid: &Grid, row: usize, col: usize, dir: (isize, isize)) -> usize {
    let Some(player) = grid.get(row, col) else {
        return 0;
    };
    let limit = grid.rows().max(grid.cols());
    let forward = count_direction(grid, row, col, dir, player, limit);
    let backward = count_direction(grid, row, col, (-dir.0, -dir.1), player, limit);
    forward + backward + 1
}

/// Scan the whole board: every marked cell, each forward axis. Returns the
/// mark of the first run reaching `win_length`.
pub fn find_line(grid: &Grid, win_length: usize) -> Option<Player> {
    grid.iter_marks().find_map(|(row, col, player)| {
        LINE_DIRECTIONS
            .iter()
            .any(|&dir| run_from(grid, row, col, dir, win_length) >= win_length)
            .then_some(player)
    })
}

/// Whether the mark at (row, col) completes a line of `win_length` on any
/// axis. Only looks at lines through that cell.
pub fn completes_line(grid: &Grid, row: usize, col: usize, win_length: usize) -> bool {
    LINE_DIRECTIONS
        .iter()
        .any(|&dir| line_through(grid, row, col, dir) >= win_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    'X' => grid.set(r, c, Player::One),
                    'O' => grid.set(r, c, Player::Two),
                    _ => {}
                }
            }
        }
        grid
    }

    #[test]
    fn test_run_from_counts_start_cell() {
        let grid = grid_from(&["XXX.", "....", "....", "...."]);
        assert_eq!(run_from(&grid, 0, 0, (0, 1), 4), 3);
        assert_eq!(run_from(&grid, 0, 1, (0, 1), 4), 2);
        assert_eq!(run_from(&grid, 0, 3, (0, 1), 4), 0);
    }

    #[test]
    fn test_run_from_respects_limit() {
        let grid = grid_from(&["XXXX"]);
        assert_eq!(run_from(&grid, 0, 0, (0, 1), 2), 2);
    }

    #[test]
    fn test_line_through_counts_both_ways() {
        let grid = grid_from(&["X...", ".X..", "..X.", "...."]);
        assert_eq!(line_through(&grid, 1, 1, (1, 1)), 3);
        assert_eq!(line_through(&grid, 1, 1, (0, 1)), 1);
        assert_eq!(line_through(&grid, 3, 3, (1, 1)), 0);
    }

    #[test]
    fn test_find_line_each_axis() {
        assert_eq!(find_line(&grid_from(&["OOO", "...", "..."]), 3), Some(Player::Two));
        assert_eq!(find_line(&grid_from(&["X..", "X..", "X.."]), 3), Some(Player::One));
        assert_eq!(find_line(&grid_from(&["X..", ".X.", "..X"]), 3), Some(Player::One));
        assert_eq!(find_line(&grid_from(&["..O", ".O.", "O.."]), 3), Some(Player::Two));
    }

    #[test]
    fn test_find_line_none() {
        assert_eq!(find_line(&grid_from(&["XOX", "XOO", "OXX"]), 3), None);
        assert_eq!(find_line(&grid_from(&["XX.", "...", "..."]), 3), None);
    }

    #[test]
    fn test_mixed_marks_break_run() {
        assert_eq!(find_line(&grid_from(&["XXOX"]), 3), None);
        assert!(!completes_line(&grid_from(&["XXOX"]), 0, 3, 3));
    }

    #[test]
    fn test_completes_line() {
        let grid = grid_from(&["....", ".XXX", "...."]);
        assert!(completes_line(&grid, 1, 2, 3));
        assert!(!completes_line(&grid, 1, 2, 4));
    }
}
