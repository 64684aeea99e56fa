//! Keyboard mapping.

use crossterm::event::KeyCode;
use kavia_tictactoe::Position;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor one step.
    Cursor(Direction),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a specific cell.
    Play(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Cursor step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Row above.
    Up,
    /// Row below.
    Down,
    /// Column to the left.
    Left,
    /// Column to the right.
    Right,
}

/// Maps a key to an intent, `None` for keys the game ignores.
///
/// Digits 1-9 address cells in reading order, matching the numbers shown
/// on empty cells.
pub fn intent_for(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('r') => Some(Intent::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::PlayCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::Cursor(Direction::Right)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Intent::Play),
        _ => None,
    }
}

/// Moves the cursor one step, staying put at the grid edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(intent_for(KeyCode::Char('1')), Some(Intent::Play(Position::TopLeft)));
        assert_eq!(intent_for(KeyCode::Char('5')), Some(Intent::Play(Position::Center)));
        assert_eq!(intent_for(KeyCode::Char('9')), Some(Intent::Play(Position::BottomRight)));
        assert_eq!(intent_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(intent_for(KeyCode::Char('q')), Some(Intent::Quit));
        assert_eq!(intent_for(KeyCode::Esc), Some(Intent::Quit));
        assert_eq!(intent_for(KeyCode::Char('r')), Some(Intent::Restart));
        assert_eq!(intent_for(KeyCode::Enter), Some(Intent::PlayCursor));
        assert_eq!(intent_for(KeyCode::Char('x')), None);
    }
}
