//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::games::tictactoe::Position;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Clear the board, keep the score.
    NewGame,
    /// Zero the score and history.
    ResetScores,
    /// Show or hide the recent games panel.
    ToggleHistory,
    /// Leave the app.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Cursor(KeyCode::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Cursor(KeyCode::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Cursor(KeyCode::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Cursor(KeyCode::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Action::Play(Position::from_index(digit - 1)?)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Action::NewGame,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::ResetScores,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::ToggleHistory,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::at(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_select_cells() {
        assert_eq!(
            action_for(press(KeyCode::Char('1'))),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('9'))),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(action_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn vim_keys_move_cursor() {
        assert_eq!(
            action_for(press(KeyCode::Char('j'))),
            Some(Action::Cursor(KeyCode::Down))
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(Action::Quit));
    }

    #[test]
    fn cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Right),
            Position::MiddleRight
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, KeyCode::Right),
            Position::MiddleRight
        );
    }
}
