use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode, Screen};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.tick_animation(),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_chat_editing(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match app.screen {
        Screen::Home => handle_home_keys(app, key),
        Screen::Quiz => handle_quiz_keys(app, key),
        Screen::Chat => handle_chat_normal(app, key),
    }
}

fn handle_home_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Quiz state is created fresh on mode entry
        KeyCode::Char('p') | KeyCode::Char('1') => {
            app.quiz.reset();
            app.screen = Screen::Quiz;
        }

        KeyCode::Char('a') | KeyCode::Char('2') => {
            app.screen = Screen::Chat;
            app.input_mode = InputMode::Editing;
            app.chat_cursor = app.chat_input.chars().count();
        }

        _ => {}
    }
}

fn handle_quiz_keys(app: &mut App, key: KeyEvent) {
    if app.quiz.is_finished() {
        match key.code {
            KeyCode::Char('r') => app.quiz.reset(),
            KeyCode::Esc | KeyCode::Char('h') => app.screen = Screen::Home,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('h') => app.screen = Screen::Home,

        KeyCode::Char(c @ '1'..='9') => {
            // The engine ignores indices that name no option
            app.quiz.submit_answer(c as usize - '1' as usize);
        }

        // Advancing is gated on a selection here, not in the engine
        KeyCode::Enter | KeyCode::Char('n') => {
            if app.quiz.selected().is_some() {
                app.quiz.advance();
            }
        }

        KeyCode::Char('r') => app.quiz.reset(),

        _ => {}
    }
}

fn handle_chat_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') => app.screen = Screen::Home,

        KeyCode::Char('i') | KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
            app.chat_cursor = app.chat_input.chars().count();
        }

        // chat_scroll counts lines up from the bottom; render clamps it
        KeyCode::Char('j') | KeyCode::Down => {
            app.chat_scroll = app.chat_scroll.saturating_sub(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.chat_scroll = app.chat_scroll.saturating_add(1);
        }
        KeyCode::Char('G') => app.chat_scroll = 0,

        _ => {}
    }
}

fn handle_chat_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.submit_chat_message();
        }
        KeyCode::Backspace => {
            if app.chat_cursor > 0 {
                app.chat_cursor -= 1;
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            let char_count = app.chat_input.chars().count();
            if app.chat_cursor < char_count {
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Left => {
            app.chat_cursor = app.chat_cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let char_count = app.chat_input.chars().count();
            app.chat_cursor = (app.chat_cursor + 1).min(char_count);
        }
        KeyCode::Home => {
            app.chat_cursor = 0;
        }
        KeyCode::End => {
            app.chat_cursor = app.chat_input.chars().count();
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
            app.chat_input.insert(byte_pos, c);
            app.chat_cursor += 1;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_app() -> App {
        App::new(&Config::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn advance_key_is_ignored_until_an_answer_is_in() {
        let mut app = test_app();
        app.screen = Screen::Quiz;

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.quiz.current_index(), 0);

        press(&mut app, KeyCode::Char('2'));
        assert!(app.quiz.selected().is_some());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.quiz.current_index(), 1);
        assert_eq!(app.quiz.selected(), None);
    }

    #[test]
    fn option_keys_map_to_zero_based_indices() {
        let mut app = test_app();
        app.screen = Screen::Quiz;

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.quiz.selected(), Some(0));
    }

    #[test]
    fn editing_keeps_the_cursor_on_char_boundaries() {
        let mut app = test_app();
        app.screen = Screen::Chat;
        app.input_mode = InputMode::Editing;

        for c in "নামাজ".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.chat_input, "নাম");
        assert_eq!(app.chat_cursor, 3);

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.chat_input, "াম");
    }

    #[test]
    fn entering_quiz_from_home_starts_fresh() {
        let mut app = test_app();
        app.screen = Screen::Quiz;
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Home);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.quiz.current_index(), 0);
        assert_eq!(app.quiz.score(), 0);
    }
}
