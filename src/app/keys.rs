//! Keyboard mapping.
//!
//! | Mode         | Keys                                                        |
//! |--------------|-------------------------------------------------------------|
//! | notice shown | `Enter`/`Esc` dismiss                                       |
//! | normal       | `n` new quote, `a` add, `e` export, `i` import, `q` hide    |
//! | form         | type, `Tab` switch field, `Enter` add, `Esc` back           |
//! | import path  | type, `Enter` import, `Esc` cancel                          |

use super::handler::Event;
use super::modes::InputMode;
use super::AppState;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event, or `None` if the key means nothing right now.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, mode = ?state.input_mode, "key event");

    if state.notice().is_some() {
        return match key.bare_key {
            BareKey::Enter | BareKey::Esc => Some(Event::DismissNotice),
            _ => None,
        };
    }

    let typed = match key.bare_key {
        BareKey::Char(c) if !is_chord(key) => Some(c),
        _ => None,
    };

    if state.input_mode.is_text_entry() {
        return match key.bare_key {
            BareKey::Enter => Some(Event::Submit),
            BareKey::Esc => Some(Event::Escape),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Tab if state.input_mode == InputMode::Form => Some(Event::Tab),
            _ => typed.map(Event::Char),
        };
    }

    match typed? {
        'n' => Some(Event::ShowNewQuote),
        'a' => Some(Event::FocusForm),
        'e' => Some(Event::Export),
        'i' => Some(Event::FocusImport),
        'q' => Some(Event::CloseFocus),
        _ => None,
    }
}

/// Ctrl and Alt combinations are never text.
fn is_chord(key: &KeyWithModifier) -> bool {
    [KeyModifier::Ctrl, KeyModifier::Alt]
        .iter()
        .any(|m| key.key_modifiers.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notice::Notice;
    use crate::app::picker::Picker;
    use crate::storage::{MemoryStore, QuoteStore, SessionCache};
    use crate::ui::theme::Theme;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::new(
            QuoteStore::new(Box::new(MemoryStore::new())),
            SessionCache::new(Box::new(MemoryStore::new())),
            Picker::seeded(0),
            Theme::default(),
            PathBuf::from("/host"),
        )
    }

    fn key(bare_key: BareKey) -> KeyWithModifier {
        KeyWithModifier {
            bare_key,
            key_modifiers: BTreeSet::new(),
        }
    }

    fn ctrl(c: char) -> KeyWithModifier {
        KeyWithModifier {
            bare_key: BareKey::Char(c),
            key_modifiers: BTreeSet::from([KeyModifier::Ctrl]),
        }
    }

    #[test]
    fn normal_mode_commands() {
        let state = state();
        assert_eq!(map_key(&state, &key(BareKey::Char('n'))), Some(Event::ShowNewQuote));
        assert_eq!(map_key(&state, &key(BareKey::Char('a'))), Some(Event::FocusForm));
        assert_eq!(map_key(&state, &key(BareKey::Char('e'))), Some(Event::Export));
        assert_eq!(map_key(&state, &key(BareKey::Char('i'))), Some(Event::FocusImport));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::CloseFocus));
        assert_eq!(map_key(&state, &key(BareKey::Char('z'))), None);
        assert_eq!(map_key(&state, &key(BareKey::Enter)), None);
    }

    #[test]
    fn command_letters_are_text_in_the_form() {
        let mut state = state();
        state.input_mode = InputMode::Form;

        assert_eq!(map_key(&state, &key(BareKey::Char('n'))), Some(Event::Char('n')));
        assert_eq!(map_key(&state, &key(BareKey::Tab)), Some(Event::Tab));
        assert_eq!(map_key(&state, &key(BareKey::Enter)), Some(Event::Submit));
        assert_eq!(map_key(&state, &key(BareKey::Esc)), Some(Event::Escape));
        assert_eq!(map_key(&state, &ctrl('c')), None);
    }

    #[test]
    fn tab_does_nothing_in_the_import_prompt() {
        let mut state = state();
        state.input_mode = InputMode::ImportPath;

        assert_eq!(map_key(&state, &key(BareKey::Tab)), None);
        assert_eq!(map_key(&state, &key(BareKey::Char('/'))), Some(Event::Char('/')));
    }

    #[test]
    fn notice_captures_the_keyboard() {
        let mut state = state();
        state.notify(Notice::info("hi"));

        assert_eq!(map_key(&state, &key(BareKey::Char('n'))), None);
        assert_eq!(map_key(&state, &key(BareKey::Esc)), Some(Event::DismissNotice));
        assert_eq!(map_key(&state, &key(BareKey::Enter)), Some(Event::DismissNotice));
    }
}
