use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use symptom_core::{FormViewModel, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Maps a key press to a form message. Disabled controls swallow their keys.
pub fn map_key(key: KeyEvent, view: &FormViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Enter if view.submit_enabled => KeyAction::Dispatch(Msg::SubmitRequested),
        KeyCode::Backspace if view.input_enabled => {
            let mut text = view.input.clone();
            if text.pop().is_some() {
                KeyAction::Dispatch(Msg::InputChanged(text))
            } else {
                KeyAction::Ignore
            }
        }
        KeyCode::Char(ch) if view.input_enabled && !ctrl => {
            let mut text = view.input.clone();
            text.push(ch);
            KeyAction::Dispatch(Msg::InputChanged(text))
        }
        _ => KeyAction::Ignore,
    }
}
