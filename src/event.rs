//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;

/// Events sent to the main thread.
#[derive(Debug)]
pub enum TabelleEvent {
    Resize,
    KeyInput(KeyEvent),
    MouseInput(MouseEvent),
    Terminate,
}

/// Handle a [`MouseEvent`].
pub fn handle_mouse_event(event: MouseEvent, app: &mut App) {
    match event.kind {
        MouseEventKind::ScrollUp => app.handle_scroll_up(),
        MouseEventKind::ScrollDown => app.handle_scroll_down(),
        MouseEventKind::Down(button) => {
            let (x, y) = (event.column, event.row);
            if !app.app_config_fields.disable_click {
                if let crossterm::event::MouseButton::Left = button {
                    app.on_left_mouse_up(x, y);
                }
            }
        }
        _ => {}
    };
}

/// Handle a [`KeyEvent`]. Returns true if the app should exit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    if event.modifiers.is_empty() {
        match event.code {
            KeyCode::Char('q') => return true,
            KeyCode::End => app.skip_to_last(),
            KeyCode::Home => app.skip_to_first(),
            KeyCode::Up => app.on_up_key(),
            KeyCode::Down => app.on_down_key(),
            KeyCode::Left => app.on_left_key(),
            KeyCode::Right => app.on_right_key(),
            KeyCode::Char(caught_char) => app.on_char_key(caught_char),
            KeyCode::Esc => app.on_esc(),
            KeyCode::Tab => app.on_tab(),
            KeyCode::BackTab => app.on_back_tab(),
            KeyCode::F(5) => app.reload(),
            KeyCode::PageDown => app.on_page_down(),
            KeyCode::PageUp => app.on_page_up(),
            _ => {}
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        match event.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('r') => app.reload(),
            _ => {}
        }
    } else if let KeyModifiers::SHIFT = event.modifiers {
        match event.code {
            // Shift-tab arrives as a BackTab with the shift modifier set.
            KeyCode::BackTab => app.on_back_tab(),
            KeyCode::Char(caught_char) => app.on_char_key(caught_char),
            _ => {}
        }
    }

    false
}
