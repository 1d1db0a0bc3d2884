//! Event handler for the Purrfect Saver window
//!
//! Routes keyboard and mouse events to the form.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases as well
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.next_focus(),
        KeyCode::Enter => app.submit(),
        _ => match app.focus {
            Focus::Amount => handle_amount_key(app, key),
            Focus::SaveButton => {
                if key.code == KeyCode::Char(' ') {
                    app.submit();
                }
            }
        },
    }
}

fn handle_amount_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.amount.insert(c),
        KeyCode::Backspace => app.amount.backspace(),
        KeyCode::Delete => app.amount.delete(),
        KeyCode::Left => app.amount.move_left(),
        KeyCode::Right => app.amount.move_right(),
        KeyCode::Home => app.amount.move_start(),
        KeyCode::End => app.amount.move_end(),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if hits(app.button_area, mouse.column, mouse.row) {
        app.focus = Focus::SaveButton;
        app.submit();
    } else if hits(app.amount_area, mouse.column, mouse.row) {
        app.focus = Focus::Amount;
    }
}

fn hits(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|a| {
        column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
    })
}
