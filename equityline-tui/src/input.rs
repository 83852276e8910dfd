//! Keyboard input: navigation keys first, everything else to the indicator.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use equityline_core::{ChartEvent, KeyStroke, Modifiers};

use crate::app::AppState;

const SCROLL_STEP: isize = 10;
const FINE_DRAG_PIPS: f64 = 1.0;
const COARSE_DRAG_PIPS: f64 = 10.0;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Help overlay consumes input first.
    if app.show_help {
        app.show_help = false;
        return;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let drag_pips = if shift { COARSE_DRAG_PIPS } else { FINE_DRAG_PIPS };

    // 2. Chart navigation.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.drag_line(drag_pips);
            return;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.drag_line(-drag_pips);
            return;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.scroll(-SCROLL_STEP);
            return;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.scroll(SCROLL_STEP);
            return;
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.zoom(true);
            return;
        }
        KeyCode::Char('-') => {
            app.zoom(false);
            return;
        }
        KeyCode::End => {
            app.follow_latest();
            return;
        }
        _ => {}
    }

    // 3. Everything else goes to the indicator as a key press.
    if let Some(stroke) = to_key_stroke(&key) {
        app.dispatch(ChartEvent::KeyDown(stroke));
    }
}

/// Translate a crossterm key into the indicator's key model.
///
/// Some terminals report Shift+letter as an uppercase char without the SHIFT
/// modifier, so uppercase implies shift.
pub fn to_key_stroke(key: &KeyEvent) -> Option<KeyStroke> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let modifiers = Modifiers {
        shift: key.modifiers.contains(KeyModifiers::SHIFT) || c.is_ascii_uppercase(),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
    };
    Some(KeyStroke::new(c, modifiers))
}
