/// crossterm keyboard and mouse events mapped onto the renderer's input contract
use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use painter3d_core::{HostEvent, InputSource, PointerButton};

/// Input source backed by the terminal's event queue.
pub struct TerminalInput {
    /// Viewport pixels per cell, used to scale drag distances
    cell_scale: (f32, f32),
    last_position: Option<(u16, u16)>,
    drags: HashMap<PointerButton, (i32, i32)>,
    wheel: i32,
    resized: Option<(u16, u16)>,
}

impl TerminalInput {
    pub fn new(cell_scale: (f32, f32)) -> Self {
        Self {
            cell_scale,
            last_position: None,
            drags: HashMap::new(),
            wheel: 0,
            resized: None,
        }
    }

    pub fn set_cell_scale(&mut self, cell_scale: (f32, f32)) {
        self.cell_scale = cell_scale;
    }

    /// New terminal size, if the terminal was resized since the last call
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }

    /// Fold one terminal event into the input state.
    pub fn translate(&mut self, event: Event) -> Option<HostEvent> {
        match event {
            Event::Key(key) => translate_key(key),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            Event::Resize(columns, rows) => {
                self.resized = Some((columns, rows));
                None
            }
            _ => None,
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent) -> Option<HostEvent> {
        let position = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                self.last_position = Some(position);
                Some(HostEvent::ButtonDown(pointer_button(button)))
            }
            MouseEventKind::Drag(button) => {
                let (last_column, last_row) = self.last_position.unwrap_or(position);
                self.last_position = Some(position);

                let dx = (f32::from(mouse.column) - f32::from(last_column)) * self.cell_scale.0;
                let dy = (f32::from(mouse.row) - f32::from(last_row)) * self.cell_scale.1;
                let drag = self.drags.entry(pointer_button(button)).or_insert((0, 0));
                drag.0 += dx.round() as i32;
                drag.1 += dy.round() as i32;
                Some(HostEvent::PointerMotion)
            }
            MouseEventKind::Up(_) => {
                self.last_position = None;
                None
            }
            MouseEventKind::ScrollUp => {
                self.wheel += 1;
                None
            }
            MouseEventKind::ScrollDown => {
                self.wheel -= 1;
                None
            }
            _ => None,
        }
    }
}

fn translate_key(key: KeyEvent) -> Option<HostEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(HostEvent::Quit),
        KeyCode::Char(c) => Some(HostEvent::KeyDown(c)),
        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        loop {
            match event::poll(Duration::ZERO).and_then(|ready| {
                if ready {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            }) {
                Ok(Some(event)) => events.extend(self.translate(event)),
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("terminal input failed: {e}");
                    events.push(HostEvent::Quit);
                    break;
                }
            }
        }
        events
    }

    fn pointer_drag(&mut self, button: PointerButton) -> Option<(i32, i32)> {
        self.drags.remove(&button)
    }

    fn wheel_delta(&mut self) -> i32 {
        std::mem::take(&mut self.wheel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        let mut input = TerminalInput::new((10.0, 25.0));
        assert_eq!(
            input.translate(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(HostEvent::Quit)
        );
        assert_eq!(
            input.translate(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(HostEvent::Quit)
        );
        assert_eq!(
            input.translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(HostEvent::Quit)
        );
        assert_eq!(
            input.translate(key(KeyCode::Char('f'), KeyModifiers::NONE)),
            Some(HostEvent::KeyDown('f'))
        );
        assert_eq!(input.translate(key(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_drag_is_scaled_to_viewport_pixels() {
        let mut input = TerminalInput::new((10.0, 25.0));
        assert_eq!(
            input.translate(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5)),
            Some(HostEvent::ButtonDown(PointerButton::Primary))
        );
        input.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 7, 4));
        input.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 8, 4));

        assert_eq!(input.pointer_drag(PointerButton::Primary), Some((30, -25)));
        assert_eq!(input.pointer_drag(PointerButton::Primary), None);
        assert_eq!(input.pointer_drag(PointerButton::Secondary), None);
    }

    #[test]
    fn test_release_forgets_position() {
        let mut input = TerminalInput::new((1.0, 1.0));
        input.translate(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        input.translate(mouse(MouseEventKind::Up(MouseButton::Right), 0, 0));
        // a drag without a known start moves nothing
        input.translate(mouse(MouseEventKind::Drag(MouseButton::Right), 9, 9));
        assert_eq!(input.pointer_drag(PointerButton::Secondary), Some((0, 0)));
    }

    #[test]
    fn test_scroll_accumulates() {
        let mut input = TerminalInput::new((1.0, 1.0));
        input.translate(mouse(MouseEventKind::ScrollUp, 0, 0));
        input.translate(mouse(MouseEventKind::ScrollUp, 0, 0));
        input.translate(mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(input.wheel_delta(), 1);
        assert_eq!(input.wheel_delta(), 0);
    }

    #[test]
    fn test_resize_is_reported_once() {
        let mut input = TerminalInput::new((1.0, 1.0));
        input.translate(Event::Resize(120, 40));
        assert_eq!(input.take_resize(), Some((120, 40)));
        assert_eq!(input.take_resize(), None);
    }
}
