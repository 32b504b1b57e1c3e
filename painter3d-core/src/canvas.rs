/// The boundary between the renderer and whatever displays its output
use crate::geometry::Color;

/// Integer screen position in viewport pixels
pub type ScreenPoint = (i32, i32);

/// A 2D drawing surface. Coordinates are in viewport pixels with the origin
/// at the top left.
pub trait Canvas {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color);

    fn outline_polygon(&mut self, points: &[ScreenPoint], color: Color);

    fn draw_text(&mut self, text: &str, position: ScreenPoint, color: Color);

    /// A line is a two-point outline.
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.outline_polygon(&[from, to], color);
    }
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillPolygon {
        points: Vec<ScreenPoint>,
        color: Color,
    },
    OutlinePolygon {
        points: Vec<ScreenPoint>,
        color: Color,
    },
    Text {
        text: String,
        position: ScreenPoint,
        color: Color,
    },
}

/// A canvas that records the commands of a frame instead of drawing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Send every recorded command to another canvas, in order.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::FillPolygon { points, color } => canvas.fill_polygon(points, *color),
                DrawCommand::OutlinePolygon { points, color } => {
                    canvas.outline_polygon(points, *color)
                }
                DrawCommand::Text {
                    text,
                    position,
                    color,
                } => canvas.draw_text(text, *position, *color),
            }
        }
    }
}

impl Canvas for DrawList {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn outline_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        self.commands.push(DrawCommand::OutlinePolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            color,
        });
    }
}

/// Pointer buttons the renderer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Host events delivered once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Quit,
    KeyDown(char),
    ButtonDown(PointerButton),
    PointerMotion,
}

/// Input side of the host: events plus pointer and wheel state.
pub trait InputSource {
    /// Drain the events that arrived since the previous call.
    fn poll_events(&mut self) -> Vec<HostEvent>;

    /// Motion since the last query while `button` is held, if it is held.
    fn pointer_drag(&mut self, button: PointerButton) -> Option<(i32, i32)>;

    /// Wheel notches since the last query; positive is away from the user.
    fn wheel_delta(&mut self) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_line_is_two_point_outline() {
        let mut list = DrawList::new();
        list.draw_line((1, 2), (3, 4), Color::BLACK);
        assert_eq!(
            list.commands(),
            &[DrawCommand::OutlinePolygon {
                points: vec![(1, 2), (3, 4)],
                color: Color::BLACK,
            }]
        );
    }

    #[test]
    fn test_replay_preserves_order() {
        let mut list = DrawList::new();
        list.fill_polygon(&[(0, 0), (1, 0), (0, 1)], Color::new(1, 2, 3));
        list.draw_text("60", (8, 8), Color::BLACK);

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);

        list.clear();
        assert!(list.commands().is_empty());
    }
}
