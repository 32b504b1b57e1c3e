/// Terminal host for the painter3d renderer
use std::io::{self, stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};
use painter3d_core::{FrameClock, InputMapper, Scene};

pub mod cli;
pub mod input;
pub mod renderer;

pub use input::TerminalInput;
pub use renderer::AsciiCanvas;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    canvas: AsciiCanvas,
    input: TerminalInput,
    mapper: InputMapper,
    clock: FrameClock,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let canvas = AsciiCanvas::new(width as usize, height as usize, scene.viewport());

        Ok(Self {
            input: TerminalInput::new(canvas.cell_scale()),
            mapper: InputMapper::for_scene(&scene),
            clock: FrameClock::from_config(scene.config()),
            canvas,
            scene,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        loop {
            if self
                .mapper
                .process(&mut self.input, &mut self.scene)
                .is_break()
            {
                tracing::info!(
                    seconds = self.clock.total_time().as_secs_f64(),
                    "quit requested"
                );
                return Ok(());
            }

            if let Some((columns, rows)) = self.input.take_resize() {
                self.canvas.resize(columns as usize, rows as usize);
                self.input.set_cell_scale(self.canvas.cell_scale());
                tracing::debug!(columns, rows, "terminal resized");
            }

            let Self {
                scene,
                canvas,
                clock,
                ..
            } = self;
            let mut presented = Ok(());
            clock.run_frame(|frame_rate| {
                canvas.clear();
                scene.render_frame(canvas, frame_rate);
                presented = present(canvas);
            });
            presented?;
        }
    }
}

fn present(canvas: &AsciiCanvas) -> io::Result<()> {
    let mut stdout = stdout().lock();
    canvas.draw(&mut stdout)?;
    stdout.flush()
}
