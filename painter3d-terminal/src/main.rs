/// painter3d - software-rendered mesh viewer for the terminal
///
/// Controls:
///   - Left drag: pitch and yaw
///   - Right drag: roll
///   - Wheel: zoom
///   - R: toggle auto-rotation
///   - F: toggle filled / wireframe
///   - B: reset the camera
///   - Q/ESC: Quit

use anyhow::Context;
use clap::Parser;
use painter3d_core::{RenderConfig, Scene};
use painter3d_terminal::cli::{self, Cli};
use painter3d_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::initialize_tracing();

    let mut scene = Scene::new(RenderConfig::default());

    if let Some(path) = &cli.mesh {
        if let Err(e) = scene.load_mesh(path) {
            tracing::error!(path = %path.display(), "could not load mesh: {e}");
            eprintln!("{}: {e}; showing the default cube instead", path.display());
        }
    }

    let mut app = TerminalApp::new(scene).context("failed to query the terminal size")?;
    app.run().context("terminal renderer failed")?;

    Ok(())
}
