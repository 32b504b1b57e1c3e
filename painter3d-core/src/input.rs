/// Translation of host input into scene mutations
use std::ops::ControlFlow;

use crate::canvas::{HostEvent, InputSource, PointerButton};
use crate::config::RenderConfig;
use crate::scene::Scene;

pub const KEY_TOGGLE_ROTATION: char = 'r';
pub const KEY_TOGGLE_FILLED: char = 'f';
pub const KEY_RESET_CAMERA: char = 'b';

/// Maps pointer drags, wheel notches and key presses onto a [`Scene`].
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    sensitivity: f64,
}

impl InputMapper {
    pub fn new(sensitivity: f64) -> Self {
        Self { sensitivity }
    }

    pub fn for_scene(scene: &Scene) -> Self {
        Self::new(scene.config().drag_sensitivity)
    }

    /// Drain `source` and apply everything it reports to `scene`.
    ///
    /// Returns `Break` once a quit event is seen; the rest of that batch is dropped.
    pub fn process<S: InputSource + ?Sized>(
        &self,
        source: &mut S,
        scene: &mut Scene,
    ) -> ControlFlow<()> {
        for event in source.poll_events() {
            match event {
                HostEvent::Quit => return ControlFlow::Break(()),
                HostEvent::KeyDown(key) => self.key_down(key, scene),
                HostEvent::PointerMotion => self.pointer_motion(source, scene),
                HostEvent::ButtonDown(button) => tracing::trace!(?button, "button down"),
            }
        }

        self.zoom(source.wheel_delta(), scene);
        ControlFlow::Continue(())
    }

    pub fn key_down(&self, key: char, scene: &mut Scene) {
        match key.to_ascii_lowercase() {
            KEY_TOGGLE_ROTATION => scene.toggle_rotating(),
            KEY_TOGGLE_FILLED => scene.toggle_filled(),
            KEY_RESET_CAMERA => scene.reset_camera(),
            _ => return,
        }
        tracing::debug!(%key, flags = ?scene.flags(), "key handled");
    }

    fn pointer_motion<S: InputSource + ?Sized>(&self, source: &mut S, scene: &mut Scene) {
        let rotation = &mut scene.camera_mut().rotation;

        if let Some((dx, dy)) = source.pointer_drag(PointerButton::Primary) {
            rotation.x += f64::from(dx) * self.sensitivity;
            rotation.y += f64::from(dy) * self.sensitivity;
        }

        if let Some((dx, _)) = source.pointer_drag(PointerButton::Secondary) {
            rotation.z += f64::from(dx) * self.sensitivity;
        }
    }

    /// Move the camera one unit along Z per notch, never reaching Z = 0.
    pub fn zoom(&self, notches: i32, scene: &mut Scene) {
        let position = &mut scene.camera_mut().position;

        for _ in 0..notches.unsigned_abs() {
            if notches > 0 {
                if position.z + 1.0 < 0.0 {
                    position.z += 1.0;
                }
            } else {
                position.z -= 1.0;
            }
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(RenderConfig::default().drag_sensitivity)
    }
}
