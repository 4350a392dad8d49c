use cornwell_engine::core::{App, AppControl, FrameCtx};
use cornwell_engine::input::InputEvent;

use crate::config::SceneConfig;
use crate::scene::SceneRenderer;
use crate::state::{RenderState, Toggle};

/// Frames between frame-time trace lines.
const TRACE_EVERY: u64 = 300;

pub struct CornwellApp {
    state: RenderState,
    scene: SceneRenderer,
}

impl CornwellApp {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            state: RenderState::default(),
            scene: SceneRenderer::new(config),
        }
    }

    /// Applies key toggles in arrival order. Returns how many fired.
    pub fn apply_input(&mut self, events: &[InputEvent]) -> usize {
        let mut fired = 0;
        for (key, action) in events.iter().filter_map(InputEvent::key_action) {
            if let Some(toggle) = self.state.on_key_event(key, action) {
                log_toggle(toggle, &self.state);
                fired += 1;
            }
        }
        fired
    }
}

fn log_toggle(toggle: Toggle, state: &RenderState) {
    match toggle {
        Toggle::Mirror => log::info!(
            "mirror {}",
            if state.mirrored { "on" } else { "off" }
        ),
        Toggle::Transparency => log::info!("transparency {}", state.transparency),
        Toggle::LightOne => log::info!(
            "light one {}",
            if state.light_one_enabled { "on" } else { "off" }
        ),
    }
    log::debug!("render state: {state}");
}

impl App for CornwellApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.apply_input(&ctx.input_frame.events);

        if ctx.time.frame_index % TRACE_EVERY == 0 {
            log::trace!(
                "frame {} dt {:.2} ms ({})",
                ctx.time.frame_index,
                ctx.time.dt * 1000.0,
                self.scene.config().title
            );
        }

        self.scene.render_frame(ctx, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use cornwell_engine::input::{Key, KeyState, Modifiers};

    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    #[test]
    fn fresh_presses_toggle_in_order() {
        let mut app = CornwellApp::new(SceneConfig::default());
        let events = [
            key(Key::M, KeyState::Pressed, false),
            key(Key::M, KeyState::Released, false),
            key(Key::T, KeyState::Pressed, false),
            InputEvent::Focused(true),
        ];
        assert_eq!(app.apply_input(&events), 2);
        assert!(app.state.mirrored);
        assert_eq!(app.state.transparency, 0.5);
        assert!(app.state.light_one_enabled);
    }

    #[test]
    fn held_key_repeat_toggles_once() {
        let mut app = CornwellApp::new(SceneConfig::default());
        let events = [
            key(Key::L, KeyState::Pressed, false),
            key(Key::L, KeyState::Pressed, true),
            key(Key::L, KeyState::Pressed, true),
            key(Key::L, KeyState::Released, false),
        ];
        assert_eq!(app.apply_input(&events), 1);
        assert!(!app.state.light_one_enabled);
    }

    #[test]
    fn starts_from_default_state() {
        let app = CornwellApp::new(SceneConfig::default());
        assert_eq!(app.state, RenderState::default());
        assert_eq!(app.scene.config().title, "Cornwell Room");
    }
}
