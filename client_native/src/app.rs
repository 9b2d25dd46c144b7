//! Window event handling and the per-frame loop

use game_core::{Config, ScreenInput, ScreenState};
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::audio::{SoundBoard, SoundSink};
use crate::clock::FrameClock;
use crate::input;
use crate::menu::MenuLayout;
use crate::renderer::{Renderer, Scene};
use crate::session::Session;

pub struct App {
    config: Config,
    session: Session,
    menu: MenuLayout,
    clock: FrameClock,
    renderer: Option<Renderer>,
    pointer: Vec2,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config, sink: Box<dyn SoundSink>) -> Self {
        let clock = FrameClock::new(config.tick_seconds());
        tracing::debug!(period = ?clock.period(), "frame clock");
        let sounds = SoundBoard::new(config.sample_rate, sink);
        Self {
            menu: MenuLayout::new(&config),
            session: Session::new(config.clone(), sounds),
            clock,
            pointer: config.center(),
            renderer: None,
            error: None,
            config,
        }
    }

    /// Consume the app after the event loop returns, surfacing any fatal error
    pub fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, input: ScreenInput) {
        self.session.apply(input);
        if self.session.is_terminated() {
            event_loop.exit();
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let scene = match (self.session.state(), self.session.game()) {
            (ScreenState::Menu, _) => Scene::Menu {
                hovered: self.menu.button_at(self.pointer),
            },
            (ScreenState::Match, Some(game)) => Scene::Match(game),
            (ScreenState::GameOverPrompt, Some(game)) => Scene::GameOver(game),
            _ => return,
        };

        if let Err(e) = renderer.draw_frame(scene, &self.menu) {
            self.fail(event_loop, e.context("failed to present frame"));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        match Renderer::new(event_loop, &self.config) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CursorMoved { position, .. } = event {
            if let Some(renderer) = &self.renderer {
                self.pointer = renderer.window_to_arena(position);
            }
            return;
        }

        if let WindowEvent::RedrawRequested = event {
            self.render(event_loop);
            return;
        }

        if let Some(input) =
            input::map_window_event(&event, self.session.state(), self.pointer, &self.menu)
        {
            self.apply(event_loop, input);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_terminated() || self.error.is_some() {
            return;
        }

        self.session.tick(self.pointer.y);
        self.render(event_loop);
        self.clock.wait();
    }
}
