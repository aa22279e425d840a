use log::info;

use crate::{
    clock::{FrameClock, TimeSource},
    event::EventSource,
    render::Renderer,
    screen::{Context, Screen, ScreenStack},
    ZResult,
};

/// Bottom to top.
const START_SCREENS: [Screen; 2] = [Screen::ExitConfirm, Screen::Menu];

pub struct App<T, E, R> {
    screens: ScreenStack,
    context: Context<T, E, R>,
}

impl<T: TimeSource, E: EventSource, R: Renderer> App<T, E, R> {
    pub fn new(clock: FrameClock<T>, events: E, renderer: R) -> Self {
        let screens = ScreenStack::with_screens(START_SCREENS.iter().copied());
        info!(
            "App::new: frame interval = {}ms, screens = {:?}",
            clock.frame_interval_ms(),
            screens.screens()
        );
        Self {
            screens,
            context: Context::new(clock, events, renderer),
        }
    }

    /// Ticks whatever screen is on top. Does nothing once the app is finished.
    pub fn tick(&mut self) -> ZResult {
        self.screens.tick(&mut self.context)
    }

    pub fn is_finished(&self) -> bool {
        self.screens.is_empty()
    }

    #[cfg(test)]
    pub fn screens(&self) -> &ScreenStack {
        &self.screens
    }

    pub fn context_mut(&mut self) -> &mut Context<T, E, R> {
        &mut self.context
    }
}

impl<T, E, R> Drop for App<T, E, R> {
    fn drop(&mut self) {
        info!("Shutting down");
    }
}
