use log::{debug, info};

use crate::{
    clock::{FrameClock, TimeSource},
    event::{Event, EventSource, KeyCode},
    render::Renderer,
    ZResult,
};

mod exit_confirm;
mod game;
mod menu;

/// Everything a screen needs to run one tick.
///
/// Fields drop in declaration order, so the renderer and its assets
/// are released first and the clock last.
#[derive(Debug)]
pub struct Context<T, E, R> {
    pub renderer: R,
    pub events: E,
    pub clock: FrameClock<T>,
}

impl<T: TimeSource, E: EventSource, R: Renderer> Context<T, E, R> {
    pub fn new(clock: FrameClock<T>, events: E, renderer: R) -> Self {
        Self {
            renderer,
            events,
            clock,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
    ExitConfirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackCommand {
    None,
    Push(Screen),
    Pop,
    Clear,
}

impl Screen {
    /// Runs one frame of this screen if the clock allows it.
    ///
    /// A skipped tick touches nothing: no input is read and nothing is drawn.
    /// An executed tick reads at most one event.
    pub fn tick<T, E, R>(self, context: &mut Context<T, E, R>) -> ZResult<StackCommand>
    where
        T: TimeSource,
        E: EventSource,
        R: Renderer,
    {
        if !context.clock.has_frame_elapsed() {
            return Ok(StackCommand::None);
        }
        let command = match context.events.poll_event() {
            Some(Event::Quit) => StackCommand::Clear,
            Some(Event::KeyDown(key)) => self.handle_key(key),
            None => StackCommand::None,
        };
        context.renderer.clear();
        self.draw(&mut context.renderer);
        context.renderer.present();
        context.clock.finish_frame();
        Ok(command)
    }

    fn handle_key(self, key: KeyCode) -> StackCommand {
        let command = match self {
            Screen::Menu => menu::handle_key(key),
            Screen::Game => game::handle_key(key),
            Screen::ExitConfirm => exit_confirm::handle_key(key),
        };
        debug!("{:?}: key {:?} -> {:?}", self, key, command);
        command
    }

    fn draw(self, renderer: &mut impl Renderer) {
        match self {
            Screen::Menu => menu::draw(renderer),
            Screen::Game => game::draw(renderer),
            Screen::ExitConfirm => exit_confirm::draw(renderer),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScreenStack {
    screens: Vec<Screen>,
}

impl ScreenStack {
    /// Seeds the stack bottom to top.
    pub fn with_screens(screens: impl IntoIterator<Item = Screen>) -> Self {
        Self {
            screens: screens.into_iter().collect(),
        }
    }

    /// Ticks the top screen and applies whatever it asked for.
    ///
    /// A screen pushed here only runs on the next call.
    pub fn tick<T, E, R>(&mut self, context: &mut Context<T, E, R>) -> ZResult
    where
        T: TimeSource,
        E: EventSource,
        R: Renderer,
    {
        let screen = match self.top() {
            Some(screen) => screen,
            None => return Ok(()),
        };
        let command = screen.tick(context)?;
        self.handle_command(command)
    }

    pub fn handle_command(&mut self, command: StackCommand) -> ZResult {
        match command {
            StackCommand::None => {}
            StackCommand::Push(screen) => {
                info!("ScreenStack::handle_command: Push({:?})", screen);
                self.push(screen);
            }
            StackCommand::Pop => {
                info!("ScreenStack::handle_command: Pop");
                self.pop();
            }
            StackCommand::Clear => {
                info!("ScreenStack::handle_command: Clear");
                self.clear();
            }
        }
        Ok(())
    }

    pub fn push(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    /// Does nothing on an empty stack.
    pub fn pop(&mut self) {
        if self.screens.pop().is_none() {
            debug!("ScreenStack::pop: the stack is already empty");
        }
    }

    pub fn clear(&mut self) {
        self.screens.clear();
    }

    pub fn top(&self) -> Option<Screen> {
        self.screens.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Bottom to top.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }
}
