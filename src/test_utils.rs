//! Fake collaborators for driving screens without a window.

use std::{cell::Cell, collections::VecDeque, rc::Rc};

use mq::{color::Color, math::Vec2};

use crate::{
    clock::{FrameClock, TimeSource},
    event::{Event, EventSource, KeyCode},
    render::Renderer,
    screen::Context,
};

pub const FPS: u32 = 30;
pub const INTERVAL_MS: u64 = 1000 / FPS as u64;

/// A manually driven clock. Clones share the same time, so a test can keep
/// a handle after moving one into a `FrameClock`.
///
/// With a non-zero `step` every read also moves the time forward.
#[derive(Clone, Debug, Default)]
pub struct FakeTime {
    now: Rc<Cell<u64>>,
    step: u64,
}

impl FakeTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_advancing(step: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            step,
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl TimeSource for FakeTime {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

#[derive(Debug, Default)]
pub struct FakeEvents {
    pub queue: VecDeque<Event>,
}

impl FakeEvents {
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    pub fn push_keys(&mut self, keys: &[KeyCode]) {
        for &key in keys {
            self.push(Event::KeyDown(key));
        }
    }
}

impl EventSource for FakeEvents {
    fn poll_event(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Present,
    Background,
    Text(String),
}

#[derive(Debug, Default)]
pub struct FakeRenderer {
    pub calls: Vec<DrawCall>,
}

impl FakeRenderer {
    pub fn count(&self, call: &DrawCall) -> usize {
        self.calls.iter().filter(|&c| c == call).count()
    }
}

impl Renderer for FakeRenderer {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }

    fn draw_background(&mut self) {
        self.calls.push(DrawCall::Background);
    }

    fn draw_text(&mut self, text: &str, _pos: Vec2, _font_size: u16, _fg: Color, _bg: Color) {
        self.calls.push(DrawCall::Text(text.to_string()));
    }
}

pub type FakeContext = Context<FakeTime, FakeEvents, FakeRenderer>;

/// Returns a context whose first frame is already due, plus a handle to its time.
pub fn context() -> (FakeContext, FakeTime) {
    let time = FakeTime::new();
    let clock = FrameClock::new(time.clone(), FPS);
    time.advance(INTERVAL_MS);
    let context = Context::new(clock, FakeEvents::default(), FakeRenderer::default());
    (context, time)
}
