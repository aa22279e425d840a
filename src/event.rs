pub use mq::input::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The window was asked to close.
    Quit,
    KeyDown(KeyCode),
}

pub trait EventSource {
    /// Non-blocking. Returns `None` if nothing is queued.
    fn poll_event(&mut self) -> Option<Event>;
}
