use mq::{color::Color, math::Vec2};

/// The drawing surface the screens talk to.
pub trait Renderer {
    fn clear(&mut self);

    /// Shows everything drawn since the last `clear`.
    fn present(&mut self);

    /// Draws the background image stretched over the whole window.
    fn draw_background(&mut self);

    /// `pos` is the top left corner of the text's background box.
    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: u16, fg: Color, bg: Color);
}
