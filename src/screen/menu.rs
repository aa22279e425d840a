use mq::{
    color::{BLACK, WHITE},
    math::vec2,
};

use crate::{
    event::KeyCode,
    render::Renderer,
    screen::{Screen, StackCommand},
};

const FONT_SIZE: u16 = 20;

pub fn handle_key(key: KeyCode) -> StackCommand {
    match key {
        KeyCode::Escape | KeyCode::Q => StackCommand::Pop,
        KeyCode::S => StackCommand::Push(Screen::Game),
        _ => StackCommand::None,
    }
}

pub fn draw(renderer: &mut impl Renderer) {
    renderer.draw_text("(S)tart Game", vec2(350.0, 250.0), FONT_SIZE, WHITE, BLACK);
    renderer.draw_text("(Q)uit Game", vec2(350.0, 275.0), FONT_SIZE, WHITE, BLACK);
}
