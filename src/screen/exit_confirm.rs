use mq::{
    color::{BLACK, WHITE},
    math::vec2,
};

use crate::{
    event::KeyCode,
    render::Renderer,
    screen::{Screen, StackCommand},
};

const FONT_SIZE: u16 = 12;

pub fn handle_key(key: KeyCode) -> StackCommand {
    match key {
        KeyCode::Y => StackCommand::Pop,
        KeyCode::N => StackCommand::Push(Screen::Menu),
        _ => StackCommand::None,
    }
}

pub fn draw(renderer: &mut impl Renderer) {
    renderer.draw_text("Quit Game (Y or N)?", vec2(350.0, 250.0), FONT_SIZE, WHITE, BLACK);
}
