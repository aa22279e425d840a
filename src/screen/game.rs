use crate::{event::KeyCode, render::Renderer, screen::StackCommand};

pub fn handle_key(key: KeyCode) -> StackCommand {
    match key {
        KeyCode::Escape => StackCommand::Pop,
        _ => StackCommand::None,
    }
}

pub fn draw(renderer: &mut impl Renderer) {
    renderer.draw_background();
}
