//! Macroquad implementations of the time, input and drawing collaborators.

use std::{collections::VecDeque, mem};

use log::info;
use mq::{
    color::{Color, WHITE},
    file,
    input::{is_quit_requested, prevent_quit, utils},
    math::{vec2, Vec2},
    miniquad::{self, EventHandler, KeyMods},
    shapes::draw_rectangle,
    text::{self, draw_text_ex, measure_text, Font, TextParams},
    texture::{draw_texture_ex, load_texture, DrawTextureParams, Texture2D},
    time,
    window::{clear_background, screen_height, screen_width},
};

use crate::{
    clock::TimeSource,
    config::Config,
    event::{Event, EventSource, KeyCode},
    render::Renderer,
    ZResult,
};

/// Milliseconds since the window was opened.
#[derive(Debug, Default)]
pub struct MqTime;

impl TimeSource for MqTime {
    fn now_ms(&self) -> u64 {
        (time::get_time() * 1000.0) as u64
    }
}

/// Buffers every key press macroquad saw, in arrival order.
#[derive(Debug, Default)]
pub struct MqEvents {
    queue: VecDeque<Event>,
    subscriber: usize,
}

impl MqEvents {
    /// Closing the window becomes an `Event::Quit` instead of ending the process.
    pub fn new() -> Self {
        prevent_quit();
        Self {
            queue: VecDeque::new(),
            subscriber: utils::register_input_subscriber(),
        }
    }

    /// Must be called exactly once after every `next_frame`.
    pub fn pump(&mut self) {
        let subscriber = self.subscriber;
        utils::repeat_all_miniquad_input(self, subscriber);
        if is_quit_requested() {
            self.queue.push_back(Event::Quit);
        }
    }

    fn push_key(&mut self, key: KeyCode) {
        self.queue.push_back(Event::KeyDown(key));
    }
}

impl EventSource for MqEvents {
    fn poll_event(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }
}

impl EventHandler for MqEvents {
    fn update(&mut self, _: &mut miniquad::Context) {}

    fn draw(&mut self, _: &mut miniquad::Context) {}

    fn key_down_event(
        &mut self,
        _: &mut miniquad::Context,
        key: KeyCode,
        _: KeyMods,
        _repeat: bool,
    ) {
        self.push_key(key);
    }
}

#[derive(Debug)]
pub struct Assets {
    pub background: Texture2D,
    pub font: Font,
}

impl Assets {
    pub async fn load(config: &Config) -> ZResult<Self> {
        file::set_pc_assets_folder("assets");
        let background = load_texture(&config.background_path).await?;
        let font = text::load_ttf_font(&config.font_path).await?;
        info!(
            "Assets loaded: '{}', '{}'",
            config.background_path, config.font_path
        );
        Ok(Self { background, font })
    }
}

#[derive(Debug)]
pub struct MqRenderer {
    assets: Assets,
    clear_color: Color,
    presented: bool,
}

impl MqRenderer {
    pub fn new(assets: Assets, clear_color: Color) -> Self {
        Self {
            assets,
            clear_color,
            presented: false,
        }
    }

    /// Returns `true` once per `present` call.
    pub fn take_presented(&mut self) -> bool {
        mem::replace(&mut self.presented, false)
    }
}

impl Renderer for MqRenderer {
    fn clear(&mut self) {
        clear_background(self.clear_color);
    }

    fn present(&mut self) {
        self.presented = true;
    }

    fn draw_background(&mut self) {
        let params = DrawTextureParams {
            dest_size: Some(vec2(screen_width(), screen_height())),
            ..Default::default()
        };
        draw_texture_ex(self.assets.background, 0.0, 0.0, WHITE, params);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: u16, fg: Color, bg: Color) {
        let font = self.assets.font;
        let dimensions = measure_text(text, Some(font), font_size, 1.0);
        draw_rectangle(pos.x, pos.y, dimensions.width, dimensions.height, bg);
        let params = TextParams {
            font,
            font_size,
            color: fg,
            ..Default::default()
        };
        draw_text_ex(text, pos.x, pos.y + dimensions.offset_y, params);
    }
}
