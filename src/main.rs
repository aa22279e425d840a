use log::{error, info};
use mq::{color::BLACK, window};

use crate::{
    app::App,
    backend::{Assets, MqEvents, MqRenderer, MqTime},
    clock::FrameClock,
    config::Config,
};

mod app;
mod backend;
mod clock;
mod config;
mod error;
mod event;
mod render;
mod screen;

#[cfg(test)]
mod test_utils;

type ZResult<T = ()> = Result<T, error::ZError>;

async fn run(config: Config) -> ZResult {
    let time = MqTime;
    let clock = FrameClock::new(time, config.frames_per_second);
    let events = MqEvents::new();
    let assets = Assets::load(&config).await?;
    let renderer = MqRenderer::new(assets, BLACK);
    let mut app = App::new(clock, events, renderer);
    while !app.is_finished() {
        app.tick()?;
        let context = app.context_mut();
        if context.renderer.take_presented() {
            window::next_frame().await;
            context.events.pump();
        }
    }
    Ok(())
}

fn main() {
    if std::env::var_os("RUST_BACKTRACE").is_none() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    env_logger::init();
    let config = match Config::load_or_default(config::CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            error!("Can't load the config: {}", e);
            std::process::exit(1);
        }
    };
    info!("Starting with {:?}", config);
    mq::Window::from_config(config.window_conf(), async move {
        if let Err(e) = run(config).await {
            error!("{}", e);
            std::process::exit(1);
        }
        info!("Bye");
    });
}
