use macroquad::prelude::Conf;

mod app;
mod constants;
mod hud;
mod input;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    shot_finder::logging::init();
    app::run().await;
}
