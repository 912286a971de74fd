use macroquad::prelude::*;
use breakout::{GameConfig, GameState, FrameInput, rendering};

fn window_conf() -> Conf {
    GameConfig::default().window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Breakout starting");

    let mut state = GameState::new(GameConfig::default());

    loop {
        let input = FrameInput::sample();
        if input.quit {
            break;
        }

        state.frame(&input, get_frame_time());

        rendering::draw_scene(&state);

        next_frame().await;
    }

    log::info!("Breakout closing");
}
