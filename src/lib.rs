#![recursion_limit = "512"]

mod app;
mod browser;
mod protocol;
mod query;
mod session;

use wasm_bindgen::prelude::*;
use yew::{App, Callback};

#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    web_logger::init();

    browser::enable_touch_drag();

    let env = browser::page_env();
    let params = query::decode(&env.search);
    let config = session::session_config(&env, &params);
    log::info!("Embedding chess app against {}", &config.host);

    let on_game_id_assigned = Callback::from(session::game_id_listener(env, |url: String| {
        browser::navigate(&url)
    }));

    yew::initialize();
    App::<app::ChessApp>::new().mount_with_props(
        browser::app_mount_point(),
        app::Props {
            host: config.host,
            game_id: config.game_id,
            on_game_id_assigned,
        },
    );
    yew::run_loop();
    Ok(())
}
