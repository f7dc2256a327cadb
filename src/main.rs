mod components;
mod data;
mod listing;
mod models;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🍽️ Zomato Clone starting...");

    yew::Renderer::<App>::new().render();
}
