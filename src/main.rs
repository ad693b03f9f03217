use honest_herbalist_site::utils::meta_pixel;
use honest_herbalist_site::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    meta_pixel::init_meta_pixel();
    yew::Renderer::<App>::new().render();
}
