use virtual_try_on::components::App;
use virtual_try_on::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Virtual Try-On starting ({}) → {}",
        CONFIG.environment,
        CONFIG.apply_design_url()
    );

    yew::Renderer::<App>::new().render();
}
