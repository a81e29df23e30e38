//! Browser entry point for the portfolio site.

use dioxus_logger::tracing::{info, Level};

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("portfolio v{} starting", env!("CARGO_PKG_VERSION"));
    dioxus::launch(ui::App);
}
