//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting Stagehand");

    if let Err(e) = stagehand_app::run(std::env::args().skip(1)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
