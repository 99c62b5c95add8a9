use anyhow::Result;
use spineboy_adventure::platform_winit;

fn main() -> Result<()> {
    // info+ with winit quieted unless RUST_LOG overrides; level from data/config/telemetry.toml
    let telemetry = spineboy_adventure::data::configs::telemetry::load_default().unwrap_or_default();
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(telemetry.default_filter()),
    );
    if telemetry.timestamps.unwrap_or(true) {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None);
    }
    let _ = builder.try_init();
    platform_winit::run().inspect_err(|e| log::error!("{e:#}"))
}
