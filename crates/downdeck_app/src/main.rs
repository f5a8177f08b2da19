mod app;
mod effects;
mod input;
mod logging;
mod render;
mod settings;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    let settings = settings::load(std::path::Path::new("."));
    app::run(settings)
}
