mod app;
mod effects;
mod ui;

fn main() -> anyhow::Result<()> {
    app::run_app()
}
