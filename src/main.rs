use crate::{config::SceneConfig, export::AnimationWriter, scene::SceneComposer};
use anyhow::Context;
use clap::Parser;

mod config;
mod export;
mod render;
mod scene;

/// Render a looping beach sunrise, with two palm trees swaying in the wind, into a GIF.
///
/// The scene is fixed: running the program always writes the same animation to the current
/// directory.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {}

fn run(config: &SceneConfig) -> anyhow::Result<()> {
    log::info!(
        "rendering {} frames of {}x{} pixels",
        config.frame_count,
        config.width,
        config.height
    );
    let frames = SceneComposer::new(config).render_all();
    AnimationWriter::new(&config.output)
        .write(frames)
        .with_context(|| format!("failed to write {}", config.output.path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(&SceneConfig::sunrise())
}
