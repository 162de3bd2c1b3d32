//! `atelier generate <user-id>` prints one generation payload.
//! `atelier harness [--live]` runs the scoring matrix and prints run stats.

use anyhow::Context;
use clap::Parser;

use atelier_core::models::GenerationContext;
use atelier_orchestrator::cli::{Cli, Command};
use atelier_orchestrator::{AtelierRuntime, PipelineState, RuntimeOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    atelier_observability::init_tracing();

    let config_toml = match &cli.config {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?,
        ),
        None => None,
    };
    let runtime = AtelierRuntime::new(RuntimeOptions {
        db_path: cli.db,
        config_toml,
    })?;

    match cli.command {
        Command::Generate { user_id, seed } => {
            let mut ctx = GenerationContext::new(user_id);
            ctx.random_seed = seed;
            let result = runtime.generate(&ctx, &mut PipelineState::new()).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Harness { live } => {
            let run = runtime.harness(live).run().await?;
            println!("{}", serde_json::to_string_pretty(&run.stats())?);
            for (case, reason) in &run.failures {
                eprintln!("{case}: {reason}");
            }
        }
    }
    Ok(())
}
