mod cli;

use abacus::commands;
use abacus::config;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    install_panic_hook();
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Eval { keys, steps, json }) => {
            commands::eval::eval(
                &commands::eval::EvalConfig { keys, steps, json },
                &mut std::io::stdout().lock(),
            )?;
        }
        None => {
            let mut config = match cli.config {
                Some(path) => config::load_file(&path)?,
                None => config::load(&std::env::current_dir()?)?,
            };
            if cli.no_help {
                config.show_help = false;
            }
            if let Some(width) = cli.width {
                config.width = width;
            }
            config.validate()?;
            commands::run::run(
                commands::run::RunConfig {
                    show_help: config.show_help,
                    width: config.width,
                },
                std::io::stdout(),
            )
            .await?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `ABACUS_LOG` (errors only when unset).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("ABACUS_LOG"))
        .with_writer(std::io::stderr)
        .init();
}

/// Install a panic hook that restores terminal state before printing the panic.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        crossterm::terminal::disable_raw_mode().ok();
        default_hook(info);
    }));
}
