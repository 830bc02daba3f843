use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "abacus",
    about = "A four-function keypad calculator for the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file to use instead of `.abacus/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Hide the key legend.
    #[arg(long)]
    pub no_help: bool,

    /// Inner width of the display box, in columns.
    #[arg(long)]
    pub width: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a key sequence (e.g. `12+3.5=`) and print the display.
    ///
    /// Keys: 0-9 . + - * / =, `c` clears, `<` is backspace.
    Eval {
        #[arg(value_name = "KEYS")]
        keys: String,

        /// Print the display after every key.
        #[arg(long)]
        steps: bool,

        /// Print the final session state as JSON.
        #[arg(long)]
        json: bool,
    },
}
