mod app;
mod cli;
mod config;
mod consts;
mod error;
mod fixtures;
mod generate;
mod output;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse().with_config(&Config::load());

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
