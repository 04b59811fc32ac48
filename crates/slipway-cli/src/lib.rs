mod cli;
mod dispatch;
mod doctor;
mod local;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use slipway_app::App;

use crate::cli::Cli;
use crate::local::LocalServices;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let app = App::new(Arc::new(LocalServices::new()));
    dispatch::run_with_deps(cli, &app)
}
