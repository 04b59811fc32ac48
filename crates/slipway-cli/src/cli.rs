use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "slipway")]
#[command(bin_name = "slipway")]
#[command(version)]
#[command(about = "Staged clone → tools → verify → publish workflow for repository refits")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Run the staged refit workflow end to end")]
    Run(RunArgs),
    #[command(about = "List the available refit tools")]
    Tools,
    #[command(about = "Run environment and configuration checks")]
    Doctor,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Source repository to refit.
    #[arg(long)]
    pub repo_url: String,

    /// GitHub org or account the fork action targets.
    #[arg(long)]
    pub fork_target: Option<String>,

    /// Treat the fork target as a personal account instead of an org.
    #[arg(long)]
    pub personal: bool,

    /// GitLab namespace for the private mirror.
    #[arg(long)]
    pub gitlab_namespace: Option<String>,

    /// GitLab project for the private mirror.
    #[arg(long)]
    pub gitlab_project: Option<String>,

    /// Local path the clone lands in.
    #[arg(long)]
    pub clone_path: Option<String>,

    /// Comma-separated tool ids (audit, refit, drydock, docs).
    #[arg(long, value_delimiter = ',')]
    pub tools: Vec<String>,

    /// Unlock publish actions even when verification did not succeed.
    #[arg(long)]
    pub force_publish: bool,
}
