pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gate")]
#[command(about = "Portal Gate CLI - inspect authorization decisions from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the gate server")]
    Serve {
        #[arg(long, help = "Port to bind (defaults to the configured port)")]
        port: Option<u16>,
    },

    #[command(about = "Evaluate the route guard for a role and a requested path")]
    Check {
        #[arg(help = "Role tag (admin, instructor, student), or 'anonymous'")]
        role: String,
        #[arg(help = "Requested path, e.g. /admin/users")]
        path: String,
    },

    #[command(about = "Print the navigation menu a role sees")]
    Nav {
        #[arg(help = "Role tag (admin, instructor, student)")]
        role: String,
    },

    #[command(about = "Mint a session token for an account in the configured directory")]
    Token {
        #[arg(help = "Username from the user directory")]
        username: String,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port } => commands::serve::handle(port).await,
        Commands::Check { role, path } => commands::check::handle(&role, &path, cli.json).await,
        Commands::Nav { role } => commands::nav::handle(&role, cli.json).await,
        Commands::Token { username } => commands::token::handle(&username, cli.json).await,
    }
}
