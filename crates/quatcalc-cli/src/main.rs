use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "quatcalc")]
#[command(version)]
#[command(about = "Four-input quaternion calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operation and print the result
    Eval(commands::eval::EvalArgs),

    /// Interactive calculator session
    Repl(commands::repl::ReplArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false),
        )
        .with(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    match cli.command {
        Commands::Eval(args) => commands::eval::run(args),
        Commands::Repl(args) => commands::repl::run(args),
    }
}
