use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskrank", version, about = "Taskrank CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a batch of tasks (strict validation)
    Analyze {
        /// Input JSON file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Persist sanitized tasks to the store
        #[arg(long)]
        save: bool,
    },
    /// Suggest the next best tasks with a rationale
    Suggest {
        /// Input JSON file with explicit tasks (defaults to stored tasks)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print only the explanation text
        #[arg(long)]
        text: bool,
    },
    /// Task store management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze { input, save } => commands::analyze::run(input, save),
        Commands::Suggest { input, text } => commands::suggest::run(input, text),
        Commands::Task { action } => commands::task::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "taskrank", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
