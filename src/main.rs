use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use taskdeck::commands::*;
use taskdeck::tui::run_tui;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Terminal task dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks from the sample dataset
    List {
        /// Free-text search against title or category
        #[arg(short, long)]
        search: Option<String>,
        /// Only tasks in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Status tab (all, pending, completed, overdue, today)
        #[arg(short = 't', long)]
        status: Option<String>,
        /// Priority filter, repeatable (high, medium, low)
        #[arg(short, long)]
        priority: Vec<String>,
        /// Sort key (priority, due, category, created)
        #[arg(short = 'o', long)]
        sort: Option<String>,
    },
    /// Show a single task by id
    Show {
        id: u64,
    },
    /// Show aggregate stats
    Stats,
    /// List categories with task counts
    Categories,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open interactive dashboard
    Ui,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::List {
            search,
            category,
            status,
            priority,
            sort,
        }) => cmd_list(search, category, status, priority, sort),
        Some(Commands::Show { id }) => cmd_show(id),
        Some(Commands::Stats) => cmd_stats(),
        Some(Commands::Categories) => cmd_categories(),
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "taskdeck", &mut io::stdout());
        }
        Some(Commands::Ui) | None => {
            if let Err(e) = run_tui() {
                eprintln!("Error running dashboard: {}", e);
            }
        }
    }
}
