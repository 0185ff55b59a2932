use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lifeos-cli", version, about = "Life OS CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Habit tracking
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Skill scores and advice
    Skill {
        #[command(subcommand)]
        action: commands::skill::SkillAction,
    },
    /// Aggregated statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// XP shop and inventory
    Shop {
        #[command(subcommand)]
        action: commands::shop::ShopAction,
    },
    /// Sleep/wake ritual
    Ritual {
        #[command(subcommand)]
        action: commands::ritual::RitualAction,
    },
    /// Focus timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Quick notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Backup export/import
    Backup {
        #[command(subcommand)]
        action: commands::backup::BackupAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Run a slash command line (/task, /note, /theme, /wake)
    Exec {
        /// The command line, e.g. "/task call mom"
        line: String,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Skill { action } => commands::skill::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Shop { action } => commands::shop::run(action),
        Commands::Ritual { action } => commands::ritual::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Backup { action } => commands::backup::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Exec { line } => commands::exec::run(&line),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
