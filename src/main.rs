use anyhow::Result;
use clap::{Parser, Subcommand};

use expenditure::config::{logging, paths::ExpenditurePaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "expenditure",
    version,
    about = "Track taxi, food and school fee spending from the terminal",
    long_about = "Expenditure is a small terminal spending tracker. Record taxi and \
                  food amounts and labeled school fees, then view the totals. \
                  Entries are kept in memory and discarded on exit."
)]
struct Cli {
    /// Currency label shown next to amounts (overrides the settings file)
    #[arg(long, global = true, env = "EXPENDITURE_CURRENCY")]
    currency: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpenditurePaths::new()?;
    let mut settings = Settings::load_or_default(&paths)?;
    if let Some(currency) = cli.currency {
        settings.currency_symbol = currency;
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            logging::init_tracing(&paths, &settings)?;
            expenditure::tui::run_tui(&settings)?;
        }
        Commands::Config => print_config(&paths, &settings),
    }

    Ok(())
}

fn print_config(paths: &ExpenditurePaths, settings: &Settings) {
    println!("Expenditure Configuration");
    println!("=========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency:   {}", settings.currency_symbol);
    println!("  Log filter: {}", settings.log_filter);
    println!("  Tick rate:  {} ms", settings.tick_rate_ms);
}
