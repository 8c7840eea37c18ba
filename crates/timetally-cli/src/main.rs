use clap::{Parser, Subcommand};

mod clipboard;
mod commands;

#[derive(Parser)]
#[command(name = "timetally", version, about = "TimeTally CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse time-range text and tally the total duration
    Calc(commands::calc::CalcArgs),
    /// Clean up pasted text without parsing it
    Format(commands::format::FormatArgs),
    /// Render template management
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calc(args) => commands::calc::run(args),
        Commands::Format(args) => commands::format::run(args),
        Commands::Template { action } => commands::template::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
