mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheet-recon")]
#[command(about = "Compare two tabular datasets and show cell-level differences")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two CSV exports after sorting both by the same keys")]
    Diff {
        #[arg(help = "Path to the left dataset")]
        left: String,
        #[arg(help = "Path to the right dataset")]
        right: String,
        #[arg(
            long,
            short,
            value_name = "COL[:asc|:desc]",
            help = "Sort criterion; repeat for tie-breakers"
        )]
        sort: Vec<String>,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, default_value = "en", help = "BCP-47 locale tag for collation")]
        locale: String,
        #[arg(long, help = "Also flag cells whose classified types differ")]
        type_check: bool,
        #[arg(long, short, help = "Quiet mode: only show the summary")]
        quiet: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff {
            left,
            right,
            sort,
            format,
            locale,
            type_check,
            quiet,
        } => commands::diff::run(&left, &right, &sort, format, &locale, type_check, quiet),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
