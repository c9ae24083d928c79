mod catalog;
mod error;
mod page;
mod parser;
mod tariff;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tariff::Tariff;

#[derive(Parser)]
#[command(name = "tariff_catalog", about = "Tariff and page catalog over flat-record files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all tariffs plus the total client count
    Show {
        /// JSON tariff file
        file: PathBuf,
    },
    /// Catalog statistics (count, clients, per-category breakdown)
    Stats {
        /// JSON tariff file
        file: PathBuf,
    },
    /// Sort tariffs by monthly fee (ascending), then print
    Sort {
        /// JSON tariff file
        file: PathBuf,
    },
    /// Tariffs with min <= fee <= max, in catalog order
    Filter {
        /// JSON tariff file
        file: PathBuf,
        /// Lower fee bound (inclusive)
        #[arg(long)]
        min: f64,
        /// Upper fee bound (inclusive)
        #[arg(long)]
        max: f64,
    },
    /// Page catalog sorted by title
    Pages {
        /// XML page file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file } => {
            let catalog = parser::tariffs::load(&file)?;
            print_tariffs(catalog.iter());
            println!("\nTotal clients: {}", catalog.total_clients());
        }
        Commands::Stats { file } => {
            let catalog = parser::tariffs::load(&file)?;
            let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
            for t in catalog.iter() {
                *by_kind.entry(t.kind_name()).or_default() += 1;
            }
            println!("Tariffs: {}", catalog.count());
            println!("Clients: {}", catalog.total_clients());
            for (kind, n) in by_kind {
                println!("  {:<8} {}", kind, n);
            }
        }
        Commands::Sort { file } => {
            let mut catalog = parser::tariffs::load(&file)?;
            catalog.sort_by_fee();
            print_tariffs(catalog.iter());
        }
        Commands::Filter { file, min, max } => {
            let catalog = parser::tariffs::load(&file)?;
            let hits = catalog.filter_by_fee(min, max);
            if hits.is_empty() {
                println!("No tariffs with fee in {:.2}..{:.2}", min, max);
            } else {
                print_tariffs(hits.into_iter());
            }
        }
        Commands::Pages { file } => {
            let mut pages = parser::pages::load(&file)?;
            pages.sort_by(page::by_title);
            for p in &pages {
                println!("{}", p);
            }
            println!("\n{} pages", pages.len());
        }
    }

    Ok(())
}

fn print_tariffs<'a>(tariffs: impl Iterator<Item = &'a Tariff>) {
    println!(
        "| {:<16} | {:>8} | {:>7} | {}",
        "Name", "Fee", "Clients", "Details"
    );
    println!("{}", "-".repeat(60));
    for t in tariffs {
        println!("{}", t);
    }
}
