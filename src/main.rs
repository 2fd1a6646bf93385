use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use ochmo_scraper::{output, CollectionScraper, HttpFetcher, LopdfText, Settings};

#[derive(Parser)]
#[command(name = "ochmo_scraper", about = "NASA OCHMO technical brief scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print brief URLs found on the listing page
    List {
        /// Listing page (default: settings / OCHMO technical briefs page)
        #[arg(long)]
        url: Option<String>,
        /// Max URLs to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Fetch and parse briefs, then print the records
    Scrape {
        /// Listing page (default: settings / OCHMO technical briefs page)
        #[arg(long)]
        url: Option<String>,
        /// Max briefs to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Briefs fetched at once
        #[arg(short = 'c', long)]
        concurrency: Option<usize>,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let fetcher = HttpFetcher::new(settings.timeout(), &settings.user_agent)
        .context("Failed to build HTTP client")?;

    match cli.command {
        Commands::List { url, limit } => {
            let listing_url = url.unwrap_or(settings.listing_url);
            let scraper = CollectionScraper::new(fetcher, LopdfText);
            let mut urls = scraper.discover_document_urls(&listing_url).await;
            if let Some(limit) = limit.or(settings.limit) {
                urls.truncate(limit);
            }
            if urls.is_empty() {
                println!("No brief links found on {}", listing_url);
            }
            for u in &urls {
                println!("{}", u);
            }
        }
        Commands::Scrape { url, limit, concurrency, format } => {
            let listing_url = url.unwrap_or(settings.listing_url);
            let scraper = CollectionScraper::new(fetcher, LopdfText)
                .with_concurrency(concurrency.unwrap_or(settings.concurrency))
                .with_progress(true);
            let reports = scraper
                .scrape_reports(&listing_url, limit.or(settings.limit))
                .await;

            match format {
                Format::Text => {
                    println!("\n--- Scraping Complete ---\n");
                    for r in &reports {
                        println!("{}\n", output::render_text(r));
                    }
                    println!("{} reports", reports.len());
                }
                Format::Json => println!("{}", output::render_json(&reports)?),
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
