mod browser;
mod clean;
mod dashboard;
mod dataset;
mod extract;
mod normalize;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use dashboard::Filters;

const DEFAULT_SEARCH_URL: &str = "https://www.saramin.co.kr/zf_user/search?search_area=main&search_done=y&search_optional_item=n&searchType=search&searchword=rpa";
const DEFAULT_DATASET: &str = "saramin_jobs.csv";

#[derive(Parser)]
#[command(name = "saramin_scraper", about = "Saramin job-listing scraper and dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the search page, extract listings, write the CSV dataset
    Scrape {
        /// Search-results URL to scrape
        #[arg(long, default_value = DEFAULT_SEARCH_URL)]
        url: String,
        /// Output CSV path
        #[arg(short, long, default_value = DEFAULT_DATASET)]
        output: PathBuf,
    },
    /// Filterable listing table over the collected dataset
    Overview {
        /// Dataset CSV path
        #[arg(short, long, default_value = DEFAULT_DATASET)]
        input: PathBuf,
        /// Filter by location bucket (e.g. "서울")
        #[arg(long)]
        location: Option<String>,
        /// Filter by experience bucket (e.g. "신입")
        #[arg(long)]
        experience: Option<String>,
        /// Filter by employment bucket (e.g. "정규직")
        #[arg(long)]
        employment: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Aggregate statistics over the collected dataset
    Stats {
        /// Dataset CSV path
        #[arg(short, long, default_value = DEFAULT_DATASET)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape { url, output } => run_scrape(&url, &output),
        Commands::Overview {
            input,
            location,
            experience,
            employment,
            limit,
        } => run_overview(
            &input,
            Filters {
                location,
                experience,
                employment,
            },
            limit,
        ),
        Commands::Stats { input } => run_stats(&input),
    }
}

fn run_scrape(url: &str, output: &Path) -> Result<()> {
    println!("Scraping {}", url);

    let html = browser::render_page(url)?;
    let mut jobs = extract::collect_listings(&html);
    if jobs.is_empty() {
        println!("No listings collected.");
        return Ok(());
    }

    normalize::normalize_all(&mut jobs);

    for (i, job) in jobs.iter().enumerate() {
        println!("\n--- Listing {} ---", i + 1);
        println!("Title:      {}", job.title);
        println!("Company:    {}", job.company);
        println!("Location:   {}", job.location);
        println!("Experience: {}", job.experience);
        println!("Education:  {}", job.education);
        println!("Employment: {}", job.employment_type);
        println!("Salary:     {}", job.salary);
        println!("Deadline:   {}", job.deadline);
        println!("Link:       {}", job.link);
    }

    if dataset::save_csv(&jobs, output)? {
        println!("\nSaved {} listings to {}", jobs.len(), output.display());
    } else {
        println!("\nNothing to save.");
    }
    Ok(())
}

fn run_overview(input: &Path, filters: Filters, limit: usize) -> Result<()> {
    let records = dashboard::load(input)?;
    let filtered = dashboard::apply_filters(&records, &filters);
    if filtered.is_empty() {
        println!("No listings match the selected filters.");
        return Ok(());
    }

    println!(
        "{:>3} | {:<28} | {:<16} | {:<10} | {:<10} | {:<8} | {:<8}",
        "#", "Title", "Company", "Location", "Experience", "Type", "Deadline"
    );
    println!("{}", "-".repeat(100));

    for (i, r) in filtered.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<28} | {:<16} | {:<10} | {:<10} | {:<8} | {:<8}",
            i + 1,
            truncate(&r.listing.title, 28),
            truncate(&r.listing.company, 16),
            truncate(&r.location_bucket, 10),
            truncate(&r.experience_bucket, 10),
            truncate(&r.employment_bucket, 8),
            r.listing.deadline,
        );
    }

    println!(
        "\n{} of {} listings shown",
        filtered.len().min(limit),
        filtered.len()
    );
    Ok(())
}

fn run_stats(input: &Path) -> Result<()> {
    let records = dashboard::load(input)?;
    let refs: Vec<&dashboard::DashboardRecord> = records.iter().collect();
    if refs.is_empty() {
        println!("Dataset is empty. Run 'scrape' first.");
        return Ok(());
    }

    let m = dashboard::metrics(&refs);
    println!("Listings:   {}", m.total);
    println!("Companies:  {}", m.companies);
    println!("Full-time:  {}", m.full_time);
    println!("Seoul area: {}", m.seoul);

    print_frequency(
        "Location",
        dashboard::frequency(&refs, |r| r.location_bucket.as_str()),
    );
    print_frequency(
        "Experience",
        dashboard::frequency(&refs, |r| r.experience_bucket.as_str()),
    );
    print_frequency(
        "Employment",
        dashboard::frequency(&refs, |r| r.employment_bucket.as_str()),
    );
    print_frequency(
        "Salary",
        dashboard::frequency(&refs, |r| r.salary_bucket.as_str()),
    );
    print_frequency("Top companies", dashboard::top_companies(&refs, 10));
    print_frequency("Title keywords", dashboard::title_keyword_counts(&refs));

    Ok(())
}

fn print_frequency(label: &str, counts: Vec<(String, usize)>) {
    println!("\n--- {} ---", label);
    if counts.is_empty() {
        println!("(none)");
        return;
    }
    for (value, count) in counts {
        println!("{:>4}  {}", count, value);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
