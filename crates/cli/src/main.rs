use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::Criteria;

use cli::{render, CatalogClient, LoadState, Session};

/// movie-catalog - Browse the movie collection
#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Explore the whole collection of movies", long_about = None)]
struct Cli {
    /// Base URL of the catalog server
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies, optionally sorted and filtered
    List {
        /// Sort by year: "recent" (ascending) or "old" (descending)
        #[arg(long, value_parser = ["recent", "old"])]
        year: Option<String>,

        /// Minimum rating: 0 (all), 5 or 8
        #[arg(long, value_parser = ["0", "5", "8"])]
        rating: Option<String>,

        /// Only movies of this genre (exact, case-sensitive)
        #[arg(long)]
        genre: Option<String>,

        /// Print the list as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the genres available for filtering
    Genres,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = CatalogClient::new(cli.url.as_str(), Duration::from_secs(cli.timeout_secs))
        .context("Failed to create catalog client")?;

    let mut session = Session::new();
    load_catalog(&client, &mut session).await?;

    match cli.command {
        Commands::List {
            year,
            rating,
            genre,
            json,
        } => handle_list(&mut session, year, rating, genre, json)?,
        Commands::Genres => handle_genres(&session),
    }

    Ok(())
}

/// Fetch the catalog into the session; a failed fetch ends the run
async fn load_catalog(client: &CatalogClient, session: &mut Session) -> Result<()> {
    eprintln!("Loading catalog from {}...", client.catalog_url());

    let ticket = session.begin_fetch();
    let result = client.fetch_catalog().await;
    session.complete_fetch(ticket, result);

    match session.state() {
        LoadState::Ready(snapshot) => {
            eprintln!(
                "{} Loaded {} movies",
                "✓".green(),
                snapshot.movies.len()
            );
            Ok(())
        }
        LoadState::Failed(reason) => bail!("Could not load the catalog: {}", reason),
        LoadState::Loading => Err(anyhow!("Catalog fetch did not complete")),
    }
}

/// Handle the 'list' command
fn handle_list(
    session: &mut Session,
    year: Option<String>,
    rating: Option<String>,
    genre: Option<String>,
    json: bool,
) -> Result<()> {
    let criteria = Criteria::from_selection(year.as_deref(), rating.as_deref(), genre.as_deref())
        .context("Invalid list criteria")?;
    session.set_criteria(criteria);
    tracing::debug!("Listing movies with {:?}", session.criteria());

    let movies = session
        .view()
        .ok_or_else(|| anyhow!("Catalog is not loaded"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&movies)?);
    } else {
        render::print_movies(&movies);
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(session: &Session) {
    render::print_genres(&session.genre_names());
}
