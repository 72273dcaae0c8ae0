//! Terminal rendering of the movie list.

use colored::Colorize;
use pipeline::MovieView;

/// Characters of plot shown per movie
const PLOT_PREVIEW_CHARS: usize = 80;

/// Shorten a plot to its preview, always followed by an ellipsis
pub fn plot_preview(plot: &str) -> String {
    let preview: String = plot.chars().take(PLOT_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// Year and rating line; None when the movie has neither
pub fn year_and_rating(movie: &MovieView) -> Option<String> {
    match (movie.year(), movie.rating()) {
        (None, None) => None,
        (year, rating) => {
            let year = year.map(|y| y.to_string()).unwrap_or_default();
            let rating = rating.map(|r| format!("★ {}", r)).unwrap_or_default();
            Some(format!("{}  {}", year, rating).trim().to_string())
        }
    }
}

/// Print the list, or the empty-result message
pub fn print_movies(movies: &[MovieView]) {
    if movies.is_empty() {
        println!("{}", "No movies found.".yellow());
        return;
    }

    for (idx, movie) in movies.iter().enumerate() {
        println!(
            "{}. {}",
            (idx + 1).to_string().green(),
            movie.movie.title.bold()
        );
        if let Some(line) = year_and_rating(movie) {
            println!("   {}", line.cyan());
        }
        if !movie.genres.is_empty() {
            println!("   [{}]", movie.genres.join(", "));
        }
        println!("   {}", plot_preview(&movie.movie.plot).dimmed());
        if let Some(url) = &movie.movie.wikipedia_url {
            println!("   More: {}", url.underline());
        }
    }
    println!("{}", format!("{} movie(s)", movies.len()).bold().blue());
}

/// Print the genre names offered by the genre selector
pub fn print_genres(names: &[&str]) {
    println!("{}", "Genres:".bold().blue());
    for name in names {
        println!("{}{}", "• ".green(), name);
    }
}
