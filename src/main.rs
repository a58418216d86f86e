use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use moviedeck::catalog::{CatalogClient, MovieId};
use moviedeck::config::Config;
use moviedeck::logging::init_tracing;
use moviedeck::pagination::Paginator;
use moviedeck::ui::fetch::RequestId;
use moviedeck::ui::query::QueryStatus;
use moviedeck::ui::render::Renderer;
use moviedeck::ui::theme::Theme;
use moviedeck::ui::{DetailController, ListingController, SearchController, SearchEvent};

#[derive(Parser, Debug)]
#[command(
    name = "moviedeck",
    version,
    about = "Browse trending movies, search the catalog and look up movie details"
)]
struct Cli {
    /// Config file (default: ~/.config/moviedeck/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show this week's trending movies
    Trending {
        /// Grid page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Hold the top result back as a spotlight above the grid
        #[arg(long)]
        spotlight: bool,
        /// Render in dark mode
        #[arg(long)]
        dark: bool,
    },
    /// Search movies by title; reads one query per line from stdin when TERM is omitted
    Search {
        term: Option<String>,
        /// Grid page to show (1-based); needs TERM
        #[arg(long, default_value_t = 1, requires = "term")]
        page: usize,
    },
    /// Show details for one movie
    Movie { id: MovieId },
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let catalog = Arc::new(CatalogClient::new(&config.catalog)?);
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let pagination = Paginator::new(config.ui.page_size);

    match cli.command {
        Command::Trending {
            page,
            spotlight,
            dark,
        } => {
            let mut listing = ListingController::new(
                catalog,
                pagination.with_spotlight(spotlight || config.ui.spotlight),
            )
            .with_theme(Theme::from_dark_mode(dark || config.ui.dark_mode));
            listing.mount();
            listing.settle().await;
            listing.select_page(page);

            let renderer = Renderer::new(listing.theme(), color);
            print!("{}", renderer.grid("Trending Movies", &listing.view()));
        }
        Command::Search {
            term: Some(term),
            page,
        } => {
            let quiet = Duration::from_millis(config.ui.debounce_ms);
            let mut search = SearchController::new(catalog, pagination, quiet);
            search.search_now(term);
            search.settle().await;
            search.select_page(page);

            let renderer = Renderer::new(Theme::Dark, color);
            print!("{}", renderer.grid("Search", &search.view()));
        }
        Command::Search { term: None, .. } => {
            let quiet = Duration::from_millis(config.ui.debounce_ms);
            let search = SearchController::new(catalog, pagination, quiet);
            interactive_search(search, Renderer::new(Theme::Dark, color)).await;
        }
        Command::Movie { id } => {
            let mut detail = DetailController::new(catalog);
            detail.open(id);
            detail.settle().await;

            let renderer = Renderer::new(Theme::Dark, color);
            print!("{}", renderer.detail(detail.state()));
        }
    }

    Ok(())
}

/// Feed stdin lines into the search view and print each settled result.
async fn interactive_search(mut search: SearchController<CatalogClient>, renderer: Renderer) {
    let input = search.input_sender();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if input.send(SearchEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = input.send(SearchEvent::Closed);
    });

    let mut last_printed: Option<(RequestId, QueryStatus)> = None;
    while search.step().await {
        let state = search.state();
        if !matches!(state.status, QueryStatus::Ready | QueryStatus::Failed) {
            continue;
        }
        let key = (state.latest_request, state.status);
        if last_printed == Some(key) {
            continue;
        }
        last_printed = Some(key);
        print!("{}", renderer.grid(&format!("Search: {}", state.query), &search.view()));
    }
}
