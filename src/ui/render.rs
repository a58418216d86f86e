//! Plain-text rendering of grid and detail views.

use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use crate::catalog::{MovieDetail, MovieSummary};
use crate::ui::detail::{DetailPhase, DetailState};
use crate::ui::query::QueryStatus;
use crate::ui::theme::{Theme, MUTED, RATING, STATUS_ERROR};
use crate::ui::view::GridView;

pub struct Renderer {
    theme: Theme,
    color: bool,
}

impl Renderer {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            text.with(self.theme.accent()).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn card_line(&self, movie: &MovieSummary) -> String {
        format!(
            "  {:>8}  {}  {}",
            self.paint(&format!("#{}", movie.id), MUTED),
            self.paint(&movie.title, self.theme.text()),
            self.paint(&format!("Rating: {:.1}", movie.vote_average), RATING),
        )
    }

    pub fn grid(&self, heading: &str, view: &GridView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title(heading));

        if let Some(backdrop) = &view.backdrop {
            let _ = writeln!(out, "{}", self.paint(&format!("Backdrop: {}", backdrop.title), MUTED));
        }

        match view.status {
            QueryStatus::Loading => {
                let _ = writeln!(out, "Loading...");
            }
            QueryStatus::Failed => {
                let message = view.error.as_deref().unwrap_or("Request failed");
                let _ = writeln!(out, "{}", self.paint(message, STATUS_ERROR));
                return out;
            }
            QueryStatus::Idle | QueryStatus::Ready => {}
        }

        if let Some(spotlight) = &view.spotlight {
            let _ = writeln!(
                out,
                "{} {} ({:.1})",
                self.paint("Spotlight:", self.theme.accent()),
                spotlight.title,
                spotlight.vote_average
            );
        }

        for movie in &view.cards {
            let _ = writeln!(out, "{}", self.card_line(movie));
        }

        if view.status == QueryStatus::Ready && view.is_empty() && !view.query.trim().is_empty() {
            let _ = writeln!(out, "{}", self.paint("No results.", MUTED));
        }

        if view.shows_pager() {
            let buttons: Vec<String> = (1..=view.page_count)
                .map(|page| {
                    if page == view.page {
                        self.paint(&format!("[{}]", page), self.theme.accent())
                    } else {
                        page.to_string()
                    }
                })
                .collect();
            let _ = writeln!(out, "Page {}/{}  {}", view.page, view.page_count, buttons.join(" "));
        }

        out
    }

    pub fn detail(&self, state: &DetailState) -> String {
        match &state.phase {
            DetailPhase::Idle => String::new(),
            DetailPhase::Loading { .. } => "Loading...\n".to_string(),
            DetailPhase::NotFound { .. } => "Movie not found.\n".to_string(),
            DetailPhase::Failed { message, .. } => format!("{}\n", self.paint(message, STATUS_ERROR)),
            DetailPhase::Ready { detail } => self.movie(detail),
        }
    }

    fn movie(&self, detail: &MovieDetail) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title(detail.title()));

        if let Some(release_date) = detail.release_date.as_deref().filter(|d| !d.is_empty()) {
            let runtime = detail
                .runtime_minutes
                .map(|m| m.to_string())
                .unwrap_or_else(|| "?".to_string());
            let _ = writeln!(out, "{}", self.paint(&format!("{} | {} min", release_date, runtime), MUTED));
        }

        let _ = writeln!(
            out,
            "{}",
            self.paint(&format!("Rating: {:.1}", detail.summary.vote_average), RATING)
        );

        if let Some(overview) = detail.overview.as_deref().filter(|o| !o.is_empty()) {
            let _ = writeln!(out, "\n{}\n", overview);
        }

        if !detail.genres.is_empty() {
            let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
            let _ = writeln!(out, "Genres: {}", names.join(", "));
        }

        if !detail.production_companies.is_empty() {
            let names: Vec<&str> = detail
                .production_companies
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            let _ = writeln!(out, "Production Companies: {}", names.join(", "));
        }

        out
    }
}
