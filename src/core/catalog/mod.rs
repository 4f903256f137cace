use tracing::debug;

use crate::config::MovieEntry;
use crate::models::Movie;

/// In-memory list of movies, kept in the order they were configured.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn from_entries(entries: impl IntoIterator<Item = MovieEntry>) -> Self {
        let movies = entries
            .into_iter()
            .map(|e| Movie::new(e.title, e.description, e.image_url, e.video_url))
            .collect::<Vec<_>>();
        debug!("Built catalog with {} movie(s)", movies.len());
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Exact, case-sensitive match. First entry wins when titles repeat.
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title() == title)
    }
}
