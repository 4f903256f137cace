use std::process::ExitCode;

use tracing::{error, info, warn};

use streamlite::{app, Catalog};

fn main() -> ExitCode {
    let config = match app::common::load_config() {
        Ok(c) => c,
        Err(e) => {
            app::common::init_logging("error");
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    app::common::init_logging(&config.logs.level);

    let featured = config.catalog.featured;
    let catalog = Catalog::from_entries(config.catalog.movies);
    if catalog.is_empty() {
        info!("Catalog is empty, add [[catalog.movies]] entries to the configuration");
        return ExitCode::SUCCESS;
    }

    for movie in catalog.iter() {
        info!(
            title = movie.title(),
            image_url = movie.image_url(),
            video_url = movie.video_url(),
            "{}",
            movie.description()
        );
    }
    info!("Loaded {} movie(s)", catalog.len());

    if let Some(title) = featured.as_deref() {
        match catalog.find_by_title(title) {
            Some(movie) => info!(
                image_url = movie.image_url(),
                video_url = movie.video_url(),
                "Featured: {}",
                movie.title()
            ),
            None => warn!("Featured movie '{}' is not in the catalog", title),
        }
    }

    ExitCode::SUCCESS
}
