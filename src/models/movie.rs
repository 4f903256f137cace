/// A single catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    description: String,
    image_url: String, // cover art locator
    video_url: String, // playable content locator
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        video_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            video_url: video_url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Movie {
        Movie::new(
            "Inception",
            "A thief who steals secrets via dreams",
            "https://img/inception.jpg",
            "https://vid/inception.mp4",
        )
    }

    #[test]
    fn accessors_return_constructor_values() {
        let movie = inception();
        assert_eq!(movie.title(), "Inception");
        assert_eq!(movie.description(), "A thief who steals secrets via dreams");
        assert_eq!(movie.image_url(), "https://img/inception.jpg");
        assert_eq!(movie.video_url(), "https://vid/inception.mp4");
    }

    #[test]
    fn empty_fields_are_accepted() {
        let movie = Movie::new("", "", "", "");
        assert_eq!(movie.title(), "");
        assert_eq!(movie.description(), "");
        assert_eq!(movie.image_url(), "");
        assert_eq!(movie.video_url(), "");
    }

    #[test]
    fn arbitrary_text_is_kept_verbatim() {
        let title = String::from("  Amélie (2001) ");
        let movie = Movie::new(title.clone(), "not a url", "ftp://x", "\n");
        assert_eq!(movie.title(), title);
        assert_eq!(movie.image_url(), "ftp://x");
        assert_eq!(movie.video_url(), "\n");
    }

    #[test]
    fn instances_do_not_share_state() {
        let a = inception();
        let b = inception();
        assert_eq!(a, b);
        assert_ne!(a.title().as_ptr(), b.title().as_ptr());

        let c = a.clone();
        drop(a);
        assert_eq!(c.title(), "Inception");
        assert_eq!(c, b);
    }

    #[test]
    fn repeated_reads_are_stable() {
        let movie = inception();
        let first = movie.description().to_owned();
        for _ in 0..3 {
            assert_eq!(movie.description(), first);
        }
    }
}
