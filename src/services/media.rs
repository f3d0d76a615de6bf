/// Turns stored picture references into absolute URLs
#[derive(Debug, Clone)]
pub struct PictureUrls {
    base_url: String,
}

impl PictureUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute references pass through, relative ones hang off the media root
    pub fn resolve(&self, picture: Option<&str>) -> Option<String> {
        let picture = picture.filter(|p| !p.is_empty())?;

        if picture.starts_with("http://") || picture.starts_with("https://") {
            return Some(picture.to_string());
        }

        Some(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            picture.trim_start_matches('/')
        ))
    }
}
