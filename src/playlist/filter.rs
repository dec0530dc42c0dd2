use crate::config::PlaylistSettings;

/// Case-insensitive title substring filter for instrumental/karaoke tracks.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    patterns: Vec<String>,
}

impl TitleFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn from_settings(settings: &PlaylistSettings) -> Self {
        Self::new(&settings.exclude_patterns)
    }

    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.patterns.iter().any(|p| title.contains(p.as_str()))
    }
}

impl Default for TitleFilter {
    fn default() -> Self {
        Self::from_settings(&PlaylistSettings::default())
    }
}
