use std::path::Path;

/// Selects files whose name contains a marker, ignoring case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFilter {
    marker: String,
}

impl MarkerFilter {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Check whether a file name contains the marker
    pub fn matches_name(&self, file_name: &str) -> bool {
        file_name.to_lowercase().contains(&self.marker)
    }

    /// Check the final component of `path`. Non UTF-8 names are compared lossily.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.matches_name(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}
