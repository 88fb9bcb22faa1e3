use crate::ingest::Classification;

pub const DEFAULT_STATIC_MARKERS: &[&str] = &["/img/", "/cmsstatic/", "/js/"];

/// Splits requests into static assets and dynamic pages by URI substring.
#[derive(Debug, Clone)]
pub struct StaticClassifier {
    markers: Vec<String>,
}

impl Default for StaticClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_STATIC_MARKERS.iter().map(|m| m.to_string()))
    }
}

impl StaticClassifier {
    pub fn new(markers: impl IntoIterator<Item = String>) -> Self {
        Self {
            markers: markers.into_iter().collect(),
        }
    }

    pub fn classify(&self, uri: &str) -> Classification {
        if self.markers.iter().any(|m| uri.contains(m.as_str())) {
            Classification::Static
        } else {
            Classification::Dynamic
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}
