use lfx_insights_config::ClassificationConfig;
use serde::{
    Deserialize,
    Serialize,
};
use strum::Display;

/// Heuristic label telling libraries apart from end-user applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ProjectType {
    #[strum(to_string = "Library/Tool")]
    #[serde(rename = "Library/Tool")]
    LibraryTool,
    #[strum(to_string = "End-User App")]
    #[serde(rename = "End-User App")]
    EndUserApp,
    #[strum(to_string = "Hybrid/Platform")]
    #[serde(rename = "Hybrid/Platform")]
    HybridPlatform,
    #[strum(to_string = "Unclassified")]
    #[serde(rename = "Unclassified")]
    Unclassified,
}

/// Labels projects by looking for keywords anywhere in their lowercased
/// collection tags and name. Matching is by substring, so `app` also matches
/// `mobile-apps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    library_keywords: Vec<String>,
    app_keywords: Vec<String>,
}

impl Classifier {
    pub fn new<S: AsRef<str>>(
        library_keywords: impl IntoIterator<Item = S>,
        app_keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            library_keywords: library_keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect(),
            app_keywords: app_keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn classify(&self, name: &str, collections: Option<&[String]>) -> ProjectType {
        let text = Self::text(name, collections);
        let is_library = self.library_keywords.iter().any(|k| text.contains(k.as_str()));
        let is_app = self.app_keywords.iter().any(|k| text.contains(k.as_str()));

        match (is_library, is_app) {
            (true, false) => ProjectType::LibraryTool,
            (false, true) => ProjectType::EndUserApp,
            (true, true) => ProjectType::HybridPlatform,
            (false, false) => ProjectType::Unclassified,
        }
    }

    fn text(name: &str, collections: Option<&[String]>) -> String {
        let collections = collections.map(|slugs| slugs.join(" ")).unwrap_or_default();
        format!("{} {}", collections, name).to_lowercase()
    }
}

impl From<&ClassificationConfig> for Classifier {
    fn from(config: &ClassificationConfig) -> Self {
        Self::new(&config.library_keywords, &config.app_keywords)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from(&ClassificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tags(slugs: &[&str]) -> Vec<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn labels_cover_all_four_cases() {
        let classifier = Classifier::default();

        assert_eq!(classifier.classify("OpenTelemetry SDK", None), ProjectType::LibraryTool);
        assert_eq!(
            classifier.classify("Grafana", Some(&tags(&["observability-dashboard"])[..])),
            ProjectType::EndUserApp
        );
        assert_eq!(
            classifier.classify("Kafka Connector", Some(&tags(&["data-platform"])[..])),
            ProjectType::HybridPlatform
        );
        assert_eq!(classifier.classify("Zephyr", Some(&tags(&["iot", "rtos"])[..])), ProjectType::Unclassified);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("MobileKit", None), ProjectType::EndUserApp);
        assert_eq!(classifier.classify("FRAMEWORKS", None), ProjectType::LibraryTool);
    }

    #[test]
    fn configured_keywords_replace_defaults() {
        let classifier = Classifier::new(vec!["Crate"], vec!["CLI"]);
        assert_eq!(classifier.classify("serde crate", None), ProjectType::LibraryTool);
        assert_eq!(classifier.classify("ripgrep cli", None), ProjectType::EndUserApp);
        assert_eq!(classifier.classify("Linux Kernel SDK", None), ProjectType::Unclassified);
    }

    #[test]
    fn labels_serialize_as_display_names() {
        assert_eq!(
            serde_json::to_value(ProjectType::HybridPlatform).unwrap(),
            serde_json::json!("Hybrid/Platform")
        );
        assert_eq!(ProjectType::EndUserApp.to_string(), "End-User App");
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(
            name in ".{0,24}",
            collections in proptest::option::of(proptest::collection::vec("[a-z-]{0,12}", 0..4)),
        ) {
            let classifier = Classifier::default();
            let first = classifier.classify(&name, collections.as_deref());
            let second = classifier.classify(&name, collections.as_deref());
            prop_assert_eq!(first, second);
        }
    }
}
