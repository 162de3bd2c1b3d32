use serde::{Deserialize, Serialize};

/// Lowercased keyword list matched by substring against lowercase text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    /// `text` must already be lowercase.
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|k| text.contains(k.as_str()))
    }

    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|k| text.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.0.iter().filter(|k| text.contains(k.as_str())).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0
    }
}

impl From<&[&str]> for KeywordSet {
    fn from(words: &[&str]) -> Self {
        Self::new(words.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_normalized_on_construction() {
        let set = KeywordSet::new(["  Sandal ", "", "BOOT"]);
        assert_eq!(set.len(), 2);
        assert!(set.matches("leather boots"));
        assert_eq!(set.first_match("strappy sandals"), Some("sandal"));
    }

    #[test]
    fn deserialized_sets_are_lowercased() {
        let set: KeywordSet = serde_json::from_str(r#"["Blazer", "COAT"]"#).unwrap();
        assert!(set.matches("wool coat"));
        assert_eq!(set.count_matches("blazer coat"), 2);
    }
}
