//! Parameter extraction — `key=value` pairs after the first colon.

/// Ordered parameter map parsed from a single user message.
///
/// Insertion order is preserved; a repeated key overwrites its value in
/// place and keeps its original position. There is no quoting or escaping
/// support — a comma or equals sign inside a value will split the segment.
/// That is an accepted limitation of the simple syntax, not a defect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, String)>,
}

impl ParamMap {
    /// Parses the message body. Everything after the first colon is split
    /// on commas; each segment containing an equals sign is split on the
    /// first one into a trimmed key and value. Segments without an equals
    /// sign are dropped silently. No colon means an empty map.
    pub fn parse(message: &str) -> Self {
        let mut params = ParamMap::default();
        let Some((_, tail)) = message.split_once(':') else {
            return params;
        };
        for segment in tail.split(',') {
            if let Some((key, value)) = segment.split_once('=') {
                params.insert(key.trim(), value.trim());
            }
        }
        params
    }

    fn insert(&mut self, key: &str, value: &str) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The value for `key` when it is present and non-empty.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colon_returns_empty_map() {
        assert!(ParamMap::parse("refine this role please").is_empty());
    }

    #[test]
    fn test_parses_trimmed_pairs_after_first_colon() {
        let params = ParamMap::parse("draft jd: role_title = Data Scientist , location=Melbourne");
        assert_eq!(params.get("role_title"), Some("Data Scientist"));
        assert_eq!(params.get("location"), Some("Melbourne"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_splits_on_first_colon_and_first_equals_only() {
        let params = ParamMap::parse("note: jd_link=https://jobs.example.com/a=b");
        // The colon inside the URL belongs to the value; the first '='
        // splits key from value, the second stays in the value.
        assert_eq!(params.get("jd_link"), Some("https://jobs.example.com/a=b"));
    }

    #[test]
    fn test_segments_without_equals_are_dropped() {
        let params = ParamMap::parse("triage: open_roles=3, just a note, pending_feedback=2");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("open_roles"), Some("3"));
        assert_eq!(params.get("pending_feedback"), Some("2"));
    }

    #[test]
    fn test_order_preserved_and_last_write_wins() {
        let params = ParamMap::parse("x: a=1, b=2, a=3");
        assert_eq!(params.get("a"), Some("3"));
        // Repeated key keeps its original position.
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_is_idempotent_on_well_formed_input() {
        let message = "plan: role_title=SRE, location=Sydney, must_have=Kubernetes";
        assert_eq!(ParamMap::parse(message), ParamMap::parse(message));
    }

    #[test]
    fn test_commas_inside_values_corrupt_parsing_by_design() {
        // Accepted limitation: the comma splits the value.
        let params = ParamMap::parse("guide: competencies=SQL, Python");
        assert_eq!(params.get("competencies"), Some("SQL"));
        assert_eq!(params.len(), 1);
    }
}
