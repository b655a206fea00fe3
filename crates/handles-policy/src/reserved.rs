use std::collections::{HashMap, HashSet};

/// Per-domain deny-lists of local names reserved for the domain owner.
///
/// Configured as a JSON object mapping a domain to its reserved names,
/// e.g. `{"army.social": ["leclerc", "16"]}`. Comparison is case-insensitive;
/// entries are lower-cased at parse time.
#[derive(Debug, Clone, Default)]
pub struct ReservedHandles {
    by_domain: HashMap<String, HashSet<String>>,
}

impl ReservedHandles {
    /// Parse reserved lists from their JSON configuration form
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let by_domain = raw
            .into_iter()
            .map(|(domain, names)| {
                let names = names.into_iter().map(|n| n.to_lowercase()).collect();
                (domain.to_lowercase(), names)
            })
            .collect();
        Ok(Self { by_domain })
    }

    /// Merge another set of lists into this one, unioning per-domain entries
    pub fn extend(&mut self, other: ReservedHandles) {
        for (domain, names) in other.by_domain {
            self.by_domain.entry(domain).or_default().extend(names);
        }
    }

    /// Whether a local name is reserved under the given domain
    pub fn is_reserved(&self, domain: &str, local_name: &str) -> bool {
        self.by_domain
            .get(&domain.to_lowercase())
            .is_some_and(|names| names.contains(&local_name.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReservedHandles {
        ReservedHandles::parse(r#"{"army.social": ["Leclerc", "16", "Charles"]}"#).unwrap()
    }

    #[test]
    fn test_reserved_name_matches() {
        let reserved = sample();
        assert!(reserved.is_reserved("army.social", "leclerc"));
        assert!(reserved.is_reserved("army.social", "16"));
    }

    #[test]
    fn test_case_insensitive_both_sides() {
        let reserved = sample();
        assert!(reserved.is_reserved("army.social", "LECLERC"));
        assert!(reserved.is_reserved("ARMY.SOCIAL", "charles"));
    }

    #[test]
    fn test_scoped_to_domain() {
        let reserved = sample();
        assert!(!reserved.is_reserved("example.social", "leclerc"));
    }

    #[test]
    fn test_unlisted_name_allowed() {
        let reserved = sample();
        assert!(!reserved.is_reserved("army.social", "alice"));
    }

    #[test]
    fn test_extend_unions_entries() {
        let mut reserved = sample();
        reserved.extend(ReservedHandles::parse(r#"{"army.social": ["sedici"]}"#).unwrap());
        assert!(reserved.is_reserved("army.social", "sedici"));
        assert!(reserved.is_reserved("army.social", "leclerc"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(ReservedHandles::parse("not json").is_err());
    }
}
