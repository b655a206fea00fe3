/// Suffix appended to source handles entered as a bare name
const DEFAULT_HANDLE_SUFFIX: &str = ".bsky.social";

/// Qualify a source handle: a bare name gets the default `.bsky.social` suffix
pub fn normalize_source_handle(handle: &str) -> String {
    if handle.contains('.') {
        handle.to_string()
    } else {
        format!("{handle}{DEFAULT_HANDLE_SUFFIX}")
    }
}

/// Normalize a desired handle: trim, lower-case, and qualify a bare local
/// name with the target domain
pub fn normalize_candidate(desired: &str, domain: &str) -> String {
    let desired = desired.trim().to_lowercase();
    if desired.contains('.') {
        desired
    } else {
        format!("{desired}.{domain}")
    }
}

/// Extract the local-name portion of a candidate.
///
/// The domain is matched as a literal suffix rather than being embedded in a
/// pattern, so metacharacters in a domain name cannot widen the match. The
/// local part must be non-empty and limited to `[a-z0-9_-]` (candidates are
/// lower-cased before this check). Returns `None` for anything else.
pub fn local_name<'a>(candidate: &'a str, domain: &str) -> Option<&'a str> {
    let local = candidate.strip_suffix(&format!(".{domain}"))?;
    if local.is_empty() {
        return None;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return None;
    }
    Some(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_source_handle_gets_default_suffix() {
        assert_eq!(normalize_source_handle("alice"), "alice.bsky.social");
    }

    #[test]
    fn test_qualified_source_handle_unchanged() {
        assert_eq!(
            normalize_source_handle("alice.bsky.social"),
            "alice.bsky.social"
        );
        assert_eq!(normalize_source_handle("alice.example.com"), "alice.example.com");
    }

    #[test]
    fn test_candidate_trimmed_and_lowercased() {
        assert_eq!(
            normalize_candidate(" Bob ", "example.social"),
            "bob.example.social"
        );
    }

    #[test]
    fn test_candidate_bare_name_gets_domain() {
        assert_eq!(
            normalize_candidate("Alice", "example.social"),
            "alice.example.social"
        );
    }

    #[test]
    fn test_candidate_with_dot_left_as_is() {
        assert_eq!(
            normalize_candidate("alice.example.social", "example.social"),
            "alice.example.social"
        );
    }

    #[test]
    fn test_local_name_extracted() {
        assert_eq!(
            local_name("alice.example.social", "example.social"),
            Some("alice")
        );
        assert_eq!(
            local_name("al-ice_99.example.social", "example.social"),
            Some("al-ice_99")
        );
    }

    #[test]
    fn test_wrong_domain_rejected() {
        assert_eq!(local_name("alice.other.social", "example.social"), None);
    }

    #[test]
    fn test_domain_dot_is_literal() {
        // a regex built from the domain would let '.' match any character
        assert_eq!(local_name("alicexexample.social", "example.social"), None);
        assert_eq!(local_name("alice.examplexsocial", "example.social"), None);
    }

    #[test]
    fn test_empty_local_name_rejected() {
        assert_eq!(local_name(".example.social", "example.social"), None);
        assert_eq!(local_name("example.social", "example.social"), None);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert_eq!(local_name("al ice.example.social", "example.social"), None);
        assert_eq!(local_name("al.ice.example.social", "example.social"), None);
        assert_eq!(local_name("ålice.example.social", "example.social"), None);
    }

    #[test]
    fn test_whitespace_only_candidate_rejected() {
        let candidate = normalize_candidate("   ", "example.social");
        assert_eq!(local_name(&candidate, "example.social"), None);
    }
}
