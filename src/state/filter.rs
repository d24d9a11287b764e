// Contact name filtering.
// Case-insensitive substring match. The query is used exactly as typed,
// including leading and trailing whitespace.

use crate::data::Contact;

/// True when `name` contains `query`, ignoring case. An empty query
/// matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Contacts whose names match the query, preserving input order.
pub fn filter_by_name<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| name_matches(&contact.name, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PageData;

    #[test]
    fn test_empty_query_matches_all() {
        let data = PageData::sample();
        let visible = filter_by_name(&data.contacts, "");
        assert_eq!(visible.len(), data.contacts.len());
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let data = PageData::sample();
        let visible = filter_by_name(&data.contacts, "ali");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[0].name, "Alice Wonderland");

        // Same result regardless of query case.
        let upper = filter_by_name(&data.contacts, "ALI");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, "1");
    }

    #[test]
    fn test_match_anywhere_in_name() {
        let data = PageData::sample();
        let visible = filter_by_name(&data.contacts, "builder");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bob The Builder");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let data = PageData::sample();
        let visible = filter_by_name(&data.contacts, "zzz");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_whitespace_is_significant() {
        let data = PageData::sample();
        // The query is not trimmed, so a trailing space must also match.
        let visible = filter_by_name(&data.contacts, "bob ");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bob The Builder");

        // "gallagher" ends the name, so "gallagher " cannot match.
        assert!(filter_by_name(&data.contacts, "gallagher ").is_empty());
    }
}
