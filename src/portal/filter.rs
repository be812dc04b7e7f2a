use itertools::Itertools;

use crate::model::HackathonListing;

/// Listings whose title or any tag contains `term`, ignoring case.
///
/// An empty term keeps everything. Source order is preserved.
pub fn filter<'a>(records: &'a [HackathonListing], term: &str) -> Vec<&'a HackathonListing> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .collect_vec()
}

fn matches(record: &HackathonListing, needle: &str) -> bool {
    needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, tags: &[&str]) -> HackathonListing {
        HackathonListing {
            title: title.to_string(),
            time_left: "3 days left".to_string(),
            location: "Online".to_string(),
            prize: "$1,000".to_string(),
            participants: "100 participants".to_string(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn records() -> Vec<HackathonListing> {
        vec![
            listing("HackMIT", &["AI", "Hardware"]),
            listing("ETHGlobal", &["Blockchain", "Web3"]),
            listing("Space Apps", &["Open Data", "Science"]),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let records = records();
        let all: Vec<_> = records.iter().collect();
        assert_eq!(filter(&records, ""), all);
    }

    #[test]
    fn matches_title_case_insensitively() {
        let records = records();
        let found = filter(&records, "hackmit");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "HackMIT");
    }

    #[test]
    fn matches_any_tag() {
        let records = records();
        let titles: Vec<_> = filter(&records, "WEB").iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["ETHGlobal"]);
    }

    #[test]
    fn result_is_ordered_subsequence_satisfying_the_predicate() {
        let records = records();
        for term in ["a", "S", "data", "zzz", "h"] {
            let found = filter(&records, term);
            let positions = found
                .iter()
                .map(|f| records.iter().position(|r| std::ptr::eq(r, *f)).unwrap())
                .collect_vec();
            assert!(positions.iter().tuple_windows().all(|(a, b)| a < b));
            let needle = term.to_lowercase();
            assert!(found.iter().all(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            }));
        }
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter(&records(), "quantum").is_empty());
    }
}
