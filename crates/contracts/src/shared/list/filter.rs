/// Trait for records that take part in free-text search
pub trait Searchable {
    /// Designated text attributes the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any search field
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filters records by a search query, keeping their original order.
///
/// An empty query matches everything. The query is not trimmed.
pub fn filter_records<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(String, String);

    impl Row {
        fn new(name: &str, kind: &str) -> Self {
            Row(name.to_string(), kind.to_string())
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0.as_str(), self.1.as_str()]
        }
    }

    fn rows() -> Vec<Row> {
        (1..=12)
            .map(|n| {
                Row(
                    format!("Field Type {}", n),
                    format!("Description for field type {}", n),
                )
            })
            .collect()
    }

    fn names(hits: Vec<&Row>) -> Vec<&str> {
        hits.into_iter().map(|r| r.0.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let rows = rows();
        let filtered = filter_records(&rows, "");
        assert_eq!(filtered.len(), 12);
        assert!(filtered.iter().zip(rows.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_numeric_prefix_collisions() {
        let rows = rows();
        assert_eq!(
            names(filter_records(&rows, "field type 1")),
            vec!["Field Type 1", "Field Type 10", "Field Type 11", "Field Type 12"]
        );
    }

    #[test]
    fn test_case_insensitive_on_any_field() {
        let rows = vec![
            Row::new("Email", "text"),
            Row::new("Age", "NUMBER"),
            Row::new("Phone", "tel"),
        ];
        assert_eq!(names(filter_records(&rows, "NuMb")), vec!["Age"]);
        assert_eq!(names(filter_records(&rows, "e")), vec!["Email", "Age", "Phone"]);
    }

    #[test]
    fn test_no_match_and_untrimmed_query() {
        let rows = vec![Row::new("Email", "text"), Row::new("First Name", "text")];
        assert!(filter_records(&rows, "zzz").is_empty());
        assert_eq!(names(filter_records(&rows, " ")), vec!["First Name"]);
    }

    #[test]
    fn test_result_is_exact_subsequence() {
        let rows = rows();
        for query in ["", "1", "type 2", "description", "x"] {
            let expected: Vec<&Row> = rows
                .iter()
                .filter(|r| {
                    r.0.to_lowercase().contains(&query.to_lowercase())
                        || r.1.to_lowercase().contains(&query.to_lowercase())
                })
                .collect();
            assert_eq!(filter_records(&rows, query), expected, "query {:?}", query);
        }
    }
}
