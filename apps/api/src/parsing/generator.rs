//! Count enforcement for bounded record lists.

/// Returns exactly `count` records: the first `count` of `records` in order,
/// padded with `placeholder(index)` for every missing slot.
pub fn fill_to_count<R>(
    mut records: Vec<R>,
    count: usize,
    placeholder: impl Fn(usize) -> R,
) -> Vec<R> {
    records.truncate(count);
    while records.len() < count {
        let index = records.len();
        records.push(placeholder(index));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(i: usize) -> String {
        format!("Item {}", i + 1)
    }

    #[test]
    fn test_truncates_to_first_n_in_order() {
        let records = vec!["a", "b", "c", "d"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(fill_to_count(records, 2, label), vec!["a", "b"]);
    }

    #[test]
    fn test_pads_with_indexed_placeholders() {
        let records = vec!["a".to_string()];
        assert_eq!(
            fill_to_count(records, 3, label),
            vec!["a", "Item 2", "Item 3"]
        );
    }

    #[test]
    fn test_exact_count_is_untouched() {
        let records = vec!["a".to_string(), "b".to_string()];
        assert_eq!(fill_to_count(records, 2, label), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input_is_all_placeholders() {
        assert_eq!(
            fill_to_count(Vec::new(), 2, label),
            vec!["Item 1", "Item 2"]
        );
    }

    #[test]
    fn test_zero_count_yields_empty() {
        let records = vec!["a".to_string()];
        assert!(fill_to_count(records, 0, label).is_empty());
    }
}
