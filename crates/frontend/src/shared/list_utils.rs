//! Helpers for sortable list headers.

use contracts::domain::orders::SortDirection;

/// Sort indicator appended to the sortable column header.
pub fn sort_indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(SortDirection::Asc), " ▲");
        assert_eq!(sort_indicator(SortDirection::Desc), " ▼");
    }
}
