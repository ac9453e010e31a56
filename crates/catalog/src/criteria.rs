use crate::filter::CategoryFilter;

/// Current search text and category selection.
///
/// A plain mutable holder: no validation, no derived state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search_text: String,
    selected_category: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Select a category. The picker's `"all"` entry is stored as no selection.
    pub fn set_category(&mut self, category: Option<String>) {
        self.selected_category = category.filter(|c| c != CategoryFilter::ALL_SENTINEL);
    }

    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.selected_category = None;
    }

    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::from_selection(self.selected_category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let criteria = FilterCriteria::new();
        assert_eq!(criteria.search_text(), "");
        assert_eq!(criteria.selected_category(), None);
        assert_eq!(criteria.category_filter(), CategoryFilter::All);
    }

    #[test]
    fn setters_and_reset() {
        let mut criteria = FilterCriteria::new();
        criteria.set_search_text("para");
        criteria.set_category(Some("Pain Relief".to_string()));
        assert_eq!(criteria.search_text(), "para");
        assert_eq!(criteria.selected_category(), Some("Pain Relief"));
        assert_eq!(criteria.category_filter(), CategoryFilter::Only("Pain Relief".to_string()));

        criteria.reset_filters();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn all_sentinel_clears_selection() {
        let mut criteria = FilterCriteria::new();
        criteria.set_category(Some("Allergy".to_string()));
        criteria.set_category(Some("all".to_string()));
        assert_eq!(criteria.selected_category(), None);
    }
}
