use super::{filter::FilterSet, search};
use crate::model::Record;

/// Purely presentational toggle over an already-filtered list. Switching
/// views never changes which records are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(ViewMode::Table),
            "cards" => Ok(ViewMode::Cards),
            other => Err(format!("Unknown view mode: {}", other)),
        }
    }
}

/// List view controller for one listing page.
///
/// Combines the filter set and the search query with logical AND and applies
/// them to the full source list on every call; there is no incremental
/// diffing and no hidden mutation of the source. Output preserves source
/// order. The controller never re-sorts.
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    source: Vec<R>,
    pub filters: FilterSet,
    pub query: String,
    pub mode: ViewMode,
}

impl<R: Record> ListView<R> {
    pub fn new(source: Vec<R>) -> Self {
        Self {
            source,
            filters: FilterSet::new(),
            query: String::new(),
            mode: ViewMode::default(),
        }
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn source(&self) -> &[R] {
        &self.source
    }

    /// The records currently visible: every source record matching all
    /// active filters AND the search query, in source order.
    pub fn visible(&self) -> Vec<&R> {
        self.source
            .iter()
            .filter(|r| self.filters.matches(*r) && search::matches(*r, &self.query))
            .collect()
    }

    /// Placeholder text for a zero-match result. Empty results are not
    /// errors; they render this message instead of a blank area.
    pub fn empty_message() -> String {
        format!("No {} found.", R::NOUN)
    }
}

/// Standalone combination of the two predicates, for callers that do not
/// hold a [`ListView`].
pub fn visible<'a, R: Record>(
    source: &'a [R],
    filters: &FilterSet,
    query: &str,
) -> Vec<&'a R> {
    source
        .iter()
        .filter(|r| filters.matches(*r) && search::matches(*r, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::FilterSet;
    use crate::records::expenses;
    use crate::records::leads;

    #[test]
    fn test_combined_filter_and_search() {
        // Category "Travel" AND search "cab" → exactly "Cab Fare".
        let view = ListView::new(expenses::seed())
            .with_filters(FilterSet::new().with("category", "Travel"))
            .with_query("cab");
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Cab Fare");
    }

    #[test]
    fn test_order_preserved() {
        let view = ListView::new(expenses::seed())
            .with_filters(FilterSet::new().with("category", "Travel"));
        let names: Vec<_> = view.visible().iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["Cab Fare", "Flight Tickets", "Hotel Stay"]);
    }

    #[test]
    fn test_idempotent_application() {
        let view = ListView::new(leads::seed())
            .with_filters(FilterSet::new().with("owner", "Priya Nair"))
            .with_query("corp");
        let first: Vec<_> = view.visible().iter().map(|l| l.id.clone()).collect();
        let second: Vec<_> = view.visible().iter().map(|l| l.id.clone()).collect();
        assert_eq!(first, second);
        // Source list itself is untouched.
        assert_eq!(view.source().len(), leads::seed().len());
    }

    #[test]
    fn test_view_mode_does_not_change_membership() {
        let mut view = ListView::new(leads::seed()).with_query("tech");
        let table: Vec<_> = view.visible().iter().map(|l| l.id.clone()).collect();
        view.set_mode(ViewMode::Cards);
        let cards: Vec<_> = view.visible().iter().map(|l| l.id.clone()).collect();
        assert_eq!(table, cards);
    }

    #[test]
    fn test_zero_matches_yields_empty_message() {
        let view = ListView::new(leads::seed()).with_query("nonexistent company");
        assert!(view.visible().is_empty());
        assert_eq!(ListView::<crate::records::Lead>::empty_message(), "No leads found.");
    }

    #[test]
    fn test_full_range_from_zero_to_everything() {
        let view = ListView::new(leads::seed());
        assert_eq!(view.visible().len(), view.source().len());
    }
}
