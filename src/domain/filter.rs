// Record filter - free-text search plus categorical criteria over in-memory lists
use std::borrow::Cow;

/// Select value that disables a categorical filter.
pub const WILDCARD: &str = "all";

/// A single categorical filter: either match anything or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criterion {
    #[default]
    Any,
    Exactly(String),
}

impl Criterion {
    /// Build a criterion from a raw select/query-string value.
    /// Absent, blank and `all` all mean "match anything".
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(WILDCARD) => Criterion::Any,
            Some(v) => Criterion::Exactly(v.to_string()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Criterion::Any => None,
            Criterion::Exactly(v) => Some(v),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Criterion::Any)
    }
}

/// A record that can be narrowed by a [`FilterState`].
pub trait Filterable {
    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a named categorical field. `None` when the record has no
    /// such field, which never matches a concrete criterion.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Whether this record satisfies `name == value`. Record kinds override
    /// this when a select is not a plain equality.
    fn matches_criterion(&self, name: &str, value: &str) -> bool {
        self.field(name).is_some_and(|v| v == value)
    }
}

/// Per-page filter state: the search box plus each select's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    criteria: Vec<(String, Criterion)>,
}

impl FilterState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            criteria: Vec::new(),
        }
    }

    /// Builder form of [`FilterState::set`].
    pub fn with(mut self, name: &str, criterion: Criterion) -> Self {
        self.set(name, criterion);
        self
    }

    /// Set a named criterion; the last value set for a name wins.
    pub fn set(&mut self, name: &str, criterion: Criterion) {
        match self.criteria.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = criterion,
            None => self.criteria.push((name.to_string(), criterion)),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current criterion for `name`, [`Criterion::Any`] when never set.
    pub fn criterion(&self, name: &str) -> &Criterion {
        self.criteria
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .unwrap_or(&Criterion::Any)
    }

    /// True when nothing narrows the list.
    pub fn is_wildcard(&self) -> bool {
        self.query.is_empty() && self.criteria.iter().all(|(_, c)| c.is_any())
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.matches_criteria(record) && self.matches_query(record)
    }

    fn matches_criteria<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.criteria.iter().all(|(name, criterion)| match criterion {
            Criterion::Any => true,
            Criterion::Exactly(value) => record.matches_criterion(name, value),
        })
    }

    fn matches_query<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Visible subset of `records`, in input order.
    pub fn apply<'a, R: Filterable>(&self, records: &'a [R]) -> Vec<&'a R> {
        let visible: Vec<&R> = records.iter().filter(|r| self.matches(*r)).collect();
        tracing::debug!(
            query = %self.query,
            total = records.len(),
            visible = visible.len(),
            "applied record filter"
        );
        visible
    }

    /// Owned variant of [`FilterState::apply`].
    pub fn apply_cloned<R: Filterable + Clone>(&self, records: &[R]) -> Vec<R> {
        self.apply(records).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        status: Option<&'static str>,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.id, self.name]
        }

        fn field(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "status" => self.status.map(Cow::Borrowed),
                "id" => Some(Cow::Borrowed(self.id)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "A", name: "Priya Sharma", status: Some("high") },
            Row { id: "B", name: "Sunita Devi", status: Some("low") },
            Row { id: "C", name: "Rajesh Kumar", status: None },
            Row { id: "D", name: "Priyanka Rao", status: Some("high") },
        ]
    }

    fn ids(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_status_filter_example() {
        let records = vec![
            Row { id: "A", name: "", status: Some("high") },
            Row { id: "B", name: "", status: Some("low") },
        ];
        let state = FilterState::new("").with("status", Criterion::from_param(Some("high")));
        assert_eq!(ids(&state.apply(&records)), vec!["A"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = rows();
        for query in ["priya sharma", "PRIYA SHARMA", "pRiYa ShArMa"] {
            let state = FilterState::new(query);
            assert_eq!(ids(&state.apply(&records)), vec!["A"], "query {query}");
        }
    }

    #[test]
    fn test_query_matches_any_search_field() {
        let records = rows();
        assert_eq!(ids(&FilterState::new("b").apply(&records)), vec!["B"]);
        assert_eq!(ids(&FilterState::new("priya").apply(&records)), vec!["A", "D"]);
    }

    #[test]
    fn test_wildcard_returns_everything() {
        let records = rows();
        let state = FilterState::new("")
            .with("status", Criterion::from_param(Some("all")))
            .with("facility", Criterion::from_param(None));
        assert!(state.is_wildcard());
        assert_eq!(state.apply(&records).len(), records.len());
    }

    #[test]
    fn test_missing_field_never_matches() {
        let records = rows();
        let state = FilterState::default().with("status", Criterion::Exactly("low".into()));
        assert_eq!(ids(&state.apply(&records)), vec!["B"]);

        let unknown = FilterState::default().with("district", Criterion::Exactly("Shimla".into()));
        assert!(unknown.apply(&records).is_empty());
    }

    #[test]
    fn test_conjunction_of_query_and_criteria() {
        let records = rows();
        let state = FilterState::new("priya").with("status", Criterion::Exactly("high".into()));
        let visible = state.apply(&records);
        for row in &records {
            let expected = row.name.to_lowercase().contains("priya") && row.status == Some("high");
            assert_eq!(visible.iter().any(|r| r.id == row.id), expected, "row {}", row.id);
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence_and_idempotent() {
        let records = rows();
        let state = FilterState::new("a").with("status", Criterion::Exactly("high".into()));
        let once = state.apply_cloned(&records);
        let twice = state.apply_cloned(&once);
        assert_eq!(once, twice);

        let mut cursor = records.iter();
        for row in &once {
            assert!(cursor.any(|r| r == row), "{} out of order", row.id);
        }
    }

    #[test]
    fn test_last_set_wins() {
        let mut state = FilterState::default();
        state.set("status", Criterion::Exactly("high".into()));
        state.set("status", Criterion::Any);
        assert_eq!(state.criterion("status"), &Criterion::Any);
        assert!(state.is_wildcard());
    }

    #[test]
    fn test_from_param() {
        assert_eq!(Criterion::from_param(Some("  ")), Criterion::Any);
        assert_eq!(Criterion::from_param(Some("all")), Criterion::Any);
        assert_eq!(Criterion::from_param(Some("PHC Kullu")).value(), Some("PHC Kullu"));
    }
}
