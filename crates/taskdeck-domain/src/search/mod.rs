//! Free-text task search.
//!
//! Provides traits and implementations for matching tasks against a query.
//! Matching is case-insensitive substring over the searched field.

use crate::task::Task;

/// Trait for searching tasks by various criteria.
pub trait TaskSearcher {
    /// Returns true if the task matches the search criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Search tasks by title (case-insensitive).
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl TaskSearcher for TitleSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.query)
    }
}

/// Search tasks by description (case-insensitive).
pub struct DescriptionSearcher {
    query: String,
}

impl DescriptionSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for DescriptionSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&self.query))
    }
}

/// Search tasks by tag (case-insensitive).
pub struct TagSearcher {
    query: String,
}

impl TagSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for TagSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&self.query))
    }
}

/// Enum dispatch for searching tasks by a specific field.
pub enum SearchBy {
    Title(TitleSearcher),
    Description(DescriptionSearcher),
    Tag(TagSearcher),
}

impl SearchBy {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Title(s) => s.matches(task),
            Self::Description(s) => s.matches(task),
            Self::Tag(s) => s.matches(task),
        }
    }
}

/// Composite searcher that matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    /// Create an empty composite searcher (matches all tasks).
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Create a composite searcher over title, description, and tags.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Description(DescriptionSearcher::new(query.clone())),
                SearchBy::Tag(TagSearcher::new(query)),
            ],
        }
    }

    /// Add a searcher to the composite (builder pattern).
    pub fn with_search(mut self, searcher: SearchBy) -> Self {
        self.searchers.push(searcher);
        self
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSearcher for CompositeSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|searcher| searcher.matches(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_searcher_matches() {
        let task = Task::new("Fix authentication bug".to_string());

        assert!(TitleSearcher::new("auth").matches(&task));
        assert!(TitleSearcher::new("AUTH").matches(&task));
        assert!(!TitleSearcher::new("database").matches(&task));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let task = Task::new("Any task".to_string());
        assert!(TitleSearcher::new("").matches(&task));
        assert!(CompositeSearcher::all("").matches(&task));
    }

    #[test]
    fn test_description_searcher() {
        let mut task = Task::new("Title".to_string());
        task.update_description(Some("Needs the login flow reworked".to_string()));

        assert!(DescriptionSearcher::new("login").matches(&task));
        assert!(!DescriptionSearcher::new("logout").matches(&task));

        task.update_description(None);
        assert!(!DescriptionSearcher::new("login").matches(&task));
    }

    #[test]
    fn test_tag_searcher() {
        let mut task = Task::new("Tagged".to_string());
        task.add_tag("Frontend".to_string());

        assert!(TagSearcher::new("front").matches(&task));
        assert!(!TagSearcher::new("backend").matches(&task));
    }

    #[test]
    fn test_composite_any_field_matches() {
        let mut task = Task::new("Ship release".to_string());
        task.add_tag("deploy".to_string());

        assert!(CompositeSearcher::all("deploy").matches(&task));
        assert!(CompositeSearcher::all("ship").matches(&task));
        assert!(!CompositeSearcher::all("billing").matches(&task));
    }
}
