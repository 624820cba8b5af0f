//! Ordering of the documents that make up a filing.
//!
//! Produces the filing order and a table of contents. Rendering the compiled
//! filing to PDF is not implemented.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingKind {
    Motion,
    Declaration,
    Exhibit,
    Order,
}

impl fmt::Display for FilingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Motion => "motion",
            Self::Declaration => "declaration",
            Self::Exhibit => "exhibit",
            Self::Order => "order",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationItem {
    pub id: String,
    pub name: String,
    pub kind: FilingKind,
}

impl CompilationItem {
    fn new(id: &str, name: &str, kind: FilingKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
        }
    }
}

/// An ordered set of documents to be filed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    items: Vec<CompilationItem>,
}

impl Compilation {
    /// The standard summary-judgment filing: motion, declaration, two exhibits
    /// and a proposed order.
    pub fn default_filing() -> Self {
        Self {
            items: vec![
                CompilationItem::new("1", "Motion for Summary Judgment", FilingKind::Motion),
                CompilationItem::new(
                    "2",
                    "Declaration in Support of Motion",
                    FilingKind::Declaration,
                ),
                CompilationItem::new("3", "Exhibit A - Contract", FilingKind::Exhibit),
                CompilationItem::new("4", "Exhibit B - Correspondence", FilingKind::Exhibit),
                CompilationItem::new("5", "Proposed Order", FilingKind::Order),
            ],
        }
    }

    pub fn items(&self) -> &[CompilationItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swap the item at `index` with the one above it. Returns false at the top
    /// or when `index` is out of range.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.items.swap(index, index - 1);
        true
    }

    /// Swap the item at `index` with the one below it. Returns false at the
    /// bottom or when `index` is out of range.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.items.len().saturating_sub(1) {
            return false;
        }
        self.items.swap(index, index + 1);
        true
    }

    /// Remove the item with `id`; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Numbered entry titles in filing order.
    pub fn table_of_contents(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(c: &Compilation) -> Vec<&str> {
        c.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn default_filing_has_five_documents() {
        let c = Compilation::default_filing();
        assert_eq!(order(&c), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(c.items()[4].kind, FilingKind::Order);
    }

    #[test]
    fn move_up_and_down_swap_neighbours() {
        let mut c = Compilation::default_filing();
        assert!(c.move_up(2));
        assert_eq!(order(&c), vec!["1", "3", "2", "4", "5"]);
        assert!(c.move_down(0));
        assert_eq!(order(&c), vec!["3", "1", "2", "4", "5"]);
    }

    #[test]
    fn moves_at_boundaries_are_noops() {
        let mut c = Compilation::default_filing();
        assert!(!c.move_up(0));
        assert!(!c.move_down(4));
        assert!(!c.move_down(99));
        assert!(!c.move_up(99));
        assert!(!c.move_down(usize::MAX));
        assert!(!c.move_up(usize::MAX));
        assert_eq!(order(&c), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn remove_by_id() {
        let mut c = Compilation::default_filing();
        assert!(c.remove("3"));
        assert!(!c.remove("3"));
        assert_eq!(order(&c), vec!["1", "2", "4", "5"]);
        for id in ["1", "2", "4", "5"] {
            c.remove(id);
        }
        assert!(c.is_empty());
        assert!(c.table_of_contents().is_empty());
    }

    #[test]
    fn table_of_contents_follows_current_order() {
        let mut c = Compilation::default_filing();
        c.move_down(3);
        assert_eq!(
            c.table_of_contents(),
            vec![
                "1. Motion for Summary Judgment",
                "2. Declaration in Support of Motion",
                "3. Exhibit A - Contract",
                "4. Proposed Order",
                "5. Exhibit B - Correspondence",
            ]
        );
    }
}
