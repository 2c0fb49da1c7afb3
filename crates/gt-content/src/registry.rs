//! # Slug Registry
//!
//! Immutable, ordered collection of catalog entries indexed by slug.
//!
//! Entries keep their content-file order (listing pages render in that
//! order) while lookups go through a `HashMap<Slug, usize>` index. The
//! registry is built once at startup and shared read-only behind an `Arc`,
//! so no locking is involved.

use std::collections::HashMap;

use gt_core::Slug;

use crate::error::ContentError;

/// A content type that can live in a [`Registry`].
pub trait CatalogEntry {
    /// Human-readable kind used in error messages (`"partner"`, `"state"`).
    const KIND: &'static str;

    /// The entry's URL slug.
    fn slug(&self) -> &str;
}

/// Ordered entries with an exact-match slug index.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<Slug, usize>,
}

impl<T: CatalogEntry> Registry<T> {
    /// Build a registry, rejecting invalid or duplicate slugs.
    pub fn from_entries(entries: Vec<T>) -> Result<Self, ContentError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let slug = Slug::parse(entry.slug()).map_err(|source| ContentError::InvalidSlug {
                kind: T::KIND,
                source,
            })?;
            if index.insert(slug, position).is_some() {
                return Err(ContentError::DuplicateSlug {
                    kind: T::KIND,
                    slug: entry.slug().to_string(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// Look up an entry by its exact slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&T> {
        self.index.get(slug).and_then(|&i| self.entries.get(i))
    }

    /// All entries in content order.
    pub fn all(&self) -> &[T] {
        &self.entries
    }

    /// Whether an entry with this slug exists.
    pub fn exists(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// All slugs in content order.
    pub fn slugs(&self) -> Vec<&str> {
        self.entries.iter().map(CatalogEntry::slug).collect()
    }

    /// Iterate entries in content order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T: CatalogEntry> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        slug: String,
        label: &'static str,
    }

    impl CatalogEntry for Item {
        const KIND: &'static str = "item";
        fn slug(&self) -> &str {
            &self.slug
        }
    }

    fn item(slug: &str, label: &'static str) -> Item {
        Item {
            slug: slug.to_string(),
            label,
        }
    }

    #[test]
    fn lookup_by_slug() {
        let registry =
            Registry::from_entries(vec![item("dry-van", "Dry Van"), item("reefer", "Reefer")])
                .unwrap();
        assert_eq!(registry.get_by_slug("reefer").unwrap().label, "Reefer");
        assert!(registry.get_by_slug("flatbed").is_none());
        assert!(registry.exists("dry-van"));
        assert!(!registry.exists("Dry-Van"));
    }

    #[test]
    fn preserves_content_order() {
        let registry = Registry::from_entries(vec![
            item("zeta", "Z"),
            item("alpha", "A"),
            item("mid", "M"),
        ])
        .unwrap();
        assert_eq!(registry.slugs(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
        let labels: Vec<_> = registry.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Z", "A", "M"]);
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let err = Registry::from_entries(vec![item("reefer", "a"), item("reefer", "b")])
            .unwrap_err();
        match err {
            ContentError::DuplicateSlug { kind, slug } => {
                assert_eq!(kind, "item");
                assert_eq!(slug, "reefer");
            }
            other => panic!("expected DuplicateSlug, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_slugs() {
        let err = Registry::from_entries(vec![item("Box Truck", "x")]).unwrap_err();
        assert!(matches!(err, ContentError::InvalidSlug { kind: "item", .. }));
    }

    #[test]
    fn empty_registry() {
        let registry: Registry<Item> = Registry::from_entries(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }
}
