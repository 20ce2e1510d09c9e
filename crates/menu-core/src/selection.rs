//! Parent / sub-category selection

use serde::Serialize;

use crate::domain::CategoryCatalog;
use crate::error::MenuError;

/// Currently selected parent and its selected sub-category.
///
/// Every transition goes through the catalog, so the sub-category always
/// belongs to the selected parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySelection {
    parent_id: String,
    sub_category_id: String,
}

impl CategorySelection {
    /// First parent of the catalog with its first sub-category
    pub fn initial(catalog: &CategoryCatalog) -> Result<Self, MenuError> {
        let parent = catalog.default_parent().ok_or(MenuError::EmptyCatalog)?;
        Self::with_default(catalog, &parent.id)
    }

    /// Start on an explicitly chosen parent
    pub fn with_default(catalog: &CategoryCatalog, parent_id: &str) -> Result<Self, MenuError> {
        let parent = catalog
            .parent(parent_id)
            .ok_or_else(|| MenuError::UnknownParent(parent_id.to_string()))?;
        let sub = parent
            .first_sub_category()
            .ok_or_else(|| MenuError::EmptyParent(parent.id.clone()))?;

        Ok(Self {
            parent_id: parent.id.clone(),
            sub_category_id: sub.id.clone(),
        })
    }

    /// Rebuild a selection from request parameters. Unknown or missing parts
    /// fall back to `default_parent` and its first sub-category.
    pub fn restore(
        catalog: &CategoryCatalog,
        default_parent: &str,
        parent_id: Option<&str>,
        sub_category_id: Option<&str>,
    ) -> Result<Self, MenuError> {
        let mut selection = Self::with_default(catalog, default_parent)
            .or_else(|_| Self::initial(catalog))?;

        if let Some(parent_id) = parent_id {
            // an unknown parent keeps the default
            let _ = selection.select_parent(catalog, parent_id);
        }
        if let Some(sub_id) = sub_category_id {
            let _ = selection.select_sub_category(catalog, sub_id);
        }
        Ok(selection)
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn sub_category_id(&self) -> &str {
        &self.sub_category_id
    }

    /// Switch parent; the sub-category resets to the parent's first one.
    pub fn select_parent(&mut self, catalog: &CategoryCatalog, parent_id: &str) -> Result<(), MenuError> {
        *self = Self::with_default(catalog, parent_id)?;
        Ok(())
    }

    /// Switch sub-category within the current parent.
    pub fn select_sub_category(
        &mut self,
        catalog: &CategoryCatalog,
        sub_category_id: &str,
    ) -> Result<(), MenuError> {
        let unknown = || MenuError::UnknownSubCategory {
            parent: self.parent_id.clone(),
            sub_category: sub_category_id.to_string(),
        };
        let sub = catalog
            .parent(&self.parent_id)
            .and_then(|parent| parent.sub_category(sub_category_id))
            .ok_or_else(unknown)?;

        self.sub_category_id = sub.id.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::built_in(Language::English)
    }

    #[test]
    fn test_initial_selection() {
        let selection = CategorySelection::initial(&catalog()).unwrap();
        assert_eq!(selection.parent_id(), "drinks");
        assert_eq!(selection.sub_category_id(), "Fiz Drinks");
    }

    #[test]
    fn test_selecting_parent_resets_to_first_sub_category() {
        let catalog = catalog();
        let mut selection = CategorySelection::initial(&catalog).unwrap();

        for parent in catalog.parents() {
            selection.select_parent(&catalog, &parent.id).unwrap();
            assert_eq!(selection.parent_id(), parent.id);
            assert_eq!(selection.sub_category_id(), parent.sub_categories[0].id);
        }
    }

    #[test]
    fn test_select_sub_category_keeps_parent() {
        let catalog = catalog();
        let mut selection = CategorySelection::with_default(&catalog, "coffee").unwrap();
        selection.select_sub_category(&catalog, "Hot Coffee").unwrap();
        assert_eq!(selection.parent_id(), "coffee");
        assert_eq!(selection.sub_category_id(), "Hot Coffee");

        // re-selecting the parent goes back to its first child
        selection.select_parent(&catalog, "coffee").unwrap();
        assert_eq!(selection.sub_category_id(), "Cold Coffee");
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let catalog = catalog();
        let mut selection = CategorySelection::with_default(&catalog, "coffee").unwrap();
        let before = selection.clone();

        assert!(matches!(
            selection.select_parent(&catalog, "pizza"),
            Err(MenuError::UnknownParent(_))
        ));
        assert!(matches!(
            selection.select_sub_category(&catalog, "Burger"),
            Err(MenuError::UnknownSubCategory { .. })
        ));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_restore_from_query() {
        let catalog = catalog();
        let restored =
            CategorySelection::restore(&catalog, "drinks", Some("sandwiches"), Some("Toast Sandwich")).unwrap();
        assert_eq!(restored.parent_id(), "sandwiches");
        assert_eq!(restored.sub_category_id(), "Toast Sandwich");

        let fallback = CategorySelection::restore(&catalog, "drinks", Some("pizza"), Some("Hot Coffee")).unwrap();
        assert_eq!(fallback.parent_id(), "drinks");
        assert_eq!(fallback.sub_category_id(), "Fiz Drinks");

        let bad_default = CategorySelection::restore(&catalog, "nope", None, None).unwrap();
        assert_eq!(bad_default.parent_id(), "drinks");
    }
}
