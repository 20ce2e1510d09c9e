//! Language and category filtering
//!
//! Both stages are stable filters: the export's row order is kept as-is.

use serde::{Deserialize, Serialize};

use crate::domain::{Language, MenuRecord};

/// What to do with records whose `language` cell is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguagePolicy {
    /// Treat untagged rows as this language tag
    DefaultTo(String),
    /// Leave untagged rows out of every language
    Exclude,
}

impl Default for LanguagePolicy {
    fn default() -> Self {
        Self::DefaultTo(Language::English.tag().to_string())
    }
}

impl LanguagePolicy {
    /// Effective lowercase tag of a record under this policy
    pub fn resolve(&self, record: &MenuRecord) -> Option<String> {
        match (&record.language, self) {
            (Some(tag), _) => Some(tag.to_lowercase()),
            (None, Self::DefaultTo(tag)) => Some(tag.trim().to_lowercase()),
            (None, Self::Exclude) => None,
        }
    }
}

/// Stage 1: keep the records whose language matches `target`.
pub fn filter_by_language(
    records: &[MenuRecord],
    target: &str,
    policy: &LanguagePolicy,
) -> Vec<MenuRecord> {
    let target = target.trim().to_lowercase();
    records
        .iter()
        .filter(|record| policy.resolve(record).as_deref() == Some(target.as_str()))
        .cloned()
        .collect()
}

/// Stage 2: keep the records filed under `sub_category_id`.
pub fn filter_by_category<'a>(records: &'a [MenuRecord], sub_category_id: &str) -> Vec<&'a MenuRecord> {
    if sub_category_id.trim().is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| record.matches_category(sub_category_id))
        .collect()
}

/// Records of one language, computed once per fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageMenu {
    records: Vec<MenuRecord>,
}

impl LanguageMenu {
    pub fn new(all: &[MenuRecord], language: Language, policy: &LanguagePolicy) -> Self {
        Self {
            records: filter_by_language(all, language.tag(), policy),
        }
    }

    pub fn records(&self) -> &[MenuRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn items_in(&self, sub_category_id: &str) -> Vec<&MenuRecord> {
        filter_by_category(&self.records, sub_category_id)
    }

    /// First record with this id; ids are not unique in the export
    pub fn find(&self, id: &str) -> Option<&MenuRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DietType;

    fn item(id: &str, category: &str, language: Option<&str>) -> MenuRecord {
        MenuRecord {
            id: id.into(),
            name: format!("Item {}", id),
            description: String::new(),
            long_description: String::new(),
            price: 10.0,
            category: category.into(),
            diet: DietType::Veg,
            image: None,
            language: language.map(String::from),
        }
    }

    fn sample() -> Vec<MenuRecord> {
        vec![
            item("1", "Hot Coffee", Some("English")),
            item("2", "Hot Coffee", Some("Hindi")),
            item("3", "Cold Coffee", None),
            item("4", "hot coffee", Some("ENGLISH")),
            item("5", "Burger", Some("marathi")),
        ]
    }

    fn ids(records: &[MenuRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_language_filter_case_insensitive_with_default() {
        let english = filter_by_language(&sample(), "English", &LanguagePolicy::default());
        assert_eq!(ids(&english), vec!["1", "3", "4"]);

        let marathi = filter_by_language(&sample(), "Marathi", &LanguagePolicy::default());
        assert_eq!(ids(&marathi), vec!["5"]);
    }

    #[test]
    fn test_language_filter_exclude_policy() {
        let english = filter_by_language(&sample(), "english", &LanguagePolicy::Exclude);
        assert_eq!(ids(&english), vec!["1", "4"]);
    }

    #[test]
    fn test_language_filter_custom_default() {
        let policy = LanguagePolicy::DefaultTo("Marathi".into());
        let marathi = filter_by_language(&sample(), "marathi", &policy);
        assert_eq!(ids(&marathi), vec!["3", "5"]);
    }

    #[test]
    fn test_language_filter_is_idempotent() {
        let policy = LanguagePolicy::default();
        for tag in ["english", "hindi", "gujarati", "marathi"] {
            let once = filter_by_language(&sample(), tag, &policy);
            let twice = filter_by_language(&once, tag, &policy);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_category_filter_case_insensitive_and_stable() {
        let records = sample();
        let hot: Vec<_> = filter_by_category(&records, "hot coffee")
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(hot, vec!["1", "2", "4"]);
        assert!(filter_by_category(&records, "").is_empty());
        assert!(filter_by_category(&records, "Pizza").is_empty());
    }

    #[test]
    fn test_language_menu() {
        let menu = LanguageMenu::new(&sample(), Language::English, &LanguagePolicy::default());
        assert_eq!(menu.len(), 3);
        assert_eq!(menu.items_in("Hot Coffee").len(), 2);
        assert_eq!(menu.items_in("Cold Coffee").len(), 1);
        assert!(menu.find("2").is_none());
        assert_eq!(menu.find("4").unwrap().category, "hot coffee");
    }

    #[test]
    fn test_empty_record_set() {
        let menu = LanguageMenu::new(&[], Language::Hindi, &LanguagePolicy::default());
        assert!(menu.is_empty());
        assert!(menu.items_in("Hot Coffee").is_empty());
    }
}
