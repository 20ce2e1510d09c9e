// ============================================================================
// Menu Core - Category Catalog
// File: crates/menu-core/src/domain/catalog.rs
// Description: Hand-authored parent/sub-category tree driving navigation
// ============================================================================

use serde::{Deserialize, Serialize};

use super::language::Language;
use crate::error::MenuError;

/// Leaf grouping; `id` must equal a record's `category` (ignoring case)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub sub_categories: Vec<SubCategory>,
}

impl ParentCategory {
    pub fn first_sub_category(&self) -> Option<&SubCategory> {
        self.sub_categories.first()
    }

    pub fn sub_category(&self, id: &str) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|sub| sub.id == id)
    }

    /// Sub-category tabs are only shown when there is a choice to make
    pub fn has_sub_tabs(&self) -> bool {
        self.sub_categories.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    parents: Vec<ParentCategory>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting an empty tree or a parent without children.
    pub fn new(parents: Vec<ParentCategory>) -> Result<Self, MenuError> {
        let catalog = Self { parents };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), MenuError> {
        if self.parents.is_empty() {
            return Err(MenuError::EmptyCatalog);
        }
        if let Some(empty) = self.parents.iter().find(|p| p.sub_categories.is_empty()) {
            return Err(MenuError::EmptyParent(empty.id.clone()));
        }
        Ok(())
    }

    pub fn parents(&self) -> &[ParentCategory] {
        &self.parents
    }

    pub fn parent(&self, id: &str) -> Option<&ParentCategory> {
        self.parents.iter().find(|p| p.id == id)
    }

    pub fn default_parent(&self) -> Option<&ParentCategory> {
        self.parents.first()
    }

    pub fn first_sub_category(&self, parent_id: &str) -> Option<&SubCategory> {
        self.parent(parent_id)?.first_sub_category()
    }

    /// Built-in catalog for a language's menu page
    pub fn built_in(language: Language) -> Self {
        let parents = match language {
            Language::English => english(),
            Language::Hindi => hindi(),
            Language::Gujarati => gujarati(),
            Language::Marathi => marathi(),
        };
        Self { parents }
    }
}

fn parent(id: &str, name: &str, icon: &str, subs: &[(&str, &str)]) -> ParentCategory {
    ParentCategory {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        sub_categories: subs
            .iter()
            .map(|(id, name)| SubCategory {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}

// ===== CAFE MENU (English / Hindi / Gujarati sheets) =====

fn english() -> Vec<ParentCategory> {
    vec![
        // "Fiz Drinks" is the category value used by the English sheet
        parent("drinks", "Drinks", "🥤", &[("Fiz Drinks", "Fizz Drinks"), ("Float", "Float")]),
        parent("coffee", "Coffee", "☕", &[("Cold Coffee", "Cold Coffee"), ("Hot Coffee", "Hot Coffee")]),
        parent("milkshakes", "Milkshakes", "🥛", &[("Milkshakes", "Milkshakes")]),
        parent("ice cream", "Ice Cream", "🍦", &[("Ice Cream", "Ice Cream")]),
        parent("burger", "Burgers", "🍔", &[("Burger", "Burgers")]),
        parent(
            "sandwiches",
            "Sandwiches",
            "🥪",
            &[
                ("Soft Bread Sandwich", "Soft Bread Sandwiches"),
                ("Grilled Sandwich", "Veg Grilled Sandwiches"),
                ("Toast Sandwich", "Toast Sandwiches"),
                ("Chicken Grilled Sandwich", "Chicken Grilled Sandwiches"),
            ],
        ),
        parent("french fries", "French Fries", "🍟", &[("French Fries", "French Fries")]),
        parent(
            "frankie",
            "Frankie",
            "🌯",
            &[
                ("Veg Frankie", "Veg Frankie"),
                ("Egg Frankie", "Egg Frankie"),
                ("Chicken Frankie", "Chicken Frankie"),
            ],
        ),
    ]
}

fn hindi() -> Vec<ParentCategory> {
    vec![
        parent("drinks", "पेय", "🥤", &[("Fizz Drinks", "फिज ड्रिंक्स"), ("Float", "फ्लोट")]),
        parent("coffee", "कॉफी", "☕", &[("Cold Coffee", "कोल्ड कॉफी"), ("Hot Coffee", "हॉट कॉफी")]),
        parent("milkshakes", "मिल्कशेक", "🥛", &[("Milkshakes", "मिल्कशेक")]),
        parent("ice cream", "आइसक्रीम", "🍦", &[("Ice Cream", "आइसक्रीम")]),
        parent("burger", "बर्गर", "🍔", &[("Burger", "बर्गर")]),
        parent(
            "sandwiches",
            "सैंडविच",
            "🥪",
            &[
                ("Soft Bread Sandwich", "सॉफ्ट ब्रेड सैंडविच"),
                ("Grilled Sandwich", "वेज ग्रिल्ड सैंडविच"),
                ("Toast Sandwich", "टोस्ट सैंडविच"),
                ("Chicken Grilled Sandwich", "चिकन ग्रिल्ड सैंडविच"),
            ],
        ),
        parent("french fries", "फ्रेंच फ्राइज", "🍟", &[("French Fries", "फ्रेंच फ्राइज")]),
        parent(
            "frankie",
            "फ्रैंकी",
            "🌯",
            &[
                ("Veg Frankie", "वेज फ्रैंकी"),
                ("Egg Frankie", "एग फ्रैंकी"),
                ("Chicken Frankie", "चिकन फ्रैंकी"),
            ],
        ),
    ]
}

fn gujarati() -> Vec<ParentCategory> {
    vec![
        parent("drinks", "પેય", "🥤", &[("Fizz Drinks", "ફિઝ ડ્રિંક્સ"), ("Float", "ફ્લોટ")]),
        parent("coffee", "કોફી", "☕", &[("Cold Coffee", "કોલ્ડ કોફી"), ("Hot Coffee", "હોટ કોફી")]),
        parent("milkshakes", "મિલ્કશેક", "🥛", &[("Milkshakes", "મિલ્કશેક")]),
        parent("ice cream", "આઇસક્રીમ", "🍦", &[("Ice Cream", "આઇસક્રીમ")]),
        parent("burger", "બર્ગર", "🍔", &[("Burger", "બર્ગર")]),
        parent(
            "sandwiches",
            "સેન્ડવિચ",
            "🥪",
            &[
                ("Soft Bread Sandwich", "સોફ્ટ બ્રેડ સેન્ડવિચ"),
                ("Grilled Sandwich", "વેજ ગ્રિલ્ડ સેન્ડવિચ"),
                ("Toast Sandwich", "ટોસ્ટ સેન્ડવિચ"),
                ("Chicken Grilled Sandwich", "ચિકન ગ્રિલ્ડ સેન્ડવિચ"),
            ],
        ),
        parent("french fries", "ફ્રેન્ચ ફ્રાઇઝ", "🍟", &[("French Fries", "ફ્રેન્ચ ફ્રાઇઝ")]),
        parent(
            "frankie",
            "ફ્રેન્કી",
            "🌯",
            &[
                ("Veg Frankie", "વેજ ફ્રેન્કી"),
                ("Egg Frankie", "એગ ફ્રેન્કી"),
                ("Chicken Frankie", "ચિકન ફ્રેન્કી"),
            ],
        ),
    ]
}

// ===== RESTAURANT MENU (Marathi sheet) =====

fn marathi() -> Vec<ParentCategory> {
    vec![
        parent("breakfast", "ब्रेकफास्ट", "🍳", &[("Breakfast", "दिवसभर ब्रेकफास्ट")]),
        parent("beverage", "पेय", "🥤", &[("Beverage", "सर्व पेय")]),
        parent("soup", "सूप", "🍲", &[("Soup", "सर्व सूप")]),
        parent(
            "special-starters",
            "फ्रेडीचे खास स्टार्टर्स",
            "🍤",
            &[
                ("Special Starters (Veg)", "Veg"),
                ("Special Starters (Non-veg)", "Non-veg"),
                ("Special Starters (Seafood)", "Seafood"),
            ],
        ),
        parent(
            "chinese-starters",
            "चायनीज स्टार्टर्स",
            "🥟",
            &[
                ("Chinese Starters (Veg)", "Veg"),
                ("Chinese Starters (Chicken)", "Chicken"),
                ("Chinese Starters (Mutton)", "Mutton"),
                ("Chinese Starters (Seafood)", "Seafood"),
            ],
        ),
        parent(
            "main-course",
            "मुख्य जेवण",
            "🍛",
            &[
                ("Fish Fry", "फिश फ्राय"),
                ("Freddy's Special", "फ्रेडीचे खास"),
                ("Biryani", "बिरयानी"),
                ("Thali", "थाळी"),
            ],
        ),
        parent(
            "chinese-dishes",
            "चायनीज पदार्थ",
            "🍜",
            &[("Chinese (Rice)", "भात"), ("Chinese (Noodles)", "नूडल्स")],
        ),
        parent(
            "indian-gravy",
            "भारतीय ग्रेव्ही",
            "🥘",
            &[
                ("Indian Gravy (Veg)", "Veg"),
                ("Indian Gravy (Chicken)", "Chicken"),
                ("Indian Gravy (Mutton)", "Mutton"),
                ("Indian Gravy (Seafood)", "Seafood"),
            ],
        ),
        parent("breads", "पोळी/ब्रेड", "🫓", &[("Breads", "रोटी/नान/परोठा")]),
        parent(
            "juice-milkshakes",
            "ज्यूस आणि मिल्कशेक",
            "🥛",
            &[("Juice & Milkshakes", "सर्व थंड पेय")],
        ),
    ]
}
