//! Per-language menu configuration
//!
//! One pipeline serves every language; a variant only supplies the export
//! URL, the catalog, the default parent category and the page labels.

use serde::Serialize;

use crate::domain::{CategoryCatalog, Language};
use crate::error::MenuError;

const CAFE_SHEET: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSU3feEUr0Rekmp_o-x5zoaH-1X9KQbNqAgRFQhuJ1brX_ygTVhLDfIujd3DC4HsE7xMBNWuu0UeUr_";
const RESTAURANT_SHEET: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQdPLFc73XvKGEZUYTGjJto0nfXBrt85rIDILZr1lil_-vr_RM_mFg5OgSpyRirX3zVKhNNOs8yy_AH";

/// Published CSV export of a language's sheet tab
pub fn default_source_url(language: Language) -> String {
    match language {
        Language::English => format!("{}/pub?output=csv", CAFE_SHEET),
        Language::Hindi => format!("{}/pub?output=csv&gid=996455318", CAFE_SHEET),
        Language::Gujarati => format!("{}/pub?gid=899101026&single=true&output=csv", CAFE_SHEET),
        Language::Marathi => format!("{}/pub?output=csv&gid=1087523456", RESTAURANT_SHEET),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantLabels {
    pub title: String,
    pub back: String,
    /// May contain a `{category}` placeholder
    pub empty: String,
    pub details: String,
    pub no_image: String,
    pub close: String,
}

impl VariantLabels {
    pub fn for_language(language: Language) -> Self {
        let (title, back, empty, details) = match language {
            Language::English => ("Our Menu", "Back", "No items available", "View Details"),
            Language::Hindi => (
                "हमारा मेनू",
                "भाषा चयन पर वापस",
                "कोई आइटम उपलब्ध नहीं है",
                "विवरण देखें",
            ),
            Language::Gujarati => ("અમારું મેનુ", "પાછા જાઓ", "કોઈ વસ્તુ ઉપલબ્ધ નથી", "વિગતો જુઓ"),
            Language::Marathi => (
                "आमचा मेनू",
                "भाषा निवडीवर परत",
                "{category} विभागात कोणताही आइटम सापडला नाही.",
                "तपशील पहा",
            ),
        };
        Self {
            title: title.to_string(),
            back: back.to_string(),
            empty: empty.to_string(),
            details: details.to_string(),
            no_image: "No image available".to_string(),
            close: "✕".to_string(),
        }
    }

    /// Empty-state text for the named sub-category
    pub fn empty_message(&self, category: &str) -> String {
        self.empty.replace("{category}", category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageVariant {
    pub language: Language,
    pub source_url: String,
    pub catalog: CategoryCatalog,
    pub default_parent: String,
    pub labels: VariantLabels,
}

impl LanguageVariant {
    pub fn new(
        language: Language,
        source_url: impl Into<String>,
        catalog: CategoryCatalog,
    ) -> Result<Self, MenuError> {
        catalog.validate()?;
        let default_parent = catalog
            .default_parent()
            .map(|p| p.id.clone())
            .ok_or(MenuError::EmptyCatalog)?;

        Ok(Self {
            language,
            source_url: source_url.into(),
            catalog,
            default_parent,
            labels: VariantLabels::for_language(language),
        })
    }

    /// Built-in catalog and labels for `language`, reading from `source_url`
    pub fn built_in(language: Language, source_url: impl Into<String>) -> Result<Self, MenuError> {
        Self::new(language, source_url, CategoryCatalog::built_in(language))
    }

    pub fn with_default_parent(mut self, parent_id: &str) -> Result<Self, MenuError> {
        if self.catalog.parent(parent_id).is_none() {
            return Err(MenuError::UnknownParent(parent_id.to_string()));
        }
        self.default_parent = parent_id.to_string();
        Ok(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VariantRegistry {
    variants: Vec<LanguageVariant>,
}

impl VariantRegistry {
    pub fn new(variants: Vec<LanguageVariant>) -> Self {
        Self { variants }
    }

    /// All four languages with their published sheet URLs
    pub fn built_in() -> Result<Self, MenuError> {
        let variants = Language::ALL
            .into_iter()
            .map(|lang| LanguageVariant::built_in(lang, default_source_url(lang)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(variants))
    }

    pub fn variants(&self) -> &[LanguageVariant] {
        &self.variants
    }

    pub fn get(&self, language: Language) -> Option<&LanguageVariant> {
        self.variants.iter().find(|v| v.language == language)
    }

    /// Resolve a path segment such as `hindi` or `Hindi`
    pub fn resolve(&self, slug: &str) -> Result<&LanguageVariant, MenuError> {
        let language: Language = slug.parse()?;
        self.get(language)
            .ok_or_else(|| MenuError::UnknownLanguage(slug.to_string()))
    }
}
