use anyhow::Result;
use config::{Config, Environment, File};
use menu_core::{Language, LanguagePolicy, SplashTimings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    pub server: ServerConfig,
    pub sheet: SheetConfig,
    pub sources: SourcesConfig,
    pub visit: VisitConfig,
    pub splash: SplashTimings,
    #[serde(default)]
    pub default_parents: DefaultParentsConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingLanguage {
    /// Untagged rows belong to `primary_language`
    Default,
    /// Untagged rows are never shown
    Exclude,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SheetConfig {
    pub timeout_seconds: u64,
    pub primary_language: String,
    pub missing_language: MissingLanguage,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            primary_language: Language::English.tag().to_string(),
            missing_language: MissingLanguage::Default,
        }
    }
}

impl SheetConfig {
    pub fn language_policy(&self) -> LanguagePolicy {
        match self.missing_language {
            MissingLanguage::Default => LanguagePolicy::DefaultTo(self.primary_language.clone()),
            MissingLanguage::Exclude => LanguagePolicy::Exclude,
        }
    }
}

/// Published CSV export URL per language
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourcesConfig {
    pub english: String,
    pub hindi: String,
    pub gujarati: String,
    pub marathi: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            english: menu_core::default_source_url(Language::English),
            hindi: menu_core::default_source_url(Language::Hindi),
            gujarati: menu_core::default_source_url(Language::Gujarati),
            marathi: menu_core::default_source_url(Language::Marathi),
        }
    }
}

impl SourcesConfig {
    pub fn url_for(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Gujarati => &self.gujarati,
            Language::Marathi => &self.marathi,
        }
    }
}

/// Parent tab a language's menu opens on. Unset means the catalog's first.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DefaultParentsConfig {
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub hindi: Option<String>,
    #[serde(default)]
    pub gujarati: Option<String>,
    #[serde(default)]
    pub marathi: Option<String>,
}

impl DefaultParentsConfig {
    pub fn for_language(&self, language: Language) -> Option<&str> {
        let parent = match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Gujarati => &self.gujarati,
            Language::Marathi => &self.marathi,
        };
        parent.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    /// Image shown during the splash advertisement phase
    pub ad_image: String,
    /// Served under `/images`
    pub images_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ad_image: "/images/ad-placeholder.jpg".to_string(),
            images_dir: "public/images".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WebhookMethod {
    Get,
    Post,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VisitConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
    pub method: WebhookMethod,
    pub cookie_max_age_seconds: i64,
    pub timeout_seconds: u64,
}

impl Default for VisitConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            method: WebhookMethod::Get,
            cookie_max_age_seconds: 6 * 60 * 60,
            timeout_seconds: 5,
        }
    }
}

impl Settings {
    /// Defaults, then `config/settings.toml` if present, then `APP__*`
    /// environment variables (e.g. `APP__VISIT__WEBHOOK_URL`).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}
