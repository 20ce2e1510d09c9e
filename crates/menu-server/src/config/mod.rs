pub mod settings;

pub use settings::{
    DefaultParentsConfig, MissingLanguage, Settings, SheetConfig, SiteConfig, SourcesConfig,
    VisitConfig, WebhookMethod,
};
