use axum::extract::FromRef;
use std::sync::Arc;

use menu_core::{LanguageVariant, MenuPipeline, MenuSource, VariantRegistry};

use crate::config::Settings;
use crate::services::{HttpSheetSource, VisitTracker};
use crate::views::Views;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub registry: Arc<VariantRegistry>,
    pub pipeline: MenuPipeline,
    pub visit_tracker: Arc<VisitTracker>,
    pub views: Arc<Views>,
}

impl AppState {
    /// Wire the HTTP sheet source and the webhook from settings
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let source = Arc::new(HttpSheetSource::new(settings.sheet.timeout_seconds));
        Self::with_source(settings, source)
    }

    pub fn with_source(settings: Settings, source: Arc<dyn MenuSource>) -> anyhow::Result<Self> {
        let variants = menu_core::Language::ALL
            .into_iter()
            .map(|lang| {
                let variant = LanguageVariant::built_in(lang, settings.sources.url_for(lang))?;
                match settings.default_parents.for_language(lang) {
                    Some(parent) => variant.with_default_parent(parent),
                    None => Ok(variant),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pipeline = MenuPipeline::new(source, settings.sheet.language_policy());
        let visit_tracker = VisitTracker::new(&settings.visit);
        let views = Views::new()?;

        Ok(Self {
            settings: Arc::new(settings),
            registry: Arc::new(VariantRegistry::new(variants)),
            pipeline,
            visit_tracker: Arc::new(visit_tracker),
            views: Arc::new(views),
        })
    }
}

impl FromRef<AppState> for Arc<VariantRegistry> {
    fn from_ref(state: &AppState) -> Self {
        state.registry.clone()
    }
}
