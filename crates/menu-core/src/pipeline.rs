//! fetch → parse → language filter, and the per-view menu board

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{CategoryCatalog, MenuRecord, ParentCategory, SubCategory};
use crate::error::MenuError;
use crate::filter::{LanguageMenu, LanguagePolicy};
use crate::parser::parse_menu_csv;
use crate::selection::CategorySelection;
use crate::variant::LanguageVariant;

/// Where the raw export text comes from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_csv(&self, url: &str) -> Result<String, MenuError>;
}

#[derive(Clone)]
pub struct MenuPipeline {
    source: Arc<dyn MenuSource>,
    policy: LanguagePolicy,
}

impl MenuPipeline {
    pub fn new(source: Arc<dyn MenuSource>, policy: LanguagePolicy) -> Self {
        Self { source, policy }
    }

    pub fn policy(&self) -> &LanguagePolicy {
        &self.policy
    }

    /// Fetch and parse a variant's export. Never fails: a fetch error is
    /// logged and yields an empty record set.
    pub async fn fetch_records(&self, variant: &LanguageVariant) -> Vec<MenuRecord> {
        let text = match self.source.fetch_csv(&variant.source_url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Menu fetch for {} failed: {}", variant.language, e);
                return Vec::new();
            }
        };

        let outcome = parse_menu_csv(&text);
        if !outcome.rejected.is_empty() {
            debug!(
                "{} rows of the {} export were invalid",
                outcome.rejected.len(),
                variant.language
            );
        }
        outcome.into_records()
    }

    /// Stage 1 result for a variant
    pub async fn load(&self, variant: &LanguageVariant) -> LanguageMenu {
        let records = self.fetch_records(variant).await;
        let menu = LanguageMenu::new(&records, variant.language, &self.policy);
        info!(
            "Loaded {} menu: {} of {} records",
            variant.language,
            menu.len(),
            records.len()
        );
        menu
    }

    /// Load a variant and open a board on the given selection.
    pub async fn open_board(
        &self,
        variant: &LanguageVariant,
        parent_id: Option<&str>,
        sub_category_id: Option<&str>,
    ) -> Result<MenuBoard, MenuError> {
        let selection = CategorySelection::restore(
            &variant.catalog,
            &variant.default_parent,
            parent_id,
            sub_category_id,
        )?;
        let menu = self.load(variant).await;
        Ok(MenuBoard::new(variant.catalog.clone(), menu, selection))
    }
}

/// One page view: the language's records plus the navigation state.
/// Items are re-filtered on every read, so they always follow the selection.
#[derive(Debug, Clone)]
pub struct MenuBoard {
    catalog: CategoryCatalog,
    menu: LanguageMenu,
    selection: CategorySelection,
}

impl MenuBoard {
    pub fn new(catalog: CategoryCatalog, menu: LanguageMenu, selection: CategorySelection) -> Self {
        Self {
            catalog,
            menu,
            selection,
        }
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn menu(&self) -> &LanguageMenu {
        &self.menu
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn select_parent(&mut self, parent_id: &str) -> Result<(), MenuError> {
        self.selection.select_parent(&self.catalog, parent_id)
    }

    pub fn select_sub_category(&mut self, sub_category_id: &str) -> Result<(), MenuError> {
        self.selection.select_sub_category(&self.catalog, sub_category_id)
    }

    pub fn current_parent(&self) -> Option<&ParentCategory> {
        self.catalog.parent(self.selection.parent_id())
    }

    pub fn current_sub_category(&self) -> Option<&SubCategory> {
        self.current_parent()?
            .sub_category(self.selection.sub_category_id())
    }

    pub fn visible_items(&self) -> Vec<&MenuRecord> {
        self.menu.items_in(self.selection.sub_category_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    const EXPORT: &str = "id,name,description,price,category,type,image,longDescription,language\n\
        1,Tea,Hot tea,20,Hot Coffee,veg,,,English\n\
        2,Cold Brew,,60,Cold Coffee,veg,,,English\n\
        3,Chai,,25,Hot Coffee,veg,,,Hindi\n\
        4,Espresso,,abc,Hot Coffee,veg,,,English\n\
        5,Latte,,45,hot coffee,veg,,,";

    fn variant() -> LanguageVariant {
        LanguageVariant::built_in(Language::English, "http://sheet/en.csv").unwrap()
    }

    fn pipeline_with(result: Result<String, MenuError>) -> MenuPipeline {
        let mut source = MockMenuSource::new();
        source
            .expect_fetch_csv()
            .withf(|url: &str| url == "http://sheet/en.csv")
            .times(1)
            .return_once(move |_| result);
        MenuPipeline::new(Arc::new(source), LanguagePolicy::default())
    }

    #[tokio::test]
    async fn test_load_filters_language() {
        let pipeline = pipeline_with(Ok(EXPORT.to_string()));
        let menu = pipeline.load(&variant()).await;
        let ids: Vec<_> = menu.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_menu() {
        let pipeline = pipeline_with(Err(MenuError::Upstream { status: 503 }));
        let board = pipeline.open_board(&variant(), None, None).await.unwrap();
        assert!(board.menu().is_empty());
        assert!(board.visible_items().is_empty());
    }

    #[tokio::test]
    async fn test_empty_response_yields_empty_menu() {
        let pipeline = pipeline_with(Ok(String::new()));
        let board = pipeline
            .open_board(&variant(), Some("coffee"), Some("Hot Coffee"))
            .await
            .unwrap();
        assert!(board.visible_items().is_empty());
    }

    #[tokio::test]
    async fn test_board_follows_selection() {
        let pipeline = pipeline_with(Ok(EXPORT.to_string()));
        let mut board = pipeline.open_board(&variant(), None, None).await.unwrap();

        assert_eq!(board.selection().parent_id(), "drinks");
        assert!(board.visible_items().is_empty());

        board.select_parent("coffee").unwrap();
        assert_eq!(board.current_sub_category().unwrap().id, "Cold Coffee");
        let names: Vec<_> = board.visible_items().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cold Brew"]);

        board.select_sub_category("Hot Coffee").unwrap();
        let names: Vec<_> = board.visible_items().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Latte"]);
        assert_eq!(board.current_parent().unwrap().id, "coffee");
    }
}
