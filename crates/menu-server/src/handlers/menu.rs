use axum::{
    extract::{Path, Query, State},
    Json,
};
use menu_core::{
    CategorySelection, MenuRecord, ParentCategory, VariantLabels, VariantRegistry,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::SelectionQuery;
use crate::state::AppState;
use crate::utils::{links, ApiError};

#[derive(Debug, Serialize)]
pub struct LanguageSummary {
    pub slug: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub href: String,
}

pub async fn list_languages(
    State(registry): State<Arc<VariantRegistry>>,
) -> Json<Vec<LanguageSummary>> {
    let languages = registry
        .variants()
        .iter()
        .map(|variant| LanguageSummary {
            slug: variant.language.slug(),
            name: variant.language.native_name(),
            code: variant.language.code(),
            href: links::menu_link(variant.language.slug(), None, None),
        })
        .collect();
    Json(languages)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub language: &'static str,
    pub labels: VariantLabels,
    pub parents: Vec<ParentCategory>,
    pub selection: CategorySelection,
    pub items: Vec<MenuRecord>,
    pub total_items: usize,
    /// Set when the selected sub-category has nothing to show
    pub message: Option<String>,
}

/// Menu board for one language as JSON
pub async fn get_menu(
    State(state): State<AppState>,
    Path(language): Path<String>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<MenuResponse>, ApiError> {
    let variant = state.registry.resolve(&language)?;
    let board = state
        .pipeline
        .open_board(variant, query.parent.as_deref(), query.sub.as_deref())
        .await?;

    let items: Vec<MenuRecord> = board.visible_items().into_iter().cloned().collect();
    debug!(
        "{} menu {}/{}: {} items",
        variant.language,
        board.selection().parent_id(),
        board.selection().sub_category_id(),
        items.len()
    );

    Ok(Json(MenuResponse {
        language: variant.language.slug(),
        message: items.is_empty().then(|| {
            let category = board
                .current_sub_category()
                .map(|sub| sub.name.as_str())
                .unwrap_or_default();
            variant.labels.empty_message(category)
        }),
        labels: variant.labels.clone(),
        parents: board.catalog().parents().to_vec(),
        selection: board.selection().clone(),
        total_items: board.menu().len(),
        items,
    }))
}
