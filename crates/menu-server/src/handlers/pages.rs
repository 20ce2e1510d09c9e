//! HTML pages: splash / language picker, menu board, item details

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use axum_extra::extract::CookieJar;
use menu_core::{LanguageVariant, MenuBoard, SplashSequence};
use serde::Deserialize;
use tracing::debug;

use super::SelectionQuery;
use crate::state::AppState;
use crate::utils::{links, session, ApiError};
use crate::views::{ItemCard, ItemPage, LanguageLink, MenuPage, SplashPage, TabLink, SITE_NAME, TAGLINE};

#[derive(Debug, Default, Deserialize)]
pub struct SplashQuery {
    pub from: Option<String>,
}

/// `/`: intro on the first landing of a session, straight to the picker after
pub async fn splash(
    State(state): State<AppState>,
    Query(query): Query<SplashQuery>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), ApiError> {
    let mut session = session::read_session(&jar);
    if query.from.as_deref() == Some("menu") {
        session.return_to_language_menu();
    }

    let play_intro = session.begin_splash();
    let sequence = if play_intro {
        SplashSequence::new(state.settings.splash)
    } else {
        SplashSequence::skipped()
    };
    debug!("Splash page, intro: {}", play_intro);

    let page = SplashPage {
        lang_code: "en",
        site_name: SITE_NAME,
        tagline: TAGLINE,
        ad_image: state.settings.site.ad_image.clone(),
        play_intro,
        schedule_json: serde_json::to_string(sequence.steps())
            .map_err(|e| ApiError::InternalError(e.to_string()))?,
        languages: state
            .registry
            .variants()
            .iter()
            .map(|variant| LanguageLink {
                name: variant.language.native_name().to_string(),
                href: links::menu_link(variant.language.slug(), None, None),
            })
            .collect(),
    };

    let html = state.views.render("splash", &page)?;
    Ok((session::write_splash_flags(jar, &session), Html(html)))
}

fn parent_tabs(variant: &LanguageVariant, board: &MenuBoard) -> Vec<TabLink> {
    let slug = variant.language.slug();
    board
        .catalog()
        .parents()
        .iter()
        .map(|parent| TabLink {
            label: parent.name.clone(),
            icon: parent.icon.clone(),
            href: links::menu_link(slug, Some(&parent.id), None),
            active: parent.id == board.selection().parent_id(),
        })
        .collect()
}

fn sub_tabs(variant: &LanguageVariant, board: &MenuBoard) -> Vec<TabLink> {
    let Some(parent) = board.current_parent().filter(|p| p.has_sub_tabs()) else {
        return Vec::new();
    };
    parent
        .sub_categories
        .iter()
        .map(|sub| TabLink {
            label: sub.name.clone(),
            icon: String::new(),
            href: links::menu_link(variant.language.slug(), Some(&parent.id), Some(&sub.id)),
            active: sub.id == board.selection().sub_category_id(),
        })
        .collect()
}

/// `/{language}`
pub async fn menu_page(
    State(state): State<AppState>,
    Path(language): Path<String>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, ApiError> {
    let variant = state.registry.resolve(&language)?;
    let board = state
        .pipeline
        .open_board(variant, query.parent.as_deref(), query.sub.as_deref())
        .await?;

    let slug = variant.language.slug();
    let parent_id = board.selection().parent_id();
    let sub_id = board.selection().sub_category_id();

    let items = board
        .visible_items()
        .into_iter()
        .map(|record| ItemCard {
            name: record.name.clone(),
            diet: record.diet.as_str(),
            diet_label: record.diet.label(),
            description: record.description.clone(),
            price: record.display_price(),
            details_href: record
                .has_details()
                .then(|| links::item_link(slug, &record.id, parent_id, sub_id)),
        })
        .collect();

    let heading = board
        .current_sub_category()
        .map(|sub| sub.name.clone())
        .unwrap_or_default();

    let page = MenuPage {
        lang_code: variant.language.code(),
        site_name: SITE_NAME,
        title: variant.labels.title.clone(),
        back_label: variant.labels.back.clone(),
        back_href: "/?from=menu".to_string(),
        parents: parent_tabs(variant, &board),
        sub_tabs: sub_tabs(variant, &board),
        empty_message: variant.labels.empty_message(&heading),
        heading,
        items,
        details_label: variant.labels.details.clone(),
    };

    Ok(Html(state.views.render("menu", &page)?))
}

/// `/{language}/items/{id}`
pub async fn item_page(
    State(state): State<AppState>,
    Path((language, id)): Path<(String, String)>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, ApiError> {
    let variant = state.registry.resolve(&language)?;
    let board = state
        .pipeline
        .open_board(variant, query.parent.as_deref(), query.sub.as_deref())
        .await?;

    let record = board
        .menu()
        .find(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Menu item {} ({})", id, variant.language)))?;

    let page = ItemPage {
        lang_code: variant.language.code(),
        site_name: SITE_NAME,
        name: record.name.clone(),
        diet: record.diet.as_str(),
        diet_label: record.diet.label(),
        detail_text: record.detail_text().to_string(),
        price: record.display_price(),
        image: record.image.clone(),
        no_image_label: variant.labels.no_image.clone(),
        close_href: links::menu_link(
            variant.language.slug(),
            Some(board.selection().parent_id()),
            Some(board.selection().sub_category_id()),
        ),
        close_label: variant.labels.close.clone(),
    };

    Ok(Html(state.views.render("item", &page)?))
}
