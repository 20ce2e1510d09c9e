//! Server-rendered pages
//!
//! Templates are compiled into the binary; each page has a typed context.

use handlebars::Handlebars;
use serde::Serialize;

use crate::utils::ApiError;

pub const SITE_NAME: &str = "RAJU'S";
pub const TAGLINE: &str = "Snacks and Soda Pub";

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_partial("layout", include_str!("templates/layout.hbs"))?;
        registry.register_template_string("splash", include_str!("templates/splash.hbs"))?;
        registry.register_template_string("menu", include_str!("templates/menu.hbs"))?;
        registry.register_template_string("item", include_str!("templates/item.hbs"))?;
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, ApiError> {
        Ok(self.registry.render(name, context)?)
    }
}

#[derive(Debug, Serialize)]
pub struct LanguageLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct SplashPage {
    pub lang_code: &'static str,
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub ad_image: String,
    pub play_intro: bool,
    /// JSON array of `{atMs, state}` steps
    pub schedule_json: String,
    pub languages: Vec<LanguageLink>,
}

#[derive(Debug, Serialize)]
pub struct TabLink {
    pub label: String,
    pub icon: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemCard {
    pub name: String,
    pub diet: &'static str,
    pub diet_label: &'static str,
    pub description: String,
    pub price: String,
    pub details_href: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuPage {
    pub lang_code: &'static str,
    pub site_name: &'static str,
    pub title: String,
    pub back_label: String,
    pub back_href: String,
    pub parents: Vec<TabLink>,
    pub sub_tabs: Vec<TabLink>,
    pub heading: String,
    pub items: Vec<ItemCard>,
    pub empty_message: String,
    pub details_label: String,
}

#[derive(Debug, Serialize)]
pub struct ItemPage {
    pub lang_code: &'static str,
    pub site_name: &'static str,
    pub name: String,
    pub diet: &'static str,
    pub diet_label: &'static str,
    pub detail_text: String,
    pub price: String,
    pub image: Option<String>,
    pub no_image_label: String,
    pub close_href: String,
    pub close_label: String,
}
