pub mod health;
pub mod menu;
pub mod pages;
pub mod visit;

use serde::Deserialize;

/// `?parent=..&sub=..` carried by menu pages and the menu API
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub parent: Option<String>,
    pub sub: Option<String>,
}
