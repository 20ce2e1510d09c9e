//! Relative links for the HTML pages, percent-encoded

use reqwest::Url;

const BASE: &str = "http://menu.local/";

fn relative(url: &Url) -> String {
    match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
        _ => url.path().to_string(),
    }
}

fn with_segments(segments: &[&str]) -> Option<Url> {
    let mut url = Url::parse(BASE).ok()?;
    url.path_segments_mut().ok()?.clear().extend(segments);
    Some(url)
}

/// `/{language}?parent=..&sub=..`
pub fn menu_link(language: &str, parent: Option<&str>, sub: Option<&str>) -> String {
    let Some(mut url) = with_segments(&[language]) else {
        return format!("/{}", language);
    };
    {
        let mut query = url.query_pairs_mut();
        if let Some(parent) = parent {
            query.append_pair("parent", parent);
        }
        if let Some(sub) = sub {
            query.append_pair("sub", sub);
        }
    }
    relative(&url)
}

/// `/{language}/items/{id}?parent=..&sub=..`
pub fn item_link(language: &str, id: &str, parent: &str, sub: &str) -> String {
    let Some(mut url) = with_segments(&[language, "items", id]) else {
        return format!("/{}", language);
    };
    url.query_pairs_mut()
        .append_pair("parent", parent)
        .append_pair("sub", sub);
    relative(&url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_link_encodes_query() {
        assert_eq!(menu_link("English", None, None), "/English");
        assert_eq!(
            menu_link("English", Some("coffee"), Some("Hot Coffee")),
            "/English?parent=coffee&sub=Hot+Coffee"
        );
        assert_eq!(
            menu_link("Marathi", Some("breads"), Some("Juice & Milkshakes")),
            "/Marathi?parent=breads&sub=Juice+%26+Milkshakes"
        );
    }

    #[test]
    fn test_item_link_encodes_path() {
        assert_eq!(
            item_link("Hindi", "a b", "coffee", "Hot Coffee"),
            "/Hindi/items/a%20b?parent=coffee&sub=Hot+Coffee"
        );
    }
}
