//! Session flags <-> cookies

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use menu_core::SessionState;

pub const INTRO_SEEN_COOKIE: &str = "menu_intro_seen";
pub const FROM_MENU_COOKIE: &str = "menu_from_menu";
pub const VISITED_COOKIE: &str = "menu_visited";

pub fn read_session(jar: &CookieJar) -> SessionState {
    SessionState {
        has_seen_intro: jar.get(INTRO_SEEN_COOKIE).is_some(),
        from_language_menu: jar.get(FROM_MENU_COOKIE).is_some(),
        visit_recorded: jar.get(VISITED_COOKIE).is_some(),
    }
}

fn flag(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, "true"))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Write the splash flags back. Both live as browser-session cookies.
pub fn write_splash_flags(jar: CookieJar, session: &SessionState) -> CookieJar {
    let jar = if session.has_seen_intro {
        jar.add(flag(INTRO_SEEN_COOKIE))
    } else {
        jar.remove(Cookie::build(INTRO_SEEN_COOKIE).path("/"))
    };

    if session.from_language_menu {
        jar.add(flag(FROM_MENU_COOKIE))
    } else {
        jar.remove(Cookie::build(FROM_MENU_COOKIE).path("/"))
    }
}

/// Persist the visit marker once the session has counted a visit.
pub fn write_visit_flag(jar: CookieJar, session: &SessionState, max_age_seconds: i64) -> CookieJar {
    if !session.visit_recorded {
        return jar;
    }
    let cookie = Cookie::build((VISITED_COOKIE, "true"))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age_seconds))
        .build();
    jar.add(cookie)
}
