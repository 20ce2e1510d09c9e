//! Per-visitor session flags
//!
//! Plain state object; the server persists it in cookies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The splash intro already ran in this session
    pub has_seen_intro: bool,
    /// Visitor came back from a menu page via the back button
    pub from_language_menu: bool,
    /// The visit webhook already fired for this session
    pub visit_recorded: bool,
}

impl SessionState {
    /// Landing on the splash page. Returns whether the intro should play;
    /// either way the intro counts as seen afterwards.
    pub fn begin_splash(&mut self) -> bool {
        let play = !self.from_language_menu && !self.has_seen_intro;
        self.has_seen_intro = true;
        self.from_language_menu = false;
        play
    }

    pub fn return_to_language_menu(&mut self) {
        self.from_language_menu = true;
    }

    pub fn should_record_visit(&self) -> bool {
        !self.visit_recorded
    }

    pub fn mark_visit_recorded(&mut self) {
        self.visit_recorded = true;
    }
}
