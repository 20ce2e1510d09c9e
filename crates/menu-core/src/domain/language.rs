//! Supported menu languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MenuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    Gujarati,
    Marathi,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Gujarati,
        Language::Marathi,
    ];

    /// Path segment of the language's menu page, e.g. `/Hindi`
    pub fn slug(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Gujarati => "Gujarati",
            Self::Marathi => "Marathi",
        }
    }

    /// Lowercase tag compared against the export's `language` column
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Gujarati => "gujarati",
            Self::Marathi => "marathi",
        }
    }

    /// Button label on the language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी",
            Self::Gujarati => "ગુજરાતી",
            Self::Marathi => "मराठी",
        }
    }

    /// BCP 47 code for the page's `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Gujarati => "gu",
            Self::Marathi => "mr",
        }
    }
}

impl FromStr for Language {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag() == wanted)
            .ok_or_else(|| MenuError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
