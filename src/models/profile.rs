use serde::{Deserialize, Serialize};

/// Name revealed by the typewriter in the hero section
pub const DISPLAY_NAME: &str = "Priya Tiwari";

/// External profiles linked from the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    GitHub,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::GitHub => "github",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "linkedin" => Some(Platform::LinkedIn),
            "github" => Some(Platform::GitHub),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::GitHub => "GitHub",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "https://linkedin.com",
            Platform::GitHub => "https://github.com",
        }
    }

    pub fn all() -> Vec<Platform> {
        vec![Platform::LinkedIn, Platform::GitHub]
    }
}
