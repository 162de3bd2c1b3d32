use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body-shape letter codes used by the styling rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyShape {
    /// Hourglass.
    X,
    /// Pear.
    A,
    /// Inverted triangle.
    V,
    /// Rectangle.
    #[default]
    H,
    /// Oval.
    O,
}

impl BodyShape {
    /// Parse either a letter code or a descriptive label. Unknown input yields `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let lower = label.trim().to_lowercase();
        match lower.as_str() {
            "x" | "hourglass" => return Some(BodyShape::X),
            "a" | "pear" | "triangle" => return Some(BodyShape::A),
            "v" | "inverted triangle" | "inverted-triangle" | "athletic" => {
                return Some(BodyShape::V)
            }
            "h" | "rectangle" => return Some(BodyShape::H),
            "o" | "oval" | "apple" => return Some(BodyShape::O),
            _ => {}
        }
        match lower.chars().next()? {
            'x' => Some(BodyShape::X),
            'a' => Some(BodyShape::A),
            'v' => Some(BodyShape::V),
            'h' => Some(BodyShape::H),
            'o' => Some(BodyShape::O),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BodyShape::X => "X",
            BodyShape::A => "A",
            BodyShape::V => "V",
            BodyShape::H => "H",
            BodyShape::O => "O",
        }
    }
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw style analysis as produced by the style quiz or cached locally.
/// Every field is optional; [`StyleProfile::from_analysis`] fills defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleAnalysis {
    pub style_profile: Option<String>,
    pub body_shape: Option<String>,
    pub color_preferences: Vec<String>,
    pub mood: Option<String>,
}

/// Persisted quiz-result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub user_id: String,
    pub analysis: StyleAnalysis,
    pub created_at: DateTime<Utc>,
}

/// Resolved style profile used by the downstream stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub style_profile: String,
    pub body_shape: BodyShape,
    pub color_preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl StyleProfile {
    pub const DEFAULT_STYLE: &'static str = "classic";
    pub const DEFAULT_COLORS: [&'static str; 4] = ["navy", "black", "white", "beige"];

    pub fn from_analysis(analysis: &StyleAnalysis) -> Self {
        let style_profile = analysis
            .style_profile
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| Self::DEFAULT_STYLE.to_string());
        let body_shape = analysis
            .body_shape
            .as_deref()
            .and_then(BodyShape::parse)
            .unwrap_or_default();
        let color_preferences = if analysis.color_preferences.is_empty() {
            Self::DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
        } else {
            analysis.color_preferences.clone()
        };
        Self {
            style_profile,
            body_shape,
            color_preferences,
            mood: analysis.mood.clone(),
        }
    }
}
