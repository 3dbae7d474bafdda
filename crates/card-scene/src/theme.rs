//! Theme context shared by every node of a render pass.

pub use card_ir::DEFAULT_PRIMARY;

use card_ir::CardTheme;
use serde::Serialize;
use tracing::warn;

/// Header ornament stops used when the card has no complete gradient.
pub const DEFAULT_GRADIENT: [&str; 3] = [DEFAULT_PRIMARY, "#a855f7", "#ec4899"];

/// Read-only colors resolved once at the root of a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeContext {
    primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    gradient: Option<(String, String)>,
}

/// Decorative strip drawn above the card body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderOrnament {
    /// Both gradient ends supplied by the card theme.
    Custom { from: String, to: String },
    /// Built-in palette.
    Default { stops: Vec<String> },
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            gradient: None,
        }
    }
}

impl ThemeContext {
    /// Resolve the card theme against `fallback_primary`.
    ///
    /// Colors that do not parse are treated as absent. An invalid
    /// `fallback_primary` falls back to [`DEFAULT_PRIMARY`].
    pub fn resolve(theme: Option<&CardTheme>, fallback_primary: &str) -> Self {
        let fallback = if is_color(fallback_primary) {
            fallback_primary
        } else {
            warn!(color = fallback_primary, "invalid default primary color, using built-in");
            DEFAULT_PRIMARY
        };

        let Some(theme) = theme else {
            return Self {
                primary: fallback.to_string(),
                gradient: None,
            };
        };

        let primary = match theme.primary.as_deref() {
            Some(color) if is_color(color) => color.to_string(),
            Some(color) => {
                warn!(color, "invalid theme.primary, using default");
                fallback.to_string()
            }
            None => fallback.to_string(),
        };

        let gradient = match (theme.gradient_from.as_deref(), theme.gradient_to.as_deref()) {
            (Some(from), Some(to)) if is_color(from) && is_color(to) => {
                Some((from.to_string(), to.to_string()))
            }
            (Some(from), Some(to)) => {
                warn!(from, to, "invalid theme gradient, using default ornament");
                None
            }
            _ => None,
        };

        Self { primary, gradient }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn header(&self) -> HeaderOrnament {
        match &self.gradient {
            Some((from, to)) => HeaderOrnament::Custom {
                from: from.clone(),
                to: to.clone(),
            },
            None => HeaderOrnament::Default {
                stops: DEFAULT_GRADIENT.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

fn is_color(value: &str) -> bool {
    csscolorparser::parse(value.trim()).is_ok()
}
