// SPDX-License-Identifier: MPL-2.0
//! Notification kind registry.
//!
//! Kinds map a notification's type name to its visual accent. The registry
//! ships with the built-in kinds (`success`, `info`, `warning`, `danger`,
//! `default`) and accepts user-defined kinds at construction time.

use crate::design_tokens::palette;
use iced::Color;
use std::collections::HashMap;

/// Name of the fallback kind used for unknown type names.
pub const DEFAULT_KIND: &str = "default";

/// Visual styling attached to a notification kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStyle {
    /// Accent color for the toast border.
    pub accent: Color,
}

/// Mapping from kind name to styling, set once at initialization.
#[derive(Debug, Clone)]
pub struct KindRegistry {
    styles: HashMap<String, KindStyle>,
}

impl Default for KindRegistry {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(
            "success".to_owned(),
            KindStyle {
                accent: palette::SUCCESS_500,
            },
        );
        styles.insert(
            "info".to_owned(),
            KindStyle {
                accent: palette::INFO_500,
            },
        );
        styles.insert(
            "warning".to_owned(),
            KindStyle {
                accent: palette::WARNING_500,
            },
        );
        styles.insert(
            "danger".to_owned(),
            KindStyle {
                accent: palette::ERROR_500,
            },
        );
        styles.insert(
            DEFAULT_KIND.to_owned(),
            KindStyle {
                accent: palette::GRAY_400,
            },
        );
        Self { styles }
    }
}

impl KindRegistry {
    /// Creates a registry with only the built-in kinds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user-defined kind, replacing any previous definition.
    pub fn register(&mut self, name: impl Into<String>, style: KindStyle) {
        self.styles.insert(name.into(), style);
    }

    /// Resolves a kind name, falling back to the default kind.
    #[must_use]
    pub fn resolve(&self, name: &str) -> KindStyle {
        self.styles
            .get(name)
            .or_else(|| self.styles.get(DEFAULT_KIND))
            .copied()
            .unwrap_or(KindStyle {
                accent: palette::GRAY_400,
            })
    }

    /// Returns whether a kind is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}
