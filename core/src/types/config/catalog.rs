use super::CatalogSettings;

/// Runtime form of the `[catalog]` section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Products shown under "you may also like".
    pub related_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from(&CatalogSettings::default())
    }
}

impl From<&CatalogSettings> for CatalogConfig {
    fn from(settings: &CatalogSettings) -> Self {
        Self {
            related_limit: settings.related_limit as usize,
        }
    }
}
