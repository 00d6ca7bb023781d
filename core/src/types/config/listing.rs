use super::ListingSettings;

/// Reveal window sizes passed to the listing state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingConfig {
    pub initial_visible: usize,
    pub batch_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::from(&ListingSettings::default())
    }
}

impl From<&ListingSettings> for ListingConfig {
    fn from(settings: &ListingSettings) -> Self {
        Self {
            initial_visible: settings.initial_visible as usize,
            batch_size: settings.batch_size as usize,
        }
    }
}
