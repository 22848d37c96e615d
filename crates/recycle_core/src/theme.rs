/// Source of the user's light/dark preference, queried once at startup.
pub trait AmbientPreference {
    /// `Some(true)` for dark, `Some(false)` for light, `None` when unknown.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Preference with a fixed answer; for tests and headless use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPreference(pub Option<bool>);

impl AmbientPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn resolve(preference: &dyn AmbientPreference) -> Self {
        match preference.prefers_dark() {
            Some(true) => Theme::Dark,
            Some(false) | None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}
