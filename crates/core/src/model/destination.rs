use std::fmt;

/// Every place the app can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Login,
    Dashboard,
    Upload,
    Assessment,
    Verify,
    Background,
    Report,
    NotFound,
}

impl Destination {
    pub const ALL: [Destination; 9] = [
        Destination::Home,
        Destination::Login,
        Destination::Dashboard,
        Destination::Upload,
        Destination::Assessment,
        Destination::Verify,
        Destination::Background,
        Destination::Report,
        Destination::NotFound,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
            Destination::Upload => "/upload",
            Destination::Assessment => "/assessment",
            Destination::Verify => "/verify",
            Destination::Background => "/background",
            Destination::Report => "/report",
            Destination::NotFound => "/404",
        }
    }

    /// Resolves a path; anything unknown is `NotFound`. Trailing slashes and
    /// query strings are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .filter(|dest| *dest != Destination::NotFound)
            .find(|dest| dest.path() == normalized)
            .unwrap_or(Destination::NotFound)
    }

    #[must_use]
    pub fn requires_auth(self) -> bool {
        !matches!(
            self,
            Destination::Home | Destination::Login | Destination::NotFound
        )
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
