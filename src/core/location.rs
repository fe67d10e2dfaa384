use url::Url;

/// Source of the "current page" URL that gets attached to feedback when the
/// caller does not supply one.
///
/// In a browser host this is the document location. Everywhere else there is
/// no such thing, and [`NoLocation`] leaves `pageUrl` absent.
pub trait PageLocator: Send + Sync + std::fmt::Debug {
    fn current_url(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl PageLocator for NoLocation {
    fn current_url(&self) -> Option<String> {
        None
    }
}

/// A host that always reports the same page.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    url: Url,
}

impl FixedLocation {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(raw)?,
        })
    }

    #[must_use]
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

impl PageLocator for FixedLocation {
    fn current_url(&self) -> Option<String> {
        Some(self.url.to_string())
    }
}
