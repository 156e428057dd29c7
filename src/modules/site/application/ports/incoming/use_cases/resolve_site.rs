use async_trait::async_trait;

use crate::modules::localization::Lang;
use crate::modules::settings::application::domain::NavSection;
use crate::modules::site::application::domain::{MaintenanceView, SiteView};

/// Whether a public live feed may be opened for one section.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveAccess {
    Open(Lang),
    Maintenance(MaintenanceView),
    Hidden,
}

#[async_trait]
pub trait ResolveSiteUseCase: Send + Sync {
    /// The requested language if any, else the site's default language.
    async fn active_lang(&self, requested: Option<Lang>) -> Lang;

    /// Never fails. A backend outage yields a page built from defaults with
    /// empty collections.
    async fn execute(&self, requested: Option<Lang>) -> SiteView;

    /// Same gate as [`ResolveSiteUseCase::execute`]: maintenance first, then
    /// the section's visibility flag.
    async fn live_access(&self, requested: Option<Lang>, section: NavSection) -> LiveAccess;
}
