use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::content::application::domain::{
    CollectionRecord, Experience, Project, Skill, StoredRecord,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;
use crate::modules::localization::Lang;
use crate::modules::settings::application::domain::{GeneralSettings, NavSection, NavbarContent};
use crate::modules::settings::application::service::SettingsStore;
use crate::modules::site::application::domain::{MaintenanceView, PageView, SiteContent, SiteView};
use crate::modules::site::application::ports::incoming::use_cases::{
    LiveAccess, ResolveSiteUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Builds the public page. Settings are read first; maintenance mode stops
/// there, and hidden sections are never fetched.
pub struct PublicSiteResolver<S>
where
    S: DocumentStore,
{
    settings: Arc<SettingsStore>,
    store: S,
}

impl<S> PublicSiteResolver<S>
where
    S: DocumentStore,
{
    pub fn new(settings: Arc<SettingsStore>, store: S) -> Self {
        Self { settings, store }
    }

    async fn load<R: CollectionRecord>(&self, visible: bool) -> Vec<StoredRecord<R>> {
        if !visible {
            return Vec::new();
        }

        match self.store.list(R::COLLECTION).await {
            Ok(documents) => StoredRecord::from_snapshot(&documents),
            Err(e) => {
                warn!(
                    collection = R::COLLECTION,
                    error = %e,
                    "collection unavailable, rendering empty"
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl<S> ResolveSiteUseCase for PublicSiteResolver<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn active_lang(&self, requested: Option<Lang>) -> Lang {
        match requested {
            Some(lang) => lang,
            None => self.settings.snapshot().await.get::<GeneralSettings>().default_lang,
        }
    }

    async fn execute(&self, requested: Option<Lang>) -> SiteView {
        let settings = self.settings.snapshot().await;
        let general: GeneralSettings = settings.get();
        let lang = requested.unwrap_or(general.default_lang);

        if general.maintenance_mode {
            info!(lang = lang.code(), "maintenance mode, serving notice only");
            return SiteView::Maintenance(MaintenanceView::new(lang));
        }

        let navbar: NavbarContent = settings.get();
        let (projects, experiences, skills) = futures::join!(
            self.load::<Project>(navbar.is_visible(NavSection::Projects)),
            self.load::<Experience>(navbar.is_visible(NavSection::Experience)),
            self.load::<Skill>(navbar.is_visible(NavSection::Skills)),
        );

        let content = SiteContent {
            projects,
            experiences,
            skills,
        };
        SiteView::Normal(Box::new(PageView::compose(&settings, lang, &content)))
    }

    async fn live_access(&self, requested: Option<Lang>, section: NavSection) -> LiveAccess {
        let settings = self.settings.snapshot().await;
        let general: GeneralSettings = settings.get();
        let lang = requested.unwrap_or(general.default_lang);

        if general.maintenance_mode {
            return LiveAccess::Maintenance(MaintenanceView::new(lang));
        }
        if !settings.get::<NavbarContent>().is_visible(section) {
            return LiveAccess::Hidden;
        }
        LiveAccess::Open(lang)
    }
}
