use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::IdentityProvider;
use crate::modules::content::application::domain::{Experience, Project, Skill};
use crate::modules::content::application::ports::incoming::use_cases::CreateRecordUseCase;
use crate::modules::content::application::record_use_cases::RecordUseCases;
use crate::modules::document_store::adapter::outgoing::InMemoryDocumentStore;
use crate::modules::document_store::application::ports::outgoing::DocumentStore;
use crate::modules::outreach::application::outreach_use_cases::OutreachUseCases;
use crate::modules::outreach::application::ports::incoming::use_cases::{
    GeneratePlanUseCase, SendContactUseCase,
};
use crate::modules::settings::application::service::{
    LoadSettingsService, SaveSettingsService, SettingsStore,
};
use crate::modules::settings::application::settings_use_cases::SettingsUseCases;
use crate::modules::site::application::service::PublicSiteResolver;
use crate::tests::support::auth_helper::test_identity;
use crate::tests::support::stubs::{StubGeneratePlan, StubSendContact};
use crate::AppState;

/// Real services over one in-memory store, with per-test overrides.
pub struct TestAppStateBuilder {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider + Send + Sync>,
    create_project: Option<Arc<dyn CreateRecordUseCase<Project> + Send + Sync>>,
    contact: Arc<dyn SendContactUseCase + Send + Sync>,
    ideas: Arc<dyn GeneratePlanUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
            identity: test_identity(),
            create_project: None,
            contact: Arc::new(StubSendContact),
            ideas: Arc::new(StubGeneratePlan),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider + Send + Sync>) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_create_project(
        mut self,
        uc: Arc<dyn CreateRecordUseCase<Project> + Send + Sync>,
    ) -> Self {
        self.create_project = Some(uc);
        self
    }

    pub fn with_contact(mut self, uc: Arc<dyn SendContactUseCase + Send + Sync>) -> Self {
        self.contact = uc;
        self
    }

    pub fn with_ideas(mut self, uc: Arc<dyn GeneratePlanUseCase + Send + Sync>) -> Self {
        self.ideas = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let settings = Arc::new(SettingsStore::new(self.store.clone()));

        let mut projects = RecordUseCases::<Project>::backed_by(self.store.clone());
        if let Some(create) = self.create_project {
            projects.create = create;
        }

        web::Data::new(AppState {
            identity: self.identity,
            settings: SettingsUseCases {
                load: Arc::new(LoadSettingsService::new(self.store.clone())),
                save: Arc::new(SaveSettingsService::new(self.store.clone())),
            },
            projects,
            skills: RecordUseCases::<Skill>::backed_by(self.store.clone()),
            experiences: RecordUseCases::<Experience>::backed_by(self.store.clone()),
            public_site: Arc::new(PublicSiteResolver::new(settings, self.store.clone())),
            documents: self.store,
            outreach: OutreachUseCases {
                contact: self.contact,
                ideas: self.ideas,
            },
        })
    }
}
