pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::{load_env_files, AppConfig};
use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::InMemoryTokenBlacklist;
use crate::modules::auth::application::ports::incoming::IdentityProvider;
use crate::modules::auth::application::ports::outgoing::PasswordHasher;
use crate::modules::auth::application::service::AdminIdentityService;
use crate::modules::content::application::domain::{Experience, Project, Skill};
use crate::modules::content::application::record_use_cases::RecordUseCases;
use crate::modules::document_store::adapter::outgoing::{
    InMemoryDocumentStore, PostgresDocumentStore,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;
use crate::modules::outreach::adapter::outgoing::{HttpContactRelay, HttpTextGenerator};
use crate::modules::outreach::application::outreach_use_cases::OutreachUseCases;
use crate::modules::outreach::application::service::{ContactService, IdeaPlannerService};
use crate::modules::settings::application::service::{
    LoadSettingsService, SaveSettingsService, SettingsStore,
};
use crate::modules::settings::application::settings_use_cases::SettingsUseCases;
use crate::modules::site::application::ports::incoming::use_cases::ResolveSiteUseCase;
use crate::modules::site::application::service::PublicSiteResolver;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider + Send + Sync>,
    pub settings: SettingsUseCases,
    pub projects: RecordUseCases<Project>,
    pub skills: RecordUseCases<Skill>,
    pub experiences: RecordUseCases<Experience>,
    pub public_site: Arc<dyn ResolveSiteUseCase + Send + Sync>,
    /// Live collection subscriptions for the public stream routes.
    pub documents: Arc<dyn DocumentStore>,
    pub outreach: OutreachUseCases,
}

#[cfg(not(tarpaulin_include))]
async fn connect_store(config: &AppConfig) -> io::Result<Arc<dyn DocumentStore>> {
    let Some(db_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set, using the in-memory document store");
        return Ok(Arc::new(InMemoryDocumentStore::new()));
    };

    let mut opt = ConnectOptions::new(db_url.to_owned());
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .map_err(|e| io::Error::other(format!("database connection failed: {e}")))?;
    info!("Connected to database");

    Ok(Arc::new(PostgresDocumentStore::new(Arc::new(db))))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env_files();

    let config = AppConfig::from_env().map_err(|e| io::Error::other(e.to_string()))?;
    info!("Starting application...");

    let store = connect_store(&config).await?;

    let settings = Arc::new(SettingsStore::new(store.clone()));
    if let Err(e) = settings.watch().await {
        warn!(error = %e, "settings subscription failed, re-reading per request");
    }

    let identity = AdminIdentityService::new(
        config.admin.clone(),
        JwtTokenService::new(config.jwt.clone()),
        Argon2Hasher::new(),
        InMemoryTokenBlacklist::new(),
    );

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| io::Error::other(format!("http client: {e}")))?;

    let contact = ContactService::new(
        HttpContactRelay::new(http.clone()),
        settings.clone(),
        config.contact_relay_url.clone(),
    );
    let ideas = IdeaPlannerService::new(HttpTextGenerator::new(
        http,
        config.idea_generator.url.clone(),
        config.idea_generator.api_key.clone(),
    ));

    let state = AppState {
        identity: Arc::new(identity),
        settings: SettingsUseCases {
            load: Arc::new(LoadSettingsService::new(store.clone())),
            save: Arc::new(SaveSettingsService::new(store.clone())),
        },
        projects: RecordUseCases::backed_by(store.clone()),
        skills: RecordUseCases::backed_by(store.clone()),
        experiences: RecordUseCases::backed_by(store.clone()),
        public_site: Arc::new(PublicSiteResolver::new(settings, store.clone())),
        documents: store.clone(),
        outreach: OutreachUseCases {
            contact: Arc::new(contact),
            ideas: Arc::new(ideas),
        },
    };

    let server_url = config.server_url();
    info!("Listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&store)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::content::adapter::incoming::web::routes::configure;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::session_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::session_stream_handler);
    // Settings
    cfg.service(crate::modules::settings::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::modules::settings::adapter::incoming::web::routes::save_settings_handler);
    // Records
    cfg.configure(configure::<Project>);
    cfg.configure(configure::<Skill>);
    cfg.configure(configure::<Experience>);
    // Public
    cfg.service(crate::modules::site::adapter::incoming::web::routes::get_site_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::stream_collection_handler);
    cfg.service(crate::modules::outreach::adapter::incoming::web::routes::contact_handler);
    cfg.service(crate::modules::outreach::adapter::incoming::web::routes::ideas_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

/// `hash-password <password>` prints an argon2 PHC string for
/// `ADMIN_PASSWORD_HASH` and exits.
#[cfg(not(tarpaulin_include))]
#[tokio::main(flavor = "current_thread")]
async fn hash_password(password: &str) -> io::Result<()> {
    let hash = Argon2Hasher::new()
        .hash_password(password)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.as_slice() {
        [command, password] if command == "hash-password" => hash_password(password),
        [command, ..] if command == "hash-password" => {
            eprintln!("usage: portfolio_backend hash-password <password>");
            std::process::exit(2);
        }
        _ => start(),
    };

    if let Err(e) = result {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
