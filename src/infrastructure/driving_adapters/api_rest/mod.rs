//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API, plus the
//! application state and the router that ties them together.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CampaignBlockUseCases, ConnectionUseCases, EmailDependencies, EmailTemplateUseCases, EmailUseCases,
    InfluencerFieldUseCases, InfluencerUseCases, InstagramUseCases, OAuthStateSigner, StoreUploadUseCase,
    SurveyResponseUseCases, SurveyTemplateUseCases, UploadLimits,
};
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driven_adapters::postgres::{
    PostgresCampaignBlockRepository, PostgresEmailRepository, PostgresEmailSurveyConnectionRepository,
    PostgresEmailTemplateRepository, PostgresInfluencerFieldRepository, PostgresInfluencerRepository,
    PostgresInstagramAccountRepository, PostgresSurveyResponseRepository, PostgresSurveyTemplateRepository,
};
use crate::infrastructure::driven_adapters::{
    DashMapProgressStore, HttpEmailSender, LocalFileStorage, MetaGraphClient,
};
use crate::shared::errors::GatewayError;
use handlers::{
    campaign_blocks, connections, email_templates, emails, health, influencer_fields, influencers, instagram,
    survey_templates, surveys, uploads,
};
use middleware::request_id_middleware;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pool: PgPool,
    pub blocks: Arc<CampaignBlockUseCases>,
    pub email_templates: Arc<EmailTemplateUseCases>,
    pub survey_templates: Arc<SurveyTemplateUseCases>,
    pub survey_responses: Arc<SurveyResponseUseCases>,
    pub connections: Arc<ConnectionUseCases>,
    pub influencer_fields: Arc<InfluencerFieldUseCases>,
    pub influencers: Arc<InfluencerUseCases>,
    pub instagram: Arc<InstagramUseCases>,
    pub uploads: Arc<StoreUploadUseCase>,
    pub emails: Arc<EmailUseCases>,
}

impl AppState {
    /// Wire repositories, outbound clients and use cases
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if an outbound HTTP client can't be built.
    pub fn build(config: AppConfig, pool: PgPool) -> Result<Self, GatewayError> {
        let blocks = Arc::new(PostgresCampaignBlockRepository::new(pool.clone()));
        let email_templates = Arc::new(PostgresEmailTemplateRepository::new(pool.clone()));
        let surveys = Arc::new(PostgresSurveyTemplateRepository::new(pool.clone()));
        let responses = Arc::new(PostgresSurveyResponseRepository::new(pool.clone()));
        let connections = Arc::new(PostgresEmailSurveyConnectionRepository::new(pool.clone()));
        let fields = Arc::new(PostgresInfluencerFieldRepository::new(pool.clone()));
        let influencers = Arc::new(PostgresInfluencerRepository::new(pool.clone()));
        let accounts = Arc::new(PostgresInstagramAccountRepository::new(pool.clone()));
        let emails = Arc::new(PostgresEmailRepository::new(pool.clone()));

        let sender = Arc::new(HttpEmailSender::new(&config.email)?);
        let graph = Arc::new(MetaGraphClient::new(&config.instagram)?);
        let storage = Arc::new(LocalFileStorage::new(
            config.uploads.directory.clone(),
            &config.uploads.public_base_url,
        ));
        let signer = Arc::new(OAuthStateSigner::new(
            config.jwt.secret.expose(),
            config.instagram.state_ttl_secs,
        ));
        let limits = UploadLimits {
            max_image_bytes: config.uploads.max_image_bytes,
            max_file_bytes: config.uploads.max_file_bytes,
        };

        Ok(Self {
            blocks: Arc::new(CampaignBlockUseCases::new(blocks)),
            email_templates: Arc::new(EmailTemplateUseCases::new(
                email_templates.clone(),
                surveys.clone(),
                influencers.clone(),
            )),
            survey_templates: Arc::new(SurveyTemplateUseCases::new(surveys.clone())),
            survey_responses: Arc::new(SurveyResponseUseCases::new(
                surveys.clone(),
                responses,
                connections.clone(),
            )),
            connections: Arc::new(ConnectionUseCases::new(
                connections.clone(),
                emails.clone(),
                surveys.clone(),
                influencers.clone(),
            )),
            influencer_fields: Arc::new(InfluencerFieldUseCases::new(fields.clone())),
            influencers: Arc::new(InfluencerUseCases::new(influencers.clone(), fields)),
            instagram: Arc::new(InstagramUseCases::new(graph, accounts, signer)),
            uploads: Arc::new(StoreUploadUseCase::new(storage, limits)),
            emails: Arc::new(EmailUseCases::new(EmailDependencies {
                templates: email_templates,
                surveys,
                influencers,
                connections,
                emails,
                sender,
                progress: Arc::new(DashMapProgressStore::new()),
                public_base_url: config.app.public_base_url.clone(),
            })),
            config: Arc::new(config),
            pool,
        })
    }
}

/// Full API router
///
/// Unauthenticated routes are not rate limited here; use
/// [`rate_limited_router`] when serving with peer addresses available.
pub fn router(state: AppState) -> Router {
    assemble(state, public_routes())
}

/// Full API router with per-IP rate limiting on the unauthenticated routes
///
/// Requires the server to expose `ConnectInfo<SocketAddr>`.
pub fn rate_limited_router(state: AppState) -> Router {
    let limits = &state.config.rate_limit;
    let public = match GovernorConfigBuilder::default()
        .per_second(limits.per_second)
        .burst_size(limits.burst_size)
        .finish()
    {
        Some(governor) => public_routes().layer(GovernorLayer {
            config: Arc::new(governor),
        }),
        None => {
            tracing::warn!(
                per_second = limits.per_second,
                burst_size = limits.burst_size,
                "Invalid rate limit settings, public routes are not rate limited"
            );
            public_routes()
        }
    };
    assemble(state, public)
}

/// Survey respondents and the OAuth redirect reach these without a token
fn public_routes() -> Router<AppState> {
    Router::new()
        .merge(surveys::public_router())
        .merge(connections::public_router())
        .merge(instagram::public_router())
}

fn assemble(state: AppState, public: Router<AppState>) -> Router {
    let upload_dir = state.config.uploads.directory.clone();
    let upload_limit = state.uploads.limits().max_file_bytes.max(state.uploads.limits().max_image_bytes);

    Router::new()
        .nest("/campaign-blocks", campaign_blocks::router())
        .nest("/email-templates", email_templates::router())
        .nest("/survey-templates", survey_templates::router())
        .nest("/email-survey-connections", connections::router())
        .nest("/influencer-fields", influencer_fields::router())
        .nest("/influencers", influencers::router())
        .nest("/instagram", instagram::router())
        .nest("/emails", emails::router())
        .nest("/uploads", uploads::router(upload_limit, upload_dir))
        .merge(public)
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
