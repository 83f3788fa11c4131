//! Email/Survey Connection Use Cases

mod create_connection;
mod resolve_connection;

use std::sync::Arc;

pub use create_connection::{CreateConnectionRequest, CreateConnectionUseCase};
pub use resolve_connection::{ResolveConnectionUseCase, ResolvedConnection};

use crate::domain::gateways::{
    EmailRepository, EmailSurveyConnectionRepository, InfluencerRepository, SurveyTemplateRepository,
};

pub struct ConnectionUseCases {
    pub create: CreateConnectionUseCase,
    pub resolve: ResolveConnectionUseCase,
}

impl ConnectionUseCases {
    #[must_use]
    pub fn new(
        connections: Arc<dyn EmailSurveyConnectionRepository>,
        emails: Arc<dyn EmailRepository>,
        surveys: Arc<dyn SurveyTemplateRepository>,
        influencers: Arc<dyn InfluencerRepository>,
    ) -> Self {
        Self {
            create: CreateConnectionUseCase::new(
                connections.clone(),
                emails,
                surveys.clone(),
                influencers.clone(),
            ),
            resolve: ResolveConnectionUseCase::new(connections, surveys, influencers),
        }
    }
}
