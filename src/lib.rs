pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod utils;
pub mod views;

use crate::services::{
    participant_service::ParticipantService, program_service::ProgramService,
    training_service::TrainingService,
};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub program_service: ProgramService,
    pub participant_service: ParticipantService,
    pub training_service: TrainingService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let program_service = ProgramService::new(pool.clone());
        let participant_service = ParticipantService::new(pool.clone());
        let training_service = TrainingService::new(pool.clone());

        Self {
            pool,
            program_service,
            participant_service,
            training_service,
        }
    }
}
