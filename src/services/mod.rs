pub mod certificate_service;
pub mod export_service;
pub mod grading_service;
pub mod participant_service;
pub mod program_service;
pub mod training_service;
