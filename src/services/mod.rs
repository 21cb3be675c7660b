//! Business logic services

pub mod aggregation_service;
pub mod auth_service;
pub mod correction_service;
pub mod quiz_service;
pub mod scoring_service;
pub mod submission_service;

pub use aggregation_service::AggregationService;
pub use auth_service::AuthService;
pub use correction_service::CorrectionService;
pub use quiz_service::QuizService;
pub use scoring_service::ScoringService;
pub use submission_service::SubmissionService;
