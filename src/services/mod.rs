//! Business logic services

pub mod admin_service;
pub mod association_service;
pub mod athlete_service;
pub mod auth_service;
pub mod coach_service;
pub mod course_service;
pub mod job_service;
pub mod judge_service;
pub mod message_service;
pub mod resource_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use association_service::AssociationService;
pub use athlete_service::AthleteService;
pub use auth_service::AuthService;
pub use coach_service::CoachService;
pub use course_service::CourseService;
pub use job_service::JobService;
pub use judge_service::JudgeService;
pub use message_service::MessageService;
pub use resource_service::ResourceService;
pub use user_service::UserService;
