//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod association_repo;
pub mod athlete_repo;
pub mod coach_repo;
pub mod course_repo;
pub mod job_repo;
pub mod judge_repo;
pub mod message_repo;
pub mod resource_repo;
pub mod user_repo;

pub use association_repo::AssociationRepository;
pub use athlete_repo::AthleteRepository;
pub use coach_repo::CoachRepository;
pub use course_repo::CourseRepository;
pub use job_repo::{JobOfferStore, PgJobOfferRepository};
pub use judge_repo::JudgeRepository;
pub use message_repo::MessageRepository;
pub use resource_repo::ResourceRepository;
pub use user_repo::UserRepository;
