//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod association;
pub mod athlete;
pub mod coach;
pub mod course;
pub mod job_offer;
pub mod judge;
pub mod message;
pub mod resource;
pub mod user;

pub use association::*;
pub use athlete::*;
pub use coach::*;
pub use course::*;
pub use job_offer::*;
pub use judge::*;
pub use message::*;
pub use resource::*;
pub use user::*;
