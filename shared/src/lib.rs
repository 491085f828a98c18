pub mod error;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use types::{EmploymentType, ExperienceLevel, Gender, GenerationStatus};
