pub mod entities;
pub mod repositories;
pub mod rules;
pub mod services;
