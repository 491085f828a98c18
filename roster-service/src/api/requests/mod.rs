pub mod generate_request;

pub use generate_request::GenerateRequest;
