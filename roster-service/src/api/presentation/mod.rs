pub mod shift_dto;

pub use shift_dto::{GenerateResponse, GeneratedShiftSerialize};
