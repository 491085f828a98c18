pub mod shift_repository;
pub mod staff_repository;

pub use shift_repository::{MonthTail, ShiftRepository};
pub use staff_repository::StaffRepository;
