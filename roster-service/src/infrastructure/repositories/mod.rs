pub mod postgres_shift_repository;
pub mod postgres_staff_repository;

pub use postgres_shift_repository::PostgresShiftRepository;
pub use postgres_staff_repository::PostgresStaffRepository;
