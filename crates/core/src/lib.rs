pub mod enums;
pub mod ids;
pub mod job;
