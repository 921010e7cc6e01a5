pub mod assets;
pub mod attendance;
pub mod employee;
