pub mod assessment;
pub mod competency;
pub mod gap;
pub mod profile;
pub mod role;
