pub mod home;
pub mod notice;
pub mod quiz;
pub mod results;
