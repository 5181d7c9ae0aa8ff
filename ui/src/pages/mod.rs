//! Page components

pub mod home;
pub mod login;
