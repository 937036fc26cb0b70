pub mod extraction;
pub mod interfaces;
pub mod models;
pub mod orchestrators;
pub mod preprocessing;
