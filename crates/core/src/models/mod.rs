pub mod provider;
pub mod schedule;
