pub mod find;
pub mod query;
pub mod resume;
pub mod suspend;

#[cfg(windows)]
pub(crate) mod nt;
