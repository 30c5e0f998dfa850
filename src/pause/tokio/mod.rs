pub mod pauser;
pub mod session;

pub(crate) mod context;
pub(crate) mod handler;
pub(crate) mod tracker;
