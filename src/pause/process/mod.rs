pub mod action;
pub mod control;
pub mod handle;
