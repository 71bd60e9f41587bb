//! Business logic: command handlers, routing, draws, and participation bookkeeping.

pub mod command;
pub mod dispatch;
pub mod draw;
pub mod drop_table;
pub mod easter_egg;
pub mod instance;
pub mod participation;
pub mod random;
pub mod rejection;
