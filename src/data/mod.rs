//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity access for one table each and convert entity models into
//! domain models at the boundary. Every repository is generic over `ConnectionTrait`, so the
//! same code runs against the connection pool or inside an open transaction.

pub mod command_log;
pub mod discord_user;
pub mod giveaway_roll;
pub mod participation;

#[cfg(test)]
mod test;
