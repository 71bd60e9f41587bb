//! Factory methods for creating test data.
//!
//! Factories insert records with sensible defaults so tests only spell out the fields they
//! care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_discord_user(&db).await?;
//! let record = factory::participation::ParticipationFactory::new(&db, "monthly_giveaway")
//!     .discord_user_id(&user.discord_id)
//!     .last_participation_micros(1_700_000_000_000_000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `discord_user` - Create Discord user entities
//! - `participation` - Create participation records
//! - `helpers` - Shared id generation

pub mod discord_user;
pub mod helpers;
pub mod participation;

pub use discord_user::create_discord_user;
pub use participation::create_participation;
