//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let player = factory::create_player(&db).await?;
//!
//! // Customize
//! let rich = factory::player::PlayerFactory::new(&db)
//!     .discord_id(987654321)
//!     .ign("Moonman")
//!     .points(5_000)
//!     .build()
//!     .await?;
//! ```

pub mod duel_log;
pub mod helpers;
pub mod player;

pub use duel_log::create_duel_log;
pub use player::{create_player, create_player_with_points};
