//! Guild member model, classification and ranking.
//!
//! Members fetched from the guild are split into testers (anyone holding a
//! role) and candidates (role-less humans). Candidates are then ranked by how
//! long they have been waiting.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use waitlist_core::{DiscordUserJson, GuildMemberJson, classify, rank};
//!
//! let member = GuildMemberJson::builder()
//!     .user(DiscordUserJson::builder().id("1").username("ada").build().unwrap())
//!     .joined_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let classification = classify(&[member]);
//! let ranked = rank(classification.into_candidates());
//! assert_eq!(ranked[0].username(), "ada");
//! ```

mod candidate;
mod classify;
mod member;
mod rank;

pub use candidate::Candidate;
pub use classify::{Classification, classify};
pub use member::{
    DiscordUserJson, DiscordUserJsonBuilder, GuildMemberJson, GuildMemberJsonBuilder,
};
pub use rank::rank;
