//! Contributor roster view-models for a community documentation site's team page.
//!
//! A [`RosterSource`] supplies ordered [`ContributorRecord`]s; the builder turns
//! each into a [`MemberViewModel`] whose icons hold one entry per non-empty
//! social link, always in [`LinkKind`] order.

pub mod builder;
pub mod error;
pub mod model;
pub mod source;
mod team;

pub use builder::{build_icons, build_members, RosterBuilder, Validation};
pub use error::{Result, RosterError};
pub use model::*;
pub use source::{default_roster, HtmlRoster, JsonRoster, RosterSource, StaticRoster};
pub use team::TeamPage;
