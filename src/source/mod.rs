//! Roster sources: where contributor records come from.

mod builtin;
mod html;
mod json;

pub use builtin::{default_roster, StaticRoster};
pub use html::HtmlRoster;
pub use json::JsonRoster;

use crate::error::Result;
use crate::model::ContributorRecord;

/// Supplies the ordered list of contributor records.
pub trait RosterSource {
    fn records(&self) -> Result<Vec<ContributorRecord>>;
}

impl RosterSource for [ContributorRecord] {
    fn records(&self) -> Result<Vec<ContributorRecord>> {
        Ok(self.to_vec())
    }
}

impl RosterSource for Vec<ContributorRecord> {
    fn records(&self) -> Result<Vec<ContributorRecord>> {
        Ok(self.clone())
    }
}

impl<S: RosterSource + ?Sized> RosterSource for &S {
    fn records(&self) -> Result<Vec<ContributorRecord>> {
        (**self).records()
    }
}
