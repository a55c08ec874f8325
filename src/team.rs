use tracing::{debug, instrument};

use crate::builder::{RosterBuilder, Validation};
use crate::error::Result;
use crate::model::MemberViewModel;
use crate::source::{RosterSource, StaticRoster};

/// The data behind the team page.
///
/// `TeamPage` pairs a [`RosterSource`] with a [`RosterBuilder`] and hands
/// the presentation layer its member cards.
///
/// # Examples
///
/// ```
/// use team_roster::TeamPage;
///
/// let members = TeamPage::default().members()?;
/// for member in &members {
///     println!("{} ({} links)", member.name, member.icons.len());
/// }
/// # Ok::<(), team_roster::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TeamPage<S> {
    source: S,
    builder: RosterBuilder,
}

impl<S: RosterSource> TeamPage<S> {
    /// Create a page over `source` with lenient validation.
    pub fn new(source: S) -> Self {
        Self {
            source,
            builder: RosterBuilder::new(),
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.builder = RosterBuilder::with_validation(validation);
        self
    }

    /// Load the roster and build its member view-models.
    #[instrument(skip(self), fields(validation = ?self.builder.validation()))]
    pub fn members(&self) -> Result<Vec<MemberViewModel>> {
        let records = self.source.records()?;
        let members = self.builder.build(&records)?;
        debug!(count = members.len(), "built team page members");
        Ok(members)
    }
}

impl Default for TeamPage<StaticRoster> {
    fn default() -> Self {
        Self::new(StaticRoster)
    }
}
