use serde::Serialize;

use super::link::{LinkKind, LINK_TARGET};

/// A team member card, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberViewModel {
    pub photo_url: String,
    pub name: String,
    pub bio: String,
    pub icons: Vec<IconViewModel>,
}

/// A social icon link on a member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconViewModel {
    pub title: &'static str,
    pub href: String,
    pub target: &'static str,
    pub kind: LinkKind,
}

impl IconViewModel {
    pub fn new(kind: LinkKind, href: impl Into<String>) -> Self {
        Self {
            title: kind.label(),
            href: href.into(),
            target: LINK_TARGET,
            kind,
        }
    }
}
