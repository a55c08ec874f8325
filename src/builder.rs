use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::error::{Result, RosterError};
use crate::model::{ContributorRecord, IconViewModel, LinkKind, MemberViewModel, SocialLinks};

/// How strictly records are checked before they become view-models.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Accept every record; missing fields simply produce no output.
    #[default]
    Lenient,
    /// Reject records without a name.
    Strict,
}

/// Turns contributor records into member view-models.
#[derive(Debug, Default, Clone, Copy)]
pub struct RosterBuilder {
    validation: Validation,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation(validation: Validation) -> Self {
        Self { validation }
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Build one view-model per record, preserving order.
    ///
    /// Only fails in [`Validation::Strict`] mode.
    #[instrument(skip_all, fields(records = records.len(), validation = ?self.validation))]
    pub fn build(&self, records: &[ContributorRecord]) -> Result<Vec<MemberViewModel>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if self.validation == Validation::Strict {
                    validate(index, record)?;
                }
                Ok(build_member(record))
            })
            .collect()
    }
}

fn validate(index: usize, record: &ContributorRecord) -> Result<()> {
    if record.name.is_empty() {
        return Err(RosterError::Validation {
            index,
            reason: "name is empty",
        });
    }
    Ok(())
}

/// Lenient roster build: never fails.
pub fn build_members(records: &[ContributorRecord]) -> Vec<MemberViewModel> {
    records.iter().map(build_member).collect()
}

pub fn build_member(record: &ContributorRecord) -> MemberViewModel {
    let icons = build_icons(&record.links);
    debug!(name = %record.name, icons = icons.len(), "built member");
    MemberViewModel {
        photo_url: record.photo_url.clone(),
        name: record.name.clone(),
        bio: record.bio.clone(),
        icons,
    }
}

/// One icon per non-empty link, in [`LinkKind`] order.
pub fn build_icons(links: &SocialLinks) -> Vec<IconViewModel> {
    LinkKind::iter()
        .filter_map(|kind| {
            let href = links.get(kind);
            (!href.is_empty()).then(|| IconViewModel::new(kind, href))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LINK_TARGET;
    use crate::source::default_roster;

    fn record(name: &str, links: SocialLinks) -> ContributorRecord {
        ContributorRecord {
            photo_url: format!("https://example.org/{name}.png"),
            name: name.to_string(),
            bio: "Desenvolvedor".to_string(),
            links,
        }
    }

    fn non_empty_links(links: &SocialLinks) -> usize {
        LinkKind::iter().filter(|k| !links.get(*k).is_empty()).count()
    }

    #[test]
    fn test_twitter_and_telegram_only() {
        let links = SocialLinks::default()
            .with(LinkKind::Twitter, "http://t")
            .with(LinkKind::Telegram, "http://tg");
        let members = build_members(&[record("A", links)]);

        assert_eq!(members.len(), 1);
        let icons = &members[0].icons;
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].title, "Twitter");
        assert_eq!(icons[0].href, "http://t");
        assert_eq!(icons[0].kind, LinkKind::Twitter);
        assert_eq!(icons[1].title, "Telegram");
        assert_eq!(icons[1].href, "http://tg");
        assert_eq!(icons[1].kind, LinkKind::Telegram);
    }

    #[test]
    fn test_all_links_empty() {
        let members = build_members(&[record("Nobody", SocialLinks::default())]);
        assert!(members[0].icons.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(build_members(&[]).is_empty());
        assert!(RosterBuilder::new().build(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_link_is_not_empty() {
        let links = SocialLinks::default().with(LinkKind::Github, " ");
        let icons = build_icons(&links);
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].href, " ");
    }

    #[test]
    fn test_fields_copied_and_order_preserved() {
        let records = default_roster();
        let members = build_members(&records);

        assert_eq!(members.len(), records.len());
        for (member, record) in members.iter().zip(&records) {
            assert_eq!(member.name, record.name);
            assert_eq!(member.bio, record.bio);
            assert_eq!(member.photo_url, record.photo_url);
            assert_eq!(member.icons.len(), non_empty_links(&record.links));
            assert!(member.icons.windows(2).all(|w| w[0].kind < w[1].kind));
            assert!(member.icons.iter().all(|i| i.target == LINK_TARGET));
            assert!(member.icons.iter().all(|i| !i.href.is_empty()));
        }
    }

    #[test]
    fn test_every_subset_keeps_fixed_order() {
        let kinds: Vec<LinkKind> = LinkKind::iter().collect();
        for mask in 0u8..32 {
            let links = kinds
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .fold(SocialLinks::default(), |links, (_, kind)| {
                    links.with(*kind, format!("https://{kind}.example/me"))
                });
            let emitted: Vec<LinkKind> = build_icons(&links).iter().map(|i| i.kind).collect();
            let expected: Vec<LinkKind> = kinds
                .iter()
                .copied()
                .filter(|k| !links.get(*k).is_empty())
                .collect();
            assert_eq!(emitted, expected, "mask {mask:05b}");
        }
    }

    #[test]
    fn test_idempotent() {
        let records = default_roster();
        assert_eq!(build_members(&records), build_members(&records));
    }

    #[test]
    fn test_lenient_accepts_nameless_record() {
        let members = RosterBuilder::new()
            .build(&[ContributorRecord::default()])
            .unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].name.is_empty());
        assert!(members[0].icons.is_empty());
    }

    #[test]
    fn test_strict_rejects_nameless_record() {
        let records = vec![
            record("A", SocialLinks::default()),
            record("", SocialLinks::default()),
        ];
        let err = RosterBuilder::with_validation(Validation::Strict)
            .build(&records)
            .unwrap_err();
        assert!(matches!(err, RosterError::Validation { index: 1, .. }));
    }

    #[test]
    fn test_strict_matches_lenient_on_valid_input() {
        let records = default_roster();
        let strict = RosterBuilder::with_validation(Validation::Strict)
            .build(&records)
            .unwrap();
        assert_eq!(strict, build_members(&records));
    }
}
