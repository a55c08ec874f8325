use serde::{Deserialize, Serialize};

/// Target attribute carried by every icon link: open in a new browsing context.
pub const LINK_TARGET: &str = "_blank";

/// A supported social platform.
///
/// Variant order is the order icons are emitted in.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LinkKind {
    Facebook,
    Twitter,
    Github,
    Linkedin,
    Telegram,
}

impl LinkKind {
    /// Human-readable label shown as the icon title.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Facebook => "Facebook",
            LinkKind::Twitter => "Twitter",
            LinkKind::Github => "Github",
            LinkKind::Linkedin => "Linkedin",
            LinkKind::Telegram => "Telegram",
        }
    }

    /// Guess the platform from a profile URL's host.
    ///
    /// Protocol-relative URLs (`//t.me/x`) are read as `https:`.
    pub fn from_url(href: &str) -> Option<Self> {
        let href = href.trim();
        let parsed = if href.starts_with("//") {
            url::Url::parse(&format!("https:{href}")).ok()?
        } else {
            url::Url::parse(href).ok()?
        };
        let host = parsed.host_str()?.to_lowercase();
        let host_is = |domain: &str| host == domain || host.ends_with(&format!(".{domain}"));

        if host_is("facebook.com") || host_is("fb.com") {
            Some(LinkKind::Facebook)
        } else if host_is("twitter.com") || host_is("x.com") {
            Some(LinkKind::Twitter)
        } else if host_is("github.com") {
            Some(LinkKind::Github)
        } else if host_is("linkedin.com") {
            Some(LinkKind::Linkedin)
        } else if host_is("t.me") || host_is("telegram.me") {
            Some(LinkKind::Telegram)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_iteration_order() {
        let kinds: Vec<LinkKind> = LinkKind::iter().collect();
        assert_eq!(
            kinds,
            vec![
                LinkKind::Facebook,
                LinkKind::Twitter,
                LinkKind::Github,
                LinkKind::Linkedin,
                LinkKind::Telegram,
            ]
        );
    }

    #[test]
    fn test_labels_and_identifiers() {
        assert_eq!(LinkKind::Github.label(), "Github");
        assert_eq!(LinkKind::Linkedin.to_string(), "linkedin");
        assert_eq!(LinkKind::from_str("GitHub").unwrap(), LinkKind::Github);
        assert_eq!(LinkKind::from_str("telegram").unwrap(), LinkKind::Telegram);
        assert!(LinkKind::from_str("mastodon").is_err());
    }

    #[test]
    fn test_from_url() {
        assert_eq!(
            LinkKind::from_url("https://www.facebook.com/robertsanseries"),
            Some(LinkKind::Facebook)
        );
        assert_eq!(
            LinkKind::from_url("https://x.com/someone"),
            Some(LinkKind::Twitter)
        );
        assert_eq!(
            LinkKind::from_url("https://github.com/naaando"),
            Some(LinkKind::Github)
        );
        assert_eq!(
            LinkKind::from_url("https://www.linkedin.com/in/robertsanseries"),
            Some(LinkKind::Linkedin)
        );
        assert_eq!(
            LinkKind::from_url("https://t.me/naaando"),
            Some(LinkKind::Telegram)
        );
        assert_eq!(
            LinkKind::from_url("//t.me/naaando"),
            Some(LinkKind::Telegram)
        );
        assert_eq!(LinkKind::from_url("https://linux.com/x"), None);
        assert_eq!(LinkKind::from_url(""), None);
        assert_eq!(LinkKind::from_url("github.com/naaando"), None);
    }

    #[test]
    fn test_from_url_uses_real_host() {
        assert_eq!(
            LinkKind::from_url("https://evil.example\\@github.com/x"),
            None
        );
        assert_eq!(
            LinkKind::from_url("https://github.com.evil.example/x"),
            None
        );
        assert_eq!(
            LinkKind::from_url("https://user@github.com:443/x"),
            Some(LinkKind::Github)
        );
    }
}
