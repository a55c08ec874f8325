use serde::{Deserialize, Deserializer, Serialize};

use super::link::LinkKind;

/// One person on the roster, as supplied by a roster source.
///
/// Missing or `null` fields read as empty strings. Links may be given as a
/// `links` object or, as older rosters do, an `icons` list whose first entry
/// holds the links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContributorRecord {
    #[serde(alias = "urlPhoto", deserialize_with = "null_as_empty")]
    pub photo_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(alias = "icons", deserialize_with = "links_or_list")]
    pub links: SocialLinks,
}

/// Social profile URLs of a contributor. An empty string means no link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(deserialize_with = "null_as_empty")]
    pub facebook: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub twitter: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub github: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub telegram: String,
}

impl SocialLinks {
    pub fn get(&self, kind: LinkKind) -> &str {
        match kind {
            LinkKind::Facebook => &self.facebook,
            LinkKind::Twitter => &self.twitter,
            LinkKind::Github => &self.github,
            LinkKind::Linkedin => &self.linkedin,
            LinkKind::Telegram => &self.telegram,
        }
    }

    pub fn set(&mut self, kind: LinkKind, url: impl Into<String>) {
        let slot = match kind {
            LinkKind::Facebook => &mut self.facebook,
            LinkKind::Twitter => &mut self.twitter,
            LinkKind::Github => &mut self.github,
            LinkKind::Linkedin => &mut self.linkedin,
            LinkKind::Telegram => &mut self.telegram,
        };
        *slot = url.into();
    }

    /// Builder-style [`SocialLinks::set`].
    pub fn with(mut self, kind: LinkKind, url: impl Into<String>) -> Self {
        self.set(kind, url);
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinksShape {
    List(Vec<SocialLinks>),
    Object(SocialLinks),
}

fn links_or_list<'de, D>(deserializer: D) -> Result<SocialLinks, D::Error>
where
    D: Deserializer<'de>,
{
    let links = match Option::<LinksShape>::deserialize(deserializer)? {
        Some(LinksShape::Object(links)) => links,
        Some(LinksShape::List(list)) => list.into_iter().next().unwrap_or_default(),
        None => SocialLinks::default(),
    };
    Ok(links)
}
