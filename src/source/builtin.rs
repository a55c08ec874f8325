use crate::error::Result;
use crate::model::{ContributorRecord, SocialLinks};

use super::RosterSource;

/// The site's own roster, compiled into the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticRoster;

impl RosterSource for StaticRoster {
    fn records(&self) -> Result<Vec<ContributorRecord>> {
        Ok(default_roster())
    }
}

struct Entry {
    photo_url: &'static str,
    name: &'static str,
    bio: &'static str,
    facebook: &'static str,
    twitter: &'static str,
    github: &'static str,
    linkedin: &'static str,
    telegram: &'static str,
}

const TEAM: &[Entry] = &[
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/11967501?v=4",
        name: "Robert Santos",
        bio: "Desenvolvedor",
        facebook: "https://www.facebook.com/robertsanseries",
        twitter: "https://twitter.com/robertsanseries",
        github: "https://github.com/robertsanseries",
        linkedin: "https://www.linkedin.com/in/robertsanseries",
        telegram: "https://t.me/robertsanseries",
    },
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/828559?v=4",
        name: "Leonardo Lemos",
        bio: "Desenvolvedor",
        facebook: "https://www.facebook.com/leonard0lemos",
        twitter: "",
        github: "https://github.com/leonardo-lemos",
        linkedin: "",
        telegram: "https://t.me/leonardolemos",
    },
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/12532760?v=4",
        name: "Fernando da Silva",
        bio: "Desenvolvedor",
        facebook: "",
        twitter: "",
        github: "https://github.com/naaando",
        linkedin: "",
        telegram: "https://t.me/naaando",
    },
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/2482730?v=4",
        name: "Pablo R. Dinella",
        bio: "Desenvolvedor",
        facebook: "https://www.facebook.com/pablordinella/",
        twitter: "",
        github: "https://github.com/PabloDinella",
        linkedin: "",
        telegram: "https://t.me/PabloDinella",
    },
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/5933675?v=4",
        name: "Haruno Kenobi",
        bio: "Desenvolvedor",
        facebook: "",
        twitter: "",
        github: "https://github.com/HarunoKenobi",
        linkedin: "",
        telegram: "https://t.me/HarunoKenobi",
    },
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/995134?v=4",
        name: "Lucas Dillmann",
        bio: "Desenvolvedor",
        facebook: "",
        twitter: "",
        github: "https://github.com/lucasdillmann",
        linkedin: "",
        telegram: "https://t.me/LucasDillmann",
    },
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/4886639?v=4",
        name: "Paulo Galardi",
        bio: "Desenvolvedor",
        facebook: "",
        twitter: "",
        github: "https://github.com/lainsce",
        linkedin: "",
        telegram: "https://t.me/lainsdev",
    },
    Entry {
        photo_url: "https://avatars.githubusercontent.com/u/4334406?v=4",
        name: "Carlos Gomes",
        bio: "Desenvolvedor",
        facebook: "",
        twitter: "",
        github: "https://github.com/cjgomes",
        linkedin: "",
        telegram: "https://t.me/cjg0m3s",
    },
];

/// The fixed, ordered roster of the site's contributors.
pub fn default_roster() -> Vec<ContributorRecord> {
    TEAM.iter()
        .map(|e| ContributorRecord {
            photo_url: e.photo_url.to_string(),
            name: e.name.to_string(),
            bio: e.bio.to_string(),
            links: SocialLinks {
                facebook: e.facebook.to_string(),
                twitter: e.twitter.to_string(),
                github: e.github.to_string(),
                linkedin: e.linkedin.to_string(),
                telegram: e.telegram.to_string(),
            },
        })
        .collect()
}
