use std::path::Path;

use team_roster::{JsonRoster, TeamPage, Validation};

fn main() -> team_roster::Result<()> {
    let members = match std::env::args().nth(1) {
        Some(path) => TeamPage::new(JsonRoster::from_path(Path::new(&path))?)
            .with_validation(Validation::Strict)
            .members()?,
        None => TeamPage::default().members()?,
    };

    println!("Found {} members", members.len());
    println!(
        "{}",
        serde_json::to_string_pretty(&members).map_err(team_roster::RosterError::Json)?
    );
    Ok(())
}
