use tracing::instrument;

use crate::error::Result;
use crate::model::{HackathonListing, NavItem, SkillOption};

const HACKATHONS_JSON: &str = include_str!("../data/hackathons.json");
const SKILLS_JSON: &str = include_str!("../data/skills.json");

/// The bundled hackathon listings, in display order.
#[instrument]
pub fn hackathons() -> Result<Vec<HackathonListing>> {
    Ok(serde_json::from_str(HACKATHONS_JSON)?)
}

/// The bundled options of the skill selector.
#[instrument]
pub fn skill_options() -> Result<Vec<SkillOption>> {
    Ok(serde_json::from_str(SKILLS_JSON)?)
}

/// The site's main navigation entries.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/home"),
        NavItem::new("Hackathons", "/hackathons"),
        NavItem::new("About", "/about"),
        NavItem::new("Contact", "/contact"),
    ]
}
