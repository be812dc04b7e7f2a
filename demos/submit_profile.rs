use std::sync::Arc;

use hackathon_hub::data;
use hackathon_hub::{
    Config, FileSessionStore, HackathonBoard, Header, ProfileClient, ProfileFormController,
    ProfileView, RecordingNavigator, Services, StaticIdentity, TextField,
};

#[tokio::main]
async fn main() -> hackathon_hub::Result<()> {
    let config = Config::from_env();
    let token = std::env::var("HACKHUB_TOKEN").ok();
    let identity = match token {
        Some(token) => StaticIdentity::signed_in(token),
        None => StaticIdentity::signed_out(),
    };
    let services = Services {
        session: Arc::new(FileSessionStore::open("target/demo-session.json")?),
        identity: Arc::new(identity),
        api: Arc::new(ProfileClient::new(&config)?),
        navigator: Arc::new(RecordingNavigator::new()),
    };

    println!("{}", Header::default().render("/hackathons").to_html());

    let mut board = HackathonBoard::mount(data::hackathons()?, &services, &config);
    board.set_search_term("ai");
    for card in board.view().cards {
        println!("{} | {} | {}", card.title, card.location, card.tags.join(", "));
    }

    let form = ProfileFormController::mount(services, &config);
    if form.view() == ProfileView::Confirmation {
        println!("Profile already submitted");
        return Ok(());
    }

    let skills = data::skill_options()?;
    form.update_field(TextField::Name, "Ada Lovelace");
    form.update_field(TextField::Email, "ada@example.com");
    form.update_field(TextField::College, "MIT");
    form.update_field(TextField::Interests, "AI, compilers");
    form.update_skills(Some(&skills[..2]));

    match form.submit().await {
        Ok(body) => println!("Submitted: {body}"),
        Err(e) => println!("Not submitted ({}): {e}", e.failure_kind()),
    }
    for notice in form.notices() {
        println!("[{}] {}", notice.kind, notice.message);
    }
    Ok(())
}
