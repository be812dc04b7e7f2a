use hackathon_hub::{Header, NavItem};
use scraper::{Html, Selector};

fn active_links(html: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse("nav a.font-semibold").unwrap();
    document
        .select(&selector)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn current_page_is_bold_and_underlined() {
    let html = Header::default().render("/about").to_html();

    assert_eq!(active_links(&html), vec!["About"]);

    let document = Html::parse_fragment(&html);
    let indicator = Selector::parse("nav a span.bg-blue-500").unwrap();
    assert_eq!(document.select(&indicator).count(), 1);

    let normal = Selector::parse("nav a.font-normal").unwrap();
    assert_eq!(document.select(&normal).count(), 3);
}

#[test]
fn links_keep_configured_order_and_targets() {
    let html = Header::default().render("/home").to_html();
    let document = Html::parse_fragment(&html);
    let links = Selector::parse("nav a").unwrap();
    let hrefs: Vec<_> = document
        .select(&links)
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(hrefs, vec!["/home", "/hackathons", "/about", "/contact"]);
}

#[test]
fn header_actions_link_to_register_and_login() {
    let html = Header::new(vec![NavItem::new("Home", "/home")]).render("/elsewhere").to_html();
    assert!(active_links(&html).is_empty());

    let document = Html::parse_fragment(&html);
    let actions = Selector::parse("div a button").unwrap();
    let labels: Vec<_> = document
        .select(&actions)
        .map(|b| b.text().collect::<String>())
        .collect();
    assert_eq!(labels, vec!["Register", "Login"]);
}
