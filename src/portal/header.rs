//! Site navigation header.
//!
//! Rendering is a pure function of the configured items and the current
//! path: the link whose target equals the path is marked active and gets the
//! underline indicator.

use std::fmt::Write;

use serde::Serialize;

use crate::model::NavItem;

const LINK_CLASS: &str = "relative dark:text-neutral-50 text-neutral-600 dark:hover:text-neutral-300 hover:text-neutral-500";
const INDICATOR_CLASS: &str = "absolute inset-x-0 -bottom-1 h-[2px] bg-blue-500 rounded";
const ACTION_CLASS: &str = "border text-sm font-medium border-neutral-200 dark:border-white/[0.2] text-black dark:text-white px-4 py-2 rounded-full";

/// One rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkView {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Everything the header shows for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub links: Vec<NavLinkView>,
    pub actions: Vec<NavItem>,
}

#[derive(Debug, Clone)]
pub struct Header {
    items: Vec<NavItem>,
    actions: Vec<NavItem>,
}

impl Default for Header {
    fn default() -> Self {
        Self::new(crate::data::nav_items())
    }
}

impl Header {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            actions: vec![NavItem::new("Register", "/register"), NavItem::new("Login", "/login")],
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn render(&self, current_path: &str) -> HeaderView {
        HeaderView {
            links: self
                .items
                .iter()
                .map(|item| NavLinkView {
                    name: item.name.clone(),
                    href: item.link.clone(),
                    active: item.link == current_path,
                })
                .collect(),
            actions: self.actions.clone(),
        }
    }
}

impl HeaderView {
    pub fn active(&self) -> Option<&NavLinkView> {
        self.links.iter().find(|link| link.active)
    }

    /// Render as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<header class="fixed w-full top-0 z-50"><nav class="flex items-center justify-center rounded-full py-2 px-8 space-x-8">"#);
        for link in &self.links {
            let weight = if link.active { "font-semibold" } else { "font-normal" };
            let _ = write!(
                html,
                r#"<a href="{}" class="{LINK_CLASS} {weight}">{}"#,
                escape(&link.href),
                escape(&link.name)
            );
            if link.active {
                let _ = write!(html, r#"<span class="{INDICATOR_CLASS}"></span>"#);
            }
            html.push_str("</a>");
        }
        html.push_str(r#"</nav><div class="flex space-x-4">"#);
        for action in &self.actions {
            let _ = write!(
                html,
                r#"<a href="{}"><button class="{ACTION_CLASS}">{}</button></a>"#,
                escape(&action.link),
                escape(&action.name)
            );
        }
        html.push_str("</div></header>");
        html
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_the_current_path() {
        let view = Header::default().render("/hackathons");
        let active: Vec<_> = view.links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Hackathons");
    }

    #[test]
    fn unknown_path_has_no_active_link() {
        let view = Header::default().render("/hackathons/42");
        assert!(view.active().is_none());
        assert_eq!(view.links.len(), 4);
    }

    #[test]
    fn escapes_item_text() {
        let header = Header::new(vec![NavItem::new("Q&A <beta>", "/qa?x=\"1\"")]);
        let html = header.render("/").to_html();
        assert!(html.contains("Q&amp;A &lt;beta&gt;"));
        assert!(html.contains(r#"href="/qa?x=&quot;1&quot;""#));
    }
}
