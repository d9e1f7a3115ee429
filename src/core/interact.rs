//! Event wiring for the two static-page behaviors: the mobile menu toggle
//! and smooth in-page scrolling. `install` scans the page once, the way the
//! original listeners were attached once on page ready; `click` replays the
//! dispatch a real click would trigger. A nav link is also a fragment
//! anchor, so one click can both close the menu and scroll.

use crate::core::page::{NodeId, Page};
use crate::utils::error::{PortfolioError, Result};

const MENU_OPEN_CLASS: &str = "active";

#[derive(Debug, Clone)]
pub struct Interactions {
    toggle: NodeId,
    nav_list: NodeId,
    nav_links: Vec<NodeId>,
    anchors: Vec<NodeId>,
}

impl Interactions {
    /// The toggle and nav list are assumed present unconditionally, per the
    /// DOM contract; anchors are whatever fragment links exist right now.
    pub fn install(page: &Page) -> Result<Self> {
        let toggle = page.require("mobile-toggle")?;
        let nav_list =
            page.first_by_class("nav-links")
                .ok_or_else(|| PortfolioError::MissingMount {
                    id: "nav-links".to_string(),
                })?;

        let nav_links: Vec<NodeId> = page
            .descendants(nav_list)
            .into_iter()
            .filter(|node| page.tag(*node) == "a")
            .collect();

        let anchors: Vec<NodeId> = page
            .node_ids()
            .filter(|node| {
                page.tag(*node) == "a"
                    && page
                        .attr(*node, "href")
                        .is_some_and(|href| href.starts_with('#'))
            })
            .collect();

        Ok(Interactions {
            toggle,
            nav_list,
            nav_links,
            anchors,
        })
    }

    pub fn click(&self, page: &mut Page, target: NodeId) {
        if target == self.toggle {
            page.toggle_class(self.nav_list, MENU_OPEN_CLASS);
        }

        // Selecting any nav link closes an open mobile menu.
        if self.nav_links.contains(&target) {
            page.remove_class(self.nav_list, MENU_OPEN_CLASS);
        }

        if self.anchors.contains(&target) {
            self.scroll_to_fragment(page, target);
        }
    }

    /// Default navigation is already suppressed for fragment anchors; when
    /// the target id does not exist nothing else happens either.
    fn scroll_to_fragment(&self, page: &mut Page, anchor: NodeId) {
        let Some(fragment) = page
            .attr(anchor, "href")
            .and_then(|href| href.strip_prefix('#'))
            .map(str::to_string)
        else {
            return;
        };

        let Some(target) = page.by_id(&fragment) else {
            return;
        };

        let navbar_height = page
            .first_by_class("navbar")
            .map(|navbar| page.offset_height(navbar))
            .unwrap_or(0);
        let top = page.offset_top(target).saturating_sub(navbar_height);
        page.scroll_to(top);
    }

    pub fn nav_links(&self) -> &[NodeId] {
        &self.nav_links
    }

    pub fn anchors(&self) -> &[NodeId] {
        &self.anchors
    }

    pub fn toggle(&self) -> NodeId {
        self.toggle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::Element;

    #[test]
    fn toggle_flips_the_menu_and_links_close_it() {
        let mut page = Page::portfolio_shell();
        let interactions = Interactions::install(&page).unwrap();
        let nav_list = page.first_by_class("nav-links").unwrap();

        interactions.click(&mut page, interactions.toggle());
        assert!(page.has_class(nav_list, "active"));
        interactions.click(&mut page, interactions.toggle());
        assert!(!page.has_class(nav_list, "active"));

        interactions.click(&mut page, interactions.toggle());
        let link = interactions.nav_links()[0];
        interactions.click(&mut page, link);
        assert!(!page.has_class(nav_list, "active"));
    }

    #[test]
    fn anchor_click_scrolls_past_the_navbar() {
        let mut page = Page::portfolio_shell();
        let interactions = Interactions::install(&page).unwrap();

        let about_anchor = *interactions
            .anchors()
            .iter()
            .find(|a| page.attr(**a, "href") == Some("#about"))
            .unwrap();
        interactions.click(&mut page, about_anchor);

        let about = page.by_id("about").unwrap();
        let navbar = page.first_by_class("navbar").unwrap();
        let expected = page.offset_top(about) - page.offset_height(navbar);
        assert_eq!(page.scroll_top(), Some(expected));
    }

    #[test]
    fn missing_fragment_target_scrolls_nothing() {
        let mut page = Page::portfolio_shell();
        let nav_list = page.first_by_class("nav-links").unwrap();
        let item = page.insert_into(nav_list, Element::new("li"));
        let dangling = page.insert_into(item, Element::new("a").attr("href", "#nowhere"));

        let interactions = Interactions::install(&page).unwrap();
        interactions.click(&mut page, dangling);
        assert_eq!(page.scroll_top(), None);
    }

    #[test]
    fn non_fragment_links_are_not_intercepted() {
        let mut page = Page::portfolio_shell();
        let hero = page.by_id("home").unwrap();
        let external = page.insert_into(
            hero,
            Element::new("a").attr("href", "https://example.com"),
        );

        let interactions = Interactions::install(&page).unwrap();
        assert!(!interactions.anchors().contains(&external));
        interactions.click(&mut page, external);
        assert_eq!(page.scroll_top(), None);
    }
}
