use crate::utils::error::{PortfolioError, Result};
use std::collections::BTreeMap;

/// Handle to one element of a [`Page`]. Only ever issued by
/// [`Page::insert`]/[`Page::insert_into`], so indexing is always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    html: String,
    hidden: bool,
    offset_top: u32,
    offset_height: u32,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Fixed layout box: vertical position and rendered height. The page
    /// model has no layout engine, so the shell assigns these up front.
    pub fn at(mut self, offset_top: u32, offset_height: u32) -> Self {
        self.offset_top = offset_top;
        self.offset_height = offset_height;
        self
    }
}

/// In-memory stand-in for the host document: a tree of elements addressable
/// by id and class, plus the two pieces of page-global state the pipeline
/// touches (a whole-body replacement and the scroll position).
#[derive(Debug, Clone, Default)]
pub struct Page {
    nodes: Vec<Element>,
    roots: Vec<NodeId>,
    body_override: Option<String>,
    scroll_top: Option<u32>,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    pub fn insert(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(element);
        self.roots.push(id);
        id
    }

    pub fn insert_into(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(element);
        self.nodes[parent.0].children.push(id);
        id
    }

    fn el(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    fn el_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|n| self.el(*n).id.as_deref() == Some(id))
    }

    /// Mount-point lookup; the DOM contract says these exist, so a miss is
    /// a hard error rather than a skip.
    pub fn require(&self, id: &str) -> Result<NodeId> {
        self.by_id(id).ok_or_else(|| PortfolioError::MissingMount {
            id: id.to_string(),
        })
    }

    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|n| self.el(*n).classes.iter().any(|c| c == class))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.el(root).children.clone();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.el(node).children.iter().copied());
        }
        out
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.el(node).tag
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.el(node).text
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.el_mut(node).text = text.to_string();
    }

    pub fn html(&self, node: NodeId) -> &str {
        &self.el(node).html
    }

    /// Replaces the element's markup content, like an `innerHTML` write.
    /// Prior content is discarded; the string is trusted and not escaped.
    pub fn set_html(&mut self, node: NodeId, html: &str) {
        self.el_mut(node).html = html.to_string();
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.el(node).attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.el_mut(node)
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.el(node).classes.iter().any(|c| c == class)
    }

    pub fn toggle_class(&mut self, node: NodeId, class: &str) {
        let el = self.el_mut(node);
        if let Some(pos) = el.classes.iter().position(|c| c == class) {
            el.classes.remove(pos);
        } else {
            el.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        let el = self.el_mut(node);
        el.classes.retain(|c| c != class);
    }

    pub fn hide(&mut self, node: NodeId) {
        self.el_mut(node).hidden = true;
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.el(node).hidden
    }

    pub fn offset_top(&self, node: NodeId) -> u32 {
        self.el(node).offset_top
    }

    pub fn offset_height(&self, node: NodeId) -> u32 {
        self.el(node).offset_height
    }

    pub fn scroll_to(&mut self, top: u32) {
        self.scroll_top = Some(top);
    }

    /// `None` until the first programmatic scroll.
    pub fn scroll_top(&self) -> Option<u32> {
        self.scroll_top
    }

    /// Discards the element tree from the rendered output and substitutes
    /// the given markup as the entire body. The failure path of the
    /// pipeline is the only caller.
    pub fn replace_body(&mut self, html: &str) {
        self.body_override = Some(html.to_string());
    }

    pub fn body_override(&self) -> Option<&str> {
        self.body_override.as_deref()
    }

    pub fn to_html(&self) -> String {
        let body = match &self.body_override {
            Some(html) => html.clone(),
            None => self
                .roots
                .iter()
                .map(|node| self.render_node(*node))
                .collect(),
        };
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"></head>\n<body>{}</body>\n</html>\n",
            body
        )
    }

    fn render_node(&self, node: NodeId) -> String {
        let el = self.el(node);
        let mut out = format!("<{}", el.tag);
        if let Some(id) = &el.id {
            out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
        }
        if !el.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_attr(&el.classes.join(" "))));
        }
        for (name, value) in &el.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        if el.hidden {
            out.push_str(" style=\"display: none;\"");
        }
        out.push('>');
        if is_void(&el.tag) {
            return out;
        }
        out.push_str(&escape_text(&el.text));
        out.push_str(&el.html);
        for child in &el.children {
            out.push_str(&self.render_node(*child));
        }
        out.push_str(&format!("</{}>", el.tag));
        out
    }

    /// The host page the renderers target: every mount point of the DOM
    /// contract plus the navbar, mobile toggle, and in-page nav anchors.
    /// Layout offsets are fixed so scroll arithmetic is deterministic.
    pub fn portfolio_shell() -> Page {
        let mut page = Page::new();

        let navbar = page.insert(Element::new("nav").class("navbar").at(0, 72));
        page.insert_into(navbar, Element::new("span").id("nav-name").class("nav-brand"));
        page.insert_into(
            navbar,
            Element::new("button")
                .id("mobile-toggle")
                .class("mobile-toggle")
                .attr("aria-label", "Toggle navigation"),
        );
        let nav_list = page.insert_into(navbar, Element::new("ul").class("nav-links"));
        for (label, href) in [
            ("About", "#about"),
            ("Education", "#education"),
            ("Experience", "#experience"),
            ("Publications", "#publications"),
            ("Conferences", "#conferences"),
            ("Awards", "#awards"),
            ("Album", "#album"),
        ] {
            let item = page.insert_into(nav_list, Element::new("li"));
            page.insert_into(item, Element::new("a").attr("href", href).text(label));
        }

        let hero = page.insert(Element::new("header").id("home").class("hero").at(72, 528));
        page.insert_into(hero, Element::new("img").id("profile-photo").class("profile-photo"));
        page.insert_into(hero, Element::new("h1").id("hero-name"));
        page.insert_into(hero, Element::new("p").id("hero-title").class("hero-title"));
        page.insert_into(hero, Element::new("div").id("social-links").class("social-links"));

        for (section_id, heading, mount_id, top, height) in [
            ("about", "About", "about-content", 600, 600),
            ("education", "Education", "education-timeline", 1200, 600),
            ("experience", "Experience", "experience-timeline", 1800, 600),
            ("publications", "Publications", "publications-list", 2400, 600),
            ("conferences", "Conferences", "conferences-list", 3000, 400),
            ("awards", "Awards", "awards-list", 3400, 400),
        ] {
            let section = page.insert(
                Element::new("section")
                    .id(section_id)
                    .class("section")
                    .at(top, height),
            );
            page.insert_into(section, Element::new("h2").class("section-title").text(heading));
            page.insert_into(section, Element::new("div").id(mount_id));
        }

        let album = page.insert(Element::new("section").id("album").class("section").at(3800, 600));
        page.insert_into(album, Element::new("h2").id("album-title").class("section-title"));
        page.insert_into(album, Element::new("p").id("album-description"));
        page.insert_into(album, Element::new("div").id("photo-gallery").class("photo-gallery"));

        let footer = page.insert(Element::new("footer").class("footer").at(4400, 200));
        page.insert_into(footer, Element::new("div").id("footer-text"));

        page
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "meta" | "link")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_defines_every_mount_point() {
        let page = Page::portfolio_shell();
        for id in [
            "nav-name",
            "profile-photo",
            "hero-name",
            "hero-title",
            "social-links",
            "about-content",
            "education-timeline",
            "experience-timeline",
            "publications-list",
            "conferences-list",
            "awards-list",
            "album-title",
            "album-description",
            "photo-gallery",
            "footer-text",
            "mobile-toggle",
        ] {
            assert!(page.by_id(id).is_some(), "shell is missing #{}", id);
        }
        assert!(page.first_by_class("navbar").is_some());
        assert!(page.first_by_class("nav-links").is_some());
    }

    #[test]
    fn require_reports_the_missing_id() {
        let page = Page::new();
        let err = page.require("footer-text").unwrap_err();
        assert_eq!(err.to_string(), "mount point not found: #footer-text");
    }

    #[test]
    fn class_toggle_round_trips() {
        let mut page = Page::new();
        let list = page.insert(Element::new("ul").class("nav-links"));
        assert!(!page.has_class(list, "active"));
        page.toggle_class(list, "active");
        assert!(page.has_class(list, "active"));
        page.toggle_class(list, "active");
        assert!(!page.has_class(list, "active"));
        page.remove_class(list, "active"); // removing an absent class is a no-op
        assert!(!page.has_class(list, "active"));
    }

    #[test]
    fn text_is_escaped_but_markup_content_is_not() {
        let mut page = Page::new();
        let div = page.insert(Element::new("div").id("footer-text"));
        page.set_text(div, "a < b");
        page.set_html(div, "<strong>raw</strong>");
        let html = page.to_html();
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("<strong>raw</strong>"));
    }

    #[test]
    fn hidden_elements_serialize_with_display_none() {
        let mut page = Page::new();
        let img = page.insert(Element::new("img").id("profile-photo"));
        page.hide(img);
        assert!(page.to_html().contains("style=\"display: none;\""));
    }

    #[test]
    fn body_override_replaces_the_element_tree() {
        let mut page = Page::portfolio_shell();
        page.replace_body("<div>gone</div>");
        let html = page.to_html();
        assert!(html.contains("<div>gone</div>"));
        assert!(!html.contains("nav-name"));
    }

    #[test]
    fn descendants_walk_the_subtree() {
        let page = Page::portfolio_shell();
        let nav_list = page.first_by_class("nav-links").unwrap();
        let anchors: Vec<_> = page
            .descendants(nav_list)
            .into_iter()
            .filter(|n| page.tag(*n) == "a")
            .collect();
        assert_eq!(anchors.len(), 7);
    }
}
