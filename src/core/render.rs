//! Section renderers. Each one maps a subfield of the portfolio record to a
//! markup fragment and injects it into its mount point, replacing whatever
//! was there. The record is trusted: fragment text is interpolated verbatim,
//! and a renderer whose required subfield is absent fails with
//! `UnexpectedShape` instead of degrading.

use crate::core::page::Page;
use crate::domain::model::{
    AwardEntry, ConferenceEntry, Description, EducationEntry, ExperienceEntry, Portfolio,
    Publication, SocialLink,
};
use crate::utils::error::{PortfolioError, Result};

/// Runs every section renderer once, in document order. The renderers have
/// no cross-dependencies; the order only matches the page layout.
pub fn render_all(page: &mut Page, data: &Portfolio) -> Result<()> {
    profile(page, data)?;
    about(page, data)?;
    education(page, data)?;
    experience(page, data)?;
    publications(page, data)?;
    conferences(page, data)?;
    awards(page, data)?;
    album(page, data)?;
    footer(page, data)?;
    Ok(())
}

pub fn profile(page: &mut Page, data: &Portfolio) -> Result<()> {
    let nav_name = page.require("nav-name")?;
    page.set_text(nav_name, data.nav_brand.as_deref().unwrap_or(&data.name));

    let photo = page.require("profile-photo")?;
    match data.profile_photo.as_deref() {
        Some(src) => {
            page.set_attr(photo, "src", src);
            page.set_attr(photo, "alt", &format!("{} - Profile Photo", data.name));
        }
        // Hidden outright, not blanked: a broken-image placeholder must not
        // show up when no photo was supplied.
        None => page.hide(photo),
    }

    let hero_name = page.require("hero-name")?;
    page.set_text(hero_name, &data.name);
    let hero_title = page.require("hero-title")?;
    page.set_text(hero_title, data.title.as_deref().unwrap_or_default());

    let social = data
        .social
        .as_deref()
        .ok_or(PortfolioError::UnexpectedShape { field: "social" })?;
    let mount = page.require("social-links")?;
    page.set_html(mount, &social_links_html(social));
    Ok(())
}

pub fn about(page: &mut Page, data: &Portfolio) -> Result<()> {
    let paragraphs = data
        .about
        .as_deref()
        .ok_or(PortfolioError::UnexpectedShape { field: "about" })?;
    let mount = page.require("about-content")?;
    let html: String = paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", p))
        .collect();
    page.set_html(mount, &html);
    Ok(())
}

pub fn education(page: &mut Page, data: &Portfolio) -> Result<()> {
    let entries = data
        .education
        .as_deref()
        .ok_or(PortfolioError::UnexpectedShape { field: "education" })?;
    let mount = page.require("education-timeline")?;
    let html: String = entries.iter().map(education_entry_html).collect();
    page.set_html(mount, &html);
    Ok(())
}

pub fn experience(page: &mut Page, data: &Portfolio) -> Result<()> {
    let entries = data
        .experience
        .as_deref()
        .ok_or(PortfolioError::UnexpectedShape { field: "experience" })?;
    let mount = page.require("experience-timeline")?;
    let html: String = entries.iter().map(experience_entry_html).collect();
    page.set_html(mount, &html);
    Ok(())
}

pub fn publications(page: &mut Page, data: &Portfolio) -> Result<()> {
    let entries = data
        .publications
        .as_deref()
        .ok_or(PortfolioError::UnexpectedShape {
            field: "publications",
        })?;
    let mount = page.require("publications-list")?;
    let html: String = entries.iter().map(publication_html).collect();
    page.set_html(mount, &html);
    Ok(())
}

pub fn conferences(page: &mut Page, data: &Portfolio) -> Result<()> {
    let entries = data
        .conferences
        .as_deref()
        .ok_or(PortfolioError::UnexpectedShape {
            field: "conferences",
        })?;
    let mount = page.require("conferences-list")?;
    let html: String = entries.iter().map(conference_html).collect();
    page.set_html(mount, &html);
    Ok(())
}

pub fn awards(page: &mut Page, data: &Portfolio) -> Result<()> {
    let entries = data
        .awards
        .as_deref()
        .ok_or(PortfolioError::UnexpectedShape { field: "awards" })?;
    let mount = page.require("awards-list")?;
    let html: String = entries.iter().map(award_html).collect();
    page.set_html(mount, &html);
    Ok(())
}

/// The album section is the one optional block: when the field is absent the
/// mount points are left exactly as the shell supplied them, neither cleared
/// nor hidden. See DESIGN.md for why this asymmetry is kept.
pub fn album(page: &mut Page, data: &Portfolio) -> Result<()> {
    let Some(album) = &data.album else {
        return Ok(());
    };

    let title = page.require("album-title")?;
    page.set_text(title, &album.title);
    let description = page.require("album-description")?;
    page.set_text(description, &album.description);

    let gallery = page.require("photo-gallery")?;
    let html: String = album
        .photos
        .iter()
        .map(|photo| {
            format!(
                r#"<div class="photo-item"><img src="{}" alt="{}" loading="lazy"><div class="photo-caption">{}</div></div>"#,
                photo.src, photo.alt, photo.caption
            )
        })
        .collect();
    page.set_html(gallery, &html);
    Ok(())
}

/// Footer markup is injected verbatim. The data document is a trusted,
/// non-user-supplied input; anything else would need sanitization here.
pub fn footer(page: &mut Page, data: &Portfolio) -> Result<()> {
    let mount = page.require("footer-text")?;
    page.set_html(mount, data.footer.as_deref().unwrap_or_default());
    Ok(())
}

fn social_links_html(links: &[SocialLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" aria-label="{}"><i class="{}"></i></a>"#,
                link.url, link.platform, link.icon
            )
        })
        .collect()
}

fn timeline_item_html(title: &str, date: &str, subtitle: &str, description: &str) -> String {
    format!(
        r#"<div class="timeline-item"><div class="timeline-header"><h3 class="timeline-title">{}</h3><span class="timeline-date">{}</span></div><div class="timeline-subtitle">{}</div><div class="timeline-description">{}</div></div>"#,
        title, date, subtitle, description
    )
}

fn education_entry_html(entry: &EducationEntry) -> String {
    timeline_item_html(
        &entry.degree,
        &entry.date,
        &entry.institution,
        &entry.description,
    )
}

fn experience_entry_html(entry: &ExperienceEntry) -> String {
    timeline_item_html(
        &entry.title,
        &entry.date,
        &entry.company,
        &description_html(&entry.description),
    )
}

/// The one branching render rule: a list description becomes a `<ul>` even
/// when it holds a single item (or none), while a plain string stays prose.
fn description_html(description: &Description) -> String {
    match description {
        Description::Text(text) => text.clone(),
        Description::Items(items) => format!(
            "<ul>{}</ul>",
            items
                .iter()
                .map(|item| format!("<li>{}</li>", item))
                .collect::<String>()
        ),
    }
}

fn publication_html(entry: &Publication) -> String {
    // The links row is suppressed entirely when there is nothing to link;
    // no empty container is left behind.
    let links_row = match entry.links.as_deref() {
        Some(links) if !links.is_empty() => format!(
            r#"<div class="publication-links">{}</div>"#,
            links
                .iter()
                .map(|link| format!(
                    r#"<a href="{}" class="publication-link" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    link.url, link.text
                ))
                .collect::<String>()
        ),
        _ => String::new(),
    };
    format!(
        r#"<div class="publication-item"><div class="publication-title">{}</div><div class="publication-authors">{}</div><div class="publication-venue">{}</div>{}</div>"#,
        entry.title, entry.authors, entry.venue, links_row
    )
}

fn conference_html(entry: &ConferenceEntry) -> String {
    format!(
        r#"<div class="publication-item"><div class="publication-title">{}</div><div class="publication-venue">{} ({})</div></div>"#,
        entry.title, entry.venue, entry.year
    )
}

fn award_html(entry: &AwardEntry) -> String {
    format!(
        r#"<div class="publication-item"><div class="publication-title">{}</div><div class="publication-venue">{} ({})</div></div>"#,
        entry.title, entry.issuer, entry.year
    )
}
