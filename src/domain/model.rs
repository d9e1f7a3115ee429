use serde::{Deserialize, Serialize};
use std::fmt;

/// The portfolio record: one JSON document loaded once per page render and
/// treated as read-only afterwards. Absent optional collections are surfaced
/// as `None`; each renderer decides whether that means "skip" or "fail".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    pub title: Option<String>,
    pub nav_brand: Option<String>,
    pub profile_photo: Option<String>,
    pub social: Option<Vec<SocialLink>>,
    pub about: Option<Vec<String>>,
    pub education: Option<Vec<EducationEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub publications: Option<Vec<Publication>>,
    pub conferences: Option<Vec<ConferenceEntry>>,
    pub awards: Option<Vec<AwardEntry>>,
    pub album: Option<Album>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub date: String,
    pub description: Description,
}

/// Experience descriptions are polymorphic on the wire: either one prose
/// string or a list of bullet strings. A one-element list is still a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Items(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub links: Option<Vec<PublicationLink>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceEntry {
    pub title: String,
    pub venue: String,
    pub year: Year,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardEntry {
    pub title: String,
    pub issuer: String,
    pub year: Year,
}

/// Years appear both as JSON numbers and as strings ("2023", "2023-2024").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub title: String,
    pub description: String,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_deserializes_both_shapes() {
        let text: Description = serde_json::from_str(r#""built things""#).unwrap();
        assert!(matches!(text, Description::Text(_)));

        let items: Description = serde_json::from_str(r#"["one", "two"]"#).unwrap();
        match items {
            Description::Items(v) => assert_eq!(v.len(), 2),
            Description::Text(_) => panic!("list should not parse as text"),
        }

        // A single-element list stays a list.
        let single: Description = serde_json::from_str(r#"["only"]"#).unwrap();
        assert!(matches!(single, Description::Items(v) if v.len() == 1));
    }

    #[test]
    fn year_accepts_numbers_and_ranges() {
        let n: Year = serde_json::from_str("2023").unwrap();
        assert_eq!(n.to_string(), "2023");

        let s: Year = serde_json::from_str(r#""2023-2024""#).unwrap();
        assert_eq!(s.to_string(), "2023-2024");
    }

    #[test]
    fn minimal_record_only_needs_a_name() {
        let record: Portfolio = serde_json::from_str(r#"{"name": "Ada Lovelace"}"#).unwrap();
        assert_eq!(record.name, "Ada Lovelace");
        assert!(record.social.is_none());
        assert!(record.album.is_none());
    }

    #[test]
    fn nameless_record_is_rejected() {
        assert!(serde_json::from_str::<Portfolio>(r#"{"title": "Professor"}"#).is_err());
    }
}
