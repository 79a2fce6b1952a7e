//! Portfolio catalog: the page-lifetime store of project entries.
//!
//! Built once at startup from the embedded data region and never reloaded.
//! Carousel rebuilds tear DOM down and back up, so the catalog is the only
//! place load state survives; entries are looked up by their embed URL,
//! which doubles as the join key between data and rendered slides.

use serde::Deserialize;

/// Platforms an artist link can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Spotify,
    Instagram,
    Youtube,
    Facebook,
    Website,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Spotify,
        Platform::Instagram,
        Platform::Youtube,
        Platform::Facebook,
        Platform::Website,
        Platform::Linkedin,
    ];

    /// Hover/aria text for the link icon.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Spotify => "Listen on Spotify",
            Platform::Instagram => "Follow on Instagram",
            Platform::Youtube => "Watch on YouTube",
            Platform::Facebook => "Find on Facebook",
            Platform::Website => "Visit Website",
            Platform::Linkedin => "View on LinkedIn",
        }
    }
}

/// Per-platform artist links. Empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArtistLinks {
    pub spotify: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}

impl ArtistLinks {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let value = match platform {
            Platform::Spotify => &self.spotify,
            Platform::Instagram => &self.instagram,
            Platform::Youtube => &self.youtube,
            Platform::Facebook => &self.facebook,
            Platform::Website => &self.website,
            Platform::Linkedin => &self.linkedin,
        };
        value.as_deref().filter(|url| !url.is_empty())
    }

    /// Present links in fixed platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        Platform::ALL
            .into_iter()
            .filter_map(|platform| self.get(platform).map(|url| (platform, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// One raw record from the data region, before validation.
///
/// Every field is optional: a record missing its title (or anything else)
/// still becomes an entry with blank fields. One malformed record must not
/// take down the whole catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntryRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Space-separated tag tokens.
    pub tags: Option<String>,
    pub embed_url: Option<String>,
    #[serde(flatten)]
    pub links: ArtistLinks,
}

/// One portfolio project.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Raw space-separated tag string as authored; use [`tags`](Self::tags)
    /// for the token view.
    pub tags: String,
    pub embed_url: String,
    pub links: ArtistLinks,
    loaded: bool,
}

impl ProjectEntry {
    fn from_record(record: EntryRecord) -> Self {
        Self {
            title: record.title.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            tags: record.tags.unwrap_or_default(),
            embed_url: record.embed_url.unwrap_or_default(),
            links: record.links,
            loaded: false,
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.split_whitespace()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    /// Whether this entry's embed has been instantiated. Monotonic: set via
    /// [`Catalog::mark_loaded`], never cleared.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Ordered store of portfolio entries, keyed by embed URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<ProjectEntry>,
}

impl Catalog {
    pub fn from_records(records: Vec<EntryRecord>) -> Self {
        Self {
            entries: records.into_iter().map(ProjectEntry::from_record).collect(),
        }
    }

    /// All entries in original order.
    pub fn all(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn find(&self, embed_url: &str) -> Option<&ProjectEntry> {
        self.entries.iter().find(|e| e.embed_url == embed_url)
    }

    /// Flip an entry's load flag. Returns false (and changes nothing) when
    /// the entry is unknown or already loaded, so redundant calls from the
    /// scheduler and direct triggers are harmless.
    pub fn mark_loaded(&mut self, embed_url: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.embed_url == embed_url) {
            Some(entry) if !entry.loaded => {
                entry.loaded = true;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, tags: &str, url: &str) -> EntryRecord {
        EntryRecord {
            title: Some(title.to_string()),
            description: Some(format!("{title} description")),
            tags: Some(tags.to_string()),
            embed_url: Some(url.to_string()),
            links: ArtistLinks::default(),
        }
    }

    #[test]
    fn test_malformed_record_kept_with_blank_fields() {
        let catalog = Catalog::from_records(vec![
            record("First", "mixing", "url-1"),
            EntryRecord::default(),
        ]);
        assert_eq!(catalog.len(), 2);
        let blank = &catalog.all()[1];
        assert_eq!(blank.title, "");
        assert_eq!(blank.embed_url, "");
        assert_eq!(blank.tags().count(), 0);
    }

    #[test]
    fn test_mark_loaded_once() {
        let mut catalog = Catalog::from_records(vec![record("First", "mixing", "url-1")]);
        assert!(!catalog.all()[0].is_loaded());
        assert!(catalog.mark_loaded("url-1"));
        assert!(catalog.all()[0].is_loaded());
        // Second call is a no-op.
        assert!(!catalog.mark_loaded("url-1"));
        assert!(catalog.all()[0].is_loaded());
    }

    #[test]
    fn test_mark_loaded_unknown_url() {
        let mut catalog = Catalog::from_records(vec![record("First", "mixing", "url-1")]);
        assert!(!catalog.mark_loaded("nope"));
    }

    #[test]
    fn test_find_by_embed_url() {
        let catalog = Catalog::from_records(vec![
            record("First", "mixing", "url-1"),
            record("Second", "mastering", "url-2"),
        ]);
        assert_eq!(catalog.find("url-2").map(|e| e.title.as_str()), Some("Second"));
        assert!(catalog.find("url-3").is_none());
    }

    #[test]
    fn test_empty_links_skipped() {
        let links = ArtistLinks {
            spotify: Some("https://open.spotify.com/artist/x".to_string()),
            instagram: Some(String::new()),
            ..Default::default()
        };
        let collected: Vec<_> = links.iter().collect();
        assert_eq!(
            collected,
            vec![(Platform::Spotify, "https://open.spotify.com/artist/x")]
        );
    }

    #[test]
    fn test_record_parses_from_json_with_missing_fields() {
        let json = r#"{"title": "Lone", "embed_url": "url-9", "spotify": "https://sp.example"}"#;
        let record: EntryRecord = serde_json::from_str(json).unwrap();
        let catalog = Catalog::from_records(vec![record]);
        let entry = &catalog.all()[0];
        assert_eq!(entry.title, "Lone");
        assert_eq!(entry.description, "");
        assert_eq!(entry.links.get(Platform::Spotify), Some("https://sp.example"));
    }
}
