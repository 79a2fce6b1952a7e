//! Site content: the portfolio data region, filter definitions, services
//! copy and the gear map.
//!
//! The portfolio catalog ships as an embedded JSON document - one KV record
//! per entry - and is parsed exactly once at startup. Everything else is
//! static copy.

use backline_common::{Catalog, EmbedOptions, EntryRecord};
use backline_ui::{AccordionItem, FilterOption, FilterOptionSet};
use tracing::warn;

/// The portfolio data region.
const PORTFOLIO_DATA: &str = include_str!("../assets/portfolio.json");

/// Parse the data region into the page-lifetime catalog.
///
/// A record that fails to decode becomes a blank entry rather than sinking
/// the rest of the catalog; only an unreadable document yields an empty one.
pub fn load_catalog() -> Catalog {
    let values = match serde_json::from_str::<Vec<serde_json::Value>>(PORTFOLIO_DATA) {
        Ok(values) => values,
        Err(err) => {
            warn!("portfolio data region unreadable: {err}");
            Vec::new()
        }
    };

    Catalog::from_records(
        values
            .into_iter()
            .map(|value| serde_json::from_value::<EntryRecord>(value).unwrap_or_default())
            .collect(),
    )
}

pub fn embed_options() -> EmbedOptions {
    EmbedOptions::default()
}

/// Filter buttons shared by both surfaces. Style values bundle related tags
/// behind one button.
pub fn filter_options() -> FilterOptionSet {
    FilterOptionSet {
        app: vec![
            FilterOption::new("Mixing", "mixing"),
            FilterOption::new("Mastering", "mastering"),
            FilterOption::new("Production", "production"),
            FilterOption::new("Recording", "recording"),
        ],
        style: vec![
            FilterOption::new("Band", "rock,indie,band"),
            FilterOption::new("Electronic", "electronic,edm"),
            FilterOption::new("Singer-Songwriter", "singer-songwriter,acoustic"),
            FilterOption::new("World & Percussion", "world,percussion"),
        ],
    }
}

/// Client profiles the services section can be viewed as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientType {
    Artist,
    Producer,
    Media,
    Enterprise,
}

impl ClientType {
    pub const ALL: [ClientType; 4] = [
        ClientType::Artist,
        ClientType::Producer,
        ClientType::Media,
        ClientType::Enterprise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClientType::Artist => "Artists",
            ClientType::Producer => "Producers",
            ClientType::Media => "Film & Media",
            ClientType::Enterprise => "Enterprise",
        }
    }

    /// Accent color custom property for the active profile.
    pub fn theme_color(&self) -> &'static str {
        match self {
            ClientType::Artist => "var(--color-artist)",
            ClientType::Producer => "var(--color-producer)",
            ClientType::Media => "var(--color-media)",
            ClientType::Enterprise => "var(--color-enterprise)",
        }
    }
}

pub fn services_for(client: ClientType) -> Vec<AccordionItem> {
    let items: &[(&str, &str, &[(&str, &str)])] = match client {
        ClientType::Artist => &[
            (
                "Record a release",
                "From pre-production to a finished master, in one room.",
                &[
                    ("Tracking", "Two live rooms, a Neve-style desk and an engineer who has heard your references."),
                    ("Mix & master", "Hybrid mixing with analog summing; masters delivered for streaming and vinyl."),
                ],
            ),
            (
                "Develop your sound",
                "Production days to find the palette before you commit a release to it.",
                &[
                    ("Production days", "Co-writing and arrangement sessions, paid by the day."),
                    ("Demo polishing", "Turn voice memos into demos your band can rehearse against."),
                ],
            ),
        ],
        ClientType::Producer => &[
            (
                "Dry hire",
                "The rooms and the gear, your workflow.",
                &[
                    ("Room A", "70 m2 live room with variable acoustics and a grand piano."),
                    ("The locker", "Vintage outboard, amp collection and the full percussion arsenal."),
                ],
            ),
            (
                "Mix engineering",
                "Send stems, get mixes; revisions included.",
                &[("Stem mixing", "Printed through the analog chain with recallable sessions.")],
            ),
        ],
        ClientType::Media => &[
            (
                "Sound for picture",
                "Composition, recording and final mix for film and podcast.",
                &[
                    ("Score recording", "Ensembles up to twelve players recorded to picture."),
                    ("Podcast production", "Editing, sound design and loudness-compliant delivery."),
                ],
            ),
        ],
        ClientType::Enterprise => &[
            (
                "Brand sound",
                "Sonic identity from logo to event.",
                &[
                    ("Sonic branding", "A sound palette your audience recognizes in half a second."),
                    ("Event audio", "Recording and live mixing for launches and showcases."),
                ],
            ),
        ],
    };

    items
        .iter()
        .map(|(title, description, details)| AccordionItem {
            title: title.to_string(),
            description: description.to_string(),
            details: details
                .iter()
                .map(|(heading, body)| (heading.to_string(), body.to_string()))
                .collect(),
        })
        .collect()
}

/// One playable instrument in the gear map.
#[derive(Clone, Debug, PartialEq)]
pub struct Instrument {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// One hotspot region of the gear map.
#[derive(Clone, Debug, PartialEq)]
pub struct GearRegion {
    pub id: &'static str,
    pub name: &'static str,
    pub instruments: Vec<Instrument>,
}

pub fn gear_regions() -> Vec<GearRegion> {
    vec![
        GearRegion {
            id: "west-africa",
            name: "West Africa",
            instruments: vec![
                Instrument {
                    slug: "djembe",
                    name: "Djembe",
                    description: "Goblet drum carved from a single piece of lenke wood; the backbone of the ensemble.",
                },
                Instrument {
                    slug: "dundun",
                    name: "Dundun",
                    description: "Rope-tuned bass drum family, played with sticks in interlocking patterns.",
                },
            ],
        },
        GearRegion {
            id: "latin",
            name: "Latin America",
            instruments: vec![
                Instrument {
                    slug: "congas",
                    name: "Congas",
                    description: "Tall Cuban hand drums, tuned in fourths across the set.",
                },
                Instrument {
                    slug: "cajon",
                    name: "Cajon",
                    description: "Peruvian box drum with snare wires; a drum kit that fits in a suitcase.",
                },
            ],
        },
        GearRegion {
            id: "middle-east",
            name: "Middle East",
            instruments: vec![
                Instrument {
                    slug: "darbuka",
                    name: "Darbuka",
                    description: "Aluminium goblet drum with a crisp, articulate attack.",
                },
                Instrument {
                    slug: "riq",
                    name: "Riq",
                    description: "Tambourine with heavy brass jingles, equal parts drum and cymbal.",
                },
            ],
        },
    ]
}
