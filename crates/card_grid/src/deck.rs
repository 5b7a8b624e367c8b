use bevy::color::HexColorError;
use bevy::prelude::*;
use thiserror::Error;

/// Raw card content as it is authored, before validation.
#[derive(Debug, Clone, Copy)]
pub struct CardRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// Asset path of the front image
    pub image: &'static str,
    /// Hex colour of the back face, e.g. `#264653`
    pub back_color: &'static str,
}

pub const DEFAULT_CARDS: [CardRecord; 10] = [
    CardRecord {
        title: "Mountain Pass",
        description: "Switchbacks above the tree line at first light.",
        image: "cards/mountain.png",
        back_color: "#264653",
    },
    CardRecord {
        title: "Coastline",
        description: "Cliffs and surf along the northern shore.",
        image: "cards/coast.png",
        back_color: "#2A9D8F",
    },
    CardRecord {
        title: "Desert Bloom",
        description: "A week of colour after the spring rain.",
        image: "cards/desert.png",
        back_color: "#E9C46A",
    },
    CardRecord {
        title: "Old Town",
        description: "Narrow lanes and tiled roofs at dusk.",
        image: "cards/old_town.png",
        back_color: "#F4A261",
    },
    CardRecord {
        title: "Night Market",
        description: "Lanterns, steam and a hundred stalls.",
        image: "cards/night_market.png",
        back_color: "#E76F51",
    },
    CardRecord {
        title: "Glacier",
        description: "Blue ice carved by centuries of snow.",
        image: "cards/glacier.png",
        back_color: "#457B9D",
    },
    CardRecord {
        title: "Rainforest",
        description: "Canopy light filtering through the mist.",
        image: "cards/rainforest.png",
        back_color: "#1D3557",
    },
    CardRecord {
        title: "Harbour",
        description: "Fishing boats waiting out the tide.",
        image: "cards/harbour.png",
        back_color: "#6D597A",
    },
    CardRecord {
        title: "Lavender Fields",
        description: "Rows of purple rolling to the horizon.",
        image: "cards/lavender.png",
        back_color: "#B56576",
    },
    CardRecord {
        title: "Aurora",
        description: "Green curtains over a frozen lake.",
        image: "cards/aurora.png",
        back_color: "#355070",
    },
];

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("The card deck is empty")]
    Empty,

    #[error("Card {title:?} has an invalid back colour {color:?}")]
    InvalidBackColor {
        title: &'static str,
        color: &'static str,
        #[source]
        source: HexColorError,
    },
}

/// Display data of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub description: String,
    pub front_image: String,
    pub back_color: Color,
}

impl TryFrom<CardRecord> for CardContent {
    type Error = DeckError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let back_color =
            Srgba::hex(record.back_color).map_err(|source| DeckError::InvalidBackColor {
                title: record.title,
                color: record.back_color,
                source,
            })?;

        Ok(Self {
            title: record.title.to_string(),
            description: record.description.to_string(),
            front_image: record.image.to_string(),
            back_color: back_color.into(),
        })
    }
}

/// Validated, never empty list of card content, cycled by index.
#[derive(Resource, Debug, Clone)]
pub struct CardDeck {
    cards: Vec<CardContent>,
}

impl CardDeck {
    pub fn new(records: impl IntoIterator<Item = CardRecord>) -> Result<Self, DeckError> {
        let cards = records
            .into_iter()
            .map(CardContent::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(Self { cards })
    }

    #[expect(clippy::indexing_slicing, reason = "the deck is never empty")]
    pub fn content(&self, index: usize) -> &CardContent {
        &self.cards[index % self.cards.len()]
    }
}
