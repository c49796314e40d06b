//! Flip-card model built from character records

use serde::{Deserialize, Serialize};

use crate::state::Character;

/// Placeholder blocks shown while a page loads.
pub const SKELETON_COUNT: usize = 6;

/// Skeleton text bars as (numerator, denominator) of the text column width.
pub const SKELETON_BARS: [(u16, u16); 3] = [(3, 4), (1, 2), (2, 3)];

const NO_IMAGE: &str = "no image";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardFront {
    pub image_url: String,
    /// File name of the portrait, shown in the thumbnail panel
    pub thumbnail: String,
    pub name: String,
    pub id_line: String,
    /// Applied filter labels joined with ", "; absent when no filter is set
    pub filters_line: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardBack {
    pub name: String,
    pub rows: Vec<(String, String)>,
}

/// Both faces of one character card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub front: CardFront,
    pub back: CardBack,
}

/// A card on screen plus which face is up
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlipCard {
    pub card: Card,
    pub flipped: bool,
}

impl FlipCard {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            flipped: false,
        }
    }

    pub fn toggle(&mut self) {
        self.flipped = !self.flipped;
    }
}

/// Build the two faces for `character`. `applied_filters` are `Field: value` labels.
pub fn render_card(character: &Character, applied_filters: &[String]) -> Card {
    let filters_line = if applied_filters.is_empty() {
        None
    } else {
        Some(applied_filters.join(", "))
    };

    Card {
        front: CardFront {
            image_url: character.image.clone(),
            thumbnail: thumbnail_name(&character.image),
            name: character.name.clone(),
            id_line: format!("ID: {}", character.id),
            filters_line,
        },
        back: CardBack {
            name: character.name.clone(),
            rows: vec![
                ("Species".to_string(), character.species.clone()),
                ("Status".to_string(), character.status.clone()),
                ("Gender".to_string(), character.gender.clone()),
                ("Origin".to_string(), character.origin.name.clone()),
                ("Location".to_string(), character.location.name.clone()),
            ],
        },
    }
}

fn thumbnail_name(url: &str) -> String {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .filter(|segment| !url.is_empty() && *segment != url)
        .map(|segment| segment.to_string())
        .unwrap_or_else(|| NO_IMAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Place;
    use pretty_assertions::assert_eq;

    fn rick() -> Character {
        Character {
            id: 1,
            name: "Rick Sanchez".into(),
            species: "Human".into(),
            status: "Alive".into(),
            gender: "Male".into(),
            image: "https://rickandmortyapi.com/api/character/avatar/1.jpeg".into(),
            origin: Place {
                name: "Earth (C-137)".into(),
            },
            location: Place {
                name: "Citadel of Ricks".into(),
            },
        }
    }

    #[test]
    fn front_shows_name_id_and_thumbnail() {
        let card = render_card(&rick(), &[]);
        assert_eq!(card.front.name, "Rick Sanchez");
        assert_eq!(card.front.id_line, "ID: 1");
        assert_eq!(card.front.thumbnail, "1.jpeg");
        assert_eq!(card.front.filters_line, None);
    }

    #[test]
    fn front_joins_applied_filters() {
        let labels = vec!["Species: Human".to_string(), "Status: Alive".to_string()];
        let card = render_card(&rick(), &labels);
        assert_eq!(
            card.front.filters_line.as_deref(),
            Some("Species: Human, Status: Alive")
        );
    }

    #[test]
    fn back_lists_details_in_order() {
        let card = render_card(&rick(), &[]);
        let labels: Vec<&str> = card.back.rows.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["Species", "Status", "Gender", "Origin", "Location"]);
        assert_eq!(card.back.rows[3].1, "Earth (C-137)");
        assert_eq!(card.back.rows[4].1, "Citadel of Ricks");
    }

    #[test]
    fn missing_image_gets_placeholder() {
        let mut character = rick();
        character.image = String::new();
        assert_eq!(render_card(&character, &[]).front.thumbnail, NO_IMAGE);
    }

    #[test]
    fn flip_toggles_face_only() {
        let card = render_card(&rick(), &[]);
        let mut flip = FlipCard::new(card.clone());
        flip.toggle();
        assert!(flip.flipped);
        assert_eq!(flip.card, card);
        flip.toggle();
        assert!(!flip.flipped);
    }
}
