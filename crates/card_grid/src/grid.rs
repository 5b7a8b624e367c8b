use bevy::prelude::*;
use card_helpers::reset::Resettable;

use crate::config::GridConfig;
use crate::deck::{CardContent, CardDeck};
use crate::layout::GridDimensions;

/// One card's persistent data.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntity {
    pub id: usize,
    pub position: Vec3,
    pub content: CardContent,
}

/// What a drop resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dropped card traded places with card `with`
    Swapped { with: usize },
    /// Nothing was close enough, the card stays where it was dropped
    Placed,
}

/// Canonical list of cards and their authoritative positions.
///
/// Cards keep their list index for their whole life; only positions move.
#[derive(Resource, Debug, Clone)]
pub struct CardGrid {
    cards: Vec<CardEntity>,
    dimensions: GridDimensions,
    spacing: Vec2,
    swap_threshold: f32,
    reset_token: u32,
}

impl CardGrid {
    /// Fills every slot of `dimensions` with a card, cycling through the deck.
    pub fn new(deck: &CardDeck, dimensions: GridDimensions, config: &GridConfig) -> Self {
        let spacing = config.spacing();
        let cards = (0..dimensions.slot_count())
            .map(|index| CardEntity {
                id: index,
                position: dimensions.slot_position(index, spacing),
                content: deck.content(index).clone(),
            })
            .collect();

        Self {
            cards,
            dimensions,
            spacing,
            swap_threshold: config.swap_threshold,
            reset_token: 0,
        }
    }

    pub fn cards(&self) -> &[CardEntity] {
        &self.cards
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.cards.get(index).map(|card| card.position)
    }

    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Changes whenever the grid is reset; views compare it against the last
    /// value they saw.
    pub const fn reset_token(&self) -> u32 {
        self.reset_token
    }

    /// Lays the cards out again for new dimensions, keeping ids and content.
    pub fn resize(&mut self, dimensions: GridDimensions) {
        self.dimensions = dimensions;
        self.relayout();
    }

    /// Resolves a drop of card `index` at `new_position`.
    ///
    /// The nearest other card (first one on ties) within the swap threshold
    /// trades places with the dropped card, which takes that card's position
    /// while the other one takes the dropped card's position from before the
    /// drag. Without such a neighbour the card is placed at `new_position`.
    pub fn report_drop(&mut self, index: usize, new_position: Vec3) -> DropOutcome {
        assert!(
            index < self.cards.len(),
            "dropped card {index} is outside a grid of {} cards",
            self.cards.len()
        );

        let closest = self
            .cards
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .map(|(other, card)| (other, new_position.truncate().distance(card.position.truncate())))
            .fold(None, |closest: Option<(usize, f32)>, (other, distance)| {
                match closest {
                    Some((_, min_distance)) if distance >= min_distance => closest,
                    _ => Some((other, distance)),
                }
            });

        match closest {
            Some((other, distance)) if distance < self.swap_threshold => {
                let dragged_from = self.cards.get(index).map(|card| card.position);
                let other_at = self.cards.get(other).map(|card| card.position);
                if let (Some(dragged_from), Some(other_at)) = (dragged_from, other_at) {
                    self.set_position(index, other_at);
                    self.set_position(other, dragged_from);
                }
                DropOutcome::Swapped { with: other }
            }
            _ => {
                self.set_position(index, new_position);
                DropOutcome::Placed
            }
        }
    }

    fn set_position(&mut self, index: usize, position: Vec3) {
        if let Some(card) = self.cards.get_mut(index) {
            card.position = position;
        }
    }

    fn relayout(&mut self) {
        let dimensions = self.dimensions;
        let spacing = self.spacing;
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.position = dimensions.slot_position(index, spacing);
        }
    }
}

impl Resettable for CardGrid {
    /// Puts every card back in its slot and tells the views to show their
    /// front face.
    fn reset(&mut self) {
        self.relayout();
        self.reset_token = self.reset_token.wrapping_add(1);
        info!("Cards reset (token {})", self.reset_token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DEFAULT_CARDS;
    use crate::layout::Viewport;

    const EPSILON: f32 = 1e-5;

    fn desktop_grid() -> CardGrid {
        let deck = CardDeck::new(DEFAULT_CARDS).expect("default deck is valid");
        let dimensions = Viewport::new(1200.0, 800.0)
            .device_class()
            .grid_dimensions();
        CardGrid::new(&deck, dimensions, &GridConfig::default())
    }

    fn positions(grid: &CardGrid) -> Vec<Vec3> {
        grid.cards().iter().map(|card| card.position).collect()
    }

    fn index_at(grid: &CardGrid, position: Vec3) -> usize {
        grid.cards()
            .iter()
            .position(|card| card.position.distance(position) < EPSILON)
            .expect("a card sits at the position")
    }

    #[test]
    fn desktop_grid_layout() {
        let grid = desktop_grid();

        assert_eq!(grid.dimensions(), GridDimensions::new(2, 5));
        let ids: Vec<usize> = grid.cards().iter().map(|card| card.id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());

        let expected_x = [-10.0, -5.0, 0.0, 5.0, 10.0];
        for (index, card) in grid.cards().iter().enumerate() {
            let expected = Vec3::new(
                expected_x.get(index % 5).copied().unwrap_or_default(),
                if index < 5 { 3.5 } else { -3.5 },
                0.0,
            );
            assert!(
                card.position.distance(expected) < EPSILON,
                "card {index} at {}",
                card.position
            );
        }
    }

    #[test]
    fn content_cycles_when_the_deck_is_short() {
        let deck = CardDeck::new(DEFAULT_CARDS.into_iter().take(3)).expect("deck is valid");
        let grid = CardGrid::new(&deck, GridDimensions::new(2, 5), &GridConfig::default());

        assert_eq!(grid.cards().len(), 10);
        for (index, card) in grid.cards().iter().enumerate() {
            assert_eq!(card.content, *deck.content(index % 3), "card {index}");
        }
    }

    #[test]
    fn close_drop_swaps() {
        let mut grid = desktop_grid();
        let dragged = index_at(&grid, Vec3::new(0.0, 3.5, 0.0));
        let neighbour = index_at(&grid, Vec3::new(5.0, 3.5, 0.0));
        let before = positions(&grid);

        let outcome = grid.report_drop(dragged, Vec3::new(4.9, 3.5, 0.0));

        assert_eq!(outcome, DropOutcome::Swapped { with: neighbour });
        assert_eq!(grid.position(dragged), before.get(neighbour).copied());
        assert_eq!(grid.position(neighbour), before.get(dragged).copied());
        for (index, position) in before.iter().enumerate() {
            if index != dragged && index != neighbour {
                assert_eq!(grid.position(index), Some(*position), "card {index} moved");
            }
        }
    }

    #[test]
    fn swap_ignores_drop_point() {
        let mut grid = desktop_grid();
        let before = positions(&grid);

        // Anywhere within the threshold of card 1 ends in the same exchange
        grid.report_drop(0, Vec3::new(-5.0 + 1.2, 3.5 - 1.0, 0.0));

        assert_eq!(grid.position(0), before.get(1).copied());
        assert_eq!(grid.position(1), before.get(0).copied());
    }

    #[test]
    fn swap_permutes_positions() {
        let mut grid = desktop_grid();
        let mut before = positions(&grid);

        grid.report_drop(3, Vec3::new(-9.5, -3.0, 0.0));

        let mut after = positions(&grid);
        assert_eq!(after.len(), before.len());
        let ids: Vec<usize> = grid.cards().iter().map(|card| card.id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<_>>(), "ids are untouched");

        let by_xy = |a: &Vec3, b: &Vec3| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y));
        before.sort_by(by_xy);
        after.sort_by(by_xy);
        assert_eq!(before, after, "the set of positions is unchanged");
    }

    #[test]
    fn far_drop_places_the_card() {
        let mut grid = desktop_grid();
        let before = positions(&grid);
        let drop_at = Vec3::new(2.5, 0.0, 0.0);

        let outcome = grid.report_drop(2, drop_at);

        assert_eq!(outcome, DropOutcome::Placed);
        assert_eq!(grid.position(2), Some(drop_at));
        for (index, position) in before.iter().enumerate() {
            if index != 2 {
                assert_eq!(grid.position(index), Some(*position), "card {index} moved");
            }
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut grid = desktop_grid();
        // Card 7 sits at (0, -3.5); card 2 is dropped exactly 2.0 below it
        let drop_at = Vec3::new(0.0, -5.5, 0.0);

        let outcome = grid.report_drop(2, drop_at);

        assert_eq!(outcome, DropOutcome::Placed);
        assert_eq!(grid.position(2), Some(drop_at));
        assert_eq!(grid.position(7), Some(Vec3::new(0.0, -3.5, 0.0)));
    }

    #[test]
    fn dropping_on_own_slot_does_not_swap_with_itself() {
        let mut grid = desktop_grid();
        let home = grid.position(4).expect("card 4 exists");

        let outcome = grid.report_drop(4, home);

        assert_eq!(outcome, DropOutcome::Placed);
        assert_eq!(grid.position(4), Some(home));
    }

    #[test]
    fn ties_go_to_the_first_card() {
        let mut grid = desktop_grid();
        // Equidistant from card 1 (-5, 3.5) and card 2 (0, 3.5)
        let outcome = grid.report_drop(7, Vec3::new(-2.5, 3.5, 0.0));
        assert_eq!(outcome, DropOutcome::Placed, "2.5 away is outside the threshold");

        let mut grid = desktop_grid();
        grid.swap_threshold = 3.0;
        let outcome = grid.report_drop(7, Vec3::new(-2.5, 3.5, 0.0));
        assert_eq!(outcome, DropOutcome::Swapped { with: 1 });
    }

    #[test]
    fn lone_card_is_placed() {
        let deck = CardDeck::new(DEFAULT_CARDS).expect("default deck is valid");
        let mut grid = CardGrid::new(&deck, GridDimensions::new(1, 1), &GridConfig::default());

        let outcome = grid.report_drop(0, Vec3::new(0.5, 0.5, 0.0));

        assert_eq!(outcome, DropOutcome::Placed);
        assert_eq!(grid.position(0), Some(Vec3::new(0.5, 0.5, 0.0)));
    }

    #[test]
    #[should_panic(expected = "outside a grid")]
    fn out_of_range_drop_panics() {
        let mut grid = desktop_grid();
        grid.report_drop(10, Vec3::ZERO);
    }

    #[test]
    fn reset_restores_layout_and_bumps_token() {
        let mut grid = desktop_grid();
        let initial = positions(&grid);
        let token = grid.reset_token();

        grid.report_drop(0, Vec3::new(4.9, 3.5, 0.0));
        grid.report_drop(6, Vec3::new(30.0, 30.0, 0.0));
        assert_ne!(positions(&grid), initial);

        grid.reset();

        assert_eq!(positions(&grid), initial);
        assert_ne!(grid.reset_token(), token);
    }

    #[test]
    fn resize_keeps_ids_and_content() {
        let mut grid = desktop_grid();
        let before = grid.cards().to_vec();
        grid.report_drop(0, Vec3::new(4.9, 3.5, 0.0));

        grid.resize(GridDimensions::new(5, 2));

        for (index, (card, old)) in grid.cards().iter().zip(&before).enumerate() {
            assert_eq!(card.id, old.id);
            assert_eq!(card.content, old.content);
            let expected = GridDimensions::new(5, 2).slot_position(index, Vec2::new(5.0, 7.0));
            assert_eq!(card.position, expected, "card {index}");
        }
        assert_eq!(grid.reset_token(), 0, "resizing is not a reset");
    }
}
