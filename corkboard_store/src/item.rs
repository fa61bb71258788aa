// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use corkboard_layout::CardSize;
use kurbo::Point;

use crate::card::Card;
use crate::id::{CardId, ItemId};

/// Shape-specific contents of a [`CanvasItem`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum ItemBody {
    /// A standalone card. It is its own cover and never expands.
    Single(Card),
    /// A cover card with cards stacked beneath it.
    Stack {
        /// Always-visible card, if any.
        cover: Option<Card>,
        /// Cards revealed when the group expands.
        stack: Vec<Card>,
    },
    /// Side projects fanned out as an icon grid.
    FunProjects {
        /// Always-visible card, if any.
        cover: Option<Card>,
        /// Project tiles.
        projects: Vec<Card>,
    },
    /// Swag photos fanned out as a photo grid.
    Swag {
        /// Always-visible card, if any.
        cover: Option<Card>,
        /// Photo cards.
        photos: Vec<Card>,
    },
}

/// A positioned item on the canvas.
///
/// Every shape shares `id`, `position` and `z_index`, and goes through the
/// same drag, selection and stacking machinery.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasItem {
    /// Stable key.
    pub id: ItemId,
    /// World-space position of the group origin (the cover's top-left).
    pub position: Point,
    /// Paint order; higher is on top.
    pub z_index: i64,
    /// Cards carried by the item.
    pub body: ItemBody,
}

impl CanvasItem {
    /// Creates an item at z-index 0.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, position: Point, body: ItemBody) -> Self {
        Self {
            id: id.into(),
            position,
            z_index: 0,
            body,
        }
    }

    /// A standalone card.
    #[must_use]
    pub fn single(id: impl Into<ItemId>, position: Point, card: Card) -> Self {
        Self::new(id, position, ItemBody::Single(card))
    }

    /// A cover with stacked cards.
    #[must_use]
    pub fn stack(
        id: impl Into<ItemId>,
        position: Point,
        cover: Option<Card>,
        stack: Vec<Card>,
    ) -> Self {
        Self::new(id, position, ItemBody::Stack { cover, stack })
    }

    /// Returns `self` with `z_index` replaced.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = z_index;
        self
    }

    /// The always-visible card, if any.
    #[must_use]
    pub fn cover(&self) -> Option<&Card> {
        match &self.body {
            ItemBody::Single(card) => Some(card),
            ItemBody::Stack { cover, .. }
            | ItemBody::FunProjects { cover, .. }
            | ItemBody::Swag { cover, .. } => cover.as_ref(),
        }
    }

    /// Cards shown only while expanded, in fan order.
    #[must_use]
    pub fn stacked(&self) -> &[Card] {
        match &self.body {
            ItemBody::Single(_) => &[],
            ItemBody::Stack { stack: cards, .. }
            | ItemBody::FunProjects {
                projects: cards, ..
            }
            | ItemBody::Swag { photos: cards, .. } => cards.as_slice(),
        }
    }

    /// The card whose centre represents the item: the cover, else the first
    /// stacked card.
    #[must_use]
    pub fn anchor(&self) -> Option<&Card> {
        self.cover().or_else(|| self.stacked().first())
    }

    /// Returns `true` if the item has anything to fan out.
    #[must_use]
    pub fn can_expand(&self) -> bool {
        !self.stacked().is_empty()
    }

    /// Cover followed by stacked cards.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cover().into_iter().chain(self.stacked())
    }

    /// Looks up a card by id among the cover and stacked cards.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards().find(|card| &card.id == id)
    }

    /// Mutable lookup of a card by id.
    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        let (cover, stacked) = match &mut self.body {
            ItemBody::Single(card) => return (&card.id == id).then_some(card),
            ItemBody::Stack { cover, stack: cards }
            | ItemBody::FunProjects {
                cover,
                projects: cards,
            }
            | ItemBody::Swag {
                cover,
                photos: cards,
            } => (cover, cards),
        };
        if let Some(card) = cover.as_mut().filter(|card| &card.id == id) {
            return Some(card);
        }
        stacked.iter_mut().find(|card| &card.id == id)
    }

    /// Size of the cover card, if any.
    #[must_use]
    pub fn cover_size(&self) -> Option<CardSize> {
        self.cover().map(|card| card.size)
    }

    /// Sizes of the stacked cards, in fan order.
    #[must_use]
    pub fn stacked_sizes(&self) -> Vec<CardSize> {
        self.stacked().iter().map(|card| card.size).collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::CardKind;

    fn note(id: &str) -> Card {
        Card::new(
            id,
            CardKind::Note {
                markdown: "hi".into(),
            },
            CardSize::with_width(200.0),
        )
    }

    #[test]
    fn single_is_its_own_cover() {
        let item = CanvasItem::single("a", Point::ZERO, note("c"));
        assert_eq!(item.cover().map(|c| c.id.as_str()), Some("c"));
        assert!(item.stacked().is_empty());
        assert!(!item.can_expand());
    }

    #[test]
    fn anchor_falls_back_to_first_stacked() {
        let item = CanvasItem::new(
            "swag",
            Point::ZERO,
            ItemBody::Swag {
                cover: None,
                photos: vec![note("p1"), note("p2")],
            },
        );
        assert_eq!(item.anchor().map(|c| c.id.as_str()), Some("p1"));
        assert_eq!(item.cover_size(), None);
        assert_eq!(item.stacked_sizes().len(), 2);
    }

    #[test]
    fn card_mut_finds_cover_and_stacked() {
        let mut item = CanvasItem::stack(
            "g",
            Point::ZERO,
            Some(note("cover")),
            vec![note("s1"), note("s2")],
        );
        item.card_mut(&"cover".into()).unwrap().size.height = Some(10.0);
        item.card_mut(&"s2".into()).unwrap().size.height = Some(20.0);
        assert!(item.card_mut(&"missing".into()).is_none());

        let heights: Vec<_> = item.cards().map(|c| c.size.height).collect();
        assert_eq!(heights, vec![Some(10.0), None, Some(20.0)]);
    }
}
