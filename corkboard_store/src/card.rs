// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use corkboard_layout::CardSize;

use crate::id::CardId;

/// What a card shows. The payloads are references to content owned by the
/// renderers; this crate never looks inside them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CardKind {
    /// Short biography.
    About,
    /// The resume.
    Resume,
    /// One position in the work history.
    Experience {
        /// Employer display name.
        employer: Arc<str>,
    },
    /// A project write-up.
    Project {
        /// Project title.
        title: Arc<str>,
    },
    /// A side project tile, shown in an icon grid.
    SideProject {
        /// Project title.
        title: Arc<str>,
        /// Icon asset key.
        icon: Arc<str>,
    },
    /// Contact details.
    Contact,
    /// A swag photo.
    SwagPhoto {
        /// Image asset key.
        image: Arc<str>,
    },
    /// Free-form markdown.
    Note {
        /// Markdown source.
        markdown: Arc<str>,
    },
}

impl CardKind {
    /// Stable lowercase name of the kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Resume => "resume",
            Self::Experience { .. } => "experience",
            Self::Project { .. } => "project",
            Self::SideProject { .. } => "side_project",
            Self::Contact => "contact",
            Self::SwagPhoto { .. } => "swag_photo",
            Self::Note { .. } => "note",
        }
    }
}

/// An opaque content unit on the canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Stable id.
    pub id: CardId,
    /// Content variant.
    pub kind: CardKind,
    /// Known dimensions.
    pub size: CardSize,
}

impl Card {
    /// Creates a card.
    #[must_use]
    pub fn new(id: impl Into<CardId>, kind: CardKind, size: CardSize) -> Self {
        Self {
            id: id.into(),
            kind,
            size,
        }
    }

    /// Routes the card to the visitor method for its kind.
    pub fn dispatch<V: CardVisitor>(&self, visitor: &mut V) -> V::Output {
        match &self.kind {
            CardKind::About => visitor.about(self),
            CardKind::Resume => visitor.resume(self),
            CardKind::Experience { employer } => visitor.experience(self, employer),
            CardKind::Project { title } => visitor.project(self, title),
            CardKind::SideProject { title, icon } => visitor.side_project(self, title, icon),
            CardKind::Contact => visitor.contact(self),
            CardKind::SwagPhoto { image } => visitor.swag_photo(self, image),
            CardKind::Note { markdown } => visitor.note(self, markdown),
        }
    }
}

/// One method per [`CardKind`]; implemented by renderers.
///
/// There are no default methods, so adding a kind breaks every visitor until
/// it handles the new case.
pub trait CardVisitor {
    /// Result of visiting a card.
    type Output;

    /// An [`CardKind::About`] card.
    fn about(&mut self, card: &Card) -> Self::Output;
    /// A [`CardKind::Resume`] card.
    fn resume(&mut self, card: &Card) -> Self::Output;
    /// A [`CardKind::Experience`] card.
    fn experience(&mut self, card: &Card, employer: &str) -> Self::Output;
    /// A [`CardKind::Project`] card.
    fn project(&mut self, card: &Card, title: &str) -> Self::Output;
    /// A [`CardKind::SideProject`] card.
    fn side_project(&mut self, card: &Card, title: &str, icon: &str) -> Self::Output;
    /// A [`CardKind::Contact`] card.
    fn contact(&mut self, card: &Card) -> Self::Output;
    /// A [`CardKind::SwagPhoto`] card.
    fn swag_photo(&mut self, card: &Card, image: &str) -> Self::Output;
    /// A [`CardKind::Note`] card.
    fn note(&mut self, card: &Card, markdown: &str) -> Self::Output;
}
