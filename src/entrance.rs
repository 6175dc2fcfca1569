//! Staggered fade-in-up cues for the content of a newly active slide.

use std::time::Duration;

use crate::deck::ContentLayout;

const STAGGER: Duration = Duration::from_millis(200);
const BLOCK_DURATION: Duration = Duration::from_millis(800);
const CARD_DURATION: Duration = Duration::from_millis(600);
const INFO_CARD_LEAD: Duration = Duration::from_millis(400);
const NOTE_BOX_LEAD: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    TextBlock,
    Image,
    InfoCard,
    NoteBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceCue {
    pub kind: ContentKind,
    /// Position among elements of the same kind.
    pub ordinal: usize,
    pub delay: Duration,
    pub duration: Duration,
}

/// Text blocks lead, images follow on the same stagger, cards and notes run
/// on their own offsets.
pub fn entrance_cues(layout: &ContentLayout) -> Vec<EntranceCue> {
    let mut cues = Vec::with_capacity(
        layout.text_blocks + layout.images + layout.info_cards + layout.note_boxes,
    );
    let staggered = |lead: Duration, step: usize| lead + STAGGER * step as u32;

    for i in 0..layout.text_blocks {
        cues.push(EntranceCue {
            kind: ContentKind::TextBlock,
            ordinal: i,
            delay: staggered(Duration::ZERO, i),
            duration: BLOCK_DURATION,
        });
    }
    for i in 0..layout.images {
        cues.push(EntranceCue {
            kind: ContentKind::Image,
            ordinal: i,
            delay: staggered(Duration::ZERO, layout.text_blocks + i),
            duration: BLOCK_DURATION,
        });
    }
    for i in 0..layout.info_cards {
        cues.push(EntranceCue {
            kind: ContentKind::InfoCard,
            ordinal: i,
            delay: staggered(INFO_CARD_LEAD, i),
            duration: CARD_DURATION,
        });
    }
    for i in 0..layout.note_boxes {
        cues.push(EntranceCue {
            kind: ContentKind::NoteBox,
            ordinal: i,
            delay: staggered(NOTE_BOX_LEAD, i),
            duration: CARD_DURATION,
        });
    }
    cues
}
