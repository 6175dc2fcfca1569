use crate::error::Error;

/// Counts of the content blocks a slide carries. The controller never looks at
/// these; they only feed the entrance cues of a newly active slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentLayout {
    pub text_blocks: usize,
    pub images: usize,
    pub info_cards: usize,
    pub note_boxes: usize,
}

/// Handle to one presentable unit of a [`Deck`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    index: usize,
    title: String,
    layout: ContentLayout,
}

impl Slide {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn layout(&self) -> ContentLayout {
        self.layout
    }
}

/// Fixed, non-empty, ordered collection of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Builds a deck from `(title, layout)` pairs. Indices follow input order.
    pub fn new<I, S>(slides: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, ContentLayout)>,
        S: Into<String>,
    {
        let slides: Vec<Slide> = slides
            .into_iter()
            .enumerate()
            .map(|(index, (title, layout))| Slide {
                index,
                title: title.into(),
                layout,
            })
            .collect();
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(Self { slides })
    }

    /// Deck of `len` untitled slides with no content.
    pub fn with_len(len: usize) -> Result<Self, Error> {
        Self::new((0..len).map(|i| (format!("Slide {}", i + 1), ContentLayout::default())))
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck holds no slides. A constructed deck never does.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    /// Circular normalization: anything below zero lands on the last slide,
    /// anything past the end lands on the first.
    pub fn wrap(&self, target: isize) -> usize {
        if target < 0 {
            self.last_index()
        } else if target as usize >= self.slides.len() {
            0
        } else {
            target as usize
        }
    }
}
