//! The parsed presentation.

use serde::{Deserialize, Serialize};

use super::slide::Slide;

/// An ordered, read-only sequence of slides.
///
/// Slide order is presentation order. A successfully parsed presentation
/// always holds at least one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    slides: Vec<Slide>,
}

impl Presentation {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get a slide by position.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Take ownership of the slides.
    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }
}

impl<'a> IntoIterator for &'a Presentation {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

impl IntoIterator for Presentation {
    type Item = Slide;
    type IntoIter = std::vec::IntoIter<Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.into_iter()
    }
}
