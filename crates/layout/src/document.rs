use crate::elements::Flowable;
use geo_style::PageSetup;

/// An ordered, append-only list of blocks plus the page they flow onto.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub setup: PageSetup,
    elements: Vec<Flowable>,
}

impl Document {
    pub fn new(title: impl Into<String>, setup: PageSetup) -> Self {
        Self {
            title: title.into(),
            setup,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl Into<Flowable>) {
        self.elements.push(element.into());
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Flowable>) {
        self.elements.extend(elements);
    }

    pub fn elements(&self) -> &[Flowable] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Flowable> {
        self.elements
    }
}
