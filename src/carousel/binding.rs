use std::{cell::Cell, rc::Rc};

/// A shared handle to a carousel's externally visible index.
///
/// Both the owner of the carousel and the controller hold a clone. The
/// controller writes to it whenever its active item changes; the owner may
/// write to it at any time and then let the controller pick the change up
/// through [`CarouselController::sync_binding`](super::CarouselController::sync_binding).
///
/// This is not [`Send`]; a carousel lives on one event loop.
#[derive(Debug, Clone, Default)]
pub struct IndexBinding {
    index: Rc<Cell<usize>>,
}

impl IndexBinding {
    /// Creates a new binding starting at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index: Rc::new(Cell::new(index)),
        }
    }

    /// Returns the current index.
    pub fn get(&self) -> usize {
        self.index.get()
    }

    /// Overwrites the current index.
    pub fn set(&self, index: usize) {
        self.index.set(index);
    }
}
