// Live cost ceiling shared between a collector and its search

use std::cell::Cell;
use std::rc::Rc;

use spellsearch_core::Cost;

/// The maximum cost still worth exploring for one request.
///
/// The collector lowers it as it fills up; the search re-reads it before
/// every expansion. Clones share the same cell, which is confined to the
/// thread running the request; concurrent requests each own a ceiling.
#[derive(Debug, Clone)]
pub struct Ceiling(Rc<Cell<Cost>>);

impl Ceiling {
    pub fn new(cost: Cost) -> Self {
        Self(Rc::new(Cell::new(cost)))
    }

    #[inline]
    pub fn get(&self) -> Cost {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, cost: Cost) {
        self.0.set(cost);
    }
}
