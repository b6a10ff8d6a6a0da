//! A small lookup wrapper over a [`Tree`] of cats, keyed by weight.
//!
//! # Examples
//!
//! ```
//! use clowder::cafe::{Cat, CatCafe};
//!
//! let mut cafe = CatCafe::new();
//! cafe.add_cat(Cat::new("Morticia", 3));
//! cafe.add_cat(Cat::new("Fitzby Darnsworth", 5));
//!
//! assert_eq!(cafe.cat_count(), 2);
//! assert_eq!(cafe.cat_by_name("Morticia").map(Cat::weight), Some(3));
//! assert_eq!(cafe.cat_by_weight(4, 6).unwrap().map(Cat::name), Some("Fitzby Darnsworth"));
//! ```

use std::cmp;
use std::fmt;

use crate::{Error, Iter, Tree, TreeVisitor};

/// A purring feline overlord.
///
/// Cats are ordered and compared by weight only, so two cats of the same
/// weight are the same key as far as a [`CatCafe`] is concerned.
#[derive(Debug, Clone)]
pub struct Cat {
    name: String,
    weight: i32,
}

impl Cat {
    /// A new cat.
    pub fn new(name: impl Into<String>, weight: i32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// The cat's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cat's weight.
    pub fn weight(&self) -> i32 {
        self.weight
    }
}

impl PartialEq for Cat {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl Eq for Cat {}

impl PartialOrd for Cat {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cat {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Holds cats in a [`Tree`] ordered by weight.
#[derive(Debug, Default, Clone)]
pub struct CatCafe {
    clowder: Tree<Cat>,
}

impl CatCafe {
    /// An empty café.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `cat` unless a cat of the same weight already lives here, in
    /// which case the resident stays and `cat` is turned away.
    pub fn add_cat(&mut self, cat: Cat) {
        self.clowder = self.clowder.insert(cat);
    }

    /// How many cats live here.
    pub fn cat_count(&self) -> usize {
        self.clowder.size()
    }

    /// The first cat, lightest first, called `name`.
    pub fn cat_by_name(&self, name: &str) -> Option<&Cat> {
        self.cats().find(|cat| cat.name == name)
    }

    /// The lightest cat with `min_weight <= weight < max_weight`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `min_weight` is negative or `max_weight`
    /// is less than `min_weight`.
    pub fn cat_by_weight(&self, min_weight: i32, max_weight: i32) -> Result<Option<&Cat>, Error> {
        if min_weight < 0 || max_weight < min_weight {
            return Err(Error::InvalidRange {
                min: min_weight,
                max: max_weight,
            });
        }

        Ok(self
            .cats()
            .find(|cat| (min_weight..max_weight).contains(&cat.weight)))
    }

    /// All cats, lightest first.
    pub fn cats(&self) -> Iter<'_, Cat> {
        self.clowder.iter()
    }

    /// Hands the underlying tree to `visitor`.
    pub fn accept<V>(&self, visitor: &mut V) -> String
    where
        V: TreeVisitor<Cat> + ?Sized,
    {
        self.clowder.accept(visitor)
    }
}
