//! Numbered selection menus.

use std::fmt::{self, Write as _};

use crate::domain::{
    bounds::{BoundCheck, BoundRule},
    error::DomainError,
};

/// Where menu numbering starts.
///
/// The same base is used to render the menu and to map the chosen number
/// back to an item, so the two can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexBase {
    Zero,
    #[default]
    One,
}

impl IndexBase {
    pub const fn from_start_at_zero(start_at_zero: bool) -> Self {
        if start_at_zero { Self::Zero } else { Self::One }
    }

    pub const fn offset(self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// An ordered, non-empty list of choices.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionList<T> {
    title: String,
    items: Vec<T>,
    base: IndexBase,
}

impl<T: fmt::Display> SelectionList<T> {
    /// Fails with [`DomainError::EmptySelection`]: an empty menu has no
    /// acceptable answer.
    pub fn new(
        title: impl Into<String>,
        items: impl IntoIterator<Item = T>,
        base: IndexBase,
    ) -> Result<Self, DomainError> {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(DomainError::EmptySelection);
        }
        Ok(Self {
            title: title.into(),
            items,
            base,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn base(&self) -> IndexBase {
        self.base
    }

    /// First and last displayed numbers, inclusive.
    pub fn bounds(&self) -> (i64, i64) {
        let start = self.base.offset();
        (start, start + self.items.len() as i64 - 1)
    }

    pub fn bound_rule(&self) -> BoundRule {
        let (start, end) = self.bounds();
        BoundRule::Integer(BoundCheck::Range(start, end))
    }

    pub fn rejection_message(&self) -> String {
        let (start, end) = self.bounds();
        format!("Please select a number between {start} - {end}")
    }

    /// Title, one tab-separated line per item, a blank line, then `message`.
    pub fn render(&self, message: &str) -> String {
        let mut out = format!("{}\n", self.title);
        for (n, item) in (self.base.offset()..).zip(&self.items) {
            let _ = writeln!(out, "\t[{n}]\t{item}");
        }
        out.push('\n');
        out.push_str(message);
        out
    }

    /// Map a displayed number back to its item.
    pub fn lookup(&self, number: i64) -> Option<&T> {
        let index = number.checked_sub(self.base.offset())?;
        usize::try_from(index).ok().and_then(|i| self.items.get(i))
    }
}
