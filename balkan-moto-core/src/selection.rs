//! Single-record selection plus the small per-record detail state
//! (image gallery position, chosen size/color).
use serde::{Deserialize, Serialize};

/// The one active record of a UI surface, by id.
///
/// Selection is independent of the filtered subset: a record may stay selected
/// after filters hide it, and selecting a hidden record is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    active: Option<String>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Make `id` the active record. Returns `true` when the selection changed.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.active.as_deref() == Some(id.as_str()) {
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Drop the active record. Returns `true` when something was selected.
    pub fn clear(&mut self) -> bool {
        self.active.take().is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active.is_none()
    }
}

/// Position within a record's ordered image list, wrapping at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Navigation controls only make sense with more than one image.
    #[must_use]
    pub const fn has_navigation(&self) -> bool {
        self.len > 1
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Position for an image list of `len`: unchanged when the length matches,
    /// otherwise back to the first image.
    #[must_use]
    pub const fn fit(self, len: usize) -> Self {
        if self.len == len { self } else { Self::new(len) }
    }

    /// Jump to a thumbnail; out-of-range indices are ignored.
    #[must_use]
    pub const fn jump(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

/// Chosen option from an ordered variant list (sizes or colors).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantPicker {
    options: Vec<String>,
    chosen: Option<usize>,
}

impl VariantPicker {
    /// Starts on the first option, or nothing for an empty list.
    #[must_use]
    pub fn new(options: &[String]) -> Self {
        Self {
            options: options.to_vec(),
            chosen: if options.is_empty() { None } else { Some(0) },
        }
    }

    #[must_use]
    pub fn chosen(&self) -> Option<&str> {
        self.chosen
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Choose by value; unknown values leave the current choice untouched.
    pub fn choose(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(i) => {
                self.chosen = Some(i);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}
