//! Root-level visual mode markers.
//!
//! Styling rules select the dark or light treatment from a class on the
//! document root. [`apply_mode`] keeps exactly one of [`DARK_MODE_CLASS`] and
//! [`LIGHT_MODE_CLASS`] present, so components never need to poll the store.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::theme::ThemePreference;

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// The element the mode marker is applied to.
///
/// Implemented by [`ClassList`] in-process; a host embedding the crate can
/// implement it over its own root element.
pub trait DocumentRoot {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Replaces the current mode marker with the one for `pref`.
///
/// Classes other than the two mode markers are left alone.
pub fn apply_mode(root: &dyn DocumentRoot, pref: ThemePreference) {
    let (add, remove) = match pref {
        ThemePreference::Dark => (DARK_MODE_CLASS, LIGHT_MODE_CLASS),
        ThemePreference::Light => (LIGHT_MODE_CLASS, DARK_MODE_CLASS),
    };
    root.remove_class(remove);
    root.add_class(add);
}

/// A shared, ordered set of class names.
///
/// Clones share the same set, so a test (or a renderer) can hold one handle
/// while the store mutates through another.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the classes in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    /// Renders the set as a space separated `class` attribute value.
    pub fn to_attribute(&self) -> String {
        self.classes().join(" ")
    }
}

impl DocumentRoot for ClassList {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}
