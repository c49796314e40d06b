//! Filter selectors: a primary selector per field plus mirrored copies for the compact menu

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::state::FilterField;

/// Label of the "no constraint" entry at the top of every selector.
pub const ALL_SENTINEL: &str = "ALL";

/// Primary selector ids are `{key}Dropdown`.
pub const PRIMARY_SUFFIX: &str = "Dropdown";

/// Class marking a mirrored (compact menu) selector.
pub const MIRROR_CLASS: &str = "mobile-filter";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Filter value sent upstream; empty for the sentinel
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn all() -> Self {
        Self {
            value: String::new(),
            label: ALL_SENTINEL.to_string(),
        }
    }

    pub fn value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// A single-choice selector
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dropdown {
    pub options: Vec<DropdownOption>,
    pub selected: usize,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self {
            options: vec![DropdownOption::all()],
            selected: 0,
        }
    }
}

impl Dropdown {
    /// Replace all entries with the sentinel followed by `values`.
    /// The current selection survives when its value is still offered.
    pub fn rebuild(&mut self, values: &[String]) {
        let keep = self.selected_value().to_string();
        self.options = std::iter::once(DropdownOption::all())
            .chain(values.iter().map(|value| DropdownOption::value(value)))
            .collect();
        self.selected = self
            .options
            .iter()
            .position(|option| option.value == keep)
            .unwrap_or(0);
    }

    pub fn selected_value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|option| option.value.as_str())
            .unwrap_or("")
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|option| option.label.as_str())
            .unwrap_or(ALL_SENTINEL)
    }

    /// Select the entry carrying `value`; returns false when it is not offered.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Value `step` entries away from the selection, wrapping at both ends.
    pub fn cycled_value(&self, step: isize) -> &str {
        let len = self.options.len() as isize;
        if len == 0 {
            return "";
        }
        let index = (self.selected as isize + step).rem_euclid(len) as usize;
        &self.options[index].value
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|option| option.label.as_str()).collect()
    }
}

/// A secondary selector identified by its class list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirroredDropdown {
    pub class: String,
    pub dropdown: Dropdown,
}

impl MirroredDropdown {
    pub fn for_key(key: &str) -> Self {
        Self {
            class: format!("{MIRROR_CLASS} {key}"),
            dropdown: Dropdown::default(),
        }
    }

    fn matches(&self, key: &str) -> bool {
        let classes: Vec<&str> = self.class.split_whitespace().collect();
        classes.contains(&MIRROR_CLASS) && classes.contains(&key)
    }
}

/// Every selector on screen, addressed by primary id or mirror key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownSet {
    primary: BTreeMap<String, Dropdown>,
    mirrors: Vec<MirroredDropdown>,
}

impl Default for DropdownSet {
    /// One primary and one mirror per filter field.
    fn default() -> Self {
        let mut set = Self::empty();
        for field in FilterField::ALL {
            set.add_primary(&field.dropdown_id());
            set.add_mirror(field.key());
        }
        set
    }
}

impl DropdownSet {
    pub fn empty() -> Self {
        Self {
            primary: BTreeMap::new(),
            mirrors: Vec::new(),
        }
    }

    pub fn add_primary(&mut self, id: &str) {
        self.primary.entry(id.to_string()).or_default();
    }

    pub fn add_mirror(&mut self, key: &str) {
        self.mirrors.push(MirroredDropdown::for_key(key));
    }

    /// Rebuild the primary selector `target_id` and every mirror sharing its key
    /// with `ALL` followed by `options`. A missing primary is skipped.
    pub fn fill(&mut self, target_id: &str, options: &[String]) {
        if let Some(dropdown) = self.primary.get_mut(target_id) {
            dropdown.rebuild(options);
        }

        let key = target_id.strip_suffix(PRIMARY_SUFFIX).unwrap_or(target_id);
        for mirror in self.mirrors.iter_mut().filter(|mirror| mirror.matches(key)) {
            mirror.dropdown.rebuild(options);
        }
    }

    pub fn primary(&self, id: &str) -> Option<&Dropdown> {
        self.primary.get(id)
    }

    pub fn primary_for(&self, field: FilterField) -> Option<&Dropdown> {
        self.primary(&field.dropdown_id())
    }

    pub fn mirrors_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Dropdown> + 'a {
        self.mirrors
            .iter()
            .filter(move |mirror| mirror.matches(key))
            .map(|mirror| &mirror.dropdown)
    }

    /// The selector the compact menu shows for `field`.
    pub fn menu_dropdown(&self, field: FilterField) -> Option<&Dropdown> {
        self.mirrors_for(field.key())
            .next()
            .or_else(|| self.primary_for(field))
    }

    /// Reflect a filter change in the primary and all mirrors of `field`.
    pub fn select(&mut self, field: FilterField, value: &str) {
        let key = field.key();
        if let Some(dropdown) = self.primary.get_mut(&field.dropdown_id()) {
            dropdown.select_value(value);
        }
        for mirror in self.mirrors.iter_mut().filter(|mirror| mirror.matches(key)) {
            mirror.dropdown.select_value(value);
        }
    }
}
