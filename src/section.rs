use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::InvalidSectionName;

/// Name under which key/value pairs preceding any `[section]` header are stored.
///
/// It cannot be used as a literal section name: `[__global]` is rejected by the parser and by
/// [`Document::get_or_insert_section`].
pub const GLOBAL_SECTION: &str = "__global";

/// In-memory INI document: sections in the order they were first declared.
///
/// The global section always exists and is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        let mut sections = IndexMap::with_capacity(16);
        sections.insert(GLOBAL_SECTION.to_owned(), Section::new(GLOBAL_SECTION.to_owned()));
        Self { sections }
    }

    #[must_use]
    pub fn global(&self) -> &Section {
        &self.sections[0]
    }

    pub fn global_mut(&mut self) -> &mut Section {
        &mut self.sections[0]
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Opens the named section, creating it at the end if it does not exist yet.
    ///
    /// Surrounding whitespace in `name` is ignored.
    ///
    /// # Errors
    ///
    /// Fails if the trimmed name is empty or equal to [`GLOBAL_SECTION`].
    pub fn get_or_insert_section(&mut self, name: &str) -> Result<&mut Section, InvalidSectionName> {
        let index = self.insert_section_full(name)?;
        Ok(&mut self.sections[index])
    }

    /// Like [`Document::get_or_insert_section`] but returns the section's stable position.
    pub(crate) fn insert_section_full(&mut self, name: &str) -> Result<usize, InvalidSectionName> {
        let name = validate_section_name(name)?;

        Ok(match self.sections.entry(name.to_owned()) {
            Entry::Occupied(entry) => entry.index(),
            Entry::Vacant(entry) => {
                tracing::trace!(section = name, "opened new section");
                let index = entry.index();
                let section = Section::new(entry.key().clone());
                entry.insert(section);
                index
            }
        })
    }

    /// Section at a position previously returned by [`Document::insert_section_full`].
    pub(crate) fn section_at_mut(&mut self, index: usize) -> &mut Section {
        &mut self.sections[index]
    }

    /// Looks up `key` in `section`, where [`GLOBAL_SECTION`] addresses the global section.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Sections in stored order, global section first.
    pub fn sections(&self) -> impl ExactSizeIterator<Item = &Section> {
        self.sections.values()
    }

    /// Number of sections, including the global section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no section holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(Section::is_empty)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_section_name(name: &str) -> Result<&str, InvalidSectionName> {
    let name = name.trim();

    if name.is_empty() {
        Err(InvalidSectionName::Empty)
    } else if name == GLOBAL_SECTION {
        Err(InvalidSectionName::Reserved)
    } else {
        Ok(name)
    }
}

/// Named group of key/value pairs, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: IndexMap<String, String>,
}

impl Section {
    #[must_use]
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            entries: IndexMap::with_capacity(32),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        self.name == GLOBAL_SECTION
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key`, both trimmed, returning the value it replaced.
    ///
    /// The last write wins; an overwritten key keeps its original position.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Option<String> {
        let key = key.as_ref().trim().to_owned();
        let value = value.as_ref().trim().to_owned();
        self.entries.insert(key, value)
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
