//! Commitment fields and the template data dictionary
//!
//! A [`Collation`] is the ordered list of commitment texts a user authors. At
//! export time each commitment's HTML content is converted to WML and placed
//! in a [`TemplateData`] dictionary under `<code>_content`; the whole list is
//! also exposed as `languages` for templates that loop over it.

use crate::error::ExportError;
use crate::formats::wml::{convert, WmlOptions};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// One commitment text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentLanguage {
    pub code: String,
    pub name: String,
    /// Rich-text HTML from the editor. Empty means one empty paragraph.
    #[serde(default)]
    pub content: String,
}

impl CommitmentLanguage {
    pub fn new(code: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// Template key holding this commitment's converted content.
    pub fn placeholder_key(&self) -> String {
        format!("{}_content", self.code)
    }

    /// A copy with `content` converted to WML. Code and name are untouched.
    pub fn to_wml(&self, options: &WmlOptions) -> CommitmentLanguage {
        debug!(code = %self.code, "converting commitment content");
        CommitmentLanguage {
            code: self.code.clone(),
            name: self.name.clone(),
            content: convert(&self.content, options),
        }
    }
}

/// The ordered list of commitments being collated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collation {
    languages: Vec<CommitmentLanguage>,
}

impl Collation {
    /// A collation with the single starter commitment.
    pub fn new() -> Self {
        Self {
            languages: vec![CommitmentLanguage::new("001", "Commitment Name", "")],
        }
    }

    pub fn from_languages(languages: Vec<CommitmentLanguage>) -> Self {
        Self { languages }
    }

    /// Load commitments from a JSON array of `{code, name, content}` objects.
    pub fn from_json(source: &str) -> Result<Self, ExportError> {
        let languages: Vec<CommitmentLanguage> = serde_json::from_str(source)?;
        Ok(Self { languages })
    }

    pub fn languages(&self) -> &[CommitmentLanguage] {
        &self.languages
    }

    /// Append a blank commitment and return it.
    ///
    /// Codes are `00` followed by the new count, so the tenth entry is `0010`.
    pub fn add_commitment(&mut self) -> &CommitmentLanguage {
        let code = format!("00{}", self.languages.len() + 1);
        self.languages
            .push(CommitmentLanguage::new(code, "New Commitment", ""));
        &self.languages[self.languages.len() - 1]
    }

    /// Convert every commitment and build the template data dictionary.
    pub fn template_data(&self, options: &WmlOptions) -> TemplateData {
        TemplateData::from_languages(&self.languages, options)
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::new()
    }
}

/// Data dictionary handed to a [`crate::template::TemplateEngine`].
///
/// Keys keep insertion order. A repeated commitment code keeps its first
/// position and takes the last commitment's content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateData {
    entries: Vec<(String, String)>,
    languages: Vec<CommitmentLanguage>,
}

impl TemplateData {
    pub fn from_languages(languages: &[CommitmentLanguage], options: &WmlOptions) -> Self {
        let mut data = TemplateData::default();
        for language in languages {
            let converted = language.to_wml(options);
            data.insert(language.placeholder_key(), converted.content.clone());
            data.languages.push(converted);
        }
        data
    }

    /// Set a scalar entry, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// All commitments with converted content, in input order.
    pub fn languages(&self) -> &[CommitmentLanguage] {
        &self.languages
    }
}

impl Serialize for TemplateData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("languages", &self.languages)?;
        map.end()
    }
}
