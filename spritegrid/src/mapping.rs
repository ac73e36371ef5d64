use std::collections::BTreeMap;
use std::io::Write;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Rect;

/// Identifier to rectangle table describing where each sprite sits.
///
/// Serializes as a flat JSON object: `{"id": {"x":0,"y":0,"w":8,"h":8}}`.
/// Keys are emitted in sorted order so repeated runs produce identical
/// documents, but consumers must not rely on any ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, Rect>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `rect` under `id`. A later insert for the same identifier
    /// replaces the earlier one; the replaced rectangle is returned.
    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) -> Option<Rect> {
        let id = id.into();
        let previous = self.entries.insert(id.clone(), rect);
        if let Some(prev) = &previous {
            debug!("{id}: replacing {prev:?} with {rect:?}");
        }
        previous
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.entries.iter().map(|(id, rect)| (id.as_str(), rect))
    }

    /// Writes the mapping as a single line of JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(Error::Stream)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl<S: Into<String>> FromIterator<(S, Rect)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (S, Rect)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (id, rect) in iter {
            mapping.insert(id, rect);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_insert_wins() {
        let mut mapping = Mapping::new();
        assert_eq!(mapping.insert("dup", Rect::new(0, 0, 4, 4)), None);
        assert_eq!(
            mapping.insert("dup", Rect::new(6, 0, 2, 2)),
            Some(Rect::new(0, 0, 4, 4))
        );
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("dup"), Some(&Rect::new(6, 0, 2, 2)));
    }

    #[test]
    fn json_document_shape() {
        let mapping: Mapping = [
            ("icons/b.png", Rect::new(17, 0, 10, 20)),
            ("icons/a.png", Rect::new(0, 0, 15, 5)),
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        mapping.write_json(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                r#"{"icons/a.png":{"x":0,"y":0,"w":15,"h":5},"#,
                r#""icons/b.png":{"x":17,"y":0,"w":10,"h":20}}"#,
                "\n"
            )
        );
    }

    #[test]
    fn empty_mapping_is_an_empty_object() {
        assert_eq!(Mapping::new().to_json().unwrap(), "{}");
        assert!(Mapping::from_json("{}").unwrap().is_empty());
    }
}
