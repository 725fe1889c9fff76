use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::constants::{KEY_BODY, KEY_COMBINATION, KEY_FOODS, KEY_NAME_LIST, KEY_OPTIONS};
use crate::document::name_lists;
use crate::error::Result;
use crate::models::{BodyAttributes, FoodEntry, FoodLog, Profile};

/// Calculator options stored under `options`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentOptions {
    #[serde(default)]
    pub show_status: bool,
}

/// One top-level key of the document and its value.
#[derive(Debug, Clone, PartialEq)]
enum Section {
    Foods(Vec<FoodEntry>),
    Body(BodyAttributes),
    NameList(&'static [&'static str]),
    Combination(Vec<usize>),
    Options(DocumentOptions),
}

impl Section {
    fn key(&self) -> &'static str {
        match self {
            Section::Foods(_) => KEY_FOODS,
            Section::Body(_) => KEY_BODY,
            Section::NameList(_) => KEY_NAME_LIST,
            Section::Combination(_) => KEY_COMBINATION,
            Section::Options(_) => KEY_OPTIONS,
        }
    }
}

/// Composes a food log, a profile and an optional label list into one
/// JSON object.
///
/// Keys are written in attachment order. Attaching a key again replaces
/// its value in place. Attached data is a snapshot: later changes to the
/// source `FoodLog` or `Profile` are not reflected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentBuilder {
    sections: Vec<Section>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_foods(&mut self, log: &FoodLog) -> &mut Self {
        self.insert(Section::Foods(log.entries().to_vec()))
    }

    pub fn attach_body(&mut self, profile: &Profile) -> &mut Self {
        self.insert(Section::Body(profile.attributes().clone()))
    }

    /// Attach a named label list. Unknown names leave the document unchanged.
    pub fn attach_name_list(&mut self, name: &str) -> &mut Self {
        match name_lists::lookup(name) {
            Some(labels) => self.insert(Section::NameList(labels)),
            None => {
                tracing::debug!(name, "unrecognized name list ignored");
                self
            }
        }
    }

    /// Entry indices the calculator evaluates together.
    pub fn attach_combination(&mut self, indices: impl Into<Vec<usize>>) -> &mut Self {
        self.insert(Section::Combination(indices.into()))
    }

    pub fn set_show_status(&mut self, show_status: bool) -> &mut Self {
        self.insert(Section::Options(DocumentOptions { show_status }))
    }

    /// Top-level keys in output order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::key).collect()
    }

    /// Compact JSON text of the document.
    pub fn serialize(&self) -> Result<String> {
        self.encode(false)
    }

    pub fn serialize_pretty(&self) -> Result<String> {
        self.encode(true)
    }

    /// Write the compact JSON text to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let text = self.encode(false)?;
        write_text(path.as_ref(), &text)?;
        Ok(self)
    }

    pub fn write_pretty<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let text = self.encode(true)?;
        write_text(path.as_ref(), &text)?;
        Ok(self)
    }

    fn encode(&self, pretty: bool) -> Result<String> {
        let sections = OrderedSections(&self.sections);
        let text = if pretty {
            serde_json::to_string_pretty(&sections)?
        } else {
            serde_json::to_string(&sections)?
        };
        Ok(text)
    }

    fn insert(&mut self, section: Section) -> &mut Self {
        let key = section.key();
        match self.sections.iter_mut().find(|s| s.key() == key) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
        self
    }
}

// The file handle is dropped when this returns, on success or error.
fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    tracing::info!(path = %path.display(), bytes = text.len(), "document written");
    Ok(())
}

/// Serializes sections as one JSON object, keys in attachment order.
struct OrderedSections<'a>(&'a [Section]);

impl Serialize for OrderedSections<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for section in self.0 {
            match section {
                Section::Foods(foods) => map.serialize_entry(KEY_FOODS, foods)?,
                Section::Body(body) => map.serialize_entry(KEY_BODY, body)?,
                Section::NameList(labels) => map.serialize_entry(KEY_NAME_LIST, labels)?,
                Section::Combination(indices) => map.serialize_entry(KEY_COMBINATION, indices)?,
                Section::Options(options) => map.serialize_entry(KEY_OPTIONS, options)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> FoodLog {
        let mut log = FoodLog::new();
        log.append("04047").set_last_weight(200.0).unwrap();
        log
    }

    fn sample_profile() -> Profile {
        let mut profile = Profile::new();
        profile.set_age(19).set_gender("male");
        profile
    }

    #[test]
    fn test_keys_follow_attachment_order() {
        let mut doc = DocumentBuilder::new();
        doc.attach_name_list("摂取基準")
            .attach_foods(&sample_log())
            .attach_body(&sample_profile());
        assert_eq!(doc.keys(), vec!["name_list", "foods", "body"]);

        let json = doc.serialize().unwrap();
        let name_pos = json.find("\"name_list\"").unwrap();
        let foods_pos = json.find("\"foods\"").unwrap();
        let body_pos = json.find("\"body\"").unwrap();
        assert!(name_pos < foods_pos && foods_pos < body_pos);
    }

    #[test]
    fn test_reattach_replaces_in_place() {
        let mut doc = DocumentBuilder::new();
        doc.attach_foods(&FoodLog::new()).attach_body(&sample_profile());
        doc.attach_foods(&sample_log());

        assert_eq!(doc.keys(), vec!["foods", "body"]);
        assert_eq!(
            doc.serialize().unwrap(),
            r#"{"foods":[{"number":"04047","weight":200.0}],"body":{"age":19,"gender":"male"}}"#
        );
    }

    #[test]
    fn test_unknown_name_list_is_noop() {
        let mut doc = DocumentBuilder::new();
        doc.attach_foods(&sample_log());
        let before = doc.clone();

        doc.attach_name_list("intake");
        assert_eq!(doc, before);
    }

    #[test]
    fn test_attachment_is_a_snapshot() {
        let mut log = sample_log();
        let mut doc = DocumentBuilder::new();
        doc.attach_foods(&log);

        log.append("01088").set_last_weight(300.0).unwrap();
        assert_eq!(
            doc.serialize().unwrap(),
            r#"{"foods":[{"number":"04047","weight":200.0}]}"#
        );
    }

    #[test]
    fn test_labels_are_not_escaped() {
        let mut doc = DocumentBuilder::new();
        doc.attach_name_list("摂取基準");
        let json = doc.serialize().unwrap();
        assert!(json.contains("α-トコフェロール"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_combination_and_options() {
        let mut doc = DocumentBuilder::new();
        doc.attach_combination(vec![3, 4, 5]).set_show_status(true);
        assert_eq!(
            doc.serialize().unwrap(),
            r#"{"combination":[3,4,5],"options":{"show_status":true}}"#
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(DocumentBuilder::new().serialize().unwrap(), "{}");
    }

    #[test]
    fn test_write_at_end_of_attach_chain() {
        let dir = tempfile::tempdir().unwrap();
        let compact = dir.path().join("compact.json");
        let pretty = dir.path().join("pretty.json");

        let mut doc = DocumentBuilder::new();
        doc.attach_foods(&sample_log())
            .attach_body(&sample_profile())
            .write(&compact)
            .unwrap()
            .write_pretty(&pretty)
            .unwrap()
            .attach_name_list("摂取基準");

        let written = std::fs::read_to_string(&compact).unwrap();
        assert_eq!(
            written,
            r#"{"foods":[{"number":"04047","weight":200.0}],"body":{"age":19,"gender":"male"}}"#
        );
        assert!(std::fs::read_to_string(&pretty).unwrap().contains("\n  \"foods\""));
        assert_eq!(doc.keys(), vec!["foods", "body", "name_list"]);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let parsed: std::result::Result<DocumentOptions, _> =
            serde_json::from_str(r#"{"show_status": true, "verbose": true}"#);
        assert!(parsed.is_err());

        let parsed: DocumentOptions = serde_json::from_str("{}").unwrap();
        assert!(!parsed.show_status);
    }
}
