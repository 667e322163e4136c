use chrono::NaiveDateTime;
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::schema::entries;

/// A dictionary entry as stored in the `entries` table
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Entry {
    pub id: i32,
    pub word: String,
    pub language: String,
    pub definition: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Entry {
    /// The record as it would look after `changes`, checked before anything is written.
    pub fn with_changes(&self, changes: &EntryChanges) -> NewEntry {
        NewEntry {
            word: changes.word.clone().unwrap_or_else(|| self.word.clone()),
            language: changes.language.clone().unwrap_or_else(|| self.language.clone()),
            definition: changes
                .definition
                .clone()
                .unwrap_or_else(|| self.definition.clone()),
        }
    }
}

/// Field values for a record that has not been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct NewEntry {
    #[validate(custom(function = "not_blank", message = "Word can't be blank"))]
    pub word: String,
    #[validate(custom(function = "not_blank", message = "Language can't be blank"))]
    pub language: String,
    #[validate(custom(function = "not_blank", message = "Definition can't be blank"))]
    pub definition: String,
}

/// Partial update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryChanges {
    pub word: Option<String>,
    pub language: Option<String>,
    pub definition: Option<String>,
}

/// Allow-listed body of the `entry` envelope
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryParams {
    pub word: Option<String>,
    pub language: Option<String>,
    pub definition: Option<String>,
}

impl EntryParams {
    /// True when none of the allow-listed fields were sent.
    pub fn is_empty(&self) -> bool {
        self.word.is_none() && self.language.is_none() && self.definition.is_none()
    }

    pub fn into_new_entry(self) -> NewEntry {
        NewEntry {
            word: self.word.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
            definition: self.definition.unwrap_or_default(),
        }
    }

    pub fn into_changes(self) -> EntryChanges {
        EntryChanges {
            word: self.word,
            language: self.language,
            definition: self.definition,
        }
    }
}

/// JSON request body: `{"entry": {...}}`
#[derive(Debug, Deserialize)]
pub struct EntryEnvelope {
    pub entry: Option<EntryParams>,
}

/// Form request body as posted by the HTML views
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryForm {
    #[serde(rename = "_method")]
    pub method: Option<String>,
    #[serde(rename = "entry[word]")]
    pub word: Option<String>,
    #[serde(rename = "entry[language]")]
    pub language: Option<String>,
    #[serde(rename = "entry[definition]")]
    pub definition: Option<String>,
}

impl EntryForm {
    /// The `entry[...]` fields, or `None` when the form carries none of them.
    pub fn params(self) -> Option<EntryParams> {
        let params = EntryParams {
            word: self.word,
            language: self.language,
            definition: self.definition,
        };
        (!params.is_empty()).then_some(params)
    }
}

#[derive(Insertable)]
#[diesel(table_name = entries)]
pub struct NewEntryRow<'a> {
    pub word: &'a str,
    pub language: &'a str,
    pub definition: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = entries)]
pub struct EntryChangeset<'a> {
    pub word: Option<&'a str>,
    pub language: Option<&'a str>,
    pub definition: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
