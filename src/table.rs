//! The parsed output table.
//!
//! [`RecordTable`] collects the records one parse produced, together with the
//! derived participant list and the media tally. It is build-once: a new
//! parse builds an entirely new table. The only mutation offered afterwards
//! is alias customization, which renames participants consistently across
//! records, the tally, and the participant list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};
use crate::record::Record;

/// The result of parsing one chat export.
///
/// # Example
///
/// ```
/// use chatlens::{ChatParser, Messenger};
///
/// let export = "2019-07-27, 14:43 - Amir Abushanab: well\n\
///               2019-07-27, 14:44 - Laila K: you see";
/// let table = ChatParser::new().parse(export, Messenger::WhatsApp)?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.participants(), ["Amir", "Laila"]);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    records: Vec<Record>,
    participants: Vec<String>,
    media_counts: HashMap<String, u64>,
}

impl RecordTable {
    /// Builds a table from emitted records and the media tally collected in
    /// the same pass.
    ///
    /// Participants are derived here: unique senders in order of first
    /// appearance, not alphabetical and not by frequency.
    pub fn new(records: Vec<Record>, media_counts: HashMap<String, u64>) -> Self {
        let participants = first_appearance_order(&records);
        Self {
            records,
            participants,
            media_counts,
        }
    }

    /// Returns the records in emission order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the unique senders in order of first appearance.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Returns the per-sender count of media-placeholder lines.
    ///
    /// Media lines never become records, so senders who only ever sent media
    /// appear here and not in [`participants`](Self::participants).
    pub fn media_counts(&self) -> &HashMap<String, u64> {
        &self.media_counts
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Renames participants according to an explicit mapping.
    ///
    /// Every participant must have an alias; media-only senders keep their
    /// original name unless the mapping covers them too. The participant
    /// list is re-derived afterwards, so two participants aliased to the
    /// same name merge into one.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::EmptyTable`] if nothing was parsed, and
    /// [`ChatlensError::MissingAlias`] if a participant has no alias.
    pub fn apply_aliases(&mut self, aliases: &HashMap<String, String>) -> Result<()> {
        if self.records.is_empty() {
            return Err(ChatlensError::EmptyTable);
        }
        if let Some(missing) = self
            .participants
            .iter()
            .find(|name| !aliases.contains_key(*name))
        {
            return Err(ChatlensError::MissingAlias {
                participant: missing.clone(),
            });
        }

        for record in &mut self.records {
            if let Some(alias) = aliases.get(&record.sender) {
                record.sender.clone_from(alias);
            }
        }
        let renamed: HashMap<String, u64> = self
            .media_counts
            .drain()
            .map(|(name, count)| {
                let renamed = aliases.get(&name).cloned().unwrap_or(name);
                (renamed, count)
            })
            .collect();
        self.media_counts = renamed;
        self.participants = first_appearance_order(&self.records);
        Ok(())
    }

    /// Renames participants positionally: one alias per participant, in
    /// first-appearance order.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::AliasMismatch`] if the list length differs from the
    /// participant count, plus everything [`apply_aliases`](Self::apply_aliases)
    /// can return.
    pub fn apply_alias_list<S: AsRef<str>>(&mut self, aliases: &[S]) -> Result<()> {
        if aliases.len() != self.participants.len() {
            return Err(ChatlensError::AliasMismatch {
                expected: self.participants.len(),
                actual: aliases.len(),
            });
        }
        let mapping: HashMap<String, String> = self
            .participants
            .iter()
            .zip(aliases)
            .map(|(name, alias)| (name.clone(), alias.as_ref().to_owned()))
            .collect();
        self.apply_aliases(&mapping)
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn first_appearance_order(records: &[Record]) -> Vec<String> {
    let mut participants: Vec<String> = Vec::new();
    for record in records {
        if !participants.iter().any(|name| *name == record.sender) {
            participants.push(record.sender.clone());
        }
    }
    participants
}
