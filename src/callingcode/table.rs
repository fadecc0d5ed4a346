// Copyright (C) 2025 The rphonefield Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;

use log::warn;

use crate::callingcode::errors::TableError;
use crate::generated::territories::TERRITORY_DATA;

/// One territory of the country selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    /// Human-readable territory name, as shown in the selector list.
    pub display_name: String,
    /// The calling code as a digit string. NOT unique across entries:
    /// several territories share "1" and "7"; table order breaks ties.
    pub calling_code: String,
    /// ISO 3166-1 alpha-2 code (plus a few picker conventions such as XK).
    /// Unique across the table.
    pub iso_code: String,
    /// Subdivision part of the calling code some pickers display separately
    /// (e.g. "18" of "35818" for the Åland Islands).
    pub display_subdivision_code: Option<String>,
}

/// Immutable registry of territories and their calling codes, built once
/// from locale data at startup and read-only thereafter.
///
/// Entry order is significant: it is the selector display order and the
/// tie-break order when several territories carry the same calling code.
pub struct CallingCodeTable {
    entries: Vec<CountryEntry>,
    iso_to_index: HashMap<String, usize>,
    /// Exact calling code -> entry indices in table order. Backs the
    /// resolver's full-table exact-match lookups.
    code_to_indices: HashMap<String, Vec<usize>>,
}

impl CallingCodeTable {
    /// Builds the table from the compiled-in territory registry.
    pub fn from_embedded() -> Result<Self, TableError> {
        Self::from_locale_data(TERRITORY_DATA)
    }

    /// Parses `ISO;display name;calling code[;subdivision]` rows. Blank
    /// lines are ignored. Any malformed row fails the whole construction;
    /// this is a startup-time configuration error, not a runtime condition.
    pub fn from_locale_data(data: &str) -> Result<Self, TableError> {
        let mut entries = Vec::new();
        let mut iso_to_index = HashMap::new();
        let mut code_to_indices: HashMap<String, Vec<usize>> = HashMap::new();

        for (line_index, row) in data.lines().enumerate() {
            let line = line_index + 1;
            if row.trim().is_empty() {
                continue;
            }
            let mut fields = row.split(';');
            let (iso, name, code) = match (fields.next(), fields.next(), fields.next()) {
                (Some(iso), Some(name), Some(code))
                    if !iso.is_empty() && !name.is_empty() && !code.is_empty() =>
                {
                    (iso, name, code)
                }
                _ => {
                    return Err(TableError::MalformedRow {
                        line,
                        row: row.to_owned(),
                    });
                }
            };
            let subdivision = fields.next().filter(|s| !s.is_empty());
            if fields.next().is_some() {
                return Err(TableError::MalformedRow {
                    line,
                    row: row.to_owned(),
                });
            }
            if !code.chars().all(|c| c.is_ascii_digit()) {
                return Err(TableError::NonDigitCallingCode {
                    line,
                    iso: iso.to_owned(),
                });
            }

            let index = entries.len();
            if iso_to_index.insert(iso.to_owned(), index).is_some() {
                return Err(TableError::DuplicateIso {
                    line,
                    iso: iso.to_owned(),
                });
            }
            code_to_indices.entry(code.to_owned()).or_default().push(index);
            entries.push(CountryEntry {
                display_name: name.to_owned(),
                calling_code: code.to_owned(),
                iso_code: iso.to_owned(),
                display_subdivision_code: subdivision.map(str::to_owned),
            });
        }

        if entries.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self {
            entries,
            iso_to_index,
            code_to_indices,
        })
    }

    /// The full ordered entry list.
    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> &CountryEntry {
        &self.entries[index]
    }

    pub fn entry_for_iso(&self, iso_code: &str) -> Option<&CountryEntry> {
        self.iso_to_index
            .get(iso_code)
            .map(|&index| &self.entries[index])
            .or_else(|| {
                warn!("Invalid or unknown ISO code provided: {}", iso_code);
                None
            })
    }

    /// Indices of every entry whose calling code equals `code` exactly, in
    /// table order. Empty for unknown codes.
    pub fn indices_for_code(&self, code: &str) -> &[usize] {
        self.code_to_indices
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use crate::callingcode::errors::TableError;
    use crate::callingcode::table::CallingCodeTable;
    use crate::i18n::RegionCode;

    #[test]
    fn builds_from_embedded_registry() {
        let table = CallingCodeTable::from_embedded().expect("embedded registry should be valid");
        assert!(table.len() > 200);

        let finland = table.entry_for_iso(RegionCode::fi()).unwrap();
        assert_eq!(finland.calling_code, "358");
        assert_eq!(finland.display_subdivision_code, None);

        let aland = table.entry_for_iso(RegionCode::ax()).unwrap();
        assert_eq!(aland.calling_code, "35818");
        assert_eq!(aland.display_subdivision_code.as_deref(), Some("18"));

        assert!(table.entry_for_iso(RegionCode::get_unknown()).is_none());
    }

    #[test]
    fn calling_codes_are_shared_and_ordered() {
        let table = CallingCodeTable::from_embedded().unwrap();
        let nanp = table.indices_for_code("1");
        assert_eq!(nanp.len(), 2);
        // Table order is the tie-break order.
        assert_eq!(table.entry(nanp[0]).iso_code, RegionCode::ca());
        assert_eq!(table.entry(nanp[1]).iso_code, RegionCode::us());

        let seven = table.indices_for_code("7");
        assert_eq!(table.entry(seven[0]).iso_code, RegionCode::kz());
        assert_eq!(table.entry(seven[1]).iso_code, RegionCode::ru());
    }

    #[test]
    fn rejects_empty_registry() {
        assert!(matches!(
            CallingCodeTable::from_locale_data("\n\n"),
            Err(TableError::Empty)
        ));
    }

    #[test]
    fn rejects_bad_registry_data() {
        assert!(matches!(
            CallingCodeTable::from_locale_data("FI;Finland"),
            Err(TableError::MalformedRow { line: 1, .. })
        ));
        assert!(matches!(
            CallingCodeTable::from_locale_data("FI;Finland;+358"),
            Err(TableError::NonDigitCallingCode { line: 1, .. })
        ));
        assert!(matches!(
            CallingCodeTable::from_locale_data("FI;Finland;358\nFI;Suomi;358"),
            Err(TableError::DuplicateIso { line: 2, .. })
        ));
        assert!(matches!(
            CallingCodeTable::from_locale_data("FI;Finland;358;18;extra"),
            Err(TableError::MalformedRow { line: 1, .. })
        ));
    }
}
