//! CSV export parsing and row validation
//!
//! The sheet is published as CSV with a header row. Columns are looked up by
//! name, so their order does not matter and unknown columns are ignored. Rows
//! that fail validation are dropped; the caller only ever sees valid records.

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::domain::{DietType, MenuRecord};

/// Why a data row was left out of the valid set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowRejection {
    #[error("missing id")]
    MissingId,

    #[error("missing name")]
    MissingName,

    #[error("missing category")]
    MissingCategory,

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("invalid type: {0:?}")]
    InvalidType(String),

    #[error("malformed row: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line in the export (the header is line 1)
    pub line: u64,
    pub reason: RowRejection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub records: Vec<MenuRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl ParseOutcome {
    pub fn into_records(self) -> Vec<MenuRecord> {
        self.records
    }
}

/// Header positions, matched on trimmed lowercase names
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();
        Self { index }
    }

    /// Trimmed cell value; missing column or short row reads as empty
    fn get<'r>(&self, row: &'r StringRecord, name: &str) -> &'r str {
        self.index
            .get(name)
            .and_then(|&i| row.get(i))
            .map(str::trim)
            .unwrap_or("")
    }
}

/// Parse an export into validated records.
pub fn parse_menu_csv(text: &str) -> ParseOutcome {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => Columns::new(headers),
        Err(e) => {
            debug!("Menu export has no readable header: {}", e);
            return ParseOutcome::default();
        }
    };

    let mut outcome = ParseOutcome::default();

    for (i, result) in reader.records().enumerate() {
        let line = match &result {
            Ok(row) => row.position().map(|p| p.line()).unwrap_or(i as u64 + 2),
            Err(e) => e.position().map(|p| p.line()).unwrap_or(i as u64 + 2),
        };

        let parsed = result
            .map_err(|e| RowRejection::Malformed(e.to_string()))
            .and_then(|row| parse_row(&columns, &row));

        match parsed {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                debug!("Dropping menu row at line {}: {}", line, reason);
                outcome.rejected.push(RejectedRow { line, reason });
            }
        }
    }

    debug!(
        "Parsed menu export: {} valid, {} rejected",
        outcome.records.len(),
        outcome.rejected.len()
    );
    outcome
}

fn parse_row(columns: &Columns, row: &StringRecord) -> Result<MenuRecord, RowRejection> {
    let id = columns.get(row, "id");
    let name = columns.get(row, "name");
    let category = columns.get(row, "category");

    if id.is_empty() {
        return Err(RowRejection::MissingId);
    }
    if name.is_empty() {
        return Err(RowRejection::MissingName);
    }
    if category.is_empty() {
        return Err(RowRejection::MissingCategory);
    }

    let price = parse_price(columns.get(row, "price"))?;

    let raw_type = columns.get(row, "type");
    let diet = raw_type
        .parse::<DietType>()
        .map_err(|_| RowRejection::InvalidType(raw_type.to_string()))?;

    Ok(MenuRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: columns.get(row, "description").to_string(),
        long_description: columns.get(row, "longdescription").to_string(),
        price,
        category: category.to_string(),
        diet,
        image: non_empty(columns.get(row, "image")),
        language: non_empty(columns.get(row, "language")),
    })
}

/// Prices must be finite, non-negative numbers; a blank cell is missing.
fn parse_price(raw: &str) -> Result<f64, RowRejection> {
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(RowRejection::InvalidPrice(raw.to_string())),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,description,price,category,type,image,longDescription,language";

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_single_valid_row() {
        let outcome = parse_menu_csv(&csv(&["1,Tea,Hot tea,20,Hot Coffee,veg,,,English"]));
        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.records.len(), 1);

        let tea = &outcome.records[0];
        assert_eq!(tea.id, "1");
        assert_eq!(tea.name, "Tea");
        assert_eq!(tea.description, "Hot tea");
        assert_eq!(tea.price, 20.0);
        assert_eq!(tea.category, "Hot Coffee");
        assert_eq!(tea.diet, DietType::Veg);
        assert_eq!(tea.image, None);
        assert_eq!(tea.long_description, "");
        assert_eq!(tea.language.as_deref(), Some("English"));
    }

    #[test]
    fn test_non_numeric_price_is_dropped() {
        let valid = parse_menu_csv(&csv(&[
            "1,Tea,,20,Hot Coffee,veg,,,English",
            "2,Latte,,40,Hot Coffee,veg,,,English",
        ]));
        let one_bad = parse_menu_csv(&csv(&[
            "1,Tea,,20,Hot Coffee,veg,,,English",
            "2,Latte,,abc,Hot Coffee,veg,,,English",
        ]));

        assert_eq!(valid.records.len(), 2);
        assert_eq!(one_bad.records.len(), valid.records.len() - 1);
        assert_eq!(
            one_bad.rejected,
            vec![RejectedRow {
                line: 3,
                reason: RowRejection::InvalidPrice("abc".into()),
            }]
        );
    }

    #[test]
    fn test_missing_price_and_negative_price_are_dropped() {
        let outcome = parse_menu_csv(&csv(&[
            "1,Tea,,,Hot Coffee,veg,,,English",
            "2,Tea,,-5,Hot Coffee,veg,,,English",
            "3,Tea,,NaN,Hot Coffee,veg,,,English",
        ]));
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.rejected.len(), 3);
    }

    #[test]
    fn test_required_fields() {
        let outcome = parse_menu_csv(&csv(&[
            ",Tea,,20,Hot Coffee,veg,,,English",
            "1,  ,,20,Hot Coffee,veg,,,English",
            "2,Tea,,20, ,veg,,,English",
        ]));
        assert!(outcome.records.is_empty());
        let reasons: Vec<_> = outcome.rejected.into_iter().map(|r| r.reason).collect();
        assert_eq!(
            reasons,
            vec![
                RowRejection::MissingId,
                RowRejection::MissingName,
                RowRejection::MissingCategory,
            ]
        );
    }

    #[test]
    fn test_type_is_trimmed_and_lowercased() {
        let outcome = parse_menu_csv(&csv(&[
            "1,Tea,,20,Hot Coffee, VEG ,,,English",
            "2,Wings,,120,Burger,Non-Veg,,,English",
            "3,Tofu,,90,Burger,vegan,,,English",
            "4,Soup,,90,Burger,,,,English",
        ]));
        let diets: Vec<_> = outcome.records.iter().map(|r| r.diet).collect();
        assert_eq!(diets, vec![DietType::Veg, DietType::NonVeg]);
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[0].reason, RowRejection::InvalidType("vegan".into()));
    }

    #[test]
    fn test_fields_are_trimmed_and_optional_fields_default() {
        let outcome = parse_menu_csv(&csv(&[
            "  7 ,  Cold Coffee  , Iced ,  60.5 , Cold Coffee ,veg,  https://img/x.png  , Long story ,  ",
        ]));
        let item = &outcome.records[0];
        assert_eq!(item.id, "7");
        assert_eq!(item.name, "Cold Coffee");
        assert_eq!(item.description, "Iced");
        assert_eq!(item.price, 60.5);
        assert_eq!(item.image.as_deref(), Some("https://img/x.png"));
        assert_eq!(item.long_description, "Long story");
        assert_eq!(item.language, None);
    }

    #[test]
    fn test_columns_by_name_and_quoted_commas() {
        let text = "language,type,category,price,name,id\n\
                    Hindi,veg,Burger,\"1,5\",x,1\n\
                    Hindi,veg,Burger,55,\"Aloo Tikki, Cheese\",2";
        let outcome = parse_menu_csv(text);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "Aloo Tikki, Cheese");
        assert_eq!(outcome.records[0].description, "");
        assert_eq!(outcome.rejected[0].reason, RowRejection::InvalidPrice("1,5".into()));
    }

    #[test]
    fn test_short_rows_and_blank_lines() {
        let outcome = parse_menu_csv(&csv(&["", "1,Tea,,20,Hot Coffee,veg", ""]));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].language, None);
    }

    #[test]
    fn test_duplicate_ids_pass_through_in_order() {
        let outcome = parse_menu_csv(&csv(&[
            "1,Tea,,20,Hot Coffee,veg,,,English",
            "1,Chai,,25,Hot Coffee,veg,,,English",
        ]));
        let names: Vec<_> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Chai"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_menu_csv("").records.is_empty());
        assert!(parse_menu_csv(HEADER).records.is_empty());
    }
}
