//! Form Validation
//!
//! Schema for the dream form, checked with `validator`, and the flattened
//! field-path → message map the form renders inline.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::{BudgetItemId, ImageId};

/// Longest accepted summary, in characters
pub const SUMMARY_MAX_CHARS: usize = 160;

const BUDGET_ITEMS: &str = "budget_items";
const IMAGES: &str = "images";

// ========================
// Schema
// ========================

#[derive(Debug, Validate)]
pub(super) struct DreamSchema {
    #[validate(custom(function = "required"))]
    pub title: String,
    #[validate(custom(function = "required"))]
    pub slug: String,
    #[validate(custom(function = "summary"))]
    pub summary: String,
    #[validate(custom(function = "optional_positive_integer"))]
    pub min_goal: String,
    #[validate(custom(function = "optional_positive_integer"))]
    pub max_goal: String,
    #[validate(nested)]
    pub images: Vec<ImageSchema>,
    #[validate(nested)]
    pub budget_items: Vec<BudgetItemSchema>,
}

#[derive(Debug, Validate)]
pub(super) struct ImageSchema {
    #[validate(url(message = "Must be a valid URL"))]
    pub small: String,
    #[validate(url(message = "Must be a valid URL"))]
    pub large: String,
}

#[derive(Debug, Validate)]
pub(super) struct BudgetItemSchema {
    #[validate(custom(function = "required"))]
    pub description: String,
    #[validate(custom(function = "positive_integer"))]
    pub min: String,
    #[validate(custom(function = "optional_positive_integer"))]
    pub max: String,
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Required"));
    }
    Ok(())
}

fn summary(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if value.chars().count() > SUMMARY_MAX_CHARS {
        return Err(error("length", "Must be at most 160 characters"));
    }
    Ok(())
}

/// Largest amount the server accepts (GraphQL `Int` is 32-bit)
pub const MAX_AMOUNT: i64 = i32::MAX as i64;

/// Parse a positive whole number within `MAX_AMOUNT`; `None` for anything else
pub(super) fn parse_positive(value: &str) -> Option<i64> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|n| *n > 0)
        .map(i64::from)
}

fn positive_integer(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if parse_positive(value).is_some() {
        return Ok(());
    }
    let digits = value.trim();
    if digits.bytes().all(|b| b.is_ascii_digit()) && digits.trim_start_matches('0').len() >= 10 {
        return Err(error("range", "Must be at most 2147483647"));
    }
    Err(error("positive_integer", "Must be a positive whole number"))
}

fn optional_positive_integer(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    positive_integer(value)
}

// ========================
// Errors
// ========================

/// Inline error messages keyed by field path.
///
/// Paths are `title`, `images.<id>.small`, `budget_items.<id>.min`, ...
/// List rows are keyed by their stable id rather than their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.fields.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Keep the first message reported for a path
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(path.into()).or_insert_with(|| message.into());
    }

    /// Flatten `validator` output, renaming list indices to row ids
    pub(super) fn from_validation(
        errors: &ValidationErrors,
        budget_ids: &[BudgetItemId],
        image_ids: &[ImageId],
    ) -> Self {
        let rows = RowIds {
            budget: budget_ids.iter().map(ToString::to_string).collect(),
            images: image_ids.iter().map(ToString::to_string).collect(),
        };
        let mut form_errors = Self::default();
        form_errors.collect("", errors, &rows);
        form_errors
    }

    fn collect(&mut self, prefix: &str, errors: &ValidationErrors, rows: &RowIds) {
        for (field, kind) in errors.errors() {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{}.{}", prefix, field)
            };
            match kind {
                ValidationErrorsKind::Field(list) => {
                    if let Some(first) = list.first() {
                        self.insert(path, message_of(first));
                    }
                }
                ValidationErrorsKind::Struct(inner) => self.collect(&path, inner, rows),
                ValidationErrorsKind::List(list) => {
                    for (index, inner) in list {
                        let row = rows.key(&path, *index);
                        self.collect(&format!("{}.{}", path, row), inner, rows);
                    }
                }
            }
        }
    }
}

/// Stable row ids of the form's lists, in display order
struct RowIds {
    budget: Vec<String>,
    images: Vec<String>,
}

impl RowIds {
    fn key(&self, path: &str, index: usize) -> String {
        let ids = match path {
            BUDGET_ITEMS => &self.budget,
            IMAGES => &self.images,
            _ => return index.to_string(),
        };
        ids.get(index).cloned().unwrap_or_else(|| index.to_string())
    }
}

fn message_of(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Invalid value ({})", error.code),
    }
}

/// Path of a budget row field
pub fn budget_field(id: BudgetItemId, field: &str) -> String {
    format!("{}.{}.{}", BUDGET_ITEMS, id, field)
}

/// Path of an image field
pub fn image_field(id: ImageId, field: &str) -> String {
    format!("{}.{}.{}", IMAGES, id, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> DreamSchema {
        DreamSchema {
            title: "Sauna".into(),
            slug: "sauna".into(),
            summary: "A hot box".into(),
            min_goal: String::new(),
            max_goal: String::new(),
            images: vec![],
            budget_items: vec![],
        }
    }

    #[test]
    fn test_valid_schema_passes() {
        assert!(schema().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut s = schema();
        s.title = "   ".into();
        s.slug = String::new();
        let errors = FormErrors::from_validation(&s.validate().unwrap_err(), &[], &[]);

        assert_eq!(errors.get("title"), Some("Required"));
        assert_eq!(errors.get("slug"), Some("Required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_summary_length_counts_characters() {
        let mut s = schema();
        s.summary = "é".repeat(SUMMARY_MAX_CHARS);
        assert!(s.validate().is_ok());

        s.summary.push('x');
        let errors = FormErrors::from_validation(&s.validate().unwrap_err(), &[], &[]);
        assert_eq!(errors.get("summary"), Some("Must be at most 160 characters"));
    }

    #[test]
    fn test_image_urls_are_checked() {
        let mut s = schema();
        s.images = vec![
            ImageSchema { small: "https://cdn/s.jpg".into(), large: "https://cdn/l.jpg".into() },
            ImageSchema { small: "not a url".into(), large: "https://cdn/l.jpg".into() },
        ];
        let ids = [ImageId(4), ImageId(8)];
        let errors = FormErrors::from_validation(&s.validate().unwrap_err(), &[], &ids);

        assert_eq!(errors.get(&image_field(ImageId(8), "small")), Some("Must be a valid URL"));
        assert!(!errors.contains(&image_field(ImageId(4), "small")));
    }

    #[test]
    fn test_budget_rows_keyed_by_id() {
        let mut s = schema();
        s.budget_items = vec![
            BudgetItemSchema { description: "Wood".into(), min: "10".into(), max: String::new() },
            BudgetItemSchema { description: String::new(), min: "0".into(), max: "-4".into() },
        ];
        let ids = [BudgetItemId(7), BudgetItemId(9)];
        let errors = FormErrors::from_validation(&s.validate().unwrap_err(), &ids, &[]);

        assert_eq!(errors.get(&budget_field(BudgetItemId(9), "description")), Some("Required"));
        assert_eq!(
            errors.get(&budget_field(BudgetItemId(9), "min")),
            Some("Must be a positive whole number")
        );
        assert!(errors.contains(&budget_field(BudgetItemId(9), "max")));
        assert!(errors.paths().all(|p| !p.starts_with("budget_items.7")));
    }

    #[test]
    fn test_goals_are_optional_but_positive() {
        let mut s = schema();
        s.min_goal = "abc".into();
        s.max_goal = "500".into();
        let errors = FormErrors::from_validation(&s.validate().unwrap_err(), &[], &[]);

        assert!(errors.contains("min_goal"));
        assert!(!errors.contains("max_goal"));
    }

    #[test]
    fn test_amounts_bounded_to_graphql_int() {
        let mut s = schema();
        s.min_goal = MAX_AMOUNT.to_string();
        assert!(s.validate().is_ok());

        s.min_goal = "2147483648".into();
        s.max_goal = "99999999999999999999".into();
        s.budget_items = vec![BudgetItemSchema {
            description: "Dome".into(),
            min: "3000000000".into(),
            max: String::new(),
        }];
        let errors = FormErrors::from_validation(&s.validate().unwrap_err(), &[BudgetItemId(0)], &[]);

        assert_eq!(errors.get("min_goal"), Some("Must be at most 2147483647"));
        assert_eq!(errors.get("max_goal"), Some("Must be at most 2147483647"));
        assert_eq!(errors.get(&budget_field(BudgetItemId(0), "min")), Some("Must be at most 2147483647"));
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(" 42 "), Some(42));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("1.5"), None);
        assert_eq!(parse_positive(""), None);
        assert_eq!(parse_positive("2147483647"), Some(MAX_AMOUNT));
        assert_eq!(parse_positive("2147483648"), None);
    }
}
