//! # Validation Module
//!
//! Turns raw text from the item form into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Input Is Checked                             │
//! │                                                                         │
//! │  Item form (add / edit)                                                 │
//! │  ├── name  : trimmed, must not be empty                                │
//! │  ├── cost  : required, must parse as a number, must be >= 0            │
//! │  ├── wears : optional, blank or unparseable → 0, negative rejected     │
//! │  └── category / image URL : trimmed, blank → none, never checked       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  NewItem / ItemPatch ──► ItemStore (accepts anything it is given)      │
//! │                                                                         │
//! │  Wear box in the table                                                  │
//! │  └── parse_wears_input: unparseable → 0, negative → ignored            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing beyond these rules is enforced: no length limits, no URL checks.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{ItemPatch, NewItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Item Form
// =============================================================================

/// Raw values from the add/edit dialog, exactly as typed.
///
/// Every field is text; parsing happens in [`validate_item_form`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub cost: String,

    /// Absent on older frontends; treated as "0".
    pub wears: Option<String>,

    pub category: Option<String>,

    pub image_url: Option<String>,
}

/// Validates an add-form submission.
///
/// ## Example
/// ```rust
/// use wardrobe_core::validation::{validate_item_form, ItemForm};
///
/// let form = ItemForm {
///     name: "  Wool Coat ".to_string(),
///     cost: "249.99".to_string(),
///     ..Default::default()
/// };
/// let item = validate_item_form(&form).unwrap();
/// assert_eq!(item.name, "Wool Coat");
/// assert_eq!(item.cost_cents, 24_999);
/// assert_eq!(item.wears, 0);
/// ```
pub fn validate_item_form(form: &ItemForm) -> ValidationResult<NewItem> {
    Ok(NewItem {
        name: validate_item_name(&form.name)?,
        cost_cents: validate_cost(&form.cost)?.cents(),
        wears: parse_form_wears(form.wears.as_deref())?,
        category: form.category.as_deref().and_then(non_blank),
        image_url: form.image_url.as_deref().and_then(non_blank),
    })
}

/// Validates an edit-form submission into a patch.
///
/// Name, cost and wears are always overwritten. Category and image URL are
/// only touched when the form carries them; a blank value clears them.
pub fn validate_edit_form(form: &ItemForm) -> ValidationResult<ItemPatch> {
    let mut patch = ItemPatch::from(validate_item_form(form)?);
    if form.category.is_none() {
        patch.category = None;
    }
    if form.image_url.is_none() {
        patch.image_url = None;
    }
    Ok(patch)
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    non_blank(name).ok_or_else(|| ValidationError::Required {
        field: "name".to_string(),
    })
}

/// Validates the cost field.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a decimal number (see [`Money::parse_decimal`])
/// - Must be non-negative; zero is allowed (gifts)
pub fn validate_cost(cost: &str) -> ValidationResult<Money> {
    if cost.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "cost".to_string(),
        });
    }

    let money = Money::parse_decimal(cost).ok_or_else(|| ValidationError::InvalidFormat {
        field: "cost".to_string(),
        reason: "must be a number".to_string(),
    })?;

    if money.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(money)
}

/// Reads the wears field of the form.
///
/// Blank or unparseable text means zero. A negative number is an error,
/// as is a count too large to store.
pub fn parse_form_wears(wears: Option<&str>) -> ValidationResult<u32> {
    let out_of_range = || ValidationError::OutOfRange {
        field: "wears".to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    };

    match wears.and_then(leading_count) {
        None => Ok(0),
        Some(LeadingCount::Negative) => Err(out_of_range()),
        Some(LeadingCount::Count(n)) => u32::try_from(n).map_err(|_| out_of_range()),
    }
}

/// Reads text typed directly into an item's wear box.
///
/// Returns the wear count to apply, or `None` when the change should be
/// ignored.
///
/// ```text
/// "12"  → Some(12)     "0" → Some(0)      "-3" → None
/// "abc" → Some(0)      ""  → Some(0)      "3.5" → Some(3)
/// ```
///
/// Counts too large to store clamp to `u32::MAX`.
pub fn parse_wears_input(input: &str) -> Option<u32> {
    match leading_count(input) {
        None => Some(0),
        Some(LeadingCount::Negative) => None,
        Some(LeadingCount::Count(n)) => Some(u32::try_from(n).unwrap_or(u32::MAX)),
    }
}

/// Integer prefix of a wear field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeadingCount {
    /// A minus sign followed by a nonzero number, of any magnitude
    Negative,
    /// Saturates at `u64::MAX`
    Count(u64),
}

/// Reads an optionally signed run of digits at the start of `text`,
/// ignoring whatever follows it (`"3.5"` reads as 3).
///
/// `None` when the text does not start with a digit after the sign.
fn leading_count(text: &str) -> Option<LeadingCount> {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: Vec<u64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| u64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let count = digits
        .into_iter()
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(d));

    if negative && count > 0 {
        Some(LeadingCount::Negative)
    } else {
        Some(LeadingCount::Count(count))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, cost: &str, wears: Option<&str>) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            cost: cost.to_string(),
            wears: wears.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_item_form() {
        let item = validate_item_form(&form("Denim Jeans", "80", Some("40"))).unwrap();
        assert_eq!(item.name, "Denim Jeans");
        assert_eq!(item.cost_cents, 8_000);
        assert_eq!(item.wears, 40);
        assert_eq!(item.category, None);
    }

    #[test]
    fn test_name_required() {
        let err = validate_item_form(&form("   ", "80", None)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_cost_required() {
        let err = validate_item_form(&form("Scarf", "", None)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "cost".to_string()
            }
        );
    }

    #[test]
    fn test_cost_must_be_numeric() {
        let err = validate_cost("twelve").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_cost_must_not_be_negative() {
        let err = validate_cost("-5").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert_eq!(validate_cost("0"), Ok(Money::zero()));
    }

    #[test]
    fn test_form_wears_defaults() {
        assert_eq!(parse_form_wears(None), Ok(0));
        assert_eq!(parse_form_wears(Some("")), Ok(0));
        assert_eq!(parse_form_wears(Some("lots")), Ok(0));
        assert_eq!(parse_form_wears(Some(" 7 ")), Ok(7));
        assert!(parse_form_wears(Some("-1")).is_err());
        assert!(parse_form_wears(Some("5000000000")).is_err());
    }

    #[test]
    fn test_form_wears_beyond_i64() {
        assert!(matches!(
            parse_form_wears(Some("-99999999999999999999")),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_form_wears(Some("99999999999999999999")),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_form_wears_reads_integer_prefix() {
        assert_eq!(parse_form_wears(Some("3.5")), Ok(3));
        assert_eq!(parse_form_wears(Some("12 times")), Ok(12));
        assert_eq!(parse_form_wears(Some("-0")), Ok(0));
    }

    #[test]
    fn test_parse_wears_input_guard() {
        assert_eq!(parse_wears_input("12"), Some(12));
        assert_eq!(parse_wears_input("0"), Some(0));
        assert_eq!(parse_wears_input("-3"), None);
        assert_eq!(parse_wears_input("abc"), Some(0));
        assert_eq!(parse_wears_input(""), Some(0));
    }

    #[test]
    fn test_parse_wears_input_beyond_i64() {
        assert_eq!(parse_wears_input("-99999999999999999999"), None);
        assert_eq!(parse_wears_input("99999999999999999999"), Some(u32::MAX));
        assert_eq!(parse_wears_input("5000000000"), Some(u32::MAX));
    }

    #[test]
    fn test_parse_wears_input_integer_prefix() {
        assert_eq!(parse_wears_input("3.5"), Some(3));
        assert_eq!(parse_wears_input("+4"), Some(4));
        assert_eq!(parse_wears_input("-0"), Some(0));
        assert_eq!(parse_wears_input("-"), Some(0));
        assert_eq!(parse_wears_input("-2.5"), None);
    }

    #[test]
    fn test_metadata_trimmed_and_blank_dropped() {
        let mut f = form("Tee", "15", None);
        f.category = Some("  Tops ".to_string());
        f.image_url = Some("   ".to_string());

        let item = validate_item_form(&f).unwrap();

        assert_eq!(item.category.as_deref(), Some("Tops"));
        assert_eq!(item.image_url, None);
    }

    #[test]
    fn test_edit_form_leaves_absent_metadata_alone() {
        let patch = validate_edit_form(&form("Tee", "15", Some("3"))).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Tee"));
        assert_eq!(patch.cost_cents, Some(1_500));
        assert_eq!(patch.wears, Some(3));
        assert_eq!(patch.category, None);
        assert_eq!(patch.image_url, None);
    }

    #[test]
    fn test_edit_form_blank_metadata_clears() {
        let mut f = form("Tee", "15", None);
        f.category = Some(String::new());

        let patch = validate_edit_form(&f).unwrap();

        assert_eq!(patch.category, Some(None));
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let f: ItemForm = serde_json::from_str(r#"{"name":"Cap"}"#).unwrap();
        assert_eq!(f.name, "Cap");
        assert_eq!(f.cost, "");
        assert_eq!(f.wears, None);
    }
}
