//! Contract record decoding
//!
//! The record arrives as a flat JSON object from whatever system collected
//! the contract data. Nothing here validates content: text fields take any
//! JSON scalar and are rendered verbatim, missing ones render empty.

use crate::error::InputError;
use crate::template::TemplateKind;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Field values for one contract
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContractInput {
    /// Template discriminant (`"campfire"` or anything else)
    #[serde(deserialize_with = "optional_text")]
    pub contract_type: Option<String>,
    /// Artist/vendor name
    #[serde(deserialize_with = "field_text")]
    pub contractor_name: String,
    /// Person signing, when not the vendor
    #[serde(deserialize_with = "field_text")]
    pub signer_name: String,
    /// Signer's relationship to the vendor
    #[serde(deserialize_with = "field_text")]
    pub relationship_to_vendor: String,
    /// Postal address
    #[serde(deserialize_with = "field_text")]
    pub address: String,
    /// Email address
    #[serde(deserialize_with = "field_text")]
    pub email: String,
    /// Vendor account reference
    #[serde(deserialize_with = "field_text")]
    pub vendor_account: String,
    /// Number of videos to deliver
    pub number_of_content: Option<ContentCount>,
    /// Delivery schedule text
    #[serde(deserialize_with = "field_text")]
    pub due_date: String,
    /// Price, without currency symbol
    #[serde(deserialize_with = "field_text")]
    pub amount: String,
    /// Agreement end date
    #[serde(deserialize_with = "field_text")]
    pub end_date: String,
}

impl ContractInput {
    /// Decode a record from JSON text
    ///
    /// # Errors
    /// `InputError::Malformed` if the text is not a JSON object of the
    /// expected shape
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a record from an already parsed JSON value
    ///
    /// # Errors
    /// `InputError::Malformed` if the value is not an object of the
    /// expected shape
    pub fn from_json_value(value: Value) -> Result<Self, InputError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Template selected by `contract_type`
    #[inline]
    #[must_use]
    pub fn template_kind(&self) -> TemplateKind {
        TemplateKind::from_tag(self.contract_type.as_deref())
    }
}

/// Raw `number_of_content` value as supplied
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentCount {
    /// JSON integer
    Integer(i64),
    /// JSON number with a fraction or exponent
    Float(f64),
    /// JSON string, parsed leniently
    Text(String),
}

impl ContentCount {
    /// Integer count, or `None` when the value counts as "not supplied"
    ///
    /// Zero and empty text are treated like an absent field. Fractions are
    /// truncated toward zero; a nonzero fraction such as `0.5` is a supplied
    /// count of zero, the same as the text `"0.5"`.
    ///
    /// # Errors
    /// `InputError::InvalidCount` for text that is not a number
    #[allow(clippy::cast_possible_truncation)]
    pub fn value(&self) -> Result<Option<i64>, InputError> {
        match self {
            Self::Integer(n) => Ok((*n != 0).then_some(*n)),
            Self::Float(f) if !f.is_finite() => Err(InputError::invalid_count(f.to_string())),
            Self::Float(f) => Ok((*f != 0.0).then(|| f.trunc() as i64)),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                // "0" is non-empty text, so it is a supplied count of zero
                parse_count_text(trimmed).map(Some)
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn parse_count_text(text: &str) -> Result<i64, InputError> {
    if let Ok(n) = text.parse::<i64>() {
        return Ok(n);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f.trunc() as i64),
        _ => Err(InputError::invalid_count(text)),
    }
}

fn field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_text(value).map_err(serde::de::Error::custom)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => scalar_text(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn scalar_text(value: Value) -> Result<String, &'static str> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_text(&n)),
        Value::Array(items) => items
            .into_iter()
            .map(scalar_text)
            .collect::<Result<Vec<_>, _>>()
            .map(|parts| parts.join(",")),
        Value::Object(_) => Err("expected a text value, found an object"),
    }
}

/// Shortest decimal form: `5000.0` prints as `5000`
#[allow(clippy::cast_possible_truncation)]
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record() {
        let input = ContractInput::from_json_value(json!({
            "contract_type": "regular",
            "contractor_name": "Jane Doe",
            "email": "jane@example.com",
            "number_of_content": 2,
            "amount": "5000",
            "due_date": "within 30 days",
            "end_date": "2025-12-31"
        }))
        .unwrap();

        assert_eq!(input.contractor_name, "Jane Doe");
        assert_eq!(input.number_of_content, Some(ContentCount::Integer(2)));
        assert_eq!(input.template_kind(), TemplateKind::Regular);
    }

    #[test]
    fn missing_fields_render_empty() {
        let input = ContractInput::from_json_str("{}").unwrap();
        assert_eq!(input.signer_name, "");
        assert_eq!(input.contract_type, None);
        assert_eq!(input.number_of_content, None);
    }

    #[test]
    fn null_fields_render_empty() {
        let input = ContractInput::from_json_value(json!({
            "signer_name": null,
            "contract_type": null,
            "number_of_content": null
        }))
        .unwrap();
        assert_eq!(input.signer_name, "");
        assert_eq!(input.contract_type, None);
        assert_eq!(input.number_of_content, None);
    }

    #[test]
    fn numeric_text_fields() {
        let input = ContractInput::from_json_value(json!({
            "amount": 5000,
            "due_date": 12.5,
            "vendor_account": 3000.0,
            "end_date": true
        }))
        .unwrap();
        assert_eq!(input.amount, "5000");
        assert_eq!(input.due_date, "12.5");
        assert_eq!(input.vendor_account, "3000");
        assert_eq!(input.end_date, "true");
    }

    #[test]
    fn array_fields_join_with_commas() {
        let input = ContractInput::from_json_value(json!({
            "email": ["a@example.com", "b@example.com"]
        }))
        .unwrap();
        assert_eq!(input.email, "a@example.com,b@example.com");
    }

    #[test]
    fn object_field_is_malformed() {
        let err = ContractInput::from_json_value(json!({
            "address": { "street": "Duval St" }
        }))
        .unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));
    }

    #[test]
    fn non_object_record_is_malformed() {
        let err = ContractInput::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));

        let err = ContractInput::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));
    }

    #[test]
    fn campfire_tag_selects_campfire() {
        let input = ContractInput::from_json_value(json!({ "contract_type": "campfire" })).unwrap();
        assert_eq!(input.template_kind(), TemplateKind::Campfire);
    }

    #[test]
    fn count_values() {
        assert_eq!(ContentCount::Integer(3).value().unwrap(), Some(3));
        assert_eq!(ContentCount::Integer(0).value().unwrap(), None);
        assert_eq!(ContentCount::Integer(-2).value().unwrap(), Some(-2));
        assert_eq!(ContentCount::Float(2.9).value().unwrap(), Some(2));
        assert_eq!(ContentCount::Float(0.0).value().unwrap(), None);
        assert_eq!(ContentCount::Text(" 4 ".into()).value().unwrap(), Some(4));
        assert_eq!(ContentCount::Text("2.5".into()).value().unwrap(), Some(2));
        assert_eq!(ContentCount::Text("0".into()).value().unwrap(), Some(0));
        assert_eq!(ContentCount::Text(String::new()).value().unwrap(), None);
    }

    #[test]
    fn fractional_zero_is_supplied_whatever_the_json_kind() {
        assert_eq!(ContentCount::Float(0.5).value().unwrap(), Some(0));
        assert_eq!(ContentCount::Text("0.5".into()).value().unwrap(), Some(0));
        assert_eq!(ContentCount::Float(-0.5).value().unwrap(), Some(0));
        assert_eq!(ContentCount::Float(0.0).value().unwrap(), None);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = ContentCount::Text("a few".into()).value().unwrap_err();
        assert!(matches!(err, InputError::InvalidCount { ref value } if value == "a few"));
    }

    #[test]
    fn count_decodes_from_each_json_kind() {
        let input = ContractInput::from_json_value(json!({ "number_of_content": "5" })).unwrap();
        assert_eq!(input.number_of_content, Some(ContentCount::Text("5".into())));

        let input = ContractInput::from_json_value(json!({ "number_of_content": 1.5 })).unwrap();
        assert_eq!(input.number_of_content, Some(ContentCount::Float(1.5)));
    }
}
