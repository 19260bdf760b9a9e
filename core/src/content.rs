// core/src/content.rs

//! Site-wide settings that an admin can preview and publish: the editable
//! site content and the seasonal colour theme.
//!
//! Only a handful of fields are interpreted here (`contact.whatsapp`,
//! `contact.phone`, the theme colours). Everything else the admin panel sends
//! is kept verbatim in `extra` and written back untouched.

use crate::error::{StorefrontError, StorefrontResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
  #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
  pub whatsapp: Option<String>,
  #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
  #[serde(default, deserialize_with = "lenient_contact")]
  pub contact: ContactInfo,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl SiteContent {
  /// Candidate WhatsApp numbers in preference order, as typed by the admin.
  pub fn contact_numbers(&self) -> impl Iterator<Item = &str> {
    self
      .contact
      .whatsapp
      .as_deref()
      .into_iter()
      .chain(self.contact.phone.as_deref())
  }
}

/// Numbers typed into the admin panel sometimes arrive as JSON numbers.
/// Anything that is neither a string nor a number counts as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::String(text) => Some(text),
    Value::Number(number) => Some(number.to_string()),
    _ => None,
  })
}

/// A `null` or otherwise unusable contact block reads as empty, so checkout
/// falls back to the default number.
fn lenient_contact<'de, D>(deserializer: D) -> Result<ContactInfo, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalTheme {
  pub name: String,
  pub primary_color: String,
  pub secondary_color: String,
  pub accent_color: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background_color: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text_color: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Default for SeasonalTheme {
  fn default() -> Self {
    Self {
      name: "default".to_string(),
      primary_color: "#e11d48".to_string(),
      secondary_color: "#fdf2f8".to_string(),
      accent_color: "#f59e0b".to_string(),
      background_color: None,
      text_color: None,
      extra: Map::new(),
    }
  }
}

impl SeasonalTheme {
  /// Rejects colours the stylesheet would not understand.
  pub fn validate(&self) -> StorefrontResult<()> {
    check_hex_color("primaryColor", &self.primary_color)?;
    check_hex_color("secondaryColor", &self.secondary_color)?;
    check_hex_color("accentColor", &self.accent_color)?;
    if let Some(bg) = &self.background_color {
      check_hex_color("backgroundColor", bg)?;
    }
    if let Some(text) = &self.text_color {
      check_hex_color("textColor", text)?;
    }
    Ok(())
  }
}

fn check_hex_color(field: &'static str, value: &str) -> StorefrontResult<()> {
  let ok = value
    .strip_prefix('#')
    .map(|hex| (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
    .unwrap_or(false);
  if ok {
    Ok(())
  } else {
    Err(StorefrontError::InvalidThemeColor {
      field,
      value: value.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn unknown_content_fields_pass_through() {
    let raw = json!({
      "hero": { "title": "Regalos que enamoran", "subtitle": "Envíos en Lima" },
      "contact": { "whatsapp": "+51 932-371-532", "email": "hola@tienda.pe" }
    });
    let content: SiteContent = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(content.contact.whatsapp.as_deref(), Some("+51 932-371-532"));
    assert_eq!(content.contact.phone, None);
    assert_eq!(serde_json::to_value(&content).unwrap(), raw);
  }

  #[test]
  fn sloppy_contact_values_do_not_break_parsing() {
    let content: SiteContent = serde_json::from_value(json!({
      "contact": { "whatsapp": 51932371532_u64, "phone": null }
    }))
    .unwrap();
    assert_eq!(content.contact.whatsapp.as_deref(), Some("51932371532"));
    assert_eq!(content.contact.phone, None);

    let content: SiteContent = serde_json::from_value(json!({ "contact": null, "hero": {} })).unwrap();
    assert_eq!(content.contact, ContactInfo::default());
    assert!(content.extra.contains_key("hero"));

    let content: SiteContent = serde_json::from_value(json!({ "contact": "llámanos" })).unwrap();
    assert_eq!(content.contact_numbers().count(), 0);
  }

  #[test]
  fn contact_numbers_prefer_whatsapp_then_phone() {
    let mut content = SiteContent::default();
    assert_eq!(content.contact_numbers().count(), 0);

    content.contact.phone = Some("01 555 1234".into());
    content.contact.whatsapp = Some("999 888 777".into());
    let numbers: Vec<&str> = content.contact_numbers().collect();
    assert_eq!(numbers, vec!["999 888 777", "01 555 1234"]);
  }

  #[test]
  fn theme_colours_are_validated() {
    let mut theme = SeasonalTheme::default();
    assert!(theme.validate().is_ok());

    theme.background_color = Some("#FFF".into());
    assert!(theme.validate().is_ok());

    theme.accent_color = "orange".into();
    let err = theme.validate().unwrap_err();
    assert!(matches!(err, StorefrontError::InvalidThemeColor { field: "accentColor", .. }));
  }

  #[test]
  fn theme_reads_camel_case_and_keeps_extras() {
    let theme: SeasonalTheme = serde_json::from_value(json!({
      "name": "navidad",
      "primaryColor": "#b91c1c",
      "secondaryColor": "#166534",
      "accentColor": "#facc15",
      "bannerText": "Feliz Navidad"
    }))
    .unwrap();
    assert_eq!(theme.name, "navidad");
    assert_eq!(theme.extra.get("bannerText"), Some(&json!("Feliz Navidad")));
  }
}
