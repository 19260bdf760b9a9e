// core/src/icon.rs

//! The fixed set of icons the storefront can render next to categories,
//! promotions and contact links. Icons are stored by name; any name outside
//! this table is rejected with `StorefrontError::UnknownIcon`.

use crate::error::StorefrontError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Icon {
  ShoppingBag,
  ShoppingCart,
  Gift,
  Heart,
  Star,
  Sparkles,
  Tag,
  Percent,
  Truck,
  Package,
  Sun,
  Snowflake,
  Flower,
  Leaf,
  Shirt,
  Home,
  Coffee,
  Cake,
  PartyPopper,
  Phone,
  MessageCircle,
  Instagram,
  Facebook,
  MapPin,
  Clock,
  HelpCircle,
}

const ICON_TABLE: &[(&str, Icon)] = &[
  ("ShoppingBag", Icon::ShoppingBag),
  ("ShoppingCart", Icon::ShoppingCart),
  ("Gift", Icon::Gift),
  ("Heart", Icon::Heart),
  ("Star", Icon::Star),
  ("Sparkles", Icon::Sparkles),
  ("Tag", Icon::Tag),
  ("Percent", Icon::Percent),
  ("Truck", Icon::Truck),
  ("Package", Icon::Package),
  ("Sun", Icon::Sun),
  ("Snowflake", Icon::Snowflake),
  ("Flower", Icon::Flower),
  ("Leaf", Icon::Leaf),
  ("Shirt", Icon::Shirt),
  ("Home", Icon::Home),
  ("Coffee", Icon::Coffee),
  ("Cake", Icon::Cake),
  ("PartyPopper", Icon::PartyPopper),
  ("Phone", Icon::Phone),
  ("MessageCircle", Icon::MessageCircle),
  ("Instagram", Icon::Instagram),
  ("Facebook", Icon::Facebook),
  ("MapPin", Icon::MapPin),
  ("Clock", Icon::Clock),
  ("HelpCircle", Icon::HelpCircle),
];

impl Icon {
  /// The canonical (PascalCase) name stored in the database.
  pub fn name(self) -> &'static str {
    match self {
      Icon::ShoppingBag => "ShoppingBag",
      Icon::ShoppingCart => "ShoppingCart",
      Icon::Gift => "Gift",
      Icon::Heart => "Heart",
      Icon::Star => "Star",
      Icon::Sparkles => "Sparkles",
      Icon::Tag => "Tag",
      Icon::Percent => "Percent",
      Icon::Truck => "Truck",
      Icon::Package => "Package",
      Icon::Sun => "Sun",
      Icon::Snowflake => "Snowflake",
      Icon::Flower => "Flower",
      Icon::Leaf => "Leaf",
      Icon::Shirt => "Shirt",
      Icon::Home => "Home",
      Icon::Coffee => "Coffee",
      Icon::Cake => "Cake",
      Icon::PartyPopper => "PartyPopper",
      Icon::Phone => "Phone",
      Icon::MessageCircle => "MessageCircle",
      Icon::Instagram => "Instagram",
      Icon::Facebook => "Facebook",
      Icon::MapPin => "MapPin",
      Icon::Clock => "Clock",
      Icon::HelpCircle => "HelpCircle",
    }
  }

  /// Every supported icon, in picker order.
  pub fn all() -> impl Iterator<Item = Icon> {
    ICON_TABLE.iter().map(|(_, icon)| *icon)
  }
}

impl FromStr for Icon {
  type Err = StorefrontError;

  // Also accepts kebab-case ("shopping-bag") since older rows were saved that way.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted: String = s.trim().chars().filter(|c| *c != '-' && *c != '_').collect();
    ICON_TABLE
      .iter()
      .find(|(name, _)| name.eq_ignore_ascii_case(&wanted))
      .map(|(_, icon)| *icon)
      .ok_or_else(|| StorefrontError::UnknownIcon { name: s.to_string() })
  }
}

impl TryFrom<String> for Icon {
  type Error = StorefrontError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl fmt::Display for Icon {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl Serialize for Icon {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.name())
  }
}
