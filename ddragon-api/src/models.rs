//! Minimal schemas for the Data Dragon documents.
//!
//! Only the fields read by consumers are typed. Everything else is kept in an
//! `extra` map so the rest of the payload passes through untouched.

use std::{fmt, marker::PhantomData, str::FromStr};

use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, MapAccess, Visitor},
};
use serde_json::{Map, Value};

/// Envelope shared by every `data/{locale}/*.json` document.
///
/// Entries stay raw JSON until a caller asks for them, so a record that does
/// not fit the typed schema only fails the call that decodes it.
#[derive(Debug, Deserialize)]
pub struct DataDocument {
    #[serde(deserialize_with = "ordered_entries")]
    pub data: Vec<(String, Value)>,
}

impl DataDocument {
    /// Records in the order the document lists them.
    pub fn into_records<T: DeserializeOwned>(self) -> serde_json::Result<Vec<T>> {
        self.data
            .into_iter()
            .map(|(_, value)| serde_json::from_value(value))
            .collect()
    }

    /// Record stored under `key`, if any. Other entries are never decoded.
    pub fn take<T: DeserializeOwned>(self, key: &str) -> serde_json::Result<Option<T>> {
        self.data
            .into_iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| serde_json::from_value(value))
            .transpose()
    }
}

/// Deserialize a JSON object into its entries, keeping document order.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of records keyed by id")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, T>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub full: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry of `champion.json`. Only `id` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Champion {
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Champion {
    /// Numeric champion key used by the ability video host.
    pub fn numeric_key(&self) -> Option<u32> {
        self.key.parse().ok()
    }
}

/// Entry of `champion/{id}.json`. Only `id` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChampionDetail {
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub skins: Vec<Skin>,
    #[serde(default)]
    pub passive: Passive,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChampionDetail {
    pub fn numeric_key(&self) -> Option<u32> {
        self.key.parse().ok()
    }

    /// Spells paired with the slot they are cast from.
    pub fn abilities(&self) -> impl Iterator<Item = (SpellSlot, &Spell)> {
        SpellSlot::ABILITIES.into_iter().zip(self.spells.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skin {
    pub id: String,
    pub num: u32,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Passive {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Image,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Spell {
    pub id: String,
    pub name: String,
    pub image: Image,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry of `profileicon.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileIcon {
    pub id: u32,
    pub image: Image,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ability letter as used by the ability video host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellSlot {
    P,
    Q,
    W,
    E,
    R,
}

impl SpellSlot {
    /// Active abilities, in the order the champion document lists its spells.
    pub const ABILITIES: [SpellSlot; 4] = [Self::Q, Self::W, Self::E, Self::R];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P => "P",
            Self::Q => "Q",
            Self::W => "W",
            Self::E => "E",
            Self::R => "R",
        }
    }
}

impl FromStr for SpellSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "P" => Ok(Self::P),
            "Q" => Ok(Self::Q),
            "W" => Ok(Self::W),
            "E" => Ok(Self::E),
            "R" => Ok(Self::R),
            _ => Err(format!("Unknown spell slot: {}", s)),
        }
    }
}

impl fmt::Display for SpellSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
