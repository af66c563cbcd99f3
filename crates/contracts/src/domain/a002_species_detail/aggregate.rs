use crate::domain::a001_catalog_entry::SpeciesId;
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire DTO of `GET <endpoint>/<name>`
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpritesDto {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlotDto {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlotDto {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDto {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDetailDto {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub sprites: SpritesDto,
    #[serde(default)]
    pub types: Vec<TypeSlotDto>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlotDto>,
    #[serde(default)]
    pub stats: Vec<StatDto>,
}

// ============================================================================
// Detail record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitEntry {
    pub name: String,
    pub hidden: bool,
}

impl TraitEntry {
    /// `"solar-power"` -> `"solar power"`; only the first hyphen is replaced
    pub fn display_name(&self) -> String {
        self.name.replacen('-', " ", 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: u32,
}

impl StatEntry {
    pub fn label(&self) -> &str {
        match self.name.as_str() {
            "hp" => "HP",
            "attack" => "Attack",
            "defense" => "Defense",
            "special-attack" => "Sp. Atk",
            "special-defense" => "Sp. Def",
            "speed" => "Speed",
            other => other,
        }
    }

    /// Width of the stat bar in percent
    pub fn bar_percent(&self) -> u32 {
        self.value.min(100)
    }
}

/// Expanded per-entry record loaded on selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: SpeciesId,
    pub name: String,
    pub image: Option<String>,
    /// Source units (decimetres)
    pub height: u32,
    /// Source units (hectograms)
    pub weight: u32,
    pub categories: Vec<String>,
    pub traits: Vec<TraitEntry>,
    pub statistics: Vec<StatEntry>,
}

impl DetailRecord {
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}

/// One decimal place, as measurements are shown in the detail panel
pub fn format_measure(value: f64) -> String {
    format!("{:.1}", value)
}

impl From<SpeciesDetailDto> for DetailRecord {
    fn from(dto: SpeciesDetailDto) -> Self {
        let mut types = dto.types;
        types.sort_by_key(|t| t.slot);

        Self {
            id: SpeciesId::new(dto.id),
            name: dto.name,
            image: dto.sprites.front_default.filter(|s| !s.is_empty()),
            height: dto.height,
            weight: dto.weight,
            categories: types.into_iter().map(|t| t.kind.name).collect(),
            traits: dto
                .abilities
                .into_iter()
                .map(|a| TraitEntry {
                    name: a.ability.name,
                    hidden: a.is_hidden,
                })
                .collect(),
            statistics: dto
                .stats
                .into_iter()
                .map(|s| StatEntry {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}
