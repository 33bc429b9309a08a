//! Trim tags and the closed set of recognized trim categories

use serde::{Deserialize, Serialize};

const DEFAULT_NAMESPACE: &str = "minecraft";

/// Trim material identity attached to an equipped item
///
/// Equality is by material identifier. Identifiers without a namespace are
/// placed in the default one, so `diamond` and `minecraft:diamond` are the
/// same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrimTag(String);

impl TrimTag {
    pub fn new(material: impl AsRef<str>) -> Self {
        let material = material.as_ref();
        if material.contains(':') {
            Self(material.to_string())
        } else {
            Self(format!("{}:{}", DEFAULT_NAMESPACE, material))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recognized category for this tag, `None` for unknown materials
    pub fn category(&self) -> Option<TrimCategory> {
        TrimCategory::from_material_id(&self.0)
    }
}

impl From<TrimCategory> for TrimTag {
    fn from(category: TrimCategory) -> Self {
        Self(category.material_id().to_string())
    }
}

impl std::fmt::Display for TrimTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TrimTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.ends_with(':') || s.starts_with(':') {
            return Err(format!("invalid trim material '{}'", s));
        }
        Ok(Self::new(s))
    }
}

/// Trim categories that carry a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimCategory {
    Diamond,
    Gold,
    Amethyst,
    Redstone,
    Quartz,
    Emerald,
    Lapis,
    Copper,
    Iron,
    Netherite,
}

impl TrimCategory {
    pub const ALL: [TrimCategory; 10] = [
        TrimCategory::Diamond,
        TrimCategory::Gold,
        TrimCategory::Amethyst,
        TrimCategory::Redstone,
        TrimCategory::Quartz,
        TrimCategory::Emerald,
        TrimCategory::Lapis,
        TrimCategory::Copper,
        TrimCategory::Iron,
        TrimCategory::Netherite,
    ];

    pub fn material_id(&self) -> &'static str {
        match self {
            Self::Diamond => "minecraft:diamond",
            Self::Gold => "minecraft:gold",
            Self::Amethyst => "minecraft:amethyst",
            Self::Redstone => "minecraft:redstone",
            Self::Quartz => "minecraft:quartz",
            Self::Emerald => "minecraft:emerald",
            Self::Lapis => "minecraft:lapis",
            Self::Copper => "minecraft:copper",
            Self::Iron => "minecraft:iron",
            Self::Netherite => "minecraft:netherite",
        }
    }

    pub fn from_material_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.material_id() == id)
    }
}

impl std::fmt::Display for TrimCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = self.material_id();
        f.write_str(id.split_once(':').map(|(_, name)| name).unwrap_or(id))
    }
}
