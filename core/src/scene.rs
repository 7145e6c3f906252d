use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(u32);

impl SceneId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SceneId {
    type Err = ParseSceneIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ParseSceneIdError::Empty);
        }
        let id = trimmed
            .parse::<u32>()
            .map_err(|_| ParseSceneIdError::NotANumber {
                value: trimmed.to_string(),
            })?;
        if id == 0 {
            return Err(ParseSceneIdError::Zero);
        }
        Ok(Self(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSceneIdError {
    Empty,
    NotANumber { value: String },
    Zero,
}

impl fmt::Display for ParseSceneIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSceneIdError::Empty => write!(f, "scene id is empty"),
            ParseSceneIdError::NotANumber { value } => {
                write!(f, "scene id '{value}' is not a number")
            }
            ParseSceneIdError::Zero => write!(f, "scene ids start at 1"),
        }
    }
}

impl std::error::Error for ParseSceneIdError {}

/// Archetypal icon shown on the stage card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Strength,
    Mortality,
    Warning,
    Faith,
    Terminal,
}

impl IconKind {
    pub const COUNT: usize = 5;
    pub const ALL: [IconKind; Self::COUNT] = [
        IconKind::Strength,
        IconKind::Mortality,
        IconKind::Warning,
        IconKind::Faith,
        IconKind::Terminal,
    ];

    /// Dense index into per-kind lookup tables.
    pub const fn index(self) -> usize {
        match self {
            IconKind::Strength => 0,
            IconKind::Mortality => 1,
            IconKind::Warning => 2,
            IconKind::Faith => 3,
            IconKind::Terminal => 4,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            IconKind::Strength => "strength",
            IconKind::Mortality => "mortality",
            IconKind::Warning => "warning",
            IconKind::Faith => "faith",
            IconKind::Terminal => "terminal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba(self, alpha: f64) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scene {
    pub id: SceneId,
    pub label: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    /// Chi in `0..=100`.
    pub intensity: u8,
    pub icon: IconKind,
    pub accent: Rgb,
    pub summary: &'static str,
    pub analysis: &'static str,
    pub quote: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/scene_catalog.rs"));

/// Read-only, ordered view over a scene list.
///
/// Holding a `SceneStore` guarantees the list is non-empty with strictly
/// ascending ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneStore {
    scenes: &'static [Scene],
}

impl SceneStore {
    /// The compiled-in catalog.
    pub const fn builtin() -> Self {
        Self { scenes: SCENES }
    }

    pub fn new(scenes: &'static [Scene]) -> Option<Self> {
        if scenes.is_empty() {
            return None;
        }
        let ordered = scenes.windows(2).all(|pair| pair[0].id < pair[1].id);
        if !ordered || scenes.iter().any(|scene| scene.intensity > 100) {
            return None;
        }
        Some(Self { scenes })
    }

    pub fn all(&self) -> &'static [Scene] {
        self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn first(&self) -> &'static Scene {
        &self.scenes[0]
    }

    pub fn get(&self, id: SceneId) -> Option<&'static Scene> {
        self.index_of(id).map(|index| &self.scenes[index])
    }

    pub fn index_of(&self, id: SceneId) -> Option<usize> {
        self.scenes.binary_search_by_key(&id, |scene| scene.id).ok()
    }

    pub fn contains(&self, id: SceneId) -> bool {
        self.index_of(id).is_some()
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::builtin()
    }
}
