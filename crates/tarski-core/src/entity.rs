use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TarskiError;

/// The shape of an entity. Shapes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A cube.
    Cube,
    /// A tetrahedron.
    #[serde(alias = "tetrahedron")]
    Tet,
    /// A dodecahedron.
    #[serde(alias = "dodecahedron")]
    Dodec,
}

impl Shape {
    /// All shapes, in declaration order.
    pub const ALL: [Shape; 3] = [Shape::Cube, Shape::Tet, Shape::Dodec];

    /// The short keyword used in world files and world dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Tet => "tet",
            Self::Dodec => "dodec",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = TarskiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Self::Cube),
            "tet" | "tetrahedron" => Ok(Self::Tet),
            "dodec" | "dodecahedron" => Ok(Self::Dodec),
            other => Err(TarskiError::UnknownShape(other.to_string())),
        }
    }
}

/// The size of an entity.
///
/// Sizes are totally ordered: `Small < Medium < Large`. Size comparisons use
/// this ordering directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Ordinal 0.
    Small,
    /// Ordinal 1.
    Medium,
    /// Ordinal 2.
    Large,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// The ordinal of this size (`small = 0`, `medium = 1`, `large = 2`).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The keyword used in world files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = TarskiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(TarskiError::UnknownSize(other.to_string())),
        }
    }
}

/// Integer grid coordinates. `x` grows rightward, `y` grows frontward.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i64,
    /// Depth coordinate.
    pub y: i64,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i64, i64) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single object placed on the grid.
///
/// Entities are immutable once constructed; all fields are read through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    key: String,
    shape: Shape,
    size: Size,
    position: Position,
}

impl Entity {
    /// Create a new entity.
    pub fn new(key: impl Into<String>, shape: Shape, size: Size, position: Position) -> Self {
        Self {
            key: key.into(),
            shape,
            size,
            position,
        }
    }

    /// The key the entity is registered under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The entity's shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The entity's size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The entity's grid position.
    pub fn position(&self) -> Position {
        self.position
    }
}
