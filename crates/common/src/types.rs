use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axial hex coordinate. The third cube coordinate is implied: `s = -q - r`.
///
/// Ordered by `(q, r)` so tile stores keyed by it iterate deterministically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implied cube coordinate.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Cube distance: `(|dq| + |dr| + |ds|) / 2`.
    pub fn distance(self, other: Self) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        (dq + dr + ds) / 2
    }

    /// The coordinate one step away in `direction`.
    ///
    /// Coordinates are expected to stay well inside the `i32` range; at the
    /// limits use [`checked_neighbor`](Self::checked_neighbor).
    pub fn neighbor(self, direction: HexDirection) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q + dq, self.r + dr)
    }

    /// Like [`neighbor`](Self::neighbor), but `None` when the step leaves the
    /// `i32` coordinate range.
    pub fn checked_neighbor(self, direction: HexDirection) -> Option<Self> {
        let (dq, dr) = direction.offset();
        Some(Self::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// All six neighbors in canonical direction order.
    pub fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|d| self.neighbor(d))
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl From<(i32, i32)> for AxialCoord {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

/// One of the six single-step moves on the hex grid.
///
/// The declaration order is the canonical enumeration order; snapping ties are
/// resolved in favor of the earlier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    UpLeft,
    UpRight,
    Right,
    DownRight,
    DownLeft,
    Left,
}

impl HexDirection {
    pub const ALL: [Self; 6] = [
        Self::UpLeft,
        Self::UpRight,
        Self::Right,
        Self::DownRight,
        Self::DownLeft,
        Self::Left,
    ];

    /// Axial `(dq, dr)` step for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::UpLeft => (-1, 0),
            Self::UpRight => (0, -1),
            Self::Right => (1, -1),
            Self::DownRight => (1, 0),
            Self::DownLeft => (0, 1),
            Self::Left => (-1, 1),
        }
    }

    /// The step laid out in direction-vector space as `(dq, 0, dr)`.
    pub fn vector(self) -> Vec3 {
        let (dq, dr) = self.offset();
        Vec3::new(dq as f32, 0.0, dr as f32)
    }

    /// Snap an arbitrary direction vector to the nearest canonical direction.
    ///
    /// The vertical component is discarded and the rest normalized before
    /// comparing Euclidean distances against each `(dq, 0, dr)` step. A vector
    /// with no horizontal extent normalizes to zero and snaps to `UpLeft`.
    pub fn snap(v: Vec3) -> Self {
        let flat = Vec3::new(v.x, 0.0, v.z).normalize_or_zero();
        let mut best = Self::ALL[0];
        let mut best_distance = flat.distance(best.vector());
        for candidate in &Self::ALL[1..] {
            let d = flat.distance(candidate.vector());
            if d < best_distance {
                best = *candidate;
                best_distance = d;
            }
        }
        best
    }

    /// Lowercase identifier, as accepted by the input layer.
    pub const fn name(self) -> &'static str {
        match self {
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::Right => "right",
            Self::DownRight => "down-right",
            Self::DownLeft => "down-left",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
