//! The [`Cell`] type and its closed [`CellKind`] tag.

use std::fmt;

use crate::error::EditError;

/// Nominal capacity of a single cell. A cell "at rest" holds at most this
/// much fill; pressurized liquid may exceed it transiently.
pub const CAPACITY: f64 = 1.0;

/// Fill below this level counts as empty for flow-resistance decisions.
pub const EMPTY_THRESHOLD: f64 = 0.1;

/// What occupies a cell, and therefore which rules apply to it.
///
/// Raw tags (as produced by input devices or foreign callers) map as
/// `0 = Solid`, `1 = Liquid`, `2 = Gas`; see [`CellKind::tag`] and the
/// `TryFrom<u8>` impl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Immovable obstacle. Never donates or receives fill.
    Solid,
    /// Falls, spreads sideways, and is pushed up under pressure.
    Liquid,
    /// Rises and diffuses sideways.
    Gas,
}

impl CellKind {
    /// All kinds, in tag order.
    pub const ALL: [CellKind; 3] = [CellKind::Solid, CellKind::Liquid, CellKind::Gas];

    /// Raw numeric tag for this kind.
    pub fn tag(self) -> u8 {
        match self {
            Self::Solid => 0,
            Self::Liquid => 1,
            Self::Gas => 2,
        }
    }

    /// The next kind in the paint cycle: Solid → Liquid → Gas → Solid.
    pub fn cycle(self) -> Self {
        match self {
            Self::Solid => Self::Liquid,
            Self::Liquid => Self::Gas,
            Self::Gas => Self::Solid,
        }
    }
}

impl TryFrom<u8> for CellKind {
    type Error = EditError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Solid),
            1 => Ok(Self::Liquid),
            2 => Ok(Self::Gas),
            _ => Err(EditError::InvalidKind { tag }),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Liquid => write!(f, "liquid"),
            Self::Gas => write!(f, "gas"),
        }
    }
}

/// A single grid cell.
///
/// `kind` and `fill` are the simulated state and are freely mutable.
/// The coordinates are fixed at placement and only identify where the
/// cell lives; two cells are not "the same" because they share a position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// What occupies the cell.
    pub kind: CellKind,
    /// How much of the cell's capacity is occupied. Nominally in
    /// `[0, CAPACITY]`; liquid may exceed it until pressure is released.
    pub fill: f64,
    row: u32,
    col: u32,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub fn new(row: u32, col: u32, kind: CellKind, fill: f64) -> Self {
        Self {
            kind,
            fill,
            row,
            col,
        }
    }

    /// Row index (0 = top).
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Whether this is a solid obstacle.
    pub fn is_solid(&self) -> bool {
        self.kind == CellKind::Solid
    }

    /// Whether this cell holds liquid (possibly zero of it).
    pub fn is_liquid(&self) -> bool {
        self.kind == CellKind::Liquid
    }

    /// Whether this cell holds gas (possibly zero of it).
    pub fn is_gas(&self) -> bool {
        self.kind == CellKind::Gas
    }

    /// Whether the fill is below [`EMPTY_THRESHOLD`].
    pub fn is_effectively_empty(&self) -> bool {
        self.fill < EMPTY_THRESHOLD
    }

    /// Remaining room up to [`CAPACITY`]. Negative when pressurized.
    pub fn free_space(&self) -> f64 {
        CAPACITY - self.fill
    }

    /// Fill clamped to `[0, CAPACITY]`, for display only.
    pub fn display_fill(&self) -> f64 {
        if self.fill.is_nan() {
            return 0.0;
        }
        self.fill.clamp(0.0, CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_for_every_kind() {
        for kind in CellKind::ALL {
            assert_eq!(CellKind::try_from(kind.tag()), Ok(kind));
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        assert_eq!(
            CellKind::try_from(3),
            Err(EditError::InvalidKind { tag: 3 })
        );
        assert!(CellKind::try_from(255).is_err());
    }

    #[test]
    fn cycle_visits_all_kinds() {
        let mut k = CellKind::Solid;
        k = k.cycle();
        assert_eq!(k, CellKind::Liquid);
        k = k.cycle();
        assert_eq!(k, CellKind::Gas);
        k = k.cycle();
        assert_eq!(k, CellKind::Solid);
    }

    #[test]
    fn coordinates_are_preserved() {
        let c = Cell::new(3, 7, CellKind::Gas, 0.5);
        assert_eq!(c.row(), 3);
        assert_eq!(c.col(), 7);
        assert!(c.is_gas());
        assert!(!c.is_liquid());
    }

    #[test]
    fn free_space_goes_negative_when_pressurized() {
        let c = Cell::new(0, 0, CellKind::Liquid, 1.25);
        assert!((c.free_space() + 0.25).abs() < 1e-12);
    }

    #[test]
    fn effectively_empty_below_threshold() {
        assert!(Cell::new(0, 0, CellKind::Liquid, 0.05).is_effectively_empty());
        assert!(!Cell::new(0, 0, CellKind::Liquid, 0.1).is_effectively_empty());
    }

    #[test]
    fn display_fill_clamps_without_touching_state() {
        let over = Cell::new(0, 0, CellKind::Liquid, 1.7);
        let under = Cell::new(0, 0, CellKind::Liquid, -1e-12);
        assert_eq!(over.display_fill(), 1.0);
        assert_eq!(under.display_fill(), 0.0);
        assert_eq!(over.fill, 1.7);
    }

    #[test]
    fn kind_display() {
        assert_eq!(CellKind::Solid.to_string(), "solid");
        assert_eq!(CellKind::Gas.to_string(), "gas");
    }
}
