#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Mars Rovers simulation.
//!
//! This crate defines the vocabulary that connects the authoritative world to
//! its presentation adapters: identifiers for plateaus and rovers, grid
//! coordinates, the [`Heading`] a rover faces, the [`RoverCommand`] alphabet,
//! the [`RoverPosition`] report handed back after every interaction, and the
//! typed rejections ([`DeployError`], [`CommandError`]) that replace the
//! free-form failure strings of earlier iterations while preserving their
//! exact display text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Mars Rovers.";

/// Unique identifier assigned to a plateau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlateauId(u32);

impl PlateauId {
    /// Creates a new plateau identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlateauId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier assigned to a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoverId(u32);

impl RoverId {
    /// Creates a new rover identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of a single plateau cell expressed as x and y coordinates.
///
/// `x` counts columns West to East, `y` counts rows South to North; cell
/// (0, 0) is the South-West corner of the plateau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: u32,
    y: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }
}

/// Cardinal orientation a rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing toward increasing row indices.
    North,
    /// Facing toward increasing column indices.
    East,
    /// Facing toward decreasing row indices.
    South,
    /// Facing toward decreasing column indices.
    West,
}

impl Heading {
    /// Parses an orientation letter, ignoring case.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Single-letter form used in position reports.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Orientation after a ninety degree counter-clockwise turn.
    #[must_use]
    pub const fn turned_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Orientation after a ninety degree clockwise turn.
    #[must_use]
    pub const fn turned_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Computes the cell one step ahead of `cell` on a grid of the provided
    /// dimensions.
    ///
    /// Returns `None` when the step would leave the grid: facing North the
    /// move fails on the topmost row (`y >= height - 1`), facing East on the
    /// rightmost column, facing South on row zero, and facing West on column
    /// zero.
    #[must_use]
    pub fn step_from(self, cell: CellCoord, width: u32, height: u32) -> Option<CellCoord> {
        let (x, y) = (cell.x(), cell.y());
        match self {
            Self::North if y + 1 < height => Some(CellCoord::new(x, y + 1)),
            Self::East if x + 1 < width => Some(CellCoord::new(x + 1, y)),
            Self::South if y > 0 => Some(CellCoord::new(x, y - 1)),
            Self::West if x > 0 => Some(CellCoord::new(x - 1, y)),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        })
    }
}

/// Single instruction a rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoverCommand {
    /// Rotate ninety degrees counter-clockwise in place.
    TurnLeft,
    /// Rotate ninety degrees clockwise in place.
    TurnRight,
    /// Advance one cell in the current heading.
    MoveForward,
}

impl RoverCommand {
    /// Parses a command letter, ignoring case.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            'M' => Some(Self::MoveForward),
            _ => None,
        }
    }

    /// Parses a full command string into its instruction sequence.
    ///
    /// The whole string must consist of command letters; a single foreign
    /// character rejects the entire sequence so that no prefix of an invalid
    /// command is ever executed. The empty string parses to an empty
    /// sequence.
    #[must_use]
    pub fn parse_sequence(input: &str) -> Option<Vec<Self>> {
        input.chars().map(Self::from_letter).collect()
    }
}

/// Position report produced after deployments and command runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoverPosition {
    cell: Option<CellCoord>,
    heading: Heading,
}

impl RoverPosition {
    /// Creates a position report for a rover facing `heading`.
    ///
    /// `cell` is `None` when the rover could not be found on its plateau; the
    /// report then renders the out-of-grid marker `-1 -1`.
    #[must_use]
    pub const fn new(cell: Option<CellCoord>, heading: Heading) -> Self {
        Self { cell, heading }
    }

    /// Cell the rover occupies, if it was found on the plateau.
    #[must_use]
    pub const fn cell(&self) -> Option<CellCoord> {
        self.cell
    }

    /// Heading the rover faces.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }
}

impl fmt::Display for RoverPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell {
            Some(cell) => write!(f, "{} {} {}", cell.x(), cell.y(), self.heading.letter()),
            None => write!(f, "-1 -1 {}", self.heading.letter()),
        }
    }
}

/// Reasons a rover deployment request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum DeployError {
    /// The deployment string was empty.
    #[error("Invalid input")]
    InvalidInput,
    /// The coordinates or the orientation could not be parsed.
    #[error("Invalid parameters")]
    InvalidParameters,
    /// Filling another cell would leave the plateau without free space.
    #[error("plateau {plateau} cannot hold any more rovers")]
    PlateauFull {
        /// Plateau that refused the deployment.
        plateau: PlateauId,
    },
    /// The requested cell lies outside the plateau's grid.
    #[error("location x:{}; y:{} does not exist on plateau {}", .cell.x(), .cell.y(), .plateau)]
    OutOfBounds {
        /// Plateau that refused the deployment.
        plateau: PlateauId,
        /// Cell requested in the deployment string.
        cell: CellCoord,
    },
    /// The requested cell is already held by another rover.
    #[error(
        "location x:{}; y:{} on plateau {} is already occupied by rover {}",
        .cell.x(),
        .cell.y(),
        .plateau,
        .occupant
    )]
    LocationOccupied {
        /// Plateau that refused the deployment.
        plateau: PlateauId,
        /// Cell requested in the deployment string.
        cell: CellCoord,
        /// Rover already holding the cell.
        occupant: RoverId,
    },
}

/// Reasons a command run may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum CommandError {
    /// The command string contained a letter outside the L/R/M alphabet.
    #[error("Rover ID {rover}: Invalid command")]
    InvalidCommand {
        /// Rover the command was addressed to.
        rover: RoverId,
    },
    /// A move would have carried the rover off the plateau.
    #[error("rover {rover} has nowhere to go in the {heading} direction")]
    BoundaryExceeded {
        /// Rover that attempted the move.
        rover: RoverId,
        /// Heading the rover was facing when the move failed.
        heading: Heading,
    },
    /// A move targeted a cell held by another rover.
    #[error(
        "location x:{}; y:{} on plateau {} is already occupied by rover {}",
        .cell.x(),
        .cell.y(),
        .plateau,
        .occupant
    )]
    LocationOccupied {
        /// Plateau the rover is deployed on.
        plateau: PlateauId,
        /// Cell the move targeted.
        cell: CellCoord,
        /// Rover already holding the cell.
        occupant: RoverId,
    },
}
