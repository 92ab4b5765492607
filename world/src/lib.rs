#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative plateau state management for Mars Rovers.
//!
//! The [`Plateau`] owns the full grid of [`Location`] cells and is the single
//! source of truth for occupancy: a rover's position is always derived by
//! scanning the grid rather than read from a cached field. Rovers enter the
//! grid through [`deploy()`] and move across it through [`Rover::command`].

use std::sync::atomic::{AtomicU32, Ordering};

use mars_rovers_core::{CellCoord, PlateauId, RoverId};

mod deploy;
mod rover;

pub use deploy::{deploy, deploy_with};
pub use rover::Rover;

static NEXT_PLATEAU_ID: AtomicU32 = AtomicU32::new(1);

/// Rectangular grid of locations that rovers are deployed onto.
#[derive(Debug)]
pub struct Plateau {
    id: PlateauId,
    width: u32,
    height: u32,
    locations: Vec<Location>,
}

impl Plateau {
    /// Smallest width a plateau can be created with.
    pub const MIN_WIDTH: u32 = 2;
    /// Smallest height a plateau can be created with.
    pub const MIN_HEIGHT: u32 = 2;
    /// Largest width a plateau can be created with.
    pub const MAX_WIDTH: u32 = 100;
    /// Largest height a plateau can be created with.
    pub const MAX_HEIGHT: u32 = 100;

    /// Creates a plateau with the requested dimensions.
    ///
    /// Out-of-range values are clamped to the nearest bound rather than
    /// rejected, so every call yields a usable grid. The identifier is drawn
    /// from a process-wide serial and is never reused.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = clamp_dimension(width, Self::MIN_WIDTH, Self::MAX_WIDTH);
        let height = clamp_dimension(height, Self::MIN_HEIGHT, Self::MAX_HEIGHT);
        let id = PlateauId::new(NEXT_PLATEAU_ID.fetch_add(1, Ordering::Relaxed));

        let mut locations = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                locations.push(Location::new(id, CellCoord::new(x, y)));
            }
        }

        Self {
            id,
            width,
            height,
            locations,
        }
    }

    /// Identifier allocated to the plateau.
    #[must_use]
    pub const fn id(&self) -> PlateauId {
        self.id
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major view of every location on the plateau.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Iterator over the grid one row at a time, starting at row zero.
    pub fn rows(&self) -> impl Iterator<Item = &[Location]> {
        self.locations.chunks(self.width as usize)
    }

    /// Location at the provided cell, if the cell lies on the grid.
    #[must_use]
    pub fn location(&self, cell: CellCoord) -> Option<&Location> {
        self.index(cell).and_then(|index| self.locations.get(index))
    }

    /// Number of locations currently free of rovers.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.locations
            .iter()
            .filter(|location| location.is_available())
            .count()
    }

    /// Finds the cell occupied by the provided rover, scanning row-major.
    #[must_use]
    pub fn locate(&self, rover: RoverId) -> Option<CellCoord> {
        self.locations
            .iter()
            .find(|location| location.occupant() == Some(rover))
            .map(Location::cell)
    }

    pub(crate) fn location_mut(&mut self, cell: CellCoord) -> Option<&mut Location> {
        self.index(cell)
            .and_then(|index| self.locations.get_mut(index))
    }

    /// Borrows two distinct locations mutably at once.
    ///
    /// Returns `None` when either cell is off the grid or both name the same
    /// cell.
    pub(crate) fn pair_mut(
        &mut self,
        first: CellCoord,
        second: CellCoord,
    ) -> Option<(&mut Location, &mut Location)> {
        let first_index = self.index(first)?;
        let second_index = self.index(second)?;
        if first_index == second_index {
            return None;
        }

        if first_index < second_index {
            let (head, tail) = self.locations.split_at_mut(second_index);
            Some((&mut head[first_index], &mut tail[0]))
        } else {
            let (head, tail) = self.locations.split_at_mut(first_index);
            Some((&mut tail[0], &mut head[second_index]))
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.x() < self.width && cell.y() < self.height {
            let row = usize::try_from(cell.y()).ok()?;
            let column = usize::try_from(cell.x()).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

fn clamp_dimension(requested: i32, min: u32, max: u32) -> u32 {
    u32::try_from(requested).map_or(min, |value| value.clamp(min, max))
}

/// Single cell of a plateau, occupied by at most one rover.
#[derive(Clone, Debug)]
pub struct Location {
    plateau: PlateauId,
    cell: CellCoord,
    occupant: Option<RoverId>,
}

impl Location {
    pub(crate) const fn new(plateau: PlateauId, cell: CellCoord) -> Self {
        Self {
            plateau,
            cell,
            occupant: None,
        }
    }

    /// Plateau the location belongs to.
    #[must_use]
    pub const fn plateau(&self) -> PlateauId {
        self.plateau
    }

    /// Cell coordinate of the location.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Rover currently holding the location, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<RoverId> {
        self.occupant
    }

    /// Reports whether the location is free for a rover to enter.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    /// Installs `rover` as the occupant, vacating `origin` first when given.
    ///
    /// Availability is not checked here; callers verify [`is_available`]
    /// before entering. The origin is cleared and the destination written as
    /// one step so no caller observes a rover on two cells.
    ///
    /// [`is_available`]: Location::is_available
    pub(crate) fn enter(&mut self, rover: RoverId, origin: Option<&mut Location>) {
        if let Some(origin) = origin {
            origin.vacate();
        }
        self.occupant = Some(rover);
    }

    /// Clears the occupant unconditionally.
    pub(crate) fn vacate(&mut self) {
        self.occupant = None;
    }
}
