//! Rover state and the command interpretation machine.

use mars_rovers_core::{
    CommandError, Heading, PlateauId, RoverCommand, RoverId, RoverPosition,
};

use crate::{Location, Plateau};

/// Mobile unit deployed onto a plateau.
///
/// A rover owns its heading and identity but never its coordinates; the cell
/// it stands on is looked up from the plateau on demand, so the occupancy
/// grid stays the only source of truth.
#[derive(Clone, Debug)]
pub struct Rover {
    id: RoverId,
    plateau: PlateauId,
    heading: Heading,
    deployed_at: RoverPosition,
}

impl Rover {
    pub(crate) const fn new(
        id: RoverId,
        plateau: PlateauId,
        heading: Heading,
        deployed_at: RoverPosition,
    ) -> Self {
        Self {
            id,
            plateau,
            heading,
            deployed_at,
        }
    }

    /// Identifier allocated to the rover.
    #[must_use]
    pub const fn id(&self) -> RoverId {
        self.id
    }

    /// Identifier of the plateau the rover was deployed onto.
    #[must_use]
    pub const fn plateau(&self) -> PlateauId {
        self.plateau
    }

    /// Heading the rover currently faces.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Position the rover was originally deployed at.
    #[must_use]
    pub const fn deployed_at(&self) -> RoverPosition {
        self.deployed_at
    }

    /// Reports where the rover currently stands.
    #[must_use]
    pub fn current_position(&self, plateau: &Plateau) -> RoverPosition {
        RoverPosition::new(plateau.locate(self.id), self.heading)
    }

    /// Runs a command string against the plateau.
    ///
    /// The whole string is validated against the L/R/M alphabet before any
    /// instruction executes; a foreign letter rejects the command without
    /// touching state. Execution then proceeds strictly left to right and
    /// stops at the first move that fails, leaving earlier turns applied. An
    /// empty string reports the current position unchanged.
    pub fn command(
        &mut self,
        plateau: &mut Plateau,
        input: &str,
    ) -> Result<RoverPosition, CommandError> {
        if input.is_empty() {
            return Ok(self.current_position(plateau));
        }

        let sequence = RoverCommand::parse_sequence(input)
            .ok_or(CommandError::InvalidCommand { rover: self.id })?;
        for instruction in sequence {
            match instruction {
                RoverCommand::TurnLeft => self.heading = self.heading.turned_left(),
                RoverCommand::TurnRight => self.heading = self.heading.turned_right(),
                RoverCommand::MoveForward => self.move_forward(plateau)?,
            }
        }

        Ok(self.current_position(plateau))
    }

    /// Advances one cell in the current heading.
    ///
    /// A rover that cannot be found on the grid skips the move silently.
    fn move_forward(&mut self, plateau: &mut Plateau) -> Result<(), CommandError> {
        let Some(origin) = plateau.locate(self.id) else {
            return Ok(());
        };

        let target = self
            .heading
            .step_from(origin, plateau.width(), plateau.height())
            .ok_or(CommandError::BoundaryExceeded {
                rover: self.id,
                heading: self.heading,
            })?;

        if let Some(occupant) = plateau.location(target).and_then(Location::occupant) {
            return Err(CommandError::LocationOccupied {
                plateau: plateau.id(),
                cell: target,
                occupant,
            });
        }

        let Some((origin_location, target_location)) = plateau.pair_mut(origin, target) else {
            return Ok(());
        };
        target_location.enter(self.id, Some(origin_location));
        Ok(())
    }
}
