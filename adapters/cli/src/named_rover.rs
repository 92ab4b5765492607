//! Display names layered over deployed rovers.

use mars_rovers_world::Rover;

/// Rover paired with the human-readable name used to select it in menus.
#[derive(Clone, Debug)]
pub(crate) struct NamedRover {
    rover: Rover,
    name: String,
}

impl NamedRover {
    /// Wraps a deployed rover, naming it by its identifier when `name` is
    /// blank.
    pub(crate) fn new(rover: Rover, name: &str) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            rover.id().to_string()
        } else {
            trimmed.to_owned()
        };
        Self { rover, name }
    }

    /// Name the rover is listed under.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the wrapped rover.
    pub(crate) fn rover(&self) -> &Rover {
        &self.rover
    }

    /// Mutable access for command runs.
    pub(crate) fn rover_mut(&mut self) -> &mut Rover {
        &mut self.rover
    }
}
