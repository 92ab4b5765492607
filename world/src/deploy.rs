//! Deployment of rovers onto a plateau.

use std::sync::atomic::{AtomicU32, Ordering};

use mars_rovers_core::{CellCoord, DeployError, Heading, RoverId, RoverPosition};

use crate::{Plateau, Rover};

static NEXT_ROVER_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DeployRequest {
    cell: CellCoord,
    heading: Heading,
}

/// Validates a deployment string and binds a new rover into the plateau.
///
/// The checks run in a fixed order: input shape, plateau capacity, cell
/// bounds, cell availability. Capacity is refused once filling the requested
/// cell would leave the grid without a single free location, and it is
/// checked before bounds, so a full plateau answers with its capacity
/// message even for coordinates that do not exist. On success exactly one
/// location becomes occupied; on any failure the grid is untouched.
pub fn deploy(plateau: &mut Plateau, input: &str) -> Result<Rover, DeployError> {
    deploy_with(plateau, input, |rover| rover)
}

/// Deploys as [`deploy`] does, then hands the rover to `assemble`.
///
/// The closure receives the fully validated rover after it has entered the
/// grid and wraps it into any caller-defined type; it is never called on a
/// failed deployment.
pub fn deploy_with<R>(
    plateau: &mut Plateau,
    input: &str,
    assemble: impl FnOnce(Rover) -> R,
) -> Result<R, DeployError> {
    let request = parse_request(input)?;

    if plateau.available_count() <= 1 {
        return Err(DeployError::PlateauFull {
            plateau: plateau.id(),
        });
    }

    let Some(location) = plateau.location(request.cell) else {
        return Err(DeployError::OutOfBounds {
            plateau: plateau.id(),
            cell: request.cell,
        });
    };
    if let Some(occupant) = location.occupant() {
        return Err(DeployError::LocationOccupied {
            plateau: plateau.id(),
            cell: request.cell,
            occupant,
        });
    }

    let id = RoverId::new(NEXT_ROVER_ID.fetch_add(1, Ordering::Relaxed));
    let rover = Rover::new(
        id,
        plateau.id(),
        request.heading,
        RoverPosition::new(Some(request.cell), request.heading),
    );
    if let Some(location) = plateau.location_mut(request.cell) {
        location.enter(id, None);
    }

    Ok(assemble(rover))
}

/// Parses an `"X Y D"` deployment string, ignoring case and extra tokens.
fn parse_request(input: &str) -> Result<DeployRequest, DeployError> {
    if input.is_empty() {
        return Err(DeployError::InvalidInput);
    }

    let mut tokens = input.split_whitespace();
    let x = tokens.next().and_then(parse_coordinate);
    let y = tokens.next().and_then(parse_coordinate);
    let heading = tokens
        .next()
        .and_then(|token| token.chars().next())
        .and_then(Heading::from_letter);

    match (x, y, heading) {
        (Some(x), Some(y), Some(heading)) => Ok(DeployRequest {
            cell: CellCoord::new(x, y),
            heading,
        }),
        _ => Err(DeployError::InvalidParameters),
    }
}

/// Parses a coordinate token within the signed 32-bit range; negatives and
/// wider values are invalid.
fn parse_coordinate(token: &str) -> Option<u32> {
    let value = token.parse::<i32>().ok()?;
    u32::try_from(value).ok()
}
