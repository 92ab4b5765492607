use mars_rovers_core::{CellCoord, DeployError};
use mars_rovers_world::{deploy, deploy_with, Plateau};

fn occupied_count(plateau: &Plateau) -> usize {
    plateau
        .locations()
        .iter()
        .filter(|location| !location.is_available())
        .count()
}

#[test]
fn deployments_bind_rovers_to_requested_cells() {
    let mut plateau = Plateau::new(16, 10);

    for (input, cell) in [
        ("6 8 N", CellCoord::new(6, 8)),
        ("12 5 e", CellCoord::new(12, 5)),
        ("5 2 S", CellCoord::new(5, 2)),
        ("2 7 w", CellCoord::new(2, 7)),
    ] {
        let rover = deploy(&mut plateau, input).expect("valid deployment");
        assert_eq!(rover.plateau(), plateau.id());
        assert_eq!(
            rover.current_position(&plateau).to_string(),
            input.to_uppercase()
        );

        let location = plateau.location(cell).expect("cell on the grid");
        assert!(!location.is_available());
        assert_eq!(location.occupant(), Some(rover.id()));
    }

    assert_eq!(occupied_count(&plateau), 4);
}

#[test]
fn rejected_deployments_report_their_cause() {
    let mut plateau = Plateau::new(16, 10);

    assert_eq!(
        deploy(&mut plateau, "").expect_err("empty input"),
        DeployError::InvalidInput
    );
    assert_eq!(
        deploy(&mut plateau, "abrakadabra").expect_err("unparsable input"),
        DeployError::InvalidParameters
    );
    assert_eq!(
        deploy(&mut plateau, "6 5 F").expect_err("unknown orientation"),
        DeployError::InvalidParameters
    );
    assert_eq!(
        deploy(&mut plateau, "6 -5 S").expect_err("negative coordinate"),
        DeployError::InvalidParameters
    );

    let outside = deploy(&mut plateau, "17 11 N").expect_err("off the grid");
    assert_eq!(
        outside,
        DeployError::OutOfBounds {
            plateau: plateau.id(),
            cell: CellCoord::new(17, 11),
        }
    );
    assert!(outside.to_string().contains("does not exist on plateau"));

    assert_eq!(occupied_count(&plateau), 0);
}

#[test]
fn occupied_cells_keep_their_lawful_owner() {
    let mut plateau = Plateau::new(16, 10);

    let owner = deploy(&mut plateau, "6 5 N").expect("first deployment");

    let refusal = deploy(&mut plateau, "6 5 S").expect_err("cell already taken");
    assert_eq!(
        refusal,
        DeployError::LocationOccupied {
            plateau: plateau.id(),
            cell: CellCoord::new(6, 5),
            occupant: owner.id(),
        }
    );
    assert!(refusal.to_string().contains("is already occupied by rover"));

    assert_eq!(owner.current_position(&plateau).to_string(), "6 5 N");
    assert_eq!(occupied_count(&plateau), 1);
}

#[test]
fn rejected_deployments_never_run_the_assembler() {
    let mut plateau = Plateau::new(16, 10);
    let owner = deploy(&mut plateau, "6 5 N").expect("first deployment");

    let mut assembled = false;
    let refusal = deploy_with(&mut plateau, "6 5 S", |rover| {
        assembled = true;
        rover
    })
    .expect_err("cell already taken");
    assert_eq!(
        refusal,
        DeployError::LocationOccupied {
            plateau: plateau.id(),
            cell: CellCoord::new(6, 5),
            occupant: owner.id(),
        }
    );
    assert!(!assembled);

    let accepted = deploy_with(&mut plateau, "7 5 E", |rover| {
        assembled = true;
        rover
    })
    .expect("free cell");
    assert!(assembled);
    assert_eq!(accepted.current_position(&plateau).to_string(), "7 5 E");
}

#[test]
fn filling_the_grid_stops_one_cell_short() {
    let mut plateau = Plateau::new(16, 10);
    let mut deployed = Vec::new();
    let mut refusal = None;

    'fill: for y in 0..plateau.height() {
        for x in 0..plateau.width() {
            match deploy(&mut plateau, &format!("{} {} N", x, y)) {
                Ok(rover) => deployed.push(rover),
                Err(error) => {
                    refusal = Some(error);
                    break 'fill;
                }
            }
        }
    }

    assert_eq!(
        refusal,
        Some(DeployError::PlateauFull {
            plateau: plateau.id(),
        })
    );
    let message = refusal.expect("refusal recorded").to_string();
    assert!(message.contains("cannot hold any more rovers"));
    assert!(message.contains(&plateau.id().to_string()));

    assert_eq!(deployed.len(), 159);
    assert_eq!(plateau.available_count(), 1);
}

#[test]
fn capacity_is_refused_before_bounds_are_checked() {
    let mut plateau = Plateau::new(2, 2);

    for input in ["0 0 N", "1 0 E", "0 1 S"] {
        let _ = deploy(&mut plateau, input).expect("room remains");
    }
    assert_eq!(plateau.available_count(), 1);

    let off_grid = deploy(&mut plateau, "9 9 N").expect_err("full plateau");
    assert_eq!(
        off_grid,
        DeployError::PlateauFull {
            plateau: plateau.id(),
        }
    );

    let last_cell = deploy(&mut plateau, "1 1 N").expect_err("full plateau");
    assert_eq!(
        last_cell,
        DeployError::PlateauFull {
            plateau: plateau.id(),
        }
    );
}
