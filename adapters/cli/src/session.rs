//! Menu-driven console session over injected input and output handles.

use std::io::{BufRead, Write};

use anyhow::Result;
use mars_rovers_core::WELCOME_BANNER;
use mars_rovers_world::{deploy_with, Location, Plateau};

use crate::named_rover::NamedRover;

/// Interactive session walking the plateau, rover and interaction menus.
///
/// Every read and write goes through the injected handles, so tests can
/// script a whole session and inspect the transcript. Reaching end of input
/// anywhere behaves like pressing Enter on every remaining prompt.
pub(crate) struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the console until the operator exits from the top menu.
    ///
    /// A plateau created from command-line arguments is announced and opened
    /// in the rover menu first.
    pub(crate) fn run(&mut self, initial: Option<Plateau>) -> Result<()> {
        self.write_line(WELCOME_BANNER)?;

        if let Some(mut plateau) = initial {
            self.announce_plateau(&plateau)?;
            self.rover_menu(&mut plateau)?;
        }

        loop {
            self.write_line("Select from the following options:")?;
            self.write_line("\tP+Enter to create a new plateau;")?;
            self.write_line("\tH+Enter or ?+Enter to view help;")?;
            self.write_line("\tEnter to exit.")?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.is_empty() {
                return Ok(());
            }

            match line.trim().to_ascii_uppercase().chars().next() {
                Some('P') => self.plateau_menu()?,
                Some('H' | '?') => self.print_help()?,
                _ => {}
            }
        }
    }

    /// Creates plateaus until the operator backs out with a blank line.
    fn plateau_menu(&mut self) -> Result<()> {
        loop {
            let Some(width) = self.prompt_dimension(
                "Enter the plateau width and press Enter (or just press Enter to go back):",
            )?
            else {
                return Ok(());
            };
            let Some(height) = self.prompt_dimension(
                "Enter the plateau height and press Enter (or just press Enter to go back):",
            )?
            else {
                return Ok(());
            };

            let mut plateau = Plateau::new(width, height);
            self.announce_plateau(&plateau)?;
            self.rover_menu(&mut plateau)?;
        }
    }

    /// Prompts until a line parses as an integer; a blank line backs out.
    fn prompt_dimension(&mut self, prompt: &str) -> Result<Option<i32>> {
        loop {
            self.write_line(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(None);
            }
            if let Ok(value) = line.trim().parse::<i32>() {
                return Ok(Some(value));
            }
        }
    }

    /// Roster menu for a single plateau.
    fn rover_menu(&mut self, plateau: &mut Plateau) -> Result<()> {
        let mut rovers: Vec<NamedRover> = Vec::new();

        loop {
            self.print_roster(plateau, &rovers)?;
            self.write_line("Select from the following options:")?;
            self.write_line("\tA+Enter to add a new rover;")?;
            self.write_line("\tM+Enter to draw the occupancy map;")?;
            self.write_line("\tRover's name to interact with an existing rover;")?;
            self.write_line("\tEnter to go back.")?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.is_empty() {
                return Ok(());
            }

            if line.eq_ignore_ascii_case("a") {
                self.add_rover(plateau, &mut rovers)?;
                continue;
            }
            if line.eq_ignore_ascii_case("m") {
                self.draw_map(plateau, &rovers)?;
                continue;
            }

            let needle = line.trim().to_lowercase();
            if let Some(index) = rovers
                .iter()
                .position(|rover| rover.name().to_lowercase() == needle)
            {
                self.rover_interaction(plateau, &mut rovers[index])?;
            }
        }
    }

    fn print_roster(&mut self, plateau: &Plateau, rovers: &[NamedRover]) -> Result<()> {
        if rovers.is_empty() {
            writeln!(self.output, "No rovers on the plateau {}", plateau.id())?;
        } else {
            writeln!(
                self.output,
                "The following rovers are on the plateau {}:",
                plateau.id()
            )?;
            let names: Vec<&str> = rovers.iter().map(NamedRover::name).collect();
            writeln!(self.output, "\t{}", names.join(", "))?;
        }
        Ok(())
    }

    /// Prompts for a name and a deployment string, then deploys.
    fn add_rover(&mut self, plateau: &mut Plateau, rovers: &mut Vec<NamedRover>) -> Result<()> {
        self.write_line(
            "Enter the new rover's name (a blank name will cause the rover to be named by its ID):",
        )?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };

        self.write_line(
            "Enter the new rover's deployment coordinates, in the \"X Y D\" format (no double quotes),",
        )?;
        self.write_line(
            "where D can be N, S, E, or W for the rover to face towards the corresponding side of the compass:",
        )?;
        let Some(request) = self.read_line()? else {
            return Ok(());
        };

        match deploy_with(plateau, &request, |rover| NamedRover::new(rover, &name)) {
            Ok(rover) => {
                writeln!(
                    self.output,
                    "Added the rover {} ({})",
                    rover.name(),
                    rover.rover().id()
                )?;
                rovers.push(rover);
            }
            Err(error) => {
                writeln!(self.output, "The following error has occurred: {error}")?;
            }
        }
        Ok(())
    }

    /// Location and command menu for one selected rover.
    fn rover_interaction(&mut self, plateau: &mut Plateau, rover: &mut NamedRover) -> Result<()> {
        loop {
            self.write_line("Select from the following options:")?;
            self.write_line("\tL+Enter to check the rover's location;")?;
            self.write_line("\tC+Enter to send the rover a command string;")?;
            self.write_line("\tEnter to go back.")?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.is_empty() {
                return Ok(());
            }

            match line.trim().to_ascii_uppercase().chars().next() {
                Some('L') => {
                    let position = rover.rover().current_position(plateau);
                    writeln!(self.output, "{position}")?;
                }
                Some('C') => {
                    self.write_line("Enter the command string:")?;
                    let Some(command) = self.read_line()? else {
                        return Ok(());
                    };
                    match rover.rover_mut().command(plateau, &command) {
                        Ok(position) => writeln!(self.output, "{position}")?,
                        Err(error) => writeln!(self.output, "{error}")?,
                    }
                }
                _ => {}
            }
        }
    }

    /// Draws the occupancy grid with row zero at the bottom, plus a legend.
    fn draw_map(&mut self, plateau: &Plateau, rovers: &[NamedRover]) -> Result<()> {
        let width = plateau.width() as usize;
        let frame = format!("    +{}+", "-".repeat(width));

        self.write_line(&frame)?;
        let rows: Vec<&[Location]> = plateau.rows().collect();
        for row in rows.into_iter().rev() {
            let y = row.first().map_or(0, |location| location.cell().y());
            let line: String = row
                .iter()
                .map(|location| Self::marker_for(location, rovers))
                .collect();
            writeln!(self.output, "{y:>3} |{line}|")?;
        }
        self.write_line(&frame)?;

        let axis: String = (0..width)
            .map(|x| char::from_digit((x % 10) as u32, 10).unwrap_or('?'))
            .collect();
        writeln!(self.output, "     {axis}")?;

        for rover in rovers {
            writeln!(
                self.output,
                "\t{} = {} ({})",
                Self::marker_letter(rover),
                rover.name(),
                rover.rover().current_position(plateau)
            )?;
        }
        Ok(())
    }

    fn marker_for(location: &Location, rovers: &[NamedRover]) -> char {
        let Some(occupant) = location.occupant() else {
            return '.';
        };
        rovers
            .iter()
            .find(|rover| rover.rover().id() == occupant)
            .map_or('?', Self::marker_letter)
    }

    fn marker_letter(rover: &NamedRover) -> char {
        rover
            .name()
            .chars()
            .next()
            .map_or('?', |letter| letter.to_ascii_uppercase())
    }

    fn announce_plateau(&mut self, plateau: &Plateau) -> Result<()> {
        writeln!(
            self.output,
            "Created a plateau {}: {} units wide (West to East) and {} units deep (South to North).",
            plateau.id(),
            plateau.width(),
            plateau.height()
        )?;
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "The first step is to create a plateau: a rectangle between {} and {} units wide",
            Plateau::MIN_WIDTH,
            Plateau::MAX_WIDTH
        )?;
        writeln!(
            self.output,
            "(West to East) and between {} and {} units deep (South to North), so (0, 0) is the",
            Plateau::MIN_HEIGHT,
            Plateau::MAX_HEIGHT
        )?;
        self.write_line("South-West corner of the grid.")?;
        self.write_line(
            "Once the plateau exists, deploy rovers onto it. Each rover gets a readable name on",
        )?;
        self.write_line(
            "top of its auto-assigned ID, to simplify selecting it later. A deployment is written",
        )?;
        self.write_line(
            "as \"X Y D\": the X (West-East) coordinate, the Y (South-North) coordinate, and the",
        )?;
        self.write_line("orientation D, one of N, S, E or W.")?;
        self.write_line(
            "A deployed rover answers command strings with no spaces, one letter per instruction:",
        )?;
        self.write_line(
            "L turns the rover left (North becomes West), R turns it right (North becomes East),",
        )?;
        self.write_line(
            "and M moves it one unit in the direction it is facing. Repeated letters repeat the",
        )?;
        self.write_line("corresponding action.")?;
        self.write_line(
            "On each stage, simply press Enter to go back and eventually to exit the program.",
        )?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Reads one line with the terminator stripped; `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            let _ = line.pop();
        }
        Ok(Some(line))
    }
}
