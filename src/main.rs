//! Tensor Rotate
//!
//! Keeps an N x N x N volume of characters and rotates it a quarter turn
//! about any signed principal axis, in place. The default command opens an
//! interactive viewer showing one z-slice at a time.

mod terminal;

use anyhow::Context;
use clap::{Parser, Subcommand};

use tensor_rotate::{diagnostics, Axis, Dimension, Session, Volume};

use terminal::CrosstermTerminal;

/// Rotates a cubic volume of characters in place.
#[derive(Parser)]
#[command(name = "tensor-rotate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge length of the cube (3 to 50).
    dimension: Dimension,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive viewer (default).
    Play,
    /// Print the index table, coordinate table and contents of a fresh volume.
    Dump,
    /// Apply rotations to a fresh volume and print the result.
    Rotate {
        /// Axes to rotate about, in order: x+ x- y+ y- z+ z-.
        #[arg(required = true)]
        axes: Vec<Axis>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // volume is allocated only after the dimension has been validated
    let volume = Volume::new(cli.dimension);

    match cli.command {
        None | Some(Command::Play) => run_interactive(volume),
        Some(Command::Dump) => {
            print!("{}", diagnostics::report(&volume));
            Ok(())
        }
        Some(Command::Rotate { axes }) => run_rotations(volume, &axes),
    }
}

/// Runs the interactive viewer until the user quits.
fn run_interactive(volume: Volume) -> anyhow::Result<()> {
    let mut session = Session::new(volume);
    let mut terminal = CrosstermTerminal::enter().context("failed to set up the terminal")?;
    session.run(&mut terminal)?;
    Ok(())
}

/// Applies each rotation in turn and prints the final volume.
fn run_rotations(mut volume: Volume, axes: &[Axis]) -> anyhow::Result<()> {
    for &axis in axes {
        volume
            .rotate(axis)
            .with_context(|| format!("rotation about {axis} failed"))?;
    }
    print!("{}", diagnostics::elements(&volume));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_rejects_bad_dimensions() {
        for args in [
            vec!["tensor-rotate"],
            vec!["tensor-rotate", "2"],
            vec!["tensor-rotate", "51"],
            vec!["tensor-rotate", "cube"],
            vec!["tensor-rotate", "4", "5"],
        ] {
            assert!(Cli::try_parse_from(args.iter().copied()).is_err(), "accepted {args:?}");
        }
    }

    #[test]
    fn test_cli_parses_commands() {
        let cli = Cli::try_parse_from(["tensor-rotate", "4"]).unwrap();
        assert_eq!(cli.dimension.get(), 4);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["tensor-rotate", "50", "dump"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Dump)));

        let cli = Cli::try_parse_from(["tensor-rotate", "5", "rotate", "x+", "z-", "+y"]).unwrap();
        match cli.command {
            Some(Command::Rotate { axes }) => assert_eq!(
                axes,
                [Axis::XPositive, Axis::ZNegative, Axis::YPositive]
            ),
            _ => panic!("expected the rotate command"),
        }

        assert!(Cli::try_parse_from(["tensor-rotate", "5", "rotate"]).is_err());
        assert!(Cli::try_parse_from(["tensor-rotate", "5", "rotate", "w+"]).is_err());
    }

    #[test]
    fn test_rotations_output_snapshot() {
        let mut volume = Volume::new(Dimension::new(4).unwrap());
        for axis in [Axis::ZPositive, Axis::ZPositive, Axis::YNegative] {
            volume.rotate(axis).unwrap();
        }
        insta::assert_snapshot!("rotate_4x4x4_z_z_ny", diagnostics::elements(&volume));
    }
}
