use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dials_and_circuits::{circuits, dial, report::Golden};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Puzzle {
	/// Rotations of a 100-position dial, one `L<n>` or `R<n>` per line.
	Dial,
	/// Junction box positions, four comma-separated integers per line.
	Circuits,
}

#[derive(Parser, Debug)]
#[command(name = "dials-and-circuits")]
#[command(about = "Solves a dial or circuits puzzle and prints both answers")]
struct Args {
	/// Which puzzle the input describes.
	#[arg(value_enum)]
	puzzle: Puzzle,

	/// Input file, one record per line.
	#[arg(default_value = "input.txt")]
	input: PathBuf,

	/// Links to attempt before measuring the largest circuits.
	#[arg(long, default_value_t = circuits::DEFAULT_ATTEMPTS)]
	attempts: usize,

	/// File holding the two expected answers. Exits with failure if either
	/// answer differs.
	#[arg(long)]
	expect: Option<PathBuf>,

	/// Log debugging details to stderr.
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<ExitCode> {
	let args = Args::parse();

	let subscriber = FmtSubscriber::builder()
		.with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let input = fs::read_to_string(&args.input).with_context(|| {
		format!("failed to read input from {}", args.input.display())
	})?;
	info!("Solving {:?} from {}", args.puzzle, args.input.display());
	let failed_to_solve =
		|| format!("failed to solve {}", args.input.display());
	let answers = match args.puzzle {
		Puzzle::Dial => dial::solve(&input).with_context(failed_to_solve)?,
		Puzzle::Circuits => circuits::solve(&input, args.attempts)
			.with_context(failed_to_solve)?,
	};

	print!("{answers}");
	if answers.part2.is_none() {
		warn!("Part 2 has no answer: fewer than two junction boxes");
	}

	let Some(expect) = args.expect else {
		return Ok(ExitCode::SUCCESS);
	};
	let golden: Golden = fs::read_to_string(&expect)
		.with_context(|| {
			format!("failed to read expected answers from {}", expect.display())
		})?
		.parse()
		.with_context(|| {
			format!("failed to parse expected answers in {}", expect.display())
		})?;
	let mut failed = false;
	for verdict in golden.check(&answers) {
		if verdict.passed() {
			info!("{verdict}");
		} else {
			error!("{verdict}");
			failed = true;
		}
	}
	Ok(if failed {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	})
}
