//! `maze`: solve, generate and render grid mazes stored as wall-mask files.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use maze_core::{Point, Size};
use maze_paths::{FrontierKind, Heuristic, NodeList, SearchOutcome, SolveOptions, solve_with};
use maze_tools::{MazeGen, read_maze, render, write_maze, write_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

type BoxResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "maze", version, about = "Solve, generate and render grid mazes")]
struct Cli {
    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find a path from start to end and write it as `row column` lines
    Solve {
        /// Maze file to read
        input: PathBuf,
        /// Where to write the path (stdout if omitted)
        output: Option<PathBuf>,
        /// Print the maze with the path (`*`) and explored cells (`.`)
        #[arg(short, long)]
        print: bool,
        /// euclidean, squared-euclidean or manhattan
        #[arg(long, default_value = "euclidean")]
        heuristic: Heuristic,
        /// linear or heap
        #[arg(long, default_value = "linear")]
        frontier: FrontierKind,
        /// Write the path as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a random perfect maze from the top-left to the bottom-right cell
    Generate {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rows: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        columns: u32,
        /// Seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,
        /// Chance of removing each remaining interior wall afterwards
        #[arg(long, default_value_t = 0.0, value_parser = parse_chance)]
        loops: f64,
        /// Where to write the maze (stdout if omitted)
        output: Option<PathBuf>,
    },
    /// Print a maze file as ASCII art
    Render {
        /// Maze file to read
        input: PathBuf,
    },
}

fn parse_chance(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not between 0 and 1"))
    }
}

fn open(path: &Path) -> BoxResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(BufReader::new(file))
}

fn create(path: Option<&Path>) -> BoxResult<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            let file = File::create(p).map_err(|e| format!("{}: {e}", p.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

struct SolveArgs {
    options: SolveOptions,
    print: bool,
    json: bool,
}

/// Solve the maze read from `input`. The path goes to `out`, the optional
/// picture to `screen`. Returns whether a path was found.
fn run_solve<R: BufRead>(
    input: R,
    out: &mut dyn Write,
    screen: &mut dyn Write,
    args: &SolveArgs,
) -> BoxResult<bool> {
    let maze = read_maze(input)?;
    let mut nodes = NodeList::new();
    let outcome = solve_with(&maze, &mut nodes, &args.options)?;
    if args.print {
        screen.write_all(render(&maze, Some(&nodes)).as_bytes())?;
    }
    let SearchOutcome::Reached(goal) = outcome else {
        info!("explored {} cells without reaching {}", nodes.len(), maze.end());
        return Ok(false);
    };
    info!(
        "path of {} steps, {} cells explored",
        nodes[goal].path_cost,
        nodes.len()
    );
    if args.json {
        let mut path: Vec<Point> = nodes.path(goal).map(|n| n.point).collect();
        path.reverse();
        let doc = serde_json::json!({
            "size": maze.size(),
            "start": maze.start(),
            "end": maze.end(),
            "explored": nodes.len(),
            "length": nodes[goal].path_cost,
            "path": path,
        });
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
    } else {
        write_path(&nodes, goal, &mut *out)?;
    }
    out.flush()?;
    Ok(true)
}

fn run_generate(
    size: Size,
    seed: Option<u64>,
    loops: f64,
    out: &mut dyn Write,
) -> BoxResult<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("generating {size} maze with seed {seed}");
    let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
    let end = Point::new(size.width - 1, size.height - 1);
    let mut maze = mg.perfect(size, Point::ZERO, end)?;
    if loops > 0.0 {
        mg.add_loops(&mut maze, loops)?;
    }
    write_maze(&maze, &mut *out)?;
    out.flush()?;
    Ok(())
}

fn main() -> BoxResult<ExitCode> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Solve {
            input,
            output,
            print,
            heuristic,
            frontier,
            json,
        } => {
            let args = SolveArgs {
                options: SolveOptions::default()
                    .with_heuristic(heuristic)
                    .with_frontier(frontier),
                print,
                json,
            };
            let reader = open(&input)?;
            let mut out = create(output.as_deref())?;
            let mut screen = io::stdout().lock();
            if !run_solve(reader, &mut out, &mut screen, &args)? {
                eprintln!("{}: no path from start to end", input.display());
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Generate {
            rows,
            columns,
            seed,
            loops,
            output,
        } => {
            let mut out = create(output.as_deref())?;
            run_generate(Size::new(columns, rows), seed, loops, &mut out)?;
        }
        Command::Render { input } => {
            let maze = read_maze(open(&input)?)?;
            print!("{}", render(&maze, None));
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const SMALL: &str = "3 4\n0 0\n2 3\n14 9 12 9\n12 1 5 5\n7 6 3 7\n";
    const WALLED: &str = "1 3\n0 0\n0 2\n14 11 15\n";

    fn args(print: bool, json: bool) -> SolveArgs {
        SolveArgs {
            options: SolveOptions::default(),
            print,
            json,
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_solve_flags() {
        let cli = Cli::try_parse_from([
            "maze",
            "-v",
            "solve",
            "in.txt",
            "out.txt",
            "-p",
            "--heuristic",
            "manhattan",
            "--frontier",
            "heap",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Command::Solve {
            input,
            output,
            print,
            heuristic,
            frontier,
            json,
        } = cli.command
        else {
            panic!("expected solve");
        };
        assert_eq!(input, PathBuf::from("in.txt"));
        assert_eq!(output, Some(PathBuf::from("out.txt")));
        assert!(print);
        assert!(!json);
        assert_eq!(heuristic, Heuristic::Manhattan);
        assert_eq!(frontier, FrontierKind::Heap);
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert!(Cli::try_parse_from(["maze", "solve", "in", "--heuristic", "nope"]).is_err());
        assert!(Cli::try_parse_from(["maze", "generate", "--rows", "0", "--columns", "3"]).is_err());
        assert!(
            Cli::try_parse_from(["maze", "generate", "--rows", "2", "--columns", "3", "--loops", "1.5"])
                .is_err()
        );
    }

    #[test]
    fn solve_writes_row_column_lines() {
        let mut out = Vec::new();
        let mut screen = Vec::new();
        let found = run_solve(SMALL.as_bytes(), &mut out, &mut screen, &args(false, false)).unwrap();
        assert!(found);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 0\n0 1\n1 1\n2 1\n2 2\n1 2\n0 2\n0 3\n1 3\n2 3\n"
        );
        assert!(screen.is_empty());
    }

    #[test]
    fn solve_prints_and_writes_json() {
        let mut out = Vec::new();
        let mut screen = Vec::new();
        run_solve(SMALL.as_bytes(), &mut out, &mut screen, &args(true, true)).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["length"], 9);
        assert_eq!(doc["path"].as_array().unwrap().len(), 10);
        assert_eq!(doc["path"][0], serde_json::json!({"x": 0, "y": 0}));
        assert_eq!(doc["path"][9], serde_json::json!({"x": 3, "y": 2}));
        let picture = String::from_utf8(screen).unwrap();
        assert!(picture.starts_with("+---+"));
        assert!(picture.contains('*'));
    }

    #[test]
    fn unsolvable_writes_nothing() {
        let mut out = Vec::new();
        let mut screen = Vec::new();
        let found = run_solve(WALLED.as_bytes(), &mut out, &mut screen, &args(false, false)).unwrap();
        assert!(!found);
        assert!(out.is_empty());
    }

    #[test]
    fn bad_input_is_an_error() {
        let mut out = Vec::new();
        let mut screen = Vec::new();
        let err = run_solve("2 2\n".as_bytes(), &mut out, &mut screen, &args(false, false)).unwrap_err();
        assert!(err.to_string().contains("start location"));
    }

    #[test]
    fn generate_is_reproducible_and_solvable() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        run_generate(Size::new(7, 5), Some(9), 0.0, &mut a).unwrap();
        run_generate(Size::new(7, 5), Some(9), 0.0, &mut b).unwrap();
        assert_eq!(a, b);
        assert!(String::from_utf8(a.clone()).unwrap().starts_with("5 7\n0 0\n4 6\n"));

        let mut out = Vec::new();
        let mut screen = Vec::new();
        assert!(run_solve(a.as_slice(), &mut out, &mut screen, &args(false, false)).unwrap());
    }
}
