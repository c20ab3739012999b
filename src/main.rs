use clap::Parser;
use crossterm::style::Stylize;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use slider_astar::{Board, Move, Solver, SolverConfig};

#[derive(Parser)]
#[command(name = "slider-astar")]
#[command(about = "Find a shortest solution for a random sliding puzzle")]
struct Args {
    /// Side length of the board
    #[arg(short, long, default_value_t = 3)]
    dimension: usize,

    /// Random blank moves applied to the goal
    #[arg(short = 'n', long, default_value_t = 20)]
    steps: usize,

    /// Shuffle every tile instead of walking from the goal (may be unsolvable)
    #[arg(long)]
    shuffle: bool,

    /// Seed for reproducible boards
    #[arg(short, long)]
    seed: Option<u64>,

    /// Never expand the same board twice
    #[arg(long)]
    closed_set: bool,
}

/// Prints `board`, highlighting the tile that just moved out of `previous_blank`.
fn print_board(board: &Board, previous_blank: Option<(usize, usize)>) {
    let width = (board.dimension() * board.dimension() - 1).to_string().len();
    for row in 0..board.dimension() {
        let mut line = String::new();
        for col in 0..board.dimension() {
            let cell = format!("{:width$} ", board.tile(row, col), width = width);
            let styled = if board.tile(row, col) == 0 {
                cell.dark_grey().to_string()
            } else if previous_blank == Some((row, col)) {
                cell.bold().green().to_string()
            } else {
                cell
            };
            line.push_str(&styled);
        }
        println!("{}", line);
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.dimension < 2 {
        eprintln!("dimension must be at least 2");
        std::process::exit(2);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let initial = if args.shuffle {
        Board::shuffled(args.dimension, &mut rng)
    } else {
        Board::scrambled(args.dimension, args.steps, &mut rng)
    };

    println!("Initial board:\n{}", initial);

    let config = SolverConfig::default().with_closed_set(args.closed_set);
    let solver = Solver::with_config(initial, config);
    let stats = solver.stats();
    info!(
        "{} iterations, {} primary nodes, {} shadow nodes",
        stats.iterations, stats.primary_nodes, stats.shadow_nodes
    );

    let Some(moves) = solver.moves() else {
        println!("{}", "No solution exists".red());
        return;
    };

    println!("Found optimal solution with {} moves\n", moves);

    let mut previous: Option<&Board> = None;
    for (step, board) in solver.solution().iter().enumerate() {
        let dir = previous.and_then(|prev| {
            Move::ALL
                .into_iter()
                .find(|&m| prev.slide(m).as_ref() == Some(board))
        });
        match dir {
            Some(dir) => println!("Step {} ({}):", step, dir),
            None => println!("Step {}:", step),
        }
        print_board(board, previous.map(Board::blank));
        println!();
        previous = Some(board);
    }
}
