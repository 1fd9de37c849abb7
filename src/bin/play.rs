use std::fs;
use std::io::{self, Write};

use checkers_core::core::board::{piece_char, Probe};
use checkers_core::{record, Coord, Match, Phase, Side};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let mut load_path: Option<String> = None;
    let mut json_events = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--load" => {
                let Some(p) = args.get(i + 1) else {
                    eprintln!("--load requires a file argument");
                    std::process::exit(2);
                };
                load_path = Some(p.clone());
                i += 2;
            }
            "--json" => {
                json_events = true;
                i += 1;
            }
            "-h" | "--help" => {
                println!("Usage: play [--load <record.json>] [--json]");
                return;
            }
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let mut game = match load_path {
        Some(p) => match load(&p) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Failed to load {p}: {e}");
                std::process::exit(1);
            }
        },
        None => Match::new(),
    };

    print_help();

    loop {
        render(&game);
        match game.phase() {
            Phase::Finished => {
                if let Some(w) = game.winner() {
                    println!("{w} wins. Type 'reset' to play again or 'quit'.");
                }
            }
            Phase::Selected => print!("{} to move the selected piece > ", game.turn_owner()),
            Phase::Idle => print!("{} to select a piece > ", game.turn_owner()),
        }
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => break,
            ["help"] => print_help(),
            ["reset"] => game.reset(),
            ["view"] => match serde_json::to_string_pretty(&game.public_view()) {
                Ok(s) => println!("{s}"),
                Err(e) => eprintln!("cannot encode view: {e}"),
            },
            ["save", path] => match record::encode(&game) {
                Ok(text) => match fs::write(path, text) {
                    Ok(()) => println!("saved to {path}"),
                    Err(e) => eprintln!("cannot write {path}: {e}"),
                },
                Err(e) => eprintln!("cannot encode match: {e}"),
            },
            ["load", path] => match load(path) {
                Ok(m) => game = m,
                Err(e) => eprintln!("cannot load {path}: {e}"),
            },
            ["as", side, x, y] => {
                let Some(side) = parse_side(side) else {
                    eprintln!("side must be 'white' or 'black'");
                    continue;
                };
                click(&mut game, x, y, side, json_events);
            }
            [x, y] => {
                let side = game.turn_owner();
                click(&mut game, x, y, side, json_events);
            }
            _ => eprintln!("unrecognised command; type 'help'"),
        }
    }
}

fn click(game: &mut Match, x: &str, y: &str, side: Side, json_events: bool) {
    let (Ok(x), Ok(y)) = (x.parse::<i8>(), y.parse::<i8>()) else {
        eprintln!("coordinates must be integers");
        return;
    };
    match game.handle_cell_activation(Coord::new(x, y), side) {
        Ok(act) if !act.changed() => println!("(nothing happens)"),
        Ok(act) => {
            if json_events {
                for ev in act.events() {
                    match serde_json::to_string(ev) {
                        Ok(s) => println!("{s}"),
                        Err(e) => eprintln!("cannot encode event: {e}"),
                    }
                }
            }
        }
        Err(e) => eprintln!("{e}"),
    }
}

fn load(path: &str) -> Result<Match, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    record::decode(&text).map_err(|e| e.to_string())
}

fn parse_side(s: &str) -> Option<Side> {
    match s {
        "white" | "w" => Some(Side::White),
        "black" | "b" => Some(Side::Black),
        _ => None,
    }
}

fn render(game: &Match) {
    let board = game.board();
    let destinations = game.destinations();
    let mandatory = game.mandatory_capture_pieces();
    let selected = game.selected_piece();

    print!("\n   ");
    for x in 1..=8 {
        print!(" {x} ");
    }
    println!();
    for y in 1..=8i8 {
        print!("{y:>2} ");
        for x in 1..=8i8 {
            let c = Coord::new(x, y);
            let body = match board.probe(c) {
                Probe::Absent => ' ',
                Probe::Empty if destinations.contains(&c) => '*',
                Probe::Empty => '.',
                Probe::Occupied(p) => piece_char(p),
            };
            let (l, r) = if selected == Some(c) {
                ('[', ']')
            } else if mandatory.contains(&c) {
                ('!', ' ')
            } else {
                (' ', ' ')
            };
            print!("{l}{body}{r}");
        }
        println!();
    }
    println!(
        "white: {}  black: {}",
        board.count(Side::White),
        board.count(Side::Black)
    );
}

fn print_help() {
    println!("Hot-seat checkers.");
    println!("White (w/W) moves toward row 1, black (b/B) toward row 8.");
    println!("Commands:");
    println!("  <x> <y>              click column x, row y as the side to move");
    println!("  as <side> <x> <y>    click as a specific side");
    println!("  view                 print the public view as JSON");
    println!("  save <file> / load <file>");
    println!("  reset | help | quit");
    println!("Markers: [x] selected piece, * legal destination, ! piece with a forced capture");
}
