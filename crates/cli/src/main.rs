use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};
use okey_autoplay::{run_batch, AutoplayConfig};
use okey_core::{
    DrawSource, Game, GameConfig, GameError, GameObserver, LogObserver, NullObserver, Outcome,
    Phase, TurnReport, DEFAULT_SEED,
};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    dev: bool,
    json: bool,
    games: u32,
    seed: u64,
    name: String,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        auto: false,
        dev: false,
        json: false,
        games: 1,
        seed: std::env::var("OKEY_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SEED),
        name: "You".to_string(),
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--dev" => options.dev = true,
            "--json" => options.json = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(seed) = value.parse::<u64>() {
                        options.seed = seed;
                    }
                    idx += 1;
                }
            }
            "--games" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(games) = value.parse::<u32>() {
                        options.games = games.max(1);
                    }
                    idx += 1;
                }
            }
            "--name" => {
                if let Some(value) = args.get(idx + 1) {
                    options.name = value.clone();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    options
}

fn setup_logging(dev: bool) -> Result<LoggerHandle> {
    let fallback = if dev { "debug" } else { "warn" };
    let handle = Logger::try_with_env_or_str(fallback)?
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let _logger = match setup_logging(options.dev) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logging disabled: {err}");
            None
        }
    };
    let result = if options.auto {
        run_auto(&options)
    } else {
        run_interactive(&options)
    };
    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run_auto(options: &CliOptions) -> Result<()> {
    let config = AutoplayConfig {
        seed: options.seed,
        games: options.games,
        keep_turns: options.dev,
        ..AutoplayConfig::default()
    };
    let summary = run_batch(&config)?;
    if options.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{}", summary.to_text_report());
    }
    Ok(())
}

fn run_interactive(options: &CliOptions) -> Result<()> {
    let config = GameConfig::single_human(options.name.clone(), options.seed);
    let observer: Box<dyn GameObserver> = if options.dev {
        Box::new(LogObserver::with_names(config.names()))
    } else {
        Box::new(NullObserver)
    };
    let mut game = Game::new(config, observer)?;
    game.shuffle()?;
    game.deal()?;
    println!("seed: {}", options.seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    while !game.is_finished() {
        let seat = game.current_player();
        if game.players()[seat].is_computer() {
            let report = game.play_computer_turn()?;
            print_computer_turn(&game, &report);
        } else if !play_human_turn(&mut game, &mut input)? {
            println!("bye");
            return Ok(());
        }
        if game.phase() == Phase::TurnOver {
            game.advance_turn()?;
        }
    }
    print_outcome(&game);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&game.view())?);
    }
    Ok(())
}

/// Returns `false` when the player asks to quit or input runs out.
fn play_human_turn(game: &mut Game, input: &mut impl BufRead) -> Result<bool> {
    print_table(game);
    while game.phase() == Phase::Draw {
        let Some(line) = prompt(input, "pick up from [s]tack or [d]iscard (q to quit): ")? else {
            return Ok(false);
        };
        let source = match line.as_str() {
            "s" | "stack" => DrawSource::Stack,
            "d" | "discard" => DrawSource::Discard,
            "q" | "quit" => return Ok(false),
            other => {
                println!("unknown choice: {other}");
                continue;
            }
        };
        match game.draw(source) {
            Ok(tile) => println!("you picked up {tile}"),
            Err(GameError::Deck(err)) if game.is_finished() => {
                println!("{err}");
                return Ok(true);
            }
            Err(err) => println!("{err}"),
        }
    }
    if game.is_finished() {
        return Ok(true);
    }
    print_hand(game);
    while game.phase() == Phase::Discard {
        let Some(line) = prompt(input, "discard which index (q to quit): ")? else {
            return Ok(false);
        };
        if line == "q" || line == "quit" {
            return Ok(false);
        }
        let Ok(index) = line.parse::<usize>() else {
            println!("not an index: {line}");
            continue;
        };
        match game.discard(index) {
            Ok(tile) => println!("you discarded {tile}"),
            Err(err) => println!("{err}"),
        }
    }
    Ok(true)
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    if input.read_line(&mut line).context("read stdin")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

fn print_table(game: &Game) {
    println!();
    println!(
        "{}'s turn | stack: {} | discard: {}",
        game.current_name(),
        game.remaining(),
        game.discard_tile()
            .map(|tile| tile.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    print_hand(game);
}

fn print_hand(game: &Game) {
    let hand = game.current_hand();
    let indices: Vec<String> = (0..hand.len()).map(|i| format!("{i:>3}")).collect();
    let values: Vec<String> = hand.tiles().iter().map(|t| format!("{t:>3}")).collect();
    println!("index: {}", indices.join(""));
    println!("tiles: {}", values.join(""));
}

fn print_computer_turn(game: &Game, report: &TurnReport) {
    let name = &game.players()[report.player].name;
    if let Some((source, tile)) = report.drew {
        let from = match source {
            DrawSource::Stack => "the stack",
            DrawSource::Discard => "the discard",
        };
        println!("{name} picked up {tile} from {from}");
    }
    if let Some(tile) = report.discarded {
        println!("{name} discarded {tile}");
    }
}

fn print_outcome(game: &Game) {
    let names = |seats: &[usize]| -> String {
        seats
            .iter()
            .map(|&seat| game.players()[seat].name.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };
    match game.outcome() {
        Some(Outcome::Winner { player, run_length }) => {
            println!("{} wins with a run of {run_length}!", names(&[*player]));
        }
        Some(Outcome::StackExhausted {
            winners,
            run_length,
        }) => {
            println!("the stack is empty. best run {run_length}, held by: {}", names(winners));
        }
        None => println!("game abandoned"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_values() {
        let options = parse_cli_options(&args(&[
            "--auto", "--seed", "12", "--games", "3", "--json", "--name", "Ada",
        ]));
        assert!(options.auto);
        assert!(options.json);
        assert!(!options.dev);
        assert_eq!(options.seed, 12);
        assert_eq!(options.games, 3);
        assert_eq!(options.name, "Ada");
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let options = parse_cli_options(&args(&["--games", "zero", "--seed", "x"]));
        assert_eq!(options.games, 1);
    }

    #[test]
    fn prompt_trims_and_lowercases() {
        let mut input = Cursor::new("  S \n");
        let line = prompt(&mut input, "").expect("prompt");
        assert_eq!(line.as_deref(), Some("s"));
        assert_eq!(prompt(&mut input, "").expect("prompt"), None);
    }

    #[test]
    fn scripted_human_opening_discards() {
        let config = GameConfig::single_human("Ada", 4);
        let mut game = Game::new(config, Box::new(NullObserver)).expect("game");
        game.shuffle().expect("shuffle");
        game.deal().expect("deal");
        let mut input = Cursor::new("nope\n99\n0\n");
        assert!(play_human_turn(&mut game, &mut input).expect("turn"));
        assert_eq!(game.phase(), Phase::TurnOver);
        assert_eq!(game.current_hand().len(), 14);
    }

    #[test]
    fn quitting_stops_the_turn() {
        let config = GameConfig::single_human("Ada", 4);
        let mut game = Game::new(config, Box::new(NullObserver)).expect("game");
        game.shuffle().expect("shuffle");
        game.deal().expect("deal");
        let mut input = Cursor::new("q\n");
        assert!(!play_human_turn(&mut game, &mut input).expect("turn"));
        assert_eq!(game.phase(), Phase::Discard);
    }
}
