// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use clap::{App, Arg, ArgMatches};
use log::{LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};

use subhunt::{
    game::Pending, map::column_label, submarine::STARTING_HEALTH, Action, BoardView, Cell,
    Color, DamageCause, Direction, Event, Game, Map, MapSettings, Overload, Phase, SonarClaim,
    System, Team, Viewer,
};

fn main() -> io::Result<()> {
    let matches = App::new("Hunt")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Hot-seat submarine duel for two crews sharing one terminal.")
        .arg(
            Arg::with_name("first_team")
                .short("f")
                .long("first_team")
                .value_name("TEAM")
                .help("pre-specify which team takes the first turn")
                .takes_value(true)
                .possible_values(&["blue", "red", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("map")
                .short("m")
                .long("map")
                .value_name("FILE")
                .help("load map settings from a JSON file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print events as JSON lines instead of text"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("log rule decisions to stderr, repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));
    let map = load_map(&matches)?;
    let json = matches.is_present("json");

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let mut game = match choose_first(&matches) {
        Some(first) => Game::new(map, first),
        None => Game::with_random_order(map, &mut rng),
    };
    log::info!("{} moves first", game.turn_order()[0]);

    let mut seen = [0; 2];
    for &team in Team::ALL.iter() {
        handoff(&mut input, team)?;
        choose_placement(&mut rng, &mut game, team, &mut input)?;
        catch_up(&game, team, &mut seen, json);
    }

    let mut last_actor = None;
    while game.phase() == Phase::Playing {
        let actor = match current_actor(&game) {
            Some(actor) => actor,
            None => break,
        };
        if last_actor != Some(actor) {
            handoff(&mut input, actor)?;
            catch_up(&game, actor, &mut seen, json);
            show_status(&game, actor);
            last_actor = Some(actor);
        }

        let prompt = format!("{} >", actor);
        let cmd = input.read_input_lower(&prompt, |line| parse_command(actor, line))?;
        match cmd {
            Command::Act(action) => match game.apply(action) {
                Ok(_) => catch_up(&game, actor, &mut seen, json),
                Err(err) => println!("Rejected: {}", err),
            },
            Command::Status => show_status(&game, actor),
            Command::Intercepts => {
                for entry in game.intercepts(actor) {
                    println!("turn {:>3}: {}", entry.turn, Describe(&entry.event));
                }
            }
            Command::Snapshot => {
                let snapshot = game.snapshot(Viewer::Team(actor));
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(text) => println!("{}", text),
                    Err(err) => log::error!("could not encode snapshot: {}", err),
                }
            }
            Command::Help => print_help(),
            Command::Quit => return Ok(()),
        }
    }

    if let Some(winner) = game.winner() {
        for &team in Team::ALL.iter() {
            catch_up(&game, team, &mut seen, json);
        }
        println!();
        println!("The {} crew wins!", winner);
    }
    Ok(())
}

/// Minimal logger that writes every enabled record to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. Each `-v` raises the level by one step from warnings.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Build the map from the `--map` file, or use the built-in one.
fn load_map(matches: &ArgMatches) -> io::Result<Map> {
    let settings = match matches.value_of("map") {
        Some(path) => {
            let file = BufReader::new(File::open(path)?);
            MapSettings::from_reader(file)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?
        }
        None => MapSettings::default(),
    };
    let map = Map::new(settings).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    log::info!(
        "playing on {} ({}x{}, {} sectors)",
        map.name(),
        map.rows(),
        map.cols(),
        map.sector_count()
    );
    Ok(map)
}

/// The team chosen with `--first_team`, or `None` to pick at random.
fn choose_first(matches: &ArgMatches) -> Option<Team> {
    match matches
        .value_of("first_team")
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("blue") => Some(Team::Blue),
        Some("red") => Some(Team::Red),
        _ => None,
    }
}

/// The team that must act next: the sonar responder while one is pending, otherwise
/// the team whose turn it is.
fn current_actor(game: &Game) -> Option<Team> {
    match game.turn_state().pending() {
        Some(Pending::Sonar { from }) => Some(from),
        None => game.active_team(),
    }
}

/// Ask the players to pass the terminal to `team`.
fn handoff(input: &mut InputReader<impl BufRead>, team: Team) -> io::Result<()> {
    println!();
    println!("==================================================");
    input.read_input_lower(
        &format!("Pass the terminal to the {} crew and press enter.", team),
        |_| Some(()),
    )
}

/// Print every log entry `team` may see that it has not seen yet.
fn catch_up(game: &Game, team: Team, seen: &mut [usize; 2], json: bool) {
    let log = game.log();
    let start = seen[team.index()].min(log.len());
    for entry in log[start..]
        .iter()
        .filter(|entry| entry.event.visible_to(Viewer::Team(team)))
    {
        if json {
            match serde_json::to_string(entry) {
                Ok(line) => println!("{}", line),
                Err(err) => log::error!("could not encode event: {}", err),
            }
        } else {
            println!("  {}", Describe(&entry.event));
        }
    }
    seen[team.index()] = log.len();
}

/// Choose the starting cell of `team`'s submarine.
fn choose_placement(
    rng: &mut impl Rng,
    game: &mut Game,
    team: Team,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    println!("Place the {} submarine: place <row> <col>, or random.", team);
    show_board(game, team);
    loop {
        let cell = input.read_input_lower("> ", |line| match line {
            "random" | "rand" => Some(random_water(&mut *rng, game.map())),
            other => match TARGET.captures(other) {
                Some(captures) if &captures["cmd"] == "place" => target_cell(&captures),
                _ => {
                    println!("Use \"place <row> <col>\" or \"random\".");
                    None
                }
            },
        })?;
        match game.apply(Action::Place { team, cell }) {
            Ok(_) => {
                println!("The {} submarine dives at {}.", team, Label(cell));
                return Ok(());
            }
            Err(err) => println!("Invalid placement: {}", err),
        }
    }
}

/// Pick a random open water cell.
fn random_water(rng: &mut impl Rng, map: &Map) -> Cell {
    loop {
        let cell = Cell::new(rng.gen_range(0, map.rows()), rng.gen_range(0, map.cols()));
        if map.is_water(&cell) {
            return cell;
        }
    }
}

enum Command {
    Act(Action),
    Status,
    Intercepts,
    Snapshot,
    Help,
    Quit,
}

/// Commands taking a cell: `torpedo`, `mine` and `place`.
static TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?P<cmd>torpedo|torp|fire|mine|place)\s+
        (?:(?:at|on)\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[a-z]+|[0-9]+)$",
    )
    .unwrap()
});
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?x)(?:move|go)\s+(?P<dir>\w+)$").unwrap());
static MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?x)mark\s+(?P<dir>\w+)\s+(?P<index>[0-9]+)$").unwrap());
static CHARGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?x)charge\s+(?P<system>\w+)$").unwrap());
static DETONATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?x)(?:detonate|boom)\s+(?P<index>[0-9]+)$").unwrap());
static DRONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?x)drone\s+(?P<sector>[0-9]+)$").unwrap());
static STEALTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?x)(?:stealth|silence)\s+(?P<dir>\w+)(?:\s+(?P<steps>[0-9]+))?$").unwrap()
});
static ANSWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:answer|respond)\s+
        (?P<k1>[a-z]+)\s+(?P<v1>[0-9]+)\s+
        (?P<k2>[a-z]+)\s+(?P<v2>[0-9]+)$",
    )
    .unwrap()
});

/// Parse a line of input from `team`. Prints a message and returns `None` if the
/// line is not a valid command.
fn parse_command(team: Team, line: &str) -> Option<Command> {
    let action = match line {
        "" => return None,
        "?" | "help" | "h" => return Some(Command::Help),
        "status" | "board" => return Some(Command::Status),
        "intercepts" | "radio" => return Some(Command::Intercepts),
        "json" | "snapshot" => return Some(Command::Snapshot),
        "quit" | "exit" => return Some(Command::Quit),
        "surface" => Action::Surface { team },
        "dive" => Action::Dive { team },
        "sonar" => Action::ActivateSonar { team },
        "end" | "done" => Action::EndTurn { team },
        "n" | "s" | "e" | "w" | "north" | "south" | "east" | "west" => Action::Move {
            team,
            direction: direction(line)?,
        },
        other => {
            if let Some(captures) = HEADING.captures(other) {
                Action::Move {
                    team,
                    direction: direction(&captures["dir"])?,
                }
            } else if let Some(captures) = MARK.captures(other) {
                Action::MarkNode {
                    team,
                    direction: direction(&captures["dir"])?,
                    index: number(&captures, "index")?,
                }
            } else if let Some(captures) = CHARGE.captures(other) {
                let system = match captures["system"].parse::<System>() {
                    Ok(system) => system,
                    Err(err) => {
                        println!("{}, choose torpedo, mine, sonar, drone or stealth", err);
                        return None;
                    }
                };
                Action::Charge { team, system }
            } else if let Some(captures) = TARGET.captures(other) {
                let target = target_cell(&captures)?;
                match &captures["cmd"] {
                    "mine" => Action::PlaceMine { team, target },
                    "place" => Action::Place { team, cell: target },
                    _ => Action::FireTorpedo { team, target },
                }
            } else if let Some(captures) = DETONATE.captures(other) {
                Action::DetonateMine {
                    team,
                    index: number(&captures, "index")?,
                }
            } else if let Some(captures) = DRONE.captures(other) {
                Action::LaunchDrone {
                    team,
                    sector: number(&captures, "sector")?,
                }
            } else if let Some(captures) = STEALTH.captures(other) {
                let steps = match captures.name("steps") {
                    Some(_) => number(&captures, "steps")?,
                    None => 1,
                };
                Action::Stealth {
                    team,
                    direction: direction(&captures["dir"])?,
                    steps,
                }
            } else if let Some(captures) = ANSWER.captures(other) {
                Action::RespondSonar {
                    team,
                    claims: [
                        claim(&captures["k1"], number(&captures, "v1")?)?,
                        claim(&captures["k2"], number(&captures, "v2")?)?,
                    ],
                }
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                return None;
            }
        }
    };
    Some(Command::Act(action))
}

fn direction(text: &str) -> Option<Direction> {
    match text.parse() {
        Ok(dir) => Some(dir),
        Err(err) => {
            println!("{}", err);
            None
        }
    }
}

fn number(captures: &Captures, name: &str) -> Option<usize> {
    let text = &captures[name];
    match text.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("invalid {}: {}", name, text);
            None
        }
    }
}

/// Cell from the `row` and `col` groups. Columns may be given as letters or as a
/// 0-indexed number.
fn target_cell(captures: &Captures) -> Option<Cell> {
    let row = number(captures, "row")?;
    let col_text = &captures["col"];
    let col = if col_text.bytes().all(|b| b.is_ascii_digit()) {
        number(captures, "col")?
    } else {
        col_text
            .bytes()
            .try_fold(0usize, |acc, b| {
                acc.checked_mul(26)?.checked_add(usize::from(b - b'a') + 1)
            })
            .and_then(|n| n.checked_sub(1))
            .or_else(|| {
                println!("invalid column: {}", col_text);
                None
            })?
    };
    Some(Cell::new(row, col))
}

fn claim(kind: &str, value: usize) -> Option<SonarClaim> {
    match kind {
        "row" | "r" => Some(SonarClaim::Row(value)),
        "col" | "column" | "c" => Some(SonarClaim::Col(value)),
        "sector" | "sec" => Some(SonarClaim::Sector(value)),
        other => {
            println!("invalid claim {}, choose row, col or sector", other);
            None
        }
    }
}

fn print_help() {
    println!(
        "Available Commands:
    move <dir> (or n/s/e/w)     captain: move one cell and announce the heading.
    surface                     captain: surface instead of moving. Gives the enemy 3 turns.
    dive                        captain: dive again after surfacing.
    stealth <dir> [steps]       captain: move 0 to 4 cells in a straight line, unannounced.
    mark <dir> <index>          engineer: mark node 0-5 of this turn's heading.
    charge <system>             first mate: charge torpedo, mine, sonar, drone or stealth.
    torpedo <row> <col>         fire at a cell 1 to 4 cells away.
    mine <row> <col>            lay a mine next to the submarine.
    detonate <index>            set off one of your mines.
    drone <sector>              ask whether the enemy is in a sector.
    sonar                       make the enemy captain give one true and one false claim.
    answer <kind> <value> <kind> <value>
                                answer a sonar, kinds are row, col and sector.
    end                         end the turn.
    status                      show your board and systems.
    intercepts                  list everything your radio operator picked up.
    json                        print your view of the game as JSON.
    quit                        leave the game."
    );
}

/// Print the crew's view of the game.
fn show_status(game: &Game, team: Team) {
    let snapshot = game.snapshot(Viewer::Team(team));
    println!();
    println!("Turn {}, {} crew", snapshot.turn, team);
    if let (Some(own), Some(enemy)) = (snapshot.submarine(team), snapshot.submarine(team.other()))
    {
        println!(
            "Hull {}/{}, enemy hull {}/{}",
            own.health, STARTING_HEALTH, enemy.health, STARTING_HEALTH
        );
        for system in own.systems.iter() {
            let blocked = if system.blocked == Some(true) {
                " blocked"
            } else {
                ""
            };
            print!("  {} {}/{}{}", system.system, system.charge, system.max, blocked);
        }
        println!();
        if let Some(board) = &own.engineering {
            show_engineering(board);
        }
        if let Some(mines) = &own.mines {
            for (index, &mine) in mines.iter().enumerate() {
                println!("  mine {} at {}", index, Label(mine));
            }
        }
        if own.surfaced {
            println!("You are surfaced, dive before moving.");
        }
        if let (true, Some(sector)) = (enemy.surfaced, enemy.sector) {
            println!("The enemy is surfaced in sector {}.", sector);
        }
    }
    if let Some(bonus) = snapshot.surface_bonus {
        println!(
            "The {} crew has {} bonus turn(s) left.",
            bonus.team, bonus.turns_remaining
        );
    }
    show_board(game, team);
}

/// Print the engineering board, one line per section.
fn show_engineering(board: &BoardView) {
    let sections = [
        (Direction::North, &board.north),
        (Direction::South, &board.south),
        (Direction::East, &board.east),
        (Direction::West, &board.west),
    ];
    for (dir, nodes) in sections.iter() {
        print!("  {:<6}", dir);
        for node in nodes.iter() {
            let color = match node.color {
                Color::Red => 'R',
                Color::Green => 'G',
                Color::Yellow => 'Y',
                Color::Radiation => '!',
            };
            let circuit = node
                .circuit
                .map_or(' ', |c| char::from(b'0' + c));
            let mark = if node.marked { 'x' } else { ' ' };
            print!("[{}{}{}]", mark, color, circuit);
        }
        println!();
    }
}

/// Print the map as seen by `team`: its own submarine, trail and mines.
fn show_board(game: &Game, team: Team) {
    enum Glyph {
        Water,
        Island,
        Trail,
        Mine,
        Submarine,
    }
    impl fmt::Display for Glyph {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Glyph::Water => f.pad("~"),
                Glyph::Island => f.pad("#"),
                Glyph::Trail => f.pad("."),
                Glyph::Mine => f.pad("*"),
                Glyph::Submarine => f.pad("@"),
            }
        }
    }
    let map = game.map();
    let sub = game.submarine(team);
    print!("    ");
    for col in 0..map.cols() {
        print!("{:^3}", column_label(col));
    }
    println!();
    for (row, cells) in map.iter_cells().enumerate() {
        print!("{:>3} ", row);
        for cell in cells {
            let glyph = if sub.position() == Some(cell) {
                Glyph::Submarine
            } else if sub.has_mine_at(&cell) {
                Glyph::Mine
            } else if sub.visited(&cell) {
                Glyph::Trail
            } else if map.is_island(&cell) {
                Glyph::Island
            } else {
                Glyph::Water
            };
            print!("{:^3}", glyph);
        }
        println!();
    }
}

/// Display helper that prints a cell as row number and column letters.
struct Label(Cell);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.0.row, column_label(self.0.col))
    }
}

/// Display helper that describes an event in words.
struct Describe<'a>(&'a Event);

impl fmt::Display for Describe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            Event::Placed { team } => write!(f, "The {} submarine is in the water.", team),
            Event::PositionChanged { cell, .. } => write!(f, "Position: {}.", Label(cell)),
            Event::GameStarted { first } => write!(f, "The hunt begins, {} goes first.", first),
            Event::TurnStarted { team, turn } => write!(f, "Turn {}: {} crew.", turn, team),
            Event::TurnEnded { team } => write!(f, "The {} crew ends its turn.", team),
            Event::Moved { team, direction } => write!(f, "{} heads {}.", team, direction),
            Event::Surfaced {
                team,
                sector,
                bonus_turns,
            } => write!(
                f,
                "{} surfaced in sector {}. {} gets {} turns.",
                team,
                sector,
                team.other(),
                bonus_turns
            ),
            Event::Dived { team } => write!(f, "{} dives.", team),
            Event::Blackout { team } => write!(f, "{} is boxed in and must surface!", team),
            Event::NodeMarked {
                direction, index, ..
            } => write!(f, "Engineer marked {} node {}.", direction, index),
            Event::CircuitCleared { circuit, .. } => {
                write!(f, "Circuit {} completed and repaired.", circuit)
            }
            Event::Overload { overload, .. } => match overload {
                Overload::Direction { direction } => {
                    write!(f, "The {} section overloaded!", direction)
                }
                Overload::Radiation => write!(f, "Radiation overload!"),
            },
            Event::SystemCharged {
                system, charge, max, ..
            } => write!(f, "{} charged to {}/{}.", system, charge, max),
            Event::SystemActivated { team, system } => write!(f, "{} activates {}.", team, system),
            Event::TorpedoFired { team, target } => {
                write!(f, "{} fires a torpedo at {}.", team, Label(target))
            }
            Event::MinePlaced { cell, .. } => write!(f, "Mine laid at {}.", Label(cell)),
            Event::MineDetonated { team, cell } => {
                write!(f, "{} detonates a mine at {}.", team, Label(cell))
            }
            Event::MineDestroyed { cell, .. } => {
                write!(f, "Your mine at {} was destroyed.", Label(cell))
            }
            Event::DroneResult {
                team,
                sector,
                found,
            } => write!(
                f,
                "{}'s drone {} the enemy in sector {}.",
                team,
                if found { "found" } else { "did not find" },
                sector
            ),
            Event::SonarResult {
                responder, claims, ..
            } => write!(
                f,
                "{} answers the sonar: {} or {}, one of them is true.",
                responder, claims[0], claims[1]
            ),
            Event::StealthUsed { team } => write!(f, "{} goes silent.", team),
            Event::Damage {
                team,
                amount,
                health,
                cause,
            } => match cause {
                DamageCause::Explosion { cell } => write!(
                    f,
                    "{} takes {} damage from the blast at {}, {} left.",
                    team,
                    amount,
                    Label(cell),
                    health
                ),
                DamageCause::Overload => write!(
                    f,
                    "{} takes {} damage from the overload, {} left.",
                    team, amount, health
                ),
            },
            Event::GameOver { winner, loser } => {
                write!(f, "The {} submarine sinks. {} wins!", loser, winner)
            }
        }
    }
}

/// Helper to read input from the players.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(line: &str) -> Option<Action> {
        match parse_command(Team::Red, line) {
            Some(Command::Act(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn parses_captain_orders() {
        assert_eq!(
            act("n"),
            Some(Action::Move {
                team: Team::Red,
                direction: Direction::North
            })
        );
        assert_eq!(
            act("stealth e 3"),
            Some(Action::Stealth {
                team: Team::Red,
                direction: Direction::East,
                steps: 3
            })
        );
        assert_eq!(act("move sideways"), None);
    }

    #[test]
    fn parses_targets_with_letter_columns() {
        assert_eq!(
            act("torpedo 3 c"),
            Some(Action::FireTorpedo {
                team: Team::Red,
                target: Cell::new(3, 2)
            })
        );
        assert_eq!(
            act("mine at 0, 27"),
            Some(Action::PlaceMine {
                team: Team::Red,
                target: Cell::new(0, 27)
            })
        );
        assert_eq!(
            act("fire 1 aa"),
            Some(Action::FireTorpedo {
                team: Team::Red,
                target: Cell::new(1, 26)
            })
        );
    }

    #[test]
    fn parses_sonar_answers() {
        assert_eq!(
            act("answer row 4 sector 2"),
            Some(Action::RespondSonar {
                team: Team::Red,
                claims: [SonarClaim::Row(4), SonarClaim::Sector(2)]
            })
        );
        assert_eq!(act("answer depth 4 sector 2"), None);
    }
}
