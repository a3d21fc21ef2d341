use anyhow::{anyhow, Result};
use clap::ArgMatches;
use mystic::scenario::{Difficulty, Scenario};
use mystic::search::Strategy;
use mystic::square::SquareState;

const DEFAULT_ALGORITHM: &str = "a-star";
const DEFAULT_DIFFICULTY: &str = "easy";

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    strategy: Strategy,
    compare: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = match (matches.value_of("initial"), matches.value_of("target")) {
            (Some(initial), Some(target)) => Source::Layout {
                initial: initial.parse()?,
                target: target.parse()?,
            },
            (None, None) => Source::Difficulty(
                matches
                    .value_of("difficulty")
                    .unwrap_or(DEFAULT_DIFFICULTY)
                    .parse()?,
            ),
            _ => return Err(anyhow!("--initial and --target must be used together")),
        };
        Ok(Self {
            source,
            strategy: matches
                .value_of("algorithm")
                .unwrap_or(DEFAULT_ALGORITHM)
                .parse()?,
            compare: matches.is_present("compare"),
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// run every strategy and print a summary instead of the path
    pub fn compare(&self) -> bool {
        self.compare
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    Difficulty(Difficulty),
    Layout {
        initial: SquareState,
        target: SquareState,
    },
}

impl Source {
    pub fn scenario(&self) -> Result<Scenario> {
        let scenario = match self {
            Source::Difficulty(difficulty) => difficulty.scenario()?,
            Source::Layout { initial, target } => Scenario {
                initial: initial.clone(),
                target: target.clone(),
            },
        };
        Ok(scenario)
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Mystic")
        .about("Find the shortest solution to a 3x3 sliding tile puzzle")
        .after_help(
            "Layouts list the nine cells row by row, e.g. \"_ 1 2 / 4 6 3 / 7 5 8\". \
             The blank is written as _ or 9.",
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .value_name("ALGORITHM")
                .help("search algorithm: a-star (1), dijkstra (2) or bfs (3)")
                .default_value(DEFAULT_ALGORITHM),
        )
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .takes_value(true)
                .value_name("DIFFICULTY")
                .help("built-in puzzle: easy (1), hard (2) or no-path (3)")
                .conflicts_with_all(&["initial", "target"]),
        )
        .arg(
            Arg::with_name("initial")
                .short("i")
                .long("initial")
                .takes_value(true)
                .value_name("LAYOUT")
                .requires("target")
                .help("the starting layout"),
        )
        .arg(
            Arg::with_name("target")
                .short("t")
                .long("target")
                .takes_value(true)
                .value_name("LAYOUT")
                .requires("initial")
                .help("the layout to reach"),
        )
        .arg(
            Arg::with_name("compare")
                .short("c")
                .long("compare")
                .help("run every algorithm and compare the results"),
        )
}
