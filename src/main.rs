//! Wordle - CLI
//!
//! Play in a TUI (default) or line mode, manage a local account, view
//! statistics, or let a bot play many games.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wordle_game::{
    account::{LocalAccounts, SignUp},
    commands::{self, StatsTarget, load_statistics, run_simple, run_simulation},
    config::{self, Config},
    output::{print_profile, print_simulation_summary, print_statistics},
    telemetry::{self, TelemetryConfig},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(name = "wordle_game", about = "Guess the five-letter word in six tries", version, author)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (default: <config dir>/wordle-game/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one five-letter word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Show statistics for the signed-in player or this device
    Stats,

    /// Create an account and sign in
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Prompted for if omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign in with a username or email
    Login {
        login: String,
        /// Prompted for if omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out; statistics go to this device again
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Show the effective configuration
    Config {
        /// Write it to the config file instead (fails if the file exists)
        #[arg(long)]
        init: bool,
    },

    /// Let a bot play many games and report its statistics
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible runs (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref()).context("loading configuration")?;
    let data_dir = config.data_dir();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let telemetry = TelemetryConfig::new(cli.verbose, config.logging.clone(), data_dir.clone());
    let telemetry = if matches!(command, Commands::Play) {
        telemetry.for_interactive()
    } else {
        telemetry
    };
    let _telemetry = telemetry::init(telemetry);

    let word_list = cli.word_list.or_else(|| config.word_list.clone());

    match command {
        Commands::Play => run_play_command(word_list.as_deref(), &data_dir),
        Commands::Simple => run_simple_command(word_list.as_deref(), &data_dir),
        Commands::Stats => run_stats_command(&data_dir),
        Commands::Signup {
            first_name,
            last_name,
            username,
            email,
            password,
        } => {
            let password = password_or_prompt(password)?;
            let details = SignUp {
                first_name,
                last_name,
                username,
                email,
                password,
            };
            let mut accounts = accounts(&config, &data_dir);
            let session = commands::account::sign_up(&mut accounts, &data_dir, &details)?;
            println!("Welcome, {}! You are signed in.", session.username);
            Ok(())
        }
        Commands::Login { login, password } => {
            let password = password_or_prompt(password)?;
            let mut accounts = accounts(&config, &data_dir);
            let session = commands::account::sign_in(&mut accounts, &data_dir, &login, &password)?;
            println!("Signed in as {}.", session.username);
            Ok(())
        }
        Commands::Logout => {
            match commands::account::sign_out(&data_dir)? {
                Some(session) => println!("Signed out {}.", session.username),
                None => println!("Nobody is signed in."),
            }
            Ok(())
        }
        Commands::Whoami => {
            let accounts = accounts(&config, &data_dir);
            match commands::account::who_am_i(&accounts, &data_dir)? {
                Some(profile) => print_profile(&profile),
                None => println!("Not signed in; statistics are kept for this device."),
            }
            Ok(())
        }
        Commands::Config { init } => {
            let path = cli.config.clone().unwrap_or_else(config::config_path);
            run_config_command(&config, &path, init)
        }
        Commands::Simulate { count, seed } => run_simulate_command(word_list.as_deref(), count, seed),
    }
}

fn load_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("loading word list {}", path.display())),
        None => WordList::embedded().context("loading built-in word list"),
    }
}

fn accounts(config: &Config, data_dir: &Path) -> LocalAccounts {
    LocalAccounts::in_dir(data_dir, config.auth.into())
}

fn password_or_prompt(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("no password given");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run_play_command(word_list: Option<&Path>, data_dir: &Path) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let words = load_words(word_list)?;
    let (recorder, label) = StatsTarget::resolve(data_dir)?.into_recorder();
    let app = App::new(&words, recorder, label, StdRng::from_os_rng());
    run_tui(app)
}

fn run_simple_command(word_list: Option<&Path>, data_dir: &Path) -> Result<()> {
    let words = load_words(word_list)?;
    let (mut recorder, label) = StatsTarget::resolve(data_dir)?.into_recorder();
    println!("Playing as {label}");
    run_simple(&words, &mut recorder)
}

fn run_stats_command(data_dir: &Path) -> Result<()> {
    let target = StatsTarget::resolve(data_dir)?;
    let stats = load_statistics(&target)?;
    print_statistics(&target.label, &stats);
    Ok(())
}

fn run_config_command(config: &Config, path: &Path, init: bool) -> Result<()> {
    if init {
        commands::config::init(path, config)?;
        println!("Wrote {}", path.display());
    } else {
        println!("# {}", path.display());
        print!("{}", commands::config::render(config)?);
    }
    Ok(())
}

fn run_simulate_command(word_list: Option<&Path>, count: usize, seed: Option<u64>) -> Result<()> {
    let words = load_words(word_list)?;
    let seed = seed.unwrap_or_else(rand::random);

    println!("\n{}", "═".repeat(50));
    println!(" Simulating {count} games over {} words ", words.len());
    println!(" Seed: {seed}");
    println!("{}", "═".repeat(50));

    let report = run_simulation(&words, count, seed, true);
    print_simulation_summary(&report);
    Ok(())
}
