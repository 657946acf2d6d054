use std::io::{self, BufWriter};

use clap::{Arg, ArgAction, Command};
use fen2eps::batch::{self, Output};
use fen2eps::font::{DEFAULT_FONT_FILE, FontFile};
use fen2eps::render::RenderOptions;

fn cli() -> Command {
    Command::new("fen2eps")
        .about("Converts FEN positions read from stdin into EPS chess diagrams")
        .disable_help_flag(true)
        .disable_version_flag(true)
        // unknown options are not an error
        .ignore_errors(true)
        .arg(
            Arg::new("font")
                .short('f')
                .long("font")
                .value_name("FILE")
                .help("Reads the font definitions from FILE")
                .default_value(DEFAULT_FONT_FILE),
        )
        .arg(
            Arg::new("no-notation")
                .short('n')
                .long("no-notation")
                .action(ArgAction::SetTrue)
                .help("Exports the board diagrams without notation"),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .value_name("PREFIX")
                .help("Writes one file per FEN line, named PREFIX followed by a running number"),
        )
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .action(ArgAction::SetTrue)
                .help("Displays the boards reversed"),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .short_alias('?')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Prints this message"),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Prints the version"),
        )
        .after_help(
            "Examples:\n  fen2eps -r < a.fen > a.eps\n  fen2eps -n -p diag -f fed/alpha.fed < a.fen",
        )
}

fn main() -> miette::Result<()> {
    // Documents go to stdout, so logs go to stderr
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut cmd = cli();
    let matches = cmd.get_matches_mut();

    if matches.get_flag("help") {
        eprintln!("{}", cmd.render_long_help());
        return Ok(());
    }
    if matches.get_flag("version") {
        println!("fen2eps {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let font = matches
        .get_one::<String>("font")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FONT_FILE);
    let options = RenderOptions::new()
        .with_notation(!matches.get_flag("no-notation"))
        .with_reverse(matches.get_flag("reverse"));
    let output = match matches.get_one::<String>("prefix") {
        Some(prefix) => Output::Files {
            prefix: prefix.clone(),
        },
        None => Output::Stdout,
    };

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    batch::run(FontFile::new(font), options, output, stdin, &mut stdout)?;
    Ok(())
}
