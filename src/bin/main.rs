mod cli {
    pub(crate) mod verbosity;
}

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use drawable::{
    script::DEMO,
    session::{Options, Session},
};
use std::{
    borrow::Cow,
    io::{self, Read, Write},
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(author, about, version)]
#[command(long_version(option_env!("LONG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))))]
struct Cli {
    /// Script to run, `-` to read it from stdin. Runs the demo when omitted.
    #[arg(value_hint = ValueHint::FilePath)]
    script: Option<PathBuf>,

    /// Position the document is drawn at
    #[arg(long, default_value_t = 0)]
    indent: usize,

    /// Width of the rule printed after each draw, 0 to disable it
    #[arg(long, default_value_t = 50)]
    rule_width: usize,

    /// Report failing commands and carry on with the rest of the script
    #[arg(long)]
    keep_going: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    fn read_script(&self) -> Result<Cow<'static, str>> {
        let script = match &self.script {
            None => Cow::Borrowed(DEMO),
            Some(path) if path.as_os_str() == "-" => {
                let mut script = String::new();
                io::stdin()
                    .read_to_string(&mut script)
                    .context("Read script from stdin")?;
                Cow::Owned(script)
            }
            Some(path) => Cow::Owned(
                std::fs::read_to_string(path)
                    .with_context(|| format!("Read script from {}", path.display()))?,
            ),
        };
        Ok(script)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::verbosity::configure(&cli.verbosity)?;

    let script = cli.read_script()?;
    let options = Options {
        indent: cli.indent,
        rule_width: cli.rule_width,
        keep_going: cli.keep_going,
    };

    let stdout = io::stdout();
    let mut session = Session::new(io::BufWriter::new(stdout.lock()), options);
    session.run(&script)?;
    session.into_inner().flush()?;
    Ok(())
}
