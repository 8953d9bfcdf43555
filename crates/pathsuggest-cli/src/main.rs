use std::io::{self, Write};

use clap::Parser;
use pathsuggest::{DirectoryLister, FsDirectoryLister, extract_dir, list_suggestions};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::picker::Picker;
use crate::session::CompletionSession;

mod cli;
mod input;
mod logging;
mod picker;
mod runtime;
mod session;
mod ui;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let home = cli.home_dir();
    let lister = FsDirectoryLister;
    debug!(%home, max_results = cli.max_results, "starting pathsuggest");

    let lines = match cli.command.unwrap_or(Command::Pick { initial: None }) {
        Command::Complete { input } => list_suggestions(&input, &home, &lister, cli.max_results),
        Command::Boundary { input } => vec![extract_dir(&input, &home)],
        Command::Pick { initial } => {
            let session = CompletionSession::new(home, cli.max_results);
            pick(initial.unwrap_or_default(), session, &lister)?
                .into_iter()
                .collect()
        }
    };

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }

    stdout.flush()
}

fn pick(
    initial: String,
    session: CompletionSession,
    lister: &dyn DirectoryLister,
) -> io::Result<Option<String>> {
    let mut picker = Picker::new(initial, session, lister);

    runtime::run(&mut picker)
}
