//! Line-based terminal front-end. Holds no game rules of its own: it parses a
//! line, hands it to the [`Session`], and redraws.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

use crate::functions::games::number_guess::{RandomSource, Session};

mod command;
pub use command::Command;

mod render;
pub use render::{render, Screen, HELP};

const PROMPT: &str = "> ";

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("terminal io error: {0}")]
    #[event(level = ERROR)]
    Io(#[from] std::io::Error),
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Redraw,
    Notice(&'static str),
    Quit,
}

pub fn apply<R: RandomSource>(session: &mut Session<R>, command: Command) -> Step {
    debug!(?command);

    match command {
        Command::Guess(raw) => {
            session.submit(&raw);
            Step::Redraw
        }
        Command::Difficulty(difficulty) => {
            session.select_difficulty(difficulty);
            Step::Redraw
        }
        Command::Rules => {
            session.toggle_rules();
            Step::Redraw
        }
        Command::Again if session.round().is_over() => {
            session.play_again();
            Step::Redraw
        }
        Command::Again => Step::Notice("the round isn't over yet"),
        Command::Help => Step::Notice(HELP),
        Command::Quit => Step::Quit,
    }
}

/// Runs until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run<R, I, O>(session: &mut Session<R>, input: I, output: &mut O) -> Result<(), Error>
where
    R: RandomSource,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    draw(output, &render(session)).await?;

    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        match apply(session, Command::parse(&line)) {
            Step::Redraw => draw(output, &render(session)).await?,
            Step::Notice(text) => draw(output, &format!("{text}\n")).await?,
            Step::Quit => break,
        }
    }

    info!("bye!");

    Ok(())
}

/// Plays on stdin/stdout until the player quits or hits ctrl-c.
pub async fn play<R: RandomSource>(session: &mut Session<R>) -> Result<(), Error> {
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    tokio::select! {
        result = run(session, input, &mut output) => result,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupted");
            Ok(())
        }
    }
}

async fn draw<O: AsyncWrite + Unpin>(output: &mut O, text: &str) -> std::io::Result<()> {
    output.write_all(b"\n").await?;
    output.write_all(text.as_bytes()).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await
}
