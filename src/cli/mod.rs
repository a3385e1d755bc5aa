use crate::functions::games::number_guess::Difficulty;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Guess the secret number")]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(long)]
    pub config: Option<crate::framework::config::env::Path>,

    /// Difficulty of the first round.
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Fixed seed for the number picker.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(clap::Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved config and exit.
    Config,

    /// Play in the terminal.
    #[default]
    Play,
}
