use clap::{Args, Parser, Subcommand};

/// Determines which knight/knave identities are consistent with what two islanders say.
#[derive(Parser, Debug)]
#[command(name = "knights_knaves", version, about, long_about = None)]
pub(super) struct Cli {
    /// Write results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(super) enum Commands {
    /// The truth table of a statement made by one speaker.
    Table(TableArgs),

    /// The first assignment consistent with statements made by either speaker.
    Puzzle(PuzzleArgs),
}

#[derive(Args, Debug)]
pub(super) struct TableArgs {
    /// The speaker, A or B.
    #[arg(short, long)]
    pub speaker: Option<String>,

    /// The statement, in `p` (about A) and `q` (about B).
    ///
    /// Connectives may be written ¬ ∧ ∨ → ↔, or ~ & | -> <->, or as the words not, and, or.
    #[arg(long)]
    pub statement: Option<String>,

    /// The identity `p` asserts of A, e.g. knight or knave.
    #[arg(long)]
    pub identity_a: Option<String>,

    /// The identity `q` asserts of B, e.g. knight or knave.
    #[arg(long)]
    pub identity_b: Option<String>,
}

#[derive(Args, Debug)]
pub(super) struct PuzzleArgs {
    /// A statement and its speaker, e.g. "A: p ∧ ¬q".
    ///
    /// Here, `p` is "A is a knight" and `q` is "B is a knight".
    #[arg(long = "says", value_name = "SPEAKER: STATEMENT")]
    pub says: Vec<String>,
}
