use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shortlist",
    about = "Rank candidate resumes against a job description with BM25",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a JSON corpus of resumes against a job description
    Rank {
        /// Path to a JSON file containing an array of resume records
        #[arg(short, long)]
        corpus: String,

        /// Path to a text file containing the job description
        #[arg(short, long)]
        job: String,

        /// Print only the top K candidates (default: all)
        #[arg(short, long)]
        top: Option<usize>,

        /// Term-frequency saturation
        #[arg(long, default_value_t = 1.5)]
        k1: f64,

        /// Length-normalization strength (0 to 1)
        #[arg(long, default_value_t = 0.75)]
        b: f64,

        /// Query-term-frequency saturation (0 disables)
        #[arg(long, default_value_t = 0.0)]
        k2: f64,

        /// Use the robust IDF formula instead of the classic one
        #[arg(long)]
        robust_idf: bool,

        /// Skip stop-word removal and stemming
        #[arg(long)]
        plain: bool,

        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}
