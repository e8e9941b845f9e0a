use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;

use shortlist::{
    Analyzer, Bm25Params, Corpus, Document, Education, IdfVariant, Ranker, RankerConfig,
};

mod cli;
use cli::{Cli, Commands};

/// One resume record as stored in the corpus JSON file.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct ResumeRecord {
    resume_id: String,
    resume_text: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    education: Vec<Education>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            corpus,
            job,
            top,
            k1,
            b,
            k2,
            robust_idf,
            plain,
            json,
        } => {
            let params = Bm25Params {
                k1,
                b,
                k2,
                idf: if robust_idf {
                    IdfVariant::Robust
                } else {
                    IdfVariant::Classic
                },
            };
            let analyzer = if plain {
                Analyzer::Plain
            } else {
                Analyzer::English
            };

            match run_rank(&corpus, &job, top, params, analyzer, json) {
                Ok(()) => ExitCode::SUCCESS,
                Err(message) => {
                    eprintln!("error: {}", message);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run_rank(
    corpus_path: &str,
    job_path: &str,
    top: Option<usize>,
    params: Bm25Params,
    analyzer: Analyzer,
    json: bool,
) -> Result<(), String> {
    let records = load_records(corpus_path)?;
    let job_description = fs::read_to_string(job_path)
        .map_err(|e| format!("failed to read {}: {}", job_path, e))?;

    let mut corpus = Corpus::new();
    for record in records {
        // Records without text can never score; drop them at the edge.
        if record.resume_text.trim().is_empty() {
            continue;
        }
        corpus.push(Document::with_metadata(
            record.resume_id,
            record.resume_text,
            record.location,
            record.skills,
            record.education,
            &analyzer,
        ));
    }

    let ranker = Ranker::new(corpus, RankerConfig { params, analyzer })
        .map_err(|e| e.to_string())?;
    let mut ranked = ranker.rank(&job_description).map_err(|e| e.to_string())?;

    if let Some(top) = top {
        ranked.truncate(top);
    }

    if json {
        let payload = serde_json::to_string_pretty(&ranked)
            .map_err(|e| format!("failed to serialize results: {}", e))?;
        println!("{}", payload);
    } else {
        for entry in &ranked {
            println!("{}\t{:.4}", entry.doc_id, entry.score);
        }
    }

    Ok(())
}

fn load_records(path: &str) -> Result<Vec<ResumeRecord>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid corpus JSON in {}: {}", path, e))
}
