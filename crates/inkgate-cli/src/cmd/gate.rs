use crate::output::{print_json, print_table};
use anyhow::{bail, Context};
use clap::Subcommand;
use inkgate_core::{
    booking::BookingRequest,
    config::Config,
    gate::{EligibilityGate, GateStep},
    question::{self, Question},
    source::{ConfigStore, QuestionSource},
};
use std::io::Write;
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand definition
// ---------------------------------------------------------------------------

#[derive(Subcommand, Debug)]
pub enum GateSubcommand {
    /// Walk the screening questions and report the outcome
    Run {
        /// Artist slug (default: the studio's primary artist)
        #[arg(long)]
        artist: Option<String>,
        /// Scripted answers, e.g. "no,no,no,no,no,yes" (skips the prompts)
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<String>>,
        /// Create a booking request for this client on a pass
        #[arg(long)]
        client: Option<String>,
        /// Client contact, stored on the booking request
        #[arg(long)]
        contact: Option<String>,
        /// Short description of the tattoo idea
        #[arg(long)]
        idea: Option<String>,
    },
    /// List the active question set
    Questions,
}

pub fn run(root: &Path, subcommand: GateSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        GateSubcommand::Run {
            artist,
            answers,
            client,
            contact,
            idea,
        } => run_gate(root, artist, answers, client, contact, idea, json),
        GateSubcommand::Questions => list_questions(root, json),
    }
}

// ---------------------------------------------------------------------------
// questions
// ---------------------------------------------------------------------------

fn list_questions(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = ConfigStore::new(root);
    let questions = match store.active_questions() {
        Ok(q) if !q.is_empty() => question::normalize(q),
        _ => question::default_questions(),
    };

    if json {
        print_json(&questions)?;
    } else {
        let rows = questions
            .iter()
            .map(|q| {
                vec![
                    q.order.to_string(),
                    q.key.to_string(),
                    q.prompt.clone(),
                ]
            })
            .collect();
        print_table(&["ORDER", "KEY", "PROMPT"], rows);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

fn run_gate(
    root: &Path,
    artist: Option<String>,
    answers: Option<Vec<String>>,
    client: Option<String>,
    contact: Option<String>,
    idea: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let store = ConfigStore::new(root);
    let locale = Config::load(root).map(|c| c.locale).unwrap_or_default();
    let mut gate = EligibilityGate::start(&store, &store, artist.as_deref(), locale);

    let mut scripted = answers.map(Vec::into_iter);
    loop {
        let Some(question) = gate.current_question().cloned() else {
            break;
        };
        let value = match scripted.as_mut() {
            Some(it) => match it.next() {
                Some(raw) => parse_answer(&raw)
                    .with_context(|| format!("answer for '{}'", question.key))?,
                None => bail!("ran out of scripted answers at '{}'", question.key),
            },
            None => prompt_answer(&question)?,
        };
        match gate.answer(question.key, value)? {
            GateStep::Present { .. } => continue,
            GateStep::Blocked { .. } | GateStep::Passed { .. } => break,
        }
    }

    let result = gate
        .result()
        .cloned()
        .context("gate did not reach a terminal state")?;

    if json {
        print_json(&result)?;
    } else if result.passed {
        println!("Outcome: passed ({} answers recorded)", result.responses.len());
    } else {
        for reason in &result.block_reasons {
            println!("Outcome: blocked ({})", reason.reason_code);
            println!("{}", reason.message);
        }
    }

    if result.passed {
        if let Some(client) = client {
            let booking = BookingRequest::from_gate(&result, client, contact, idea, artist)?;
            booking.save(root)?;
            if json {
                print_json(&serde_json::json!({ "booking_id": booking.id }))?;
            } else {
                println!("Booking request {} created", booking.id);
            }
        }
    }

    Ok(())
}

fn parse_answer(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        other => bail!("expected yes/no, got '{other}'"),
    }
}

fn prompt_answer(question: &Question) -> anyhow::Result<bool> {
    loop {
        print!("{} [y/n] ", question.prompt);
        std::io::stdout().flush()?;
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            bail!("stdin closed before '{}' was answered", question.key);
        }
        match parse_answer(&line) {
            Ok(value) => return Ok(value),
            Err(_) => println!("please answer y or n"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_accepts_common_forms() {
        for raw in ["y", "YES", "true", "1", " yes "] {
            assert!(parse_answer(raw).unwrap());
        }
        for raw in ["n", "No", "false", "0"] {
            assert!(!parse_answer(raw).unwrap());
        }
        assert!(parse_answer("maybe").is_err());
    }
}
