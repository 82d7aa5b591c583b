//! Suggest command: top tasks plus the textual rationale.

use std::path::PathBuf;

use taskrank_core::Engine;

use super::parse_tasks_body;

pub fn run(input: Option<PathBuf>, text: bool) -> Result<(), Box<dyn std::error::Error>> {
    // No input file means the engine falls back to stored tasks.
    let tasks = match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let (tasks, _) = parse_tasks_body(&raw)?;
            Some(tasks)
        }
        None => None,
    };

    let engine = Engine::new()?;
    let suggestion = engine.suggest(tasks.as_deref())?;

    if text {
        println!("{}", suggestion.explanation);
    } else {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    }
    Ok(())
}
