//! Analyze command: score a full batch of tasks.

use std::path::PathBuf;

use taskrank_core::Engine;

use super::{parse_tasks_body, read_input};

pub fn run(input: Option<PathBuf>, save: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input)?;
    let (tasks, body_save) = parse_tasks_body(&raw)?;

    let engine = Engine::new()?;
    let scored = engine.analyze(&tasks, save || body_save)?;

    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}
