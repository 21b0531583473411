//! prompt-sanitizer: wrap untrusted external content for LLM prompts
//!
//! Reads content from stdin, a file, or a command and prints it inside
//! `<<<EXTERNAL_UNTRUSTED_CONTENT>>>` boundary markers.

use anyhow::Result;

fn main() -> Result<()> {
    prompt_sanitizer::cli::run()
}
