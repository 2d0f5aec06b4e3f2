//! Resume review pipeline: extract → prompt → complete → tag.

pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod tagger;
