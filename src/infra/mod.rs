pub mod gemini;
pub mod git;
