pub mod gemini;
pub mod newsapi;
