pub mod llm;
pub mod mail;
