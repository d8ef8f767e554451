pub mod answer;
pub mod metrics;
pub mod providers;

pub use answer::{build_prompt, get_answer, AnswerError};
