pub mod geometry;
pub mod question;
pub mod evaluate;

pub use evaluate::{correct_selection, evaluate_json, evaluate_visual, sets_equal};
pub use question::{QuestionError, VisualAnswer, VisualQuestion};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
