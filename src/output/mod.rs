//! Terminal output formatting
//!
//! Display utilities for the console game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_end_screen, print_guess_result, print_help, print_hint, print_introduction,
    print_pool, print_prompt, print_round_summary, print_score,
};
