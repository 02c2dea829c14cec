//! Use case implementations

pub mod handle_completion;
pub mod show_quote;

pub use handle_completion::{
    CompletionEvent, CompletionOutcome, HandleCompletionError, HandleCompletionUseCase,
};
pub use show_quote::ShowQuoteUseCase;
