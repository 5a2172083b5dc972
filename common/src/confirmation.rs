use std::io;

/// Prompt shown to the operator before an order is confirmed.
pub const CONFIRM_PROMPT: &str = "Order is correct (y/n) ? ";

/// Defines the contract for obtaining the operator's answer to a confirmation prompt.
///
/// Implementations block until one line of text is available. The answer is
/// returned as typed; judging whether it is `y`, `n` or garbage is left to
/// the caller.
pub trait ConfirmationChannel {
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

impl<F> ConfirmationChannel for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self(prompt)
    }
}

/// Answers every prompt with the same text.
#[derive(Debug, Clone)]
pub struct FixedAnswer(pub String);

impl FixedAnswer {
    pub fn yes() -> Self {
        Self(String::from("y"))
    }
}

impl ConfirmationChannel for FixedAnswer {
    fn ask(&mut self, _prompt: &str) -> io::Result<String> {
        Ok(self.0.clone())
    }
}
