/// What came back from a modal prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The user confirmed with this (untrimmed) text.
    Text(String),
    /// The user dismissed the prompt without answering.
    Cancelled,
}

/// The wizard's window onto the user.
///
/// Every interaction is blocking and modal; the wizard issues at most one
/// alert and at most one toast per invocation.
pub trait UserPrompt {
    /// Show a titled question and wait for the reply.
    fn ask(&mut self, title: &str, body: &str) -> Reply;

    /// Blocking error message.
    fn alert(&mut self, message: &str);

    /// Transient confirmation; `seconds` is an auto-dismiss hint that
    /// implementations without transient surfaces may ignore.
    fn toast(&mut self, message: &str, title: &str, seconds: u32);
}
