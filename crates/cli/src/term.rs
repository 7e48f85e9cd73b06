// Terminal prompts - the stdin/stdout stand-in for the host UI's modal dialogs

use std::io::{BufRead, BufReader, Stderr, Stdin, Stdout, Write};

use viralscout_wizard::{Reply, UserPrompt};

/// Line-based prompts over a reader/writer pair. End-of-input (Ctrl-D)
/// plays the role of the dialog's Cancel button.
pub struct TerminalPrompt<R: BufRead, W: Write, E: Write> {
    input: R,
    out: W,
    err: E,
}

impl TerminalPrompt<BufReader<Stdin>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            out: std::io::stdout(),
            err: std::io::stderr(),
        }
    }
}

impl<R: BufRead, W: Write, E: Write> TerminalPrompt<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }
}

impl<R: BufRead, W: Write, E: Write> UserPrompt for TerminalPrompt<R, W, E> {
    fn ask(&mut self, title: &str, body: &str) -> Reply {
        let _ = writeln!(self.out, "== {} ==", title);
        let _ = writeln!(self.out, "{}", body);
        let _ = write!(self.out, "> ");
        let _ = self.out.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                let _ = writeln!(self.out);
                Reply::Cancelled
            }
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Reply::Text(line)
            }
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.err, "error: {}", message);
    }

    fn toast(&mut self, message: &str, title: &str, _seconds: u32) {
        // Nothing transient about a terminal line; the dismiss hint is moot
        let _ = writeln!(self.out, "[{}] {}", title, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    #[test]
    fn test_ask_returns_line_without_terminator() {
        let mut p = prompt("1\n");
        assert_eq!(p.ask("t", "b"), Reply::Text("1".into()));
    }

    #[test]
    fn test_ask_strips_crlf() {
        let mut p = prompt("2\r\n");
        assert_eq!(p.ask("t", "b"), Reply::Text("2".into()));
    }

    #[test]
    fn test_eof_is_cancel() {
        let mut p = prompt("");
        assert_eq!(p.ask("t", "b"), Reply::Cancelled);
    }

    #[test]
    fn test_ask_echoes_title_and_body() {
        let mut p = prompt("1\n");
        p.ask("Step 1: choose the target sheet", "[1] Blog");
        let shown = String::from_utf8(p.out).unwrap();
        assert!(shown.contains("Step 1"));
        assert!(shown.contains("[1] Blog"));
    }

    #[test]
    fn test_alert_goes_to_err_stream() {
        let mut p = prompt("");
        p.alert("No data to sort.");
        assert!(p.out.is_empty());
        assert!(String::from_utf8(p.err).unwrap().contains("No data to sort."));
    }

    #[test]
    fn test_toast_names_title() {
        let mut p = prompt("");
        p.toast("Blog sheet sorted.", "Done", 5);
        let shown = String::from_utf8(p.out).unwrap();
        assert!(shown.contains("[Done]"));
        assert!(shown.contains("Blog sheet sorted."));
    }
}
