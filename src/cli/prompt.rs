//! Line-based prompts: free text, yes/no and integers with defaults.

use crate::error::PromptError;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{BufRead, Write};

/// Asks questions on `output` and reads the answers line by line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Free text, returned without the line terminator.
    pub fn text(&mut self, question: &str) -> Result<String, PromptError> {
        self.ask(question, None)
    }

    /// Yes/no choice. An empty answer takes `default`; anything unrecognised asks again.
    pub fn yes_no(&mut self, question: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let answer = self.ask(question, Some(hint))?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.warn("please answer yes or no")?,
            }
        }
    }

    /// Non-negative integer. An empty answer takes `default`; an invalid number asks again.
    pub fn number(&mut self, question: &str, default: usize) -> Result<usize, PromptError> {
        let hint = default.to_string();
        loop {
            let answer = self.ask(question, Some(&hint))?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse() {
                Ok(n) => return Ok(n),
                Err(_) => self.warn("invalid number")?,
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn ask(&mut self, question: &str, hint: Option<&str>) -> Result<String, PromptError> {
        queue!(
            self.output,
            SetForegroundColor(Color::Green),
            SetAttribute(Attribute::Bold),
            Print(question),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        if let Some(hint) = hint {
            queue!(self.output, Print(format!(" [{}]", hint)))?;
        }
        queue!(self.output, Print("\n> "))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn warn(&mut self, message: &str) -> Result<(), PromptError> {
        queue!(
            self.output,
            SetForegroundColor(Color::Red),
            Print(message),
            ResetColor,
            Print("\n")
        )?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(p.output()).into_owned()
    }

    #[test]
    fn text_keeps_inner_spaces() {
        let mut p = prompter("Simran Kaur \r\n");
        assert_eq!(p.text("Words?").unwrap(), "Simran Kaur ");
        assert!(printed(&p).contains("Words?"));
    }

    #[test]
    fn yes_no_defaults_and_retries() {
        let mut p = prompter("\nmaybe\nNO\n");
        assert!(p.yes_no("Allow?", true).unwrap());
        assert!(!p.yes_no("Allow?", true).unwrap());
        assert!(printed(&p).contains("please answer yes or no"));
        assert!(printed(&p).contains("[Y/n]"));
    }

    #[test]
    fn number_reprompts_on_invalid_input() {
        let mut p = prompter("five\n-3\n 12 \n");
        assert_eq!(p.number("Min Letters?", 5).unwrap(), 12);
        assert_eq!(printed(&p).matches("invalid number").count(), 2);
    }

    #[test]
    fn number_empty_answer_takes_default() {
        let mut p = prompter("\n");
        assert_eq!(p.number("Word Count?", 50).unwrap(), 50);
        assert!(printed(&p).contains("[50]"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(matches!(p.text("Words?"), Err(PromptError::InputClosed)));
    }
}
