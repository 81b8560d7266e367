use crate::token::words;
use crate::{Censor, Error, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Asked once, before the word list is loaded, when no path was given up front.
pub const WORDLIST_PROMPT: &str = "Please enter a text file full of filthy, foul utterances:";
/// Any token exactly equal to this (case-sensitive) ends the session.
pub const SENTINEL: &str = "exit";
/// Printed when the session ends normally.
pub const FAREWELL: &str = "Bye!";

const FIRST_PROMPT: &str = "Please enter a phrase that may require reeducating:";
const NEXT_PROMPT: &str = "Please enter another phrase that may require reeducating:";

/// Where a [`Session`] is at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Will prompt for (and censor) another phrase.
    Prompting,
    /// Done, no more input will be read.
    Terminated,
}

/// Returns `true` if `line` contains the [`SENTINEL`] as a whole token, anywhere.
pub fn is_exit(line: &str) -> bool {
    words(line).any(|word| word == SENTINEL)
}

/// Prompts with [`WORDLIST_PROMPT`] and returns the first whitespace separated token of the
/// answer. Nothing usable (end of input, unreadable input or a blank line) yields an empty path,
/// which is left for the subsequent open to reject.
pub fn ask_wordlist_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PathBuf> {
    writeln!(output, "{}", WORDLIST_PROMPT).map_err(Error::Output)?;
    output.flush().map_err(Error::Output)?;

    let mut answer = String::new();
    if let Err(e) = input.read_line(&mut answer) {
        debug!(error = %e, "could not read word list path");
        answer.clear();
    }
    Ok(PathBuf::from(answer.split_whitespace().next().unwrap_or_default()))
}

/// Reads one newline-terminated line, without its terminator. A line cut short by the end of
/// input counts as no line at all.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(Error::InputRead)?;
    if read == 0 || !line.ends_with('\n') {
        return Ok(None);
    }
    line.pop();
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// An interactive censoring session: prompt, read a phrase, print it censored, repeat until the
/// [`SENTINEL`] or the end of input.
pub struct Session<'a, R, W> {
    censor: Censor<'a>,
    input: R,
    output: W,
    state: State,
    /// The first prompt says "a phrase", every later one "another phrase".
    prompted_once: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(censor: Censor<'a>, input: R, output: W) -> Self {
        Self {
            censor,
            input,
            output,
            state: State::Prompting,
            prompted_once: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The prompt the next [`Session::step`] will print.
    pub fn prompt(&self) -> &'static str {
        if self.prompted_once {
            NEXT_PROMPT
        } else {
            FIRST_PROMPT
        }
    }

    /// Runs one prompt/read/print cycle, returning the resulting state. Once terminated, further
    /// calls do nothing.
    ///
    /// Only output failures are errors. Input that cannot be read ends the session like the end of
    /// input does.
    pub fn step(&mut self) -> Result<State> {
        if self.state == State::Terminated {
            return Ok(State::Terminated);
        }

        writeln!(self.output, "{}", self.prompt()).map_err(Error::Output)?;
        self.output.flush().map_err(Error::Output)?;
        self.prompted_once = true;

        let line = match read_line(&mut self.input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("end of input");
                return Ok(self.terminate());
            }
            Err(e) => {
                debug!(error = %e, "ending session");
                return Ok(self.terminate());
            }
        };

        if is_exit(&line) {
            debug!("exit requested");
            return Ok(self.terminate());
        }

        writeln!(self.output, "{}", self.censor.censor(&line)).map_err(Error::Output)?;
        Ok(self.state)
    }

    /// Steps until terminated, then says [`FAREWELL`].
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == State::Prompting {}

        writeln!(self.output, "{}", FAREWELL).map_err(Error::Output)?;
        self.output.flush().map_err(Error::Output)
    }

    fn terminate(&mut self) -> State {
        self.state = State::Terminated;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use crate::{ask_wordlist_path, is_exit, Boundaries, Censor, Denylist, Error, Session, State};
    use std::io::{self, BufReader, Read, Write};
    use std::path::PathBuf;

    const FIRST: &str = "Please enter a phrase that may require reeducating:\n";
    const NEXT: &str = "Please enter another phrase that may require reeducating:\n";

    fn run(words: &str, input: &str) -> String {
        let denylist: Denylist = words.split_whitespace().collect();
        let mut output = Vec::new();
        Session::new(Censor::new(&denylist), input.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    /// Yields `data`, then fails.
    struct FlakyReader<'a> {
        data: &'a [u8],
    }

    impl Read for FlakyReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "terminal vanished"));
            }
            self.data.read(buf)
        }
    }

    /// Accepts nothing.
    struct FullWriter;

    impl Write for FullWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn censors_until_exit() {
        let output = run("foo bar baz", "This is foo.\nexit\nbar\n");

        assert_eq!(
            output,
            format!("{FIRST}This is ***.\n{NEXT}Bye!\n")
        );
    }

    #[test]
    fn exit_prints_nothing() {
        assert_eq!(run("exit", "exit\n"), format!("{FIRST}Bye!\n"));
    }

    #[test]
    fn exit_anywhere_in_line() {
        assert_eq!(run("", "please exit now\n"), format!("{FIRST}Bye!\n"));
        assert_eq!(run("", "(exit)\n"), format!("{FIRST}Bye!\n"));
    }

    #[test]
    fn exit_is_case_sensitive() {
        assert_eq!(
            run("", "Exit\nEXIT\nexits\n"),
            format!("{FIRST}Exit\n{NEXT}EXIT\n{NEXT}exits\n{NEXT}Bye!\n")
        );
    }

    #[test]
    fn each_line_censored_independently() {
        assert_eq!(
            run("damn", "damn\nDAMN\r\nwell, Damn.\n"),
            format!("{FIRST}****\n{NEXT}****\n{NEXT}well, ****.\n{NEXT}Bye!\n")
        );
    }

    #[test]
    fn end_of_input() {
        assert_eq!(run("foo", ""), format!("{FIRST}Bye!\n"));
        assert_eq!(run("foo", "foo\n"), format!("{FIRST}***\n{NEXT}Bye!\n"));
        assert_eq!(run("foo", "\n"), format!("{FIRST}\n{NEXT}Bye!\n"));

        // The unterminated last line is cut short by the end of input.
        assert_eq!(run("foo", "foo\nfoo"), format!("{FIRST}***\n{NEXT}Bye!\n"));
    }

    #[test]
    fn read_failure_terminates() {
        let denylist: Denylist = ["foo"].iter().collect();
        let input = BufReader::new(FlakyReader { data: b"foo bar\n" });
        let mut output = Vec::new();

        let mut session = Session::new(Censor::new(&denylist), input, &mut output);
        assert_eq!(session.state(), State::Prompting);
        assert_eq!(session.step().unwrap(), State::Prompting);
        assert_eq!(session.step().unwrap(), State::Terminated);
        assert_eq!(session.step().unwrap(), State::Terminated);
        drop(session);

        assert_eq!(String::from_utf8(output).unwrap(), format!("{FIRST}*** bar\n{NEXT}"));
    }

    #[test]
    fn invalid_utf8_terminates() {
        let denylist = Denylist::new();
        let mut output = Vec::new();

        Session::new(Censor::new(&denylist), &b"hi\n\xff\nhi\n"[..], &mut output)
            .run()
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), format!("{FIRST}hi\n{NEXT}Bye!\n"));
    }

    #[test]
    fn write_failure() {
        let denylist = Denylist::new();
        let mut session = Session::new(Censor::new(&denylist), "hi\n".as_bytes(), FullWriter);

        assert!(matches!(session.step(), Err(Error::Output(_))));
    }

    #[test]
    fn prompts() {
        let denylist = Denylist::new();
        let mut session = Session::new(Censor::new(&denylist), "a\nb\n".as_bytes(), io::sink());

        assert_eq!(session.prompt(), FIRST.trim_end());
        session.step().unwrap();
        assert_eq!(session.prompt(), NEXT.trim_end());
        session.step().unwrap();
        assert_eq!(session.prompt(), NEXT.trim_end());
    }

    #[test]
    fn whole_words() {
        let denylist: Denylist = ["ass"].iter().collect();
        let mut censor = Censor::new(&denylist);
        censor.with_boundaries(Boundaries::Token);
        let mut output = Vec::new();

        Session::new(censor, "ass class\n".as_bytes(), &mut output)
            .run()
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{FIRST}*** class\n{NEXT}Bye!\n")
        );
    }

    #[test]
    fn exit_sentinel() {
        assert!(is_exit("exit"));
        assert!(is_exit("I want to exit."));
        assert!(!is_exit("Exit"));
        assert!(!is_exit("exiting"));
        assert!(!is_exit(""));
    }

    #[test]
    fn wordlist_path() {
        let mut output = Vec::new();
        let path = ask_wordlist_path("  words.txt ignored\nnext\n".as_bytes(), &mut output).unwrap();

        assert_eq!(path, PathBuf::from("words.txt"));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Please enter a text file full of filthy, foul utterances:\n"
        );

        let path = ask_wordlist_path("".as_bytes(), io::sink()).unwrap();
        assert_eq!(path, PathBuf::new());
    }

    #[test]
    fn wordlist_path_then_session() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "heck").unwrap();

        let script = format!("{}\nwhat the heck\nexit\n", file.path().display());
        let mut input = script.as_bytes();
        let mut output = Vec::new();

        let path = ask_wordlist_path(&mut input, &mut output).unwrap();
        let denylist = Denylist::open(path).unwrap();
        Session::new(Censor::new(&denylist), input, &mut output)
            .run()
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Please enter a text file full of filthy, foul utterances:"));
        assert_eq!(lines.next(), Some(FIRST.trim_end()));
        assert_eq!(lines.next(), Some("what the ****"));
        assert_eq!(lines.next(), Some(NEXT.trim_end()));
        assert_eq!(lines.next(), Some("Bye!"));
        assert_eq!(lines.next(), None);
    }
}
