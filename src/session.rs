use std::io::{BufRead, Write};

use flexstr::ToSharedStr;
use log::debug;

use crate::config::Config;
use crate::{fib, Error};

// *** Session ***

/// Drives one prompt / read / compute / print cycle over any pair of input
/// and output streams. Plain `stdin`/`stdout` in the binary; in-memory
/// buffers in tests.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a new `Session` over the given streams
    #[inline]
    pub fn new(input: R, output: W, config: Config) -> Session<R, W> {
        Session {
            input,
            output,
            config,
        }
    }

    /// Prompts for `n`, reads one integer token, and prints the n-th
    /// Fibonacci number
    pub fn run_fib(&mut self) -> Result<(), Error> {
        write!(self.output, "{}", self.config.fib_prompt())?;
        self.output.flush()?;

        let line = self.read_line()?;
        let n = parse_n(&line, self.config.fib_limit())?;
        self.fib(n)
    }

    /// Prints the n-th Fibonacci number without prompting
    pub fn fib(&mut self, n: u32) -> Result<(), Error> {
        if n > self.config.fib_limit() {
            return Err(Error::InputTooLarge(i64::from(n), self.config.fib_limit()));
        }

        let result = fib::compute(n)?;
        writeln!(self.output, "Fibonacci({}) = {}", n, result)?;
        Ok(())
    }

    /// Prompts for an expression, reads one line, and prints its value
    pub fn run_expr(&mut self) -> Result<(), Error> {
        write!(self.output, "{}", self.config.expr_prompt())?;
        self.output.flush()?;

        let line = self.read_line()?;
        self.eval(&line)
    }

    /// Evaluates one expression line and prints its value without prompting
    pub fn eval(&mut self, line: &str) -> Result<(), Error> {
        let value = expr_eval::eval_str(line)?;
        writeln!(self.output, "= {}", value)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEof);
        }

        debug!("read {} bytes of input", line.len());
        Ok(line)
    }
}

/// Parses one signed integer token, rejecting negative values and values past
/// the configured cap
fn parse_n(line: &str, limit: u32) -> Result<u32, Error> {
    let token = line.trim();
    let n: i64 = token
        .parse()
        .map_err(|_| Error::NotAnInteger(token.to_shared_str()))?;

    if n < 0 {
        return Err(Error::NegativeInput(n));
    }
    if n > i64::from(limit) {
        return Err(Error::InputTooLarge(n, limit));
    }

    Ok(n as u32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::config::Config;
    use crate::session::Session;
    use crate::Error;

    fn run_fib(input: &str) -> (Result<(), Error>, String) {
        let mut output = Vec::new();
        let mut session = Session::new(input.as_bytes(), &mut output, Config::default());
        let result = session.run_fib();
        (result, String::from_utf8(output).unwrap())
    }

    fn run_expr(input: &str) -> (Result<(), Error>, String) {
        let mut output = Vec::new();
        let mut session = Session::new(input.as_bytes(), &mut output, Config::default());
        let result = session.run_expr();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn fib_scenarios() {
        for (input, line) in [
            ("0\n", "Fibonacci(0) = 0"),
            ("1\n", "Fibonacci(1) = 1"),
            ("2\n", "Fibonacci(2) = 1"),
            ("10\n", "Fibonacci(10) = 55"),
            ("20\n", "Fibonacci(20) = 6765"),
        ] {
            let (result, output) = run_fib(input);

            result.unwrap();
            assert_eq!(output, format!("Enter the value of n: {}\n", line));
        }
    }

    #[test]
    fn fib_input_without_newline() {
        let (result, output) = run_fib("10");

        result.unwrap();
        assert_eq!(output, "Enter the value of n: Fibonacci(10) = 55\n");
    }

    #[test]
    fn fib_rejects_bad_input() {
        let (result, _) = run_fib("twelve\n");
        assert!(matches!(result, Err(Error::NotAnInteger(s)) if s == "twelve"));

        let (result, _) = run_fib("-5\n");
        assert!(matches!(result, Err(Error::NegativeInput(-5))));

        let (result, _) = run_fib("94\n");
        assert!(matches!(result, Err(Error::InputTooLarge(94, 93))));

        let (result, _) = run_fib("");
        assert!(matches!(result, Err(Error::UnexpectedEof)));
    }

    #[test]
    fn fib_honors_configured_limit() {
        let config = Config::from_toml_reader("[fib]\nmax_n = 10".as_bytes()).unwrap();
        let mut output = Vec::new();
        let mut session = Session::new("11\n".as_bytes(), &mut output, config);

        let result = session.run_fib();
        assert!(matches!(result, Err(Error::InputTooLarge(11, 10))));
    }

    #[test]
    fn fib_honors_configured_prompt() {
        let config = Config::from_toml_reader("[prompts]\nfib = \"n? \"".as_bytes()).unwrap();
        let mut output = Vec::new();
        let mut session = Session::new("2\n".as_bytes(), &mut output, config);

        session.run_fib().unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "n? Fibonacci(2) = 1\n");
    }

    #[test]
    fn expr_scenarios() {
        let (result, output) = run_expr("1 + 2 * 3\n");

        result.unwrap();
        assert_eq!(output, "Enter an arithmetic expression: = 7\n");
    }

    #[test]
    fn expr_reports_engine_errors() {
        let (result, _) = run_expr("1 / 0\n");
        assert!(matches!(
            result,
            Err(Error::ExprError(expr_eval::Error::DivideByZero))
        ));
    }

    #[test]
    fn fib_without_prompt() {
        let mut output = Vec::new();
        let mut session = Session::new("".as_bytes(), &mut output, Config::default());

        session.fib(20).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Fibonacci(20) = 6765\n");
    }
}
