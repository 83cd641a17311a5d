use super::composite::{Command, CommandRef};
use super::error::{CommandError, SessionError};
use super::number::Number;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::rc::Rc;

const MENU: &str = "Exit[0], ++[1], --[2], x2[3], Half[4], Square[5], Undo[6], do3[7] do6[8]: ";
const EXIT: usize = 0;

#[derive(Default)]
pub struct CommandTable {
    commands: BTreeMap<usize, CommandRef>,
}

impl CommandTable {
    pub fn new() -> CommandTable {
        CommandTable::default()
    }

    pub fn insert(&mut self, index: usize, command: CommandRef) -> Option<CommandRef> {
        self.commands.insert(index, command)
    }

    pub fn get(&self, index: usize) -> Result<&CommandRef, CommandError> {
        self.commands
            .get(&index)
            .ok_or(CommandError::UnknownCommand(index))
    }

    pub fn execute(&self, index: usize) -> Result<(), CommandError> {
        let command = self.get(index)?;
        if !command.is_composite() {
            debug!("executing command {}", index);
        } else if command.is_empty() {
            warn!("macro {} has no commands", index);
        } else {
            debug!("executing macro {} of {} commands", index, command.len());
        }

        command.execute()
    }

    pub fn for_number(number: &Rc<RefCell<Number>>) -> Result<CommandTable, CommandError> {
        let mut table = CommandTable::new();
        let operations: [fn(&mut Number); 6] = [
            Number::increment,
            Number::decrement,
            Number::double,
            Number::half,
            Number::square,
            Number::restore,
        ];
        for (ix, operation) in operations.iter().enumerate() {
            table.insert(ix + 1, Command::simple(number, *operation)?);
        }

        let do3 = Command::sequence(vec![
            Rc::clone(table.get(1)?),
            Rc::clone(table.get(3)?),
            Rc::clone(table.get(5)?),
        ])?;
        let do6 = Command::sequence(vec![Rc::clone(&do3), Rc::clone(&do3)])?;
        table.insert(7, do3);
        table.insert(8, do6);

        Ok(table)
    }
}

enum Token {
    Number(i64),
    Invalid(String),
    End,
}

/// Whitespace-separated integer reader over a line-based input.
struct Tokens<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Tokens<R> {
        Tokens {
            input,
            pending: Vec::new(),
        }
    }

    fn next(&mut self) -> Result<Token, SessionError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Token::End);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }

        let raw = self.pending.pop().unwrap_or_default();
        Ok(match raw.parse::<i64>() {
            Ok(n) => Token::Number(n),
            Err(_) => Token::Invalid(raw),
        })
    }
}

pub struct NumberSession<R, W> {
    tokens: Tokens<R>,
    output: W,
}

impl<R: BufRead, W: Write> NumberSession<R, W> {
    pub fn new(input: R, output: W) -> NumberSession<R, W> {
        NumberSession {
            tokens: Tokens::new(input),
            output,
        }
    }

    pub fn run(&mut self, initial: Option<i64>) -> Result<Option<Number>, SessionError> {
        let start = match initial {
            Some(value) => value,
            None => match self.read_initial()? {
                Some(value) => value,
                None => return Ok(None),
            },
        };
        info!("starting session at {}", start);

        let number = Rc::new(RefCell::new(Number::new(start)));
        let table = CommandTable::for_number(&number)?;

        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let index = match self.tokens.next()? {
                Token::End => break,
                Token::Invalid(raw) => {
                    writeln!(self.output, "Not a number: {}", raw)?;
                    continue;
                }
                Token::Number(n) if n == EXIT as i64 => break,
                Token::Number(n) if n < 0 => {
                    writeln!(self.output, "No command at index {}", n)?;
                    continue;
                }
                Token::Number(n) => n as usize,
            };

            match table.execute(index) {
                Ok(()) => {
                    let current = number.borrow();
                    debug!("value {} backup {}", current.value(), current.backup());
                    writeln!(self.output, "   {}", current.value())?
                }
                Err(CommandError::UnknownCommand(ix)) => {
                    warn!("unknown command {}", ix);
                    writeln!(self.output, "No command at index {}", ix)?
                }
                Err(e) => return Err(e.into()),
            }
        }

        let result = *number.borrow();
        Ok(Some(result))
    }

    fn read_initial(&mut self) -> Result<Option<i64>, SessionError> {
        loop {
            write!(self.output, "Integer: ")?;
            self.output.flush()?;

            match self.tokens.next()? {
                Token::Number(n) => return Ok(Some(n)),
                Token::Invalid(raw) => writeln!(self.output, "Not a number: {}", raw)?,
                Token::End => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, initial: Option<i64>) -> (Option<Number>, String) {
        let mut output = Vec::new();
        let result = NumberSession::new(input.as_bytes(), &mut output)
            .run(initial)
            .unwrap();

        (result, String::from_utf8(output).unwrap())
    }

    fn echoed(output: &str) -> Vec<i64> {
        output
            .split(MENU)
            .filter_map(|chunk| chunk.trim().parse().ok())
            .collect()
    }

    #[test]
    fn menu_walkthrough() {
        let (result, output) = run("4\n1\n3\n2\n4\n5\n6\n6\n7\n6\n8\n0\n", None);

        assert!(output.starts_with("Integer: "));
        assert_eq!(
            vec![5, 10, 9, 4, 16, 4, 4, 100, 10, 940900],
            echoed(&output)
        );
        assert_eq!(Some(940900), result.map(|n| n.value()));
    }

    #[test]
    fn initial_value_from_argument() {
        let (result, output) = run("1 1 0", Some(10));

        assert!(!output.contains("Integer: "));
        assert_eq!(vec![11, 12], echoed(&output));
        assert_eq!(Some(11), result.map(|n| n.backup()));
    }

    #[test]
    fn end_of_input_exits() {
        let (result, _) = run("3\n1\n", None);
        assert_eq!(Some(4), result.map(|n| n.value()));

        let (result, _) = run("", None);
        assert_eq!(None, result);
    }

    #[test]
    fn bad_input_reprompts() {
        let (result, output) = run("x 2\n9 -3 abc 1\n0\n", None);

        assert!(output.contains("Not a number: x"));
        assert!(output.contains("No command at index 9"));
        assert!(output.contains("No command at index -3"));
        assert!(output.contains("Not a number: abc"));
        assert_eq!(Some(3), result.map(|n| n.value()));
    }

    #[test]
    fn empty_macro_runs_as_no_op() {
        let mut table = CommandTable::new();
        table.insert(1, Command::composite());

        assert_eq!(Ok(()), table.execute(1));
        assert_eq!(Err(CommandError::UnknownCommand(2)), table.execute(2));
    }

    #[test]
    fn table_lookup() {
        let number = Rc::new(RefCell::new(Number::new(2)));
        let table = CommandTable::for_number(&number).unwrap();

        for index in 1..=8 {
            assert!(table.get(index).is_ok());
        }
        assert!(table.get(9).is_err());
        assert!(table.get(7).unwrap().is_composite());
        assert_eq!(2, table.get(8).unwrap().len());
        assert_eq!(Some(CommandError::UnknownCommand(0)), table.get(0).err());

        table.execute(5).unwrap();
        assert_eq!(4, number.borrow().value());
    }
}
