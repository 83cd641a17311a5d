use super::transcript::Transcript;
use std::cell::RefCell;
use std::io::{self, stdout, Stdout, Write};

use crossterm::{
    style::{style, Color, PrintStyledContent, Stylize},
    QueueableCommand,
};

pub struct ConsoleDisplay {
    stdout: RefCell<Stdout>,
    colors: Vec<Color>,
}

impl ConsoleDisplay {
    pub fn new() -> ConsoleDisplay {
        ConsoleDisplay {
            stdout: RefCell::new(stdout()),
            colors: vec![Color::Green, Color::Cyan, Color::Yellow, Color::Magenta],
        }
    }

    pub fn banner(&self, title: &str) -> io::Result<()> {
        let mut console = self.stdout.borrow_mut();
        let styled = style(format!(">>>>>>>> {} <<<<<<<<\n", title))
            .with(Color::White)
            .bold();

        console.queue(PrintStyledContent(styled))?;
        console.flush()
    }

    pub fn lines(&self, group: usize, lines: &[String]) -> io::Result<()> {
        let mut console = self.stdout.borrow_mut();
        let color = self.colors[group % self.colors.len()];

        for line in lines {
            let styled = style(format!("{}\n", line)).with(color);
            console.queue(PrintStyledContent(styled))?;
        }

        console.flush()
    }

    pub fn transcript(&self, group: usize, transcript: &Transcript) -> io::Result<()> {
        self.lines(group, &transcript.drain())
    }
}
