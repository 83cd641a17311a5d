use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn record<S: Into<String>>(&self, line: S) {
        let line = line.into();
        debug!("transcript: {}", line);
        self.lines.borrow_mut().push(line);
    }

    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn drain(&self) -> Vec<String> {
        self.lines.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_lines() {
        let transcript = Transcript::new();
        let other = transcript.clone();

        transcript.record("first");
        other.record(String::from("second"));

        assert_eq!(vec!["first", "second"], transcript.lines());
    }

    #[test]
    fn drain_empties() {
        let transcript = Transcript::new();
        transcript.record("line");

        assert_eq!(vec!["line"], transcript.drain());
        assert!(transcript.lines().is_empty());
    }
}
