use super::composite::{Action, Command, CommandRef};
use super::error::CommandError;
use crate::transcript::Transcript;

pub struct LegacyAdapter<T> {
    object: T,
    method: fn(&T),
}

impl<T> LegacyAdapter<T> {
    pub fn new(object: T, method: fn(&T)) -> LegacyAdapter<T> {
        LegacyAdapter { object, method }
    }
}

impl<T> Action for LegacyAdapter<T> {
    fn invoke(&self) -> Result<(), CommandError> {
        (self.method)(&self.object);

        Ok(())
    }
}

pub struct Fea {
    transcript: Transcript,
}

impl Fea {
    pub fn new(transcript: &Transcript) -> Fea {
        Fea {
            transcript: transcript.clone(),
        }
    }

    pub fn do_this(&self) {
        self.transcript.record("Fea::doThis()");
    }
}

impl Drop for Fea {
    fn drop(&mut self) {
        self.transcript.record("Fea::dtor");
    }
}

pub struct Feye {
    transcript: Transcript,
}

impl Feye {
    pub fn new(transcript: &Transcript) -> Feye {
        Feye {
            transcript: transcript.clone(),
        }
    }

    pub fn do_that(&self) {
        self.transcript.record("Feye::doThat()");
    }
}

impl Drop for Feye {
    fn drop(&mut self) {
        self.transcript.record("Feye::dtor");
    }
}

pub struct Pheau {
    transcript: Transcript,
}

impl Pheau {
    pub fn new(transcript: &Transcript) -> Pheau {
        Pheau {
            transcript: transcript.clone(),
        }
    }

    pub fn do_the_other(&self) {
        self.transcript.record("Pheau::doTheOther()");
    }
}

impl Drop for Pheau {
    fn drop(&mut self) {
        self.transcript.record("Pheau::dtor");
    }
}

pub fn legacy_commands(transcript: &Transcript) -> Vec<CommandRef> {
    vec![
        Command::leaf(LegacyAdapter::new(Fea::new(transcript), Fea::do_this)),
        Command::leaf(LegacyAdapter::new(Feye::new(transcript), Feye::do_that)),
        Command::leaf(LegacyAdapter::new(
            Pheau::new(transcript),
            Pheau::do_the_other,
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_objects_run_then_drop_in_order() {
        let transcript = Transcript::new();
        let commands = legacy_commands(&transcript);

        for command in commands.iter() {
            command.execute().unwrap();
        }
        drop(commands);

        assert_eq!(
            vec![
                "Fea::doThis()",
                "Feye::doThat()",
                "Pheau::doTheOther()",
                "Fea::dtor",
                "Feye::dtor",
                "Pheau::dtor",
            ],
            transcript.lines()
        );
    }

    #[test]
    fn adapter_can_run_repeatedly() {
        let transcript = Transcript::new();
        let adapter = LegacyAdapter::new(Feye::new(&transcript), Feye::do_that);

        adapter.invoke().unwrap();
        adapter.invoke().unwrap();

        assert_eq!(vec!["Feye::doThat()", "Feye::doThat()"], transcript.lines());
    }
}
