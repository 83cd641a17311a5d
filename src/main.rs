mod command;
mod console_display;
mod observer;
mod transcript;

use anyhow::Result;
use clap::{Parser, Subcommand};
use command::{
    adapter::legacy_commands,
    binding::{Affixer, Binding, Divider},
    invoker::NumberSession,
};
use console_display::ConsoleDisplay;
use log::info;
use observer::{
    event::Observable,
    subject::{DivObserver, HardwiredSubject, ModObserver, Subject},
};
use std::io;
use std::rc::Rc;
use transcript::Transcript;

#[derive(Parser)]
#[clap(about = "Command and Observer pattern demos")]
struct CliArgs {
    #[clap(subcommand)]
    demo: Demo,
}

#[derive(Subcommand)]
enum Demo {
    /// Drive a number through undoable and macro commands from stdin
    Number {
        /// Starting value; prompted for when absent
        #[clap(long)]
        value: Option<i64>,
    },
    /// Commands bound to a receiver, an operation and an argument
    Bind,
    /// Unrelated legacy types behind one execute interface
    Adapter,
    /// Hard-wired and decoupled observers of a subject
    Observer,
    /// Every non-interactive demo
    All,
}

fn bind_demo(display: &ConsoleDisplay) -> Result<()> {
    display.banner("bind")?;

    let three = Rc::new(Divider::new(3)?);
    let four = Rc::new(Divider::new(4)?);
    let numbers = vec![
        Binding::new(&three, Divider::divide, 16)?,
        Binding::new(&three, Divider::modulus, 16)?,
        Binding::new(&four, Divider::divide, 16)?,
        Binding::new(&four, Divider::modulus, 16)?,
    ];
    let mut lines = Vec::new();
    for binding in numbers.iter() {
        lines.push(format!("numbers are {}", binding.execute()?));
    }
    display.lines(0, &lines)?;

    let abc = Rc::new(Affixer::new("abc"));
    let strings = vec![
        Binding::new(&abc, Affixer::prepend, "123".to_string())?,
        Binding::new(&abc, Affixer::prepend, "xyz".to_string())?,
        Binding::new(&abc, Affixer::postpend, "123".to_string())?,
        Binding::new(&abc, Affixer::postpend, "xyz".to_string())?,
    ];
    let mut lines = Vec::new();
    for binding in strings.iter() {
        lines.push(format!("strings are {}", binding.execute()?));
    }
    display.lines(1, &lines)?;

    Ok(())
}

fn adapter_demo(display: &ConsoleDisplay) -> Result<()> {
    display.banner("adapter")?;

    let transcript = Transcript::new();
    let commands = legacy_commands(&transcript);
    for command in commands.iter() {
        command.execute()?;
    }
    drop(commands);
    display.transcript(2, &transcript)?;

    Ok(())
}

fn observer_demo(display: &ConsoleDisplay) -> Result<()> {
    display.banner("observer: hard-wired")?;

    let transcript = Transcript::new();
    let mut hardwired = HardwiredSubject::new(&transcript)?;
    hardwired.set_value(14);
    display.transcript(3, &transcript)?;

    display.banner("observer: decoupled")?;

    let mut subject = Subject::new();
    subject.register(Rc::new(DivObserver::new(4, &transcript)?));
    let div3 = subject.register(Rc::new(DivObserver::new(3, &transcript)?));
    subject.register(Rc::new(ModObserver::new(3, &transcript)?));
    subject.set_value(14);
    display.transcript(3, &transcript)?;

    display.banner("observer: div 3 unregistered")?;

    subject.unregister(div3);
    subject.set_value(14);
    display.transcript(3, &transcript)?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let display = ConsoleDisplay::new();

    match args.demo {
        Demo::Number { value } => {
            display.banner("number")?;
            let stdin = io::stdin();
            let mut session = NumberSession::new(stdin.lock(), io::stdout());
            if let Some(number) = session.run(value)? {
                info!("session ended at {}", number);
            }
        }
        Demo::Bind => bind_demo(&display)?,
        Demo::Adapter => adapter_demo(&display)?,
        Demo::Observer => observer_demo(&display)?,
        Demo::All => {
            bind_demo(&display)?;
            adapter_demo(&display)?;
            observer_demo(&display)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demos_run() {
        let display = ConsoleDisplay::new();

        assert!(bind_demo(&display).is_ok());
        assert!(adapter_demo(&display).is_ok());
        assert!(observer_demo(&display).is_ok());
    }
}
