use super::error::CommandError;
use log::{trace, warn};
use std::cell::RefCell;
use std::collections::HashSet;
use std::ptr;
use std::rc::{Rc, Weak};

pub trait Action {
    fn invoke(&self) -> Result<(), CommandError>;
}

/// Receiver is held weakly; the client keeps it alive.
pub struct SimpleCommand<R> {
    receiver: Weak<RefCell<R>>,
    action: fn(&mut R),
}

impl<R> SimpleCommand<R> {
    pub fn new(
        receiver: Weak<RefCell<R>>,
        action: fn(&mut R),
    ) -> Result<SimpleCommand<R>, CommandError> {
        if receiver.upgrade().is_none() {
            return Err(CommandError::InvalidBinding);
        }

        Ok(SimpleCommand { receiver, action })
    }
}

impl<R> Action for SimpleCommand<R> {
    fn invoke(&self) -> Result<(), CommandError> {
        let receiver = self
            .receiver
            .upgrade()
            .ok_or(CommandError::ReceiverDropped)?;
        (self.action)(&mut receiver.borrow_mut());

        Ok(())
    }
}

pub type CommandRef = Rc<Command>;

pub enum Command {
    Leaf(Box<dyn Action>),
    Composite(RefCell<Vec<CommandRef>>),
}

impl Command {
    pub fn leaf<A: Action + 'static>(action: A) -> CommandRef {
        Rc::new(Command::Leaf(Box::new(action)))
    }

    pub fn simple<R: 'static>(
        receiver: &Rc<RefCell<R>>,
        action: fn(&mut R),
    ) -> Result<CommandRef, CommandError> {
        Ok(Command::leaf(SimpleCommand::new(
            Rc::downgrade(receiver),
            action,
        )?))
    }

    pub fn composite() -> CommandRef {
        Rc::new(Command::Composite(RefCell::new(Vec::new())))
    }

    pub fn sequence<I>(children: I) -> Result<CommandRef, CommandError>
    where
        I: IntoIterator<Item = CommandRef>,
    {
        let composite = Command::composite();
        for child in children {
            composite.add(child)?;
        }

        Ok(composite)
    }

    pub fn execute(&self) -> Result<(), CommandError> {
        match self {
            Command::Leaf(action) => action.invoke(),
            Command::Composite(children) => {
                let snapshot = children.borrow().clone();
                trace!("executing composite of {} commands", snapshot.len());
                for child in snapshot.iter() {
                    child.execute()?;
                }

                Ok(())
            }
        }
    }

    pub fn add(&self, child: CommandRef) -> Result<(), CommandError> {
        match self {
            Command::Leaf(_) => Err(CommandError::NotComposite),
            Command::Composite(children) => {
                if child.reaches(self) {
                    warn!("rejected a child that would make the composite cyclic");
                    return Err(CommandError::CyclicComposition);
                }
                children.borrow_mut().push(child);

                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Command::Leaf(_) => 0,
            Command::Composite(children) => children.borrow().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Command::Composite(_))
    }

    fn reaches(&self, target: &Command) -> bool {
        self.reaches_unvisited(target, &mut HashSet::new())
    }

    // Each composite is walked at most once.
    fn reaches_unvisited(&self, target: &Command, visited: &mut HashSet<*const Command>) -> bool {
        if ptr::eq(self, target) {
            return true;
        }
        if !visited.insert(self as *const Command) {
            return false;
        }

        match self {
            Command::Leaf(_) => false,
            Command::Composite(children) => children
                .borrow()
                .iter()
                .any(|c| c.reaches_unvisited(target, visited)),
        }
    }
}
