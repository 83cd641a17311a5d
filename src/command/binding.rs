use super::composite::Action;
use super::error::{CommandError, ReceiverError};
use log::debug;
use std::fmt::Debug;
use std::rc::{Rc, Weak};

/// `execute` hands back whatever the operation returns.
pub struct Binding<R, A, T = A> {
    receiver: Weak<R>,
    operation: fn(&R, A) -> T,
    argument: A,
}

impl<R, A: Clone, T> Binding<R, A, T> {
    pub fn new(
        receiver: &Rc<R>,
        operation: fn(&R, A) -> T,
        argument: A,
    ) -> Result<Binding<R, A, T>, CommandError> {
        Binding::from_weak(Rc::downgrade(receiver), operation, argument)
    }

    pub fn from_weak(
        receiver: Weak<R>,
        operation: fn(&R, A) -> T,
        argument: A,
    ) -> Result<Binding<R, A, T>, CommandError> {
        if receiver.upgrade().is_none() {
            return Err(CommandError::InvalidBinding);
        }

        Ok(Binding {
            receiver,
            operation,
            argument,
        })
    }

    pub fn execute(&self) -> Result<T, CommandError> {
        let receiver = self
            .receiver
            .upgrade()
            .ok_or(CommandError::ReceiverDropped)?;

        Ok((self.operation)(&receiver, self.argument.clone()))
    }
}

impl<R, A: Clone, T: Debug> Action for Binding<R, A, T> {
    fn invoke(&self) -> Result<(), CommandError> {
        let result = self.execute()?;
        debug!("binding produced {:?}", result);

        Ok(())
    }
}

#[derive(Debug)]
pub struct Divider {
    divisor: i64,
}

impl Divider {
    pub fn new(divisor: i64) -> Result<Divider, ReceiverError> {
        if divisor == 0 {
            return Err(ReceiverError::ZeroDivisor);
        }

        Ok(Divider { divisor })
    }

    pub fn divide(&self, input: i64) -> i64 {
        input.wrapping_div(self.divisor)
    }

    pub fn modulus(&self, input: i64) -> i64 {
        input.wrapping_rem(self.divisor)
    }
}

#[derive(Debug)]
pub struct Affixer {
    text: String,
}

impl Affixer {
    pub fn new<S: Into<String>>(text: S) -> Affixer {
        Affixer { text: text.into() }
    }

    pub fn prepend(&self, input: String) -> String {
        input + &self.text
    }

    pub fn postpend(&self, input: String) -> String {
        self.text.clone() + &input
    }
}
