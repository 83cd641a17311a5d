use super::event::{Observable, Observer, SubscriptionId};
use crate::command::error::ReceiverError;
use crate::transcript::Transcript;
use log::debug;
use std::rc::Rc;

#[derive(Default)]
pub struct Subject {
    value: i64,
    observers: Vec<(SubscriptionId, Rc<dyn Observer<Subject>>)>,
    next_id: u64,
}

impl Observable<Subject> for Subject {
    fn register(&mut self, observer: Rc<dyn Observer<Subject>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));

        id
    }

    fn unregister(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);

        self.observers.len() != before
    }
}

impl Subject {
    pub fn new() -> Subject {
        Subject::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
        self.notify_observers();
    }

    pub fn notify_observers(&self) {
        let snapshot = self
            .observers
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect::<Vec<_>>();
        debug!("notifying {} observers of {}", snapshot.len(), self.value);

        for observer in snapshot.iter() {
            observer.notify(self);
        }
    }
}

pub struct DivObserver {
    divisor: i64,
    transcript: Transcript,
}

impl DivObserver {
    pub fn new(divisor: i64, transcript: &Transcript) -> Result<DivObserver, ReceiverError> {
        if divisor == 0 {
            return Err(ReceiverError::ZeroDivisor);
        }

        Ok(DivObserver {
            divisor,
            transcript: transcript.clone(),
        })
    }

    pub fn update(&self, value: i64) {
        self.transcript.record(format!(
            "{} div {} is {}",
            value,
            self.divisor,
            value.wrapping_div(self.divisor)
        ));
    }
}

impl Observer<Subject> for DivObserver {
    fn notify(&self, subject: &Subject) {
        self.update(subject.value());
    }
}

pub struct ModObserver {
    divisor: i64,
    transcript: Transcript,
}

impl ModObserver {
    pub fn new(divisor: i64, transcript: &Transcript) -> Result<ModObserver, ReceiverError> {
        if divisor == 0 {
            return Err(ReceiverError::ZeroDivisor);
        }

        Ok(ModObserver {
            divisor,
            transcript: transcript.clone(),
        })
    }

    pub fn update(&self, value: i64) {
        self.transcript.record(format!(
            "{} mod {} is {}",
            value,
            self.divisor,
            value.wrapping_rem(self.divisor)
        ));
    }
}

impl Observer<Subject> for ModObserver {
    fn notify(&self, subject: &Subject) {
        self.update(subject.value());
    }
}

pub struct HardwiredSubject {
    value: i64,
    div: DivObserver,
    modulo: ModObserver,
}

impl HardwiredSubject {
    pub fn new(transcript: &Transcript) -> Result<HardwiredSubject, ReceiverError> {
        Ok(HardwiredSubject {
            value: 0,
            div: DivObserver::new(4, transcript)?,
            modulo: ModObserver::new(3, transcript)?,
        })
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
        self.div.update(self.value);
        self.modulo.update(self.value);
    }
}
