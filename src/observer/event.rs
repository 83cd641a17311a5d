use std::rc::Rc;

pub trait Observer<S> {
    fn notify(&self, subject: &S);
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(pub u64);

pub trait Observable<S> {
    fn register(&mut self, observer: Rc<dyn Observer<S>>) -> SubscriptionId;
    fn unregister(&mut self, id: SubscriptionId) -> bool;
}
