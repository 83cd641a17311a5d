use std::fmt;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Number {
    value: i64,
    copy: i64,
}

impl From<i64> for Number {
    fn from(item: i64) -> Number {
        Number::new(item)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Number {
    pub fn new(value: i64) -> Number {
        Number { value, copy: value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn backup(&self) -> i64 {
        self.copy
    }

    pub fn increment(&mut self) {
        self.apply(|v| v.wrapping_add(1));
    }

    pub fn decrement(&mut self) {
        self.apply(|v| v.wrapping_sub(1));
    }

    pub fn double(&mut self) {
        self.apply(|v| v.wrapping_mul(2));
    }

    pub fn half(&mut self) {
        self.apply(|v| v / 2);
    }

    pub fn square(&mut self) {
        self.apply(|v| v.wrapping_mul(v));
    }

    /// One-level undo. The backup is left untouched, so restoring twice
    /// yields the same value.
    pub fn restore(&mut self) {
        self.value = self.copy;
    }

    fn apply(&mut self, op: impl FnOnce(i64) -> i64) {
        self.copy = self.value;
        self.value = op(self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_number_backs_up_initial_value() {
        let number = Number::new(7);

        assert_eq!(7, number.value());
        assert_eq!(7, number.backup());
    }

    #[test]
    fn undo_walkthrough() {
        let mut number = Number::new(4);

        number.increment();
        assert_eq!((5, 4), (number.value(), number.backup()));
        number.double();
        assert_eq!((10, 5), (number.value(), number.backup()));
        number.decrement();
        assert_eq!((9, 10), (number.value(), number.backup()));
        number.restore();
        assert_eq!(10, number.value());
        number.square();
        assert_eq!((100, 10), (number.value(), number.backup()));
        number.restore();
        assert_eq!(10, number.value());
    }

    #[test]
    fn restore_twice_is_idempotent() {
        let mut number = Number::new(4);

        number.square();
        number.restore();
        number.restore();

        assert_eq!(4, number.value());
    }

    #[test]
    fn half_truncates_toward_zero() {
        let mut positive = Number::new(9);
        let mut negative = Number::new(-9);

        positive.half();
        negative.half();

        assert_eq!(4, positive.value());
        assert_eq!(-4, negative.value());
    }

    #[test]
    fn square_wraps_on_overflow() {
        let mut number = Number::new(i64::MAX);

        number.square();

        assert_eq!(i64::MAX.wrapping_mul(i64::MAX), number.value());
    }

    const MUTATIONS: [fn(&mut Number); 5] = [
        Number::increment,
        Number::decrement,
        Number::double,
        Number::half,
        Number::square,
    ];

    proptest! {
        #[test]
        fn restore_undoes_any_mutation(start in any::<i64>(), op in 0..MUTATIONS.len()) {
            let mut number = Number::new(start);

            MUTATIONS[op](&mut number);
            prop_assert_eq!(start, number.backup());
            number.restore();

            prop_assert_eq!(start, number.value());
        }
    }
}
