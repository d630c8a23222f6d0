#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shift_divide::{Error, div_rem, multiply};

#[derive(Arbitrary, Debug)]
pub enum Operation {
    DivRem(u64, u64),
    DivRemWide(u128, u128),
    Mul(u64, u64),
}

fuzz_target!(|operations: Vec<Operation>| {
    for op in operations {
        match op {
            Operation::DivRem(n, d) => {
                let expected = n.checked_div(d).zip(n.checked_rem(d));
                assert_eq!(div_rem(n, d).ok(), expected);
            }
            Operation::DivRemWide(n, d) => {
                let expected = n.checked_div(d).zip(n.checked_rem(d));
                assert_eq!(div_rem(n, d).ok(), expected);
            }
            Operation::Mul(a, b) => {
                assert_eq!(multiply(a, b), a.checked_mul(b).ok_or(Error::Overflow));
            }
        }
    }
});
