//! Trait impls for primitive integers.

impl_unsigned!(u8, u16, u32, u64, u128, usize);

impl_signed!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
