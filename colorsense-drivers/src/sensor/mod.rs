//! Color sensor drivers

pub mod tcs34725;

#[cfg(test)]
mod mock;
