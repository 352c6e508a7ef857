
//! Turning expression strings into postfix token sequences.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod tokenizer;
