#![no_std]

pub mod collection;
pub mod share_token;
