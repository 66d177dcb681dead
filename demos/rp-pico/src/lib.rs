#![no_std]

pub mod rtt_display;
pub mod time;
