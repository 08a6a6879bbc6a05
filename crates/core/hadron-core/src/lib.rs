//! Core library for Hadron OS, providing facilities shared by every driver crate.

#![cfg_attr(not(test), no_std)]

pub mod log;
