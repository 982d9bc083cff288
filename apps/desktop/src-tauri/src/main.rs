//! # Restock Desktop Application Entry Point
//!
//! Thin binary wrapper; the actual setup lives in `lib.rs`.

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    restock_desktop_lib::run();
}
