//! repodoc: grammar-aware API report generator
//!
//! Scans a repository, extracts function/method/class definitions with
//! tree-sitter, describes each one through an LLM backend, and renders a
//! Markdown report.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
