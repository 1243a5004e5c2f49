//! # Introduction
//!
//! patternbook shows three classic object-oriented design patterns written as
//! plain Rust: an interpreter for `+`/`-` arithmetic, a memento-style snapshot
//! history for a text buffer, and an observer-style notification hub. The
//! three are independent; none uses another.
//!
//! ## Modules
//!
//! 1. [`expression`]: splits a space-delimited string into tokens, builds a
//!    left-associative [`expression::Expr`] tree, and evaluates it.
//! 2. [`snapshot`]: [`snapshot::TextBuffer`] captures immutable
//!    [`snapshot::Snapshot`]s kept in an append-only [`snapshot::History`].
//! 3. [`notify`]: [`notify::NotificationHub`] broadcasts each published
//!    message to its [`notify::Subscriber`]s in subscription order.
//! 4. [`demo`]: the walkthrough printed by the `patternbook` binary.
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous. Subscriber handles are
//! `Rc`, so the hub is deliberately `!Send`.

pub mod demo;
pub mod expression;
pub mod notify;
pub mod snapshot;
pub mod theme;
