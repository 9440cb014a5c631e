//! # CLI Layer
//!
//! One possible front end for opsdesk, and the only place that knows about
//! terminal I/O. It parses arguments, calls [`opsdesk::api::OpsApi`], and
//! turns each `CmdResult` into styled output. Business rules stay out of
//! here; anything this layer validates is re-validated below it.

pub mod commands;
mod print;
mod styles;
