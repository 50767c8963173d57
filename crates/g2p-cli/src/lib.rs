//! Command-line front end for `g2p-core`: dictionary sources and the
//! `g2ptool` subcommands.

pub mod commands;
pub mod dict_source;
pub mod trace_init;
