#![allow(clippy::result_large_err)]

use {
  self::{error::Error, subcommand::Subcommand, templates::IndexHtml},
  axum::http::header,
  boilerplate::Boilerplate,
  camino::{Utf8Component, Utf8Path, Utf8PathBuf},
  clap::Parser,
  html_escaper::Escape,
  libc::EXIT_FAILURE,
  mime_guess::{mime, Mime},
  snafu::{ensure, ErrorCompat, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    fs, io,
    net::SocketAddr,
    ops::RangeInclusive,
    process,
    sync::Arc,
  },
  tracker::UserInput,
};

#[cfg(test)]
#[macro_use]
mod test;

#[cfg(test)]
use test::*;

mod error;
mod subcommand;
mod templates;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
