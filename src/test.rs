use super::*;

pub(crate) use {std::str, tempfile::TempDir};

pub(crate) fn tempdir() -> TempDir {
  tempfile::tempdir().unwrap()
}

pub(crate) trait TempDirExt {
  fn path_utf8(&self) -> &Utf8Path;
}

impl TempDirExt for TempDir {
  fn path_utf8(&self) -> &Utf8Path {
    self.path().try_into().unwrap()
  }
}

macro_rules! assert_matches {
  ($expression:expr, $( $pattern:pat_param )|+ $( if $guard:expr )? $(,)?) => {
    match $expression {
      $( $pattern )|+ $( if $guard )? => {}
      left => panic!(
        "assertion failed: (left ~= right)\n  left: `{:?}`\n right: `{}`",
        left,
        stringify!($($pattern)|+ $(if $guard)?)
      ),
    }
  }
}

/// An app directory holding stand-ins for wasm-bindgen output.
pub(crate) fn app() -> TempDir {
  let tempdir = tempdir();

  fs::write(
    tempdir.path_utf8().join("tracker-app.js"),
    "export default async function init() {}\n",
  )
  .unwrap();

  fs::write(
    tempdir.path_utf8().join("tracker-app_bg.wasm"),
    b"\0asm\x01\0\0\0",
  )
  .unwrap();

  tempdir
}
