//! Fake `wkhtmltopdf` executables for exercising the renderer without the
//! real tool.
//!
//! All scripts are written once, before any test spawns a process; writing
//! an executable while another thread forks can make `exec` fail with
//! "Text file busy".

#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a PDF whose content echoes the arguments, the working directory and
/// every staged `.html` file, so tests can inspect what the renderer saw.
const ECHO_PDF: &str = r#"#!/bin/sh
out=""
for arg in "$@"; do out="$arg"; done
{
  printf '%%PDF-1.4\n'
  printf 'cwd:%s\n' "$PWD"
  for arg in "$@"; do printf 'arg:%s\n' "$arg"; done
  for f in *.html; do
    printf 'file:%s\n' "$f"
    cat "$f"
    printf '\n'
  done
  printf '%%%%EOF\n'
} > "$out"
"#;

const FAIL: &str = r#"#!/bin/sh
echo "Loading pages (1/6)"
echo "Error: Failed loading page file:///tmp/body.html" >&2
exit 1
"#;

const NO_OUTPUT: &str = "#!/bin/sh\nexit 0\n";

const HANG: &str = "#!/bin/sh\nexec sleep 30\n";

/// Deletes its own working directory before failing, so workspace cleanup
/// has nothing left to remove.
const REMOVE_WORKSPACE: &str = r#"#!/bin/sh
rm -rf "$PWD"
echo boom >&2
exit 3
"#;

pub struct FakeRenderers {
    _dir: TempDir,
    pub echo_pdf: PathBuf,
    pub fail: PathBuf,
    pub no_output: PathBuf,
    pub hang: PathBuf,
    pub remove_workspace: PathBuf,
}

pub static FAKES: Lazy<FakeRenderers> = Lazy::new(|| {
    let dir = tempfile::tempdir().unwrap();
    let echo_pdf = script(dir.path(), "echo-pdf", ECHO_PDF);
    let fail = script(dir.path(), "fail", FAIL);
    let no_output = script(dir.path(), "no-output", NO_OUTPUT);
    let hang = script(dir.path(), "hang", HANG);
    let remove_workspace = script(dir.path(), "remove-workspace", REMOVE_WORKSPACE);
    FakeRenderers {
        _dir: dir,
        echo_pdf,
        fail,
        no_output,
        hang,
        remove_workspace,
    }
});

fn script(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Number of entries left under a temp root.
pub fn entries(root: &Path) -> usize {
    fs::read_dir(root).unwrap().count()
}
