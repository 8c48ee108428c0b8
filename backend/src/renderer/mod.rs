//! # PDF Renderer
//!
//! Turns HTML into PDF by shelling out to `wkhtmltopdf`. One call to
//! [`PdfRenderer::render`] owns one scratch directory and one child process:
//!
//! 1.  **Staging**: a uniquely named workspace is created under the configured
//!     temp root and `body.html` is written into it, plus `header.html` and
//!     `footer.html` when those are present and non-blank.
//!
//! 2.  **Arguments**: [`build_args`] produces the fixed page layout (A4,
//!     25mm/15mm margins, UTF-8) followed by the header/footer flags and the
//!     body and output paths as the last two positional arguments.
//!
//! 3.  **Execution**: the renderer runs with the workspace as working directory
//!     and both output streams piped. Stderr is drained while waiting for exit
//!     so a chatty child cannot stall on a full pipe. The wait ends early on
//!     cancellation or when the configured timeout elapses; in both cases the
//!     child is killed.
//!
//! 4.  **Collection**: a zero exit status with a non-empty `output.pdf` yields
//!     the PDF bytes. Anything else is a [`RenderError`].
//!
//! 5.  **Cleanup**: the workspace is removed on every path. A failed removal is
//!     logged and never replaces the render result.

pub mod error;
mod workspace;

pub use error::RenderError;

use log::{error, info, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use workspace::Workspace;

pub const BODY_FILE: &str = "body.html";
pub const HEADER_FILE: &str = "header.html";
pub const FOOTER_FILE: &str = "footer.html";
pub const OUTPUT_FILE: &str = "output.pdf";

/// Page layout passed to the renderer on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub page_size: String,
    pub encoding: String,
    pub margin_top: String,
    pub margin_bottom: String,
    pub margin_left: String,
    pub margin_right: String,
    pub header_spacing: u32,
    pub footer_spacing: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            encoding: "UTF-8".to_string(),
            margin_top: "25mm".to_string(),
            margin_bottom: "25mm".to_string(),
            margin_left: "15mm".to_string(),
            margin_right: "15mm".to_string(),
            header_spacing: 8,
            footer_spacing: 8,
        }
    }
}

/// Builds the renderer command line.
///
/// `header` and `footer` are paths to already staged files; `None` omits the
/// corresponding flags entirely.
pub fn build_args(
    options: &RenderOptions,
    body: &Path,
    header: Option<&Path>,
    footer: Option<&Path>,
    output: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "--enable-local-file-access",
        "--no-stop-slow-scripts",
        "--margin-top",
        options.margin_top.as_str(),
        "--margin-bottom",
        options.margin_bottom.as_str(),
        "--margin-left",
        options.margin_left.as_str(),
        "--margin-right",
        options.margin_right.as_str(),
        "--encoding",
        options.encoding.as_str(),
        "--page-size",
        options.page_size.as_str(),
    ]
    .into_iter()
    .map(OsString::from)
    .collect();

    if let Some(header) = header {
        args.push("--header-html".into());
        args.push(header.into());
        args.push("--header-spacing".into());
        args.push(options.header_spacing.to_string().into());
    }

    if let Some(footer) = footer {
        args.push("--footer-html".into());
        args.push(footer.into());
        args.push("--footer-spacing".into());
        args.push(options.footer_spacing.to_string().into());
    }

    args.push(body.into());
    args.push(output.into());
    args
}

/// Renders HTML to PDF through an external `wkhtmltopdf` process.
///
/// Holds no per-render state, so one instance is shared by all request
/// handlers and renders run fully in parallel.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    program: PathBuf,
    temp_root: PathBuf,
    timeout: Option<Duration>,
    options: RenderOptions,
}

enum Outcome {
    Exited(std::io::Result<ExitStatus>, String),
    Cancelled,
    TimedOut(Duration),
}

impl PdfRenderer {
    pub fn new(program: impl Into<PathBuf>, temp_root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            temp_root: temp_root.into(),
            timeout: None,
            options: RenderOptions::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Renders `body_html` with optional page header and footer documents and
    /// returns the PDF bytes.
    ///
    /// Blank header/footer strings are treated as absent. The workspace is
    /// gone by the time this returns, whatever the outcome.
    ///
    /// # Errors
    ///
    /// - [`RenderError::Workspace`]: the scratch directory or a staged file could
    ///   not be written or read.
    /// - [`RenderError::Launch`]: the executable is missing or not runnable.
    /// - [`RenderError::Failed`] / [`RenderError::NoOutput`]: the renderer ran but
    ///   did not produce a PDF.
    /// - [`RenderError::TimedOut`] / [`RenderError::Cancelled`]: the child was
    ///   killed before it finished.
    pub async fn render(
        &self,
        body_html: &str,
        header_html: Option<&str>,
        footer_html: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, RenderError> {
        let started = Instant::now();
        let workspace = Workspace::create(&self.temp_root).await?;

        let result = self
            .render_in(&workspace, body_html, header_html, footer_html, cancel)
            .await;

        workspace.close().await;

        match &result {
            Ok(pdf) => info!(
                "PDF rendered: {} bytes in {} ms",
                pdf.len(),
                started.elapsed().as_millis()
            ),
            Err(RenderError::Cancelled) => warn!("PDF render cancelled"),
            // already logged with the program name by `render_in`
            Err(RenderError::Failed { .. }) => {}
            Err(e) => error!("PDF render failed: {}", e),
        }
        result
    }

    async fn render_in(
        &self,
        workspace: &Workspace,
        body_html: &str,
        header_html: Option<&str>,
        footer_html: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, RenderError> {
        let body = workspace.stage(BODY_FILE, body_html).await?;
        let header = match non_blank(header_html) {
            Some(html) => Some(workspace.stage(HEADER_FILE, html).await?),
            None => None,
        };
        let footer = match non_blank(footer_html) {
            Some(html) => Some(workspace.stage(FOOTER_FILE, html).await?),
            None => None,
        };
        let output = workspace.file(OUTPUT_FILE);

        let args = build_args(
            &self.options,
            &body,
            header.as_deref(),
            footer.as_deref(),
            &output,
        );

        info!(
            "Launching {} with {} arguments in {}",
            self.program.display(),
            args.len(),
            workspace.path().display()
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .current_dir(workspace.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RenderError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let outcome = {
            let exited = async {
                let (status, diagnostics, _) =
                    tokio::join!(child.wait(), drain(stderr), drain(stdout));
                Outcome::Exited(status, diagnostics)
            };
            let deadline = async {
                match self.timeout {
                    Some(limit) => {
                        tokio::time::sleep(limit).await;
                        Outcome::TimedOut(limit)
                    }
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                outcome = exited => outcome,
                _ = cancel.cancelled() => Outcome::Cancelled,
                outcome = deadline => outcome,
            }
        };

        let (status, diagnostics) = match outcome {
            Outcome::Exited(status, diagnostics) => (status, diagnostics),
            Outcome::Cancelled => {
                terminate(&mut child).await;
                return Err(RenderError::Cancelled);
            }
            Outcome::TimedOut(limit) => {
                terminate(&mut child).await;
                return Err(RenderError::TimedOut(limit));
            }
        };

        let status = status.map_err(|source| RenderError::Launch {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            error!(
                "{} exited with code {:?}. stderr: {}",
                self.program.display(),
                status.code(),
                diagnostics.trim()
            );
            return Err(RenderError::Failed {
                code: status.code(),
                stderr: diagnostics.trim().to_string(),
            });
        }

        match tokio::fs::read(&output).await {
            Ok(pdf) if pdf.is_empty() => Err(RenderError::NoOutput),
            Ok(pdf) => Ok(pdf),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(RenderError::NoOutput),
            Err(e) => Err(RenderError::workspace(&output, e)),
        }
    }
}

fn non_blank(html: Option<&str>) -> Option<&str> {
    html.filter(|h| !h.trim().is_empty())
}

/// Reads a child pipe to the end. Read errors end the drain early; whatever
/// was captured is still returned.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf).await;
    }
    String::from_utf8_lossy(&buf).into_owned()
}

async fn terminate(child: &mut tokio::process::Child) {
    if let Err(e) = child.kill().await {
        warn!("Failed to kill renderer process: {}", e);
    }
}
