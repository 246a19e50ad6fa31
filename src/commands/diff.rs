use crate::artifacts::core::cancel::CancelToken;
use crate::artifacts::core::pager::PagerWriter;
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::myers::myers;
use crate::artifacts::diff::unified::UnifiedOptions;
use crate::domain::edit::EditScript;
use crate::domain::sequence::Bytes;
use anyhow::Context;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub a_path: PathBuf,
    pub b_path: PathBuf,
    pub context: usize,
    pub color: bool,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    pub paginate: bool,
}

/// Diffs the two files and writes the result to stdout, paging it when
/// stdout is a terminal and paging was not disabled.
pub async fn run(opts: &DiffOptions) -> anyhow::Result<()> {
    if opts.paginate && std::io::stdout().is_terminal() {
        let pager = Pager::new();
        let mut writer = PagerWriter::new(pager.clone());
        diff_files(opts, &mut writer).await?;
        writer.flush()?;

        tokio::task::spawn_blocking(move || minus::page_all(pager))
            .await?
            .context("pager failed")?;
    } else {
        let mut stdout = std::io::stdout().lock();
        diff_files(opts, &mut stdout).await?;
        stdout.flush()?;
    }

    Ok(())
}

/// Reads both files, computes their edit script under the configured
/// timeout and writes it to `sink` in unified format.
pub async fn diff_files(opts: &DiffOptions, sink: &mut dyn Write) -> anyhow::Result<usize> {
    let a_lines = read_lines(&opts.a_path).await?;
    let b_lines = read_lines(&opts.b_path).await?;

    let (a_lines, b_lines, script) = compute(a_lines, b_lines, opts.timeout).await?;
    let (inserted, deleted) = script.stat();
    tracing::info!(
        a = %opts.a_path.display(),
        b = %opts.b_path.display(),
        inserted,
        deleted,
        "diff computed"
    );

    let pair = Bytes::new(&a_lines, &b_lines);
    let unified = UnifiedOptions::default()
        .with_names(
            opts.a_path.display().to_string(),
            opts.b_path.display().to_string(),
        )
        .with_color(opts.color);

    let written = script
        .write_unified(sink, &pair, opts.context, &unified)
        .context("failed to write diff")?;

    Ok(written)
}

// Runs the search on the blocking pool while a timer raises the token.
async fn compute(
    a_lines: Vec<Vec<u8>>,
    b_lines: Vec<Vec<u8>>,
    timeout: Option<Duration>,
) -> anyhow::Result<(Vec<Vec<u8>>, Vec<Vec<u8>>, EditScript)> {
    let token = CancelToken::new();

    let watchdog = timeout.map(|timeout| {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            tracing::warn!(?timeout, "diff deadline reached, cancelling");
            token.cancel();
        })
    });

    let search = tokio::task::spawn_blocking(move || {
        let result = myers(&Bytes::new(&a_lines, &b_lines), &token);
        (a_lines, b_lines, result)
    })
    .await
    .context("diff task panicked")?;

    if let Some(watchdog) = watchdog {
        watchdog.abort();
    }

    match search {
        (a_lines, b_lines, Ok(script)) => Ok((a_lines, b_lines, script)),
        (_, _, Err(DiffError::Cancelled)) => {
            let timeout = timeout.unwrap_or_default();
            anyhow::bail!("diff timed out after {timeout:?}")
        }
        (_, _, Err(err)) => Err(err.into()),
    }
}

async fn read_lines(path: &Path) -> anyhow::Result<Vec<Vec<u8>>> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(split_lines(&data))
}

/// Splits raw file content into lines without their `\n` / `\r\n` terminators.
pub fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    if data.is_empty() {
        return Vec::new();
    }

    let data = data.strip_suffix(b"\n").unwrap_or(data);
    data.split(|&byte| byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}

/// Parses a timeout in the usual duration grammar (`300us`, `1.5s`,
/// `1m30s`, `2h`). A bare number is taken as seconds.
pub fn parse_timeout(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit()) {
        let secs = value
            .parse()
            .map_err(|_| format!("invalid timeout `{value}`"))?;
        return Ok(Duration::from_secs(secs));
    }

    humantime::parse_duration(value).or_else(|err| {
        parse_fractional(value).ok_or_else(|| format!("invalid timeout `{value}`: {err}"))
    })
}

// A single fractional term such as `1.5s`; humantime only takes integers.
fn parse_fractional(value: &str) -> Option<Duration> {
    let at = value.find(|c: char| !c.is_ascii_digit() && c != '.')?;
    let (amount, unit) = value.split_at(at);
    if !unit.chars().all(|c| c.is_alphabetic()) {
        return None;
    }

    let amount: f64 = amount.parse().ok()?;
    let unit = humantime::parse_duration(&format!("1{unit}")).ok()?;
    Duration::try_from_secs_f64(unit.as_secs_f64() * amount).ok()
}
