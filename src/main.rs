use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{info, warn};

use seam_energy::{process_file, Transform};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Write the normalized seam-carving energy map of an image as PNG"
)]
struct Args {
    /// Input image path (png/jpg/etc), also accepted as `-in`
    #[arg(long = "in", value_name = "PATH")]
    input: PathBuf,

    /// Output PNG path, also accepted as `-out`
    #[arg(long = "out", value_name = "PATH")]
    output: PathBuf,

    /// Transform applied before saving
    #[arg(long, value_enum, default_value_t = Transform::Energy)]
    mode: Transform,
}

/// Flags that take a value, in their canonical double-dash form.
const VALUE_FLAGS: [&str; 3] = ["--in", "--out", "--mode"];
const BARE_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Rewrites the legacy single-dash `-in`/`-out` flags and drops every argument
/// the tool does not know. Returns the arguments to parse and the ignored ones.
fn normalize_args<I>(raw: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    let mut raw = raw.into_iter();
    let mut kept: Vec<String> = raw.next().into_iter().collect();
    let mut ignored = Vec::new();

    while let Some(arg) = raw.next() {
        let flag = if matches!(arg.as_str(), "-in" | "-out") {
            format!("-{arg}")
        } else {
            arg
        };

        if VALUE_FLAGS.contains(&flag.as_str()) {
            kept.push(flag);
            // A trailing flag without value is left for clap to report.
            if let Some(value) = raw.next() {
                kept.push(value);
            }
        } else if BARE_FLAGS.contains(&flag.as_str())
            || VALUE_FLAGS
                .iter()
                .any(|name| flag.starts_with(&format!("{name}=")))
        {
            kept.push(flag);
        } else {
            ignored.push(flag);
        }
    }

    (kept, ignored)
}

fn main() -> Result<()> {
    Builder::from_default_env().format_timestamp_millis().init();

    let (argv, ignored) = normalize_args(std::env::args());
    for arg in &ignored {
        warn!("ignoring unrecognized argument {arg:?}");
    }
    let args = Args::parse_from(argv);

    let started = Instant::now();
    process_file(&args.input, &args.output, args.mode).with_context(|| {
        format!(
            "Failed to turn {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    info!(
        "Wrote {} ({:?}) in {:?}",
        args.output.display(),
        args.mode,
        started.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_legacy_flags_are_rewritten() {
        let (kept, ignored) = normalize_args(strings(&["seam", "-in", "a.png", "-out", "b.png"]));
        assert_eq!(kept, strings(&["seam", "--in", "a.png", "--out", "b.png"]));
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        let (kept, ignored) = normalize_args(strings(&[
            "seam", "-width", "-in", "a.png", "extra", "-out", "b.png", "--verbose",
        ]));
        assert_eq!(kept, strings(&["seam", "--in", "a.png", "--out", "b.png"]));
        assert_eq!(ignored, strings(&["-width", "extra", "--verbose"]));
    }

    #[test]
    fn test_values_are_not_mistaken_for_flags() {
        let (kept, _) = normalize_args(strings(&["seam", "-in", "-out", "-out", "x.png"]));
        assert_eq!(kept, strings(&["seam", "--in", "-out", "--out", "x.png"]));
    }

    #[test]
    fn test_parse_normalized_args() {
        let (kept, _) = normalize_args(strings(&[
            "seam", "-in", "a.png", "-out", "b.png", "--mode", "negative", "junk",
        ]));
        let args = Args::try_parse_from(kept).unwrap();
        assert_eq!(args.input, PathBuf::from("a.png"));
        assert_eq!(args.output, PathBuf::from("b.png"));
        assert_eq!(args.mode, Transform::Negative);
    }

    #[test]
    fn test_equals_form_and_default_mode() {
        let (kept, _) = normalize_args(strings(&["seam", "--in=a.png", "--out=b.png"]));
        let args = Args::try_parse_from(kept).unwrap();
        assert_eq!(args.input, PathBuf::from("a.png"));
        assert_eq!(args.mode, Transform::Energy);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let (kept, _) = normalize_args(strings(&["seam", "-out", "b.png"]));
        let err = Args::try_parse_from(kept).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
