//! Command-line interface for rendering identicons to PNG files

use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_SEED};
use crate::io::error::{Result, invalid_argument};
use crate::io::image::{output_path, save_identicon};
use crate::io::progress::ProgressManager;
use crate::render::renderer::{PatchSetRenderer, render_identicon, validate_cell_size};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "identicon")]
#[command(
    author,
    version,
    about = "Render patch-quilt identicons from integer codes"
)]
/// Command-line arguments for the identicon tool
pub struct Cli {
    /// Codes to render: decimal, 0x-prefixed hex or 0-prefixed octal
    #[arg(value_name = "CODE", value_parser = parse_code)]
    pub codes: Vec<u64>,

    /// Pixels per grid cell; icons are three cells wide
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE, value_parser = parse_cell_size)]
    pub size: u32,

    /// Directory receiving the PNG files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// First code of a consecutive range
    #[arg(long, value_name = "CODE", value_parser = parse_code)]
    pub start: Option<u64>,

    /// Number of codes in the range starting at --start
    #[arg(long, requires = "start")]
    pub count: Option<u64>,

    /// Render this many random 32-bit codes
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render even if the output file exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a code written in decimal, `0x` hexadecimal or leading-zero octal
///
/// Digits beyond 64 bits wrap; only the low bits carry meaning.
///
/// # Errors
///
/// Returns `InvalidArgument` for negative values, empty input or characters
/// that are not digits of the detected base
pub fn parse_code(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        return Err(invalid_argument("code", &text, &"must be non-negative"));
    }

    let (digits, radix) = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        (hex, 16)
    } else if trimmed.len() > 1 && trimmed.starts_with('0') {
        (trimmed.get(1..).unwrap_or_default(), 8)
    } else {
        (trimmed, 10)
    };

    if digits.is_empty() {
        return Err(invalid_argument("code", &text, &"no digits"));
    }

    digits.chars().try_fold(0_u64, |value, ch| {
        ch.to_digit(radix)
            .map(|digit| {
                value
                    .wrapping_mul(u64::from(radix))
                    .wrapping_add(u64::from(digit))
            })
            .ok_or_else(|| {
                invalid_argument(
                    "code",
                    &text,
                    &format!("'{ch}' is not a base-{radix} digit"),
                )
            })
    })
}

/// Parse and validate a cell size
///
/// # Errors
///
/// Returns `InvalidArgument` if the text is not an integer or the size is
/// outside the supported range
pub fn parse_cell_size(text: &str) -> Result<u32> {
    let size = text
        .trim()
        .parse::<u32>()
        .map_err(|e| invalid_argument("cell_size", &text, &e))?;
    validate_cell_size(size)
}

/// Orchestrates rendering and saving a batch of codes
pub struct IconProcessor {
    cli: Cli,
    renderer: PatchSetRenderer,
    progress_manager: Option<ProgressManager>,
}

impl IconProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            renderer: PatchSetRenderer::default(),
            progress_manager,
        }
    }

    /// Render every requested code and return the written paths
    ///
    /// # Errors
    ///
    /// Returns an error if no codes were requested, the range overflows, or
    /// rendering or saving any icon fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let codes = self.collect_codes()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(codes.len());
        }

        let mut written = Vec::with_capacity(codes.len());
        for code in codes {
            if let Some(path) = self.process_code(code)? {
                written.push(path);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Gather codes from positional arguments, the range and the random batch
    ///
    /// Duplicates keep their first position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the range runs past `u64::MAX` or the
    /// resulting list is empty
    pub fn collect_codes(&self) -> Result<Vec<u64>> {
        let mut codes = self.cli.codes.clone();

        if let Some(start) = self.cli.start {
            let count = self.cli.count.unwrap_or(1);
            let end = start
                .checked_add(count)
                .ok_or_else(|| invalid_argument("count", &count, &"range exceeds u64"))?;
            codes.extend(start..end);
        }

        if let Some(random) = self.cli.random {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            codes.extend((0..random).map(|_| u64::from(rng.random::<u32>())));
        }

        let mut seen = HashSet::new();
        codes.retain(|code| seen.insert(*code));

        if codes.is_empty() {
            return Err(invalid_argument(
                "codes",
                &"",
                &"give at least one CODE, --start or --random",
            ));
        }

        Ok(codes)
    }

    // Allow print for user feedback when an output already exists
    #[allow(clippy::print_stderr)]
    fn process_code(&mut self, code: u64) -> Result<Option<PathBuf>> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_code(code);
        }

        let target = output_path(&self.cli.output_dir, code);
        let result = if self.cli.skip_existing() && target.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", target.display());
            }
            None
        } else {
            let image = render_identicon(code, self.cli.size, Some(&self.renderer))?;
            Some(save_identicon(&image, code, &self.cli.output_dir)?)
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_code();
        }

        Ok(result)
    }
}
