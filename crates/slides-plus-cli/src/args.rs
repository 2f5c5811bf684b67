use anyhow::{Context, Result, bail};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: slides-plus-cli [deck.md | folder] [--line N] [--json]";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    /// Deck file or folder of decks; the settings' `decks_path` when absent.
    pub path: Option<PathBuf>,
    /// Editor line whose slide is shown first.
    pub line: Option<usize>,
    pub json: bool,
}

impl Args {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut out = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => out.json = true,
                "--line" => {
                    let value = args.next().context("--line needs a line number")?;
                    let line = value
                        .parse()
                        .with_context(|| format!("invalid line number {value:?}"))?;
                    out.line = Some(line);
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                _ if out.path.is_some() => bail!("only one deck path may be given"),
                _ => out.path = Some(PathBuf::from(arg)),
            }
        }

        Ok(out)
    }
}
