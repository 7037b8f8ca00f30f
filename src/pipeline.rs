use std::io::Read;
use std::io::Write;

use anyhow::Context;

use crate::config::Config;
use crate::frontmatter;
use crate::render::inline_style;
use crate::render::markdown;

/// What to do with a markdown document read from the input.
#[derive(Debug, Clone)]
pub enum Pipeline {
    /// Markdown to HTML, nothing else.
    Plain,

    /// Strip frontmatter, convert, then inject the configured inline styles.
    Styled(Config),
}

impl Pipeline {
    /// Render a whole document.
    ///
    /// Only a conversion failure or non UTF-8 input is an error; styling
    /// problems fall back to unstyled HTML.
    pub fn render(&self, input: &[u8]) -> anyhow::Result<String> {
        match self {
            Pipeline::Plain => markdown::to_html(as_str(input)?),
            Pipeline::Styled(config) => {
                let body = frontmatter::strip(input);
                let html = markdown::to_html(as_str(body)?)?;
                Ok(inline_style::apply(&html, &config.inline_styles))
            }
        }
    }

    /// Read the whole input, render it, then write the result.
    ///
    /// Nothing is written unless rendering succeeds.
    pub fn run(&self, mut input: impl Read, mut output: impl Write) -> anyhow::Result<()> {
        let mut buf = Vec::new();
        input
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;

        let html = self.render(&buf)?;

        output
            .write_all(html.as_bytes())
            .and_then(|_| output.flush())
            .context("failed to write to stdout")?;

        Ok(())
    }
}

fn as_str(input: &[u8]) -> anyhow::Result<&str> {
    std::str::from_utf8(input).context("input is not valid UTF-8")
}
