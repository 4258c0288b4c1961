mod error;
mod theme;

use std::io::{self, IsTerminal, Write};

use chemweight::{Analysis, ReportRenderer};

use crate::cli::Theme;

pub use error::{print_error, print_rejection};
pub use theme::{PlainTheme, StyledTheme};

pub enum Output {
    Json,
    Text(Box<dyn ReportRenderer>),
}

impl Output {
    pub fn select(theme: Option<Theme>, json: bool) -> Self {
        if json {
            return Self::Json;
        }
        let theme = theme.unwrap_or(if io::stdout().is_terminal() {
            Theme::Styled
        } else {
            Theme::Plain
        });
        match theme {
            Theme::Plain => Self::Text(Box::new(PlainTheme)),
            Theme::Styled => Self::Text(Box::new(StyledTheme)),
        }
    }

    pub fn write(&self, out: &mut impl Write, analysis: &Analysis) -> anyhow::Result<()> {
        match self {
            Self::Json => {
                serde_json::to_writer(&mut *out, analysis)?;
                writeln!(out)?;
            }
            Self::Text(renderer) => write!(out, "{}", renderer.render(analysis))?,
        }
        Ok(())
    }
}
