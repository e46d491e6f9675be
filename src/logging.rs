//! Diagnostic logging to stderr.
//!
//! Level comes from `PASSGEN_LOG` (an `EnvFilter` directive), defaulting to
//! `warn`, or `error` in quiet mode.

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use crate::error::Error;
use crate::terminal::{self, GREEN, GREY, RED, RESET, YELLOW};

pub const ENV_VAR: &str = "PASSGEN_LOG";

pub struct PassgenFormatter;

impl<S, N> FormatEvent<S, N> for PassgenFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (symbol, color) = match *event.metadata().level() {
            Level::TRACE => ("[ ]", GREY),
            Level::DEBUG => ("[?]", GREY),
            Level::INFO => ("[+]", GREEN),
            Level::WARN => ("[*]", YELLOW),
            Level::ERROR => ("[-]", RED),
        };

        if writer.has_ansi_escapes() {
            write!(writer, "{color}{symbol}{RESET} ")?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        // \r keeps lines aligned if the terminal is in raw mode
        writer.write_str("\r\n")
    }
}

pub fn init(quiet: bool) -> Result<(), Error> {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(terminal::is_tty(2))
        .with_env_filter(filter)
        .event_format(PassgenFormatter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
