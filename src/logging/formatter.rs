use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{
    format::{DefaultFields, Writer},
    FmtContext, FormatEvent, FormatFields, FormattedFields, Layer, MakeWriter,
};
use tracing_subscriber::registry::LookupSpan;

/// Plain-text layer writing [`BracketedFormatter`] lines to `writer`.
///
/// ANSI stays off for every layer: span fields are recorded once per field
/// formatter type and shared by all layers, so one colored layer would put
/// escape codes into the others.
pub fn bracketed_layer<S, W>(writer: W) -> Layer<S, DefaultFields, BracketedFormatter, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .event_format(BracketedFormatter)
        .with_writer(writer)
        .with_ansi(false)
}

/// Custom formatter that wraps each field in brackets for better readability
/// Format: [TIMESTAMP] [LEVEL] [SPAN{fields}] [TARGET: FILE:LINE]: MESSAGE
///
/// Inside a `reorganize_split` span this reads as
/// `[..] [INFO ] [reorganize_split{split="train"}] [..]: Moved 3 'virus' files ...`
pub struct BracketedFormatter;

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let now = chrono::Local::now();
        write!(writer, "[{}]  ", now.format("%Y-%m-%dT%H:%M:%S%.6f%:z"))?;

        write!(writer, "[{:5}] ", metadata.level())?;

        // Innermost span with its recorded fields, or the module name outside any span
        match ctx.event_scope().and_then(|scope| scope.from_root().last()) {
            Some(span) => {
                write!(writer, "[{}", span.name())?;
                let ext = span.extensions();
                if let Some(fields) = ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{}}}", fields)?;
                    }
                }
                write!(writer, "] ")?;
            }
            None => {
                let module = metadata.target().rsplit("::").next().unwrap_or("unknown");
                write!(writer, "[{}] ", module)?;
            }
        }

        if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
            write!(writer, "[{}: {}:{}]: ", metadata.target(), file, line)?;
        } else {
            write!(writer, "[{}]: ", metadata.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
