use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::Session;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid document payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// One `ID:PAYLOAD` request line.
#[derive(Debug, PartialEq, Eq)]
pub struct Request<'a> {
    pub id: &'a str,
    pub payload: &'a str,
}

impl<'a> Request<'a> {
    /// Split at the first `:`. Lines without one are not requests.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let (id, payload) = line.split_once(':')?;
        Some(Self { id, payload })
    }
}

/// Counters reported when the input ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    pub answered: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Answer requests from `reader` until EOF.
///
/// Every request gets exactly one response line: `ID:` followed by the
/// JSON-encoded result string, or `ID:` alone for blank or unparseable
/// payloads. Lines that are not requests are skipped without a response.
pub fn serve<R: BufRead, W: Write>(
    session: &Session,
    reader: R,
    mut writer: W,
) -> io::Result<ServeStats> {
    let mut stats = ServeStats::default();
    for line in reader.lines() {
        let line = line?;
        let Some(request) = Request::parse(&line) else {
            debug!("skipping line without request id");
            stats.skipped += 1;
            continue;
        };

        if request.payload.trim().is_empty() {
            writeln!(writer, "{}:", request.id)?;
        } else {
            match session.convert_payload(request.payload) {
                Ok(result) => {
                    let encoded = serde_json::to_string(&result).map_err(io::Error::other)?;
                    writeln!(writer, "{}:{encoded}", request.id)?;
                }
                Err(e) => {
                    warn!(id = request.id, error = %e, "request failed");
                    stats.failed += 1;
                    writeln!(writer, "{}:", request.id)?;
                }
            }
        }
        stats.answered += 1;
        writer.flush()?;
    }
    info!(
        answered = stats.answered,
        failed = stats.failed,
        skipped = stats.skipped,
        "input closed"
    );
    Ok(stats)
}
