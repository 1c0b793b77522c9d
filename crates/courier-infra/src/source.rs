//! Line-oriented inbound message source.
//!
//! Reads one JSON-encoded [`InboundMessage`] per line and feeds the relay
//! inbox. Blank lines are skipped; malformed lines are logged and skipped.

use courier_types::message::InboundMessage;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// Counters for one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceStats {
    pub accepted: usize,
    pub malformed: usize,
}

/// Read messages from `reader` into `inbox` until EOF or until the
/// receiving side closes.
///
/// Lines that are not UTF-8 or not a valid message count as malformed and
/// are skipped. Only a failing reader ends the pass early.
pub async fn read_messages<R>(
    mut reader: R,
    inbox: mpsc::Sender<InboundMessage>,
) -> std::io::Result<SourceStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = SourceStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping non-UTF-8 inbound line");
                stats.malformed += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let message = match serde_json::from_str::<InboundMessage>(line) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping malformed inbound message");
                stats.malformed += 1;
                continue;
            }
        };

        if inbox.send(message).await.is_err() {
            tracing::debug!("relay inbox closed, stopping source");
            break;
        }
        stats.accepted += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use tokio::io::BufReader;

    use super::*;

    const GOOD: &str = r#"{"message_id":"1","channel_id":"c","session_id":"g","author_id":"u","content":"!ai hi"}"#;

    #[tokio::test]
    async fn parses_lines_and_skips_garbage() {
        let input = format!("{GOOD}\n\nnot json\n{GOOD}\n");
        let (tx, mut rx) = mpsc::channel(8);

        let stats = read_messages(BufReader::new(input.as_bytes()), tx)
            .await
            .unwrap();
        assert_eq!(
            stats,
            SourceStats {
                accepted: 2,
                malformed: 1
            }
        );

        let first = rx.recv().await.unwrap();
        assert_eq!(first.content, "!ai hi");
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped() {
        let mut input = b"\xff\xfe bad\n".to_vec();
        input.extend_from_slice(GOOD.as_bytes());
        input.push(b'\n');
        let (tx, mut rx) = mpsc::channel(8);

        let stats = read_messages(BufReader::new(input.as_slice()), tx)
            .await
            .unwrap();
        assert_eq!(
            stats,
            SourceStats {
                accepted: 1,
                malformed: 1
            }
        );
        assert_eq!(rx.recv().await.unwrap().message_id, "1");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn last_line_without_newline_is_read() {
        let (tx, mut rx) = mpsc::channel(8);
        let stats = read_messages(BufReader::new(GOOD.as_bytes()), tx)
            .await
            .unwrap();
        assert_eq!(stats.accepted, 1);
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn stops_when_inbox_closes() {
        let input = format!("{GOOD}\n{GOOD}\n");
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let stats = read_messages(BufReader::new(input.as_bytes()), tx)
            .await
            .unwrap();
        assert_eq!(stats.accepted, 0);
    }
}
