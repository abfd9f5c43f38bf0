//! Stdio transport
//!
//! One JSON-RPC message per line in each direction. The session ends
//! cleanly at EOF on the input stream; a line that is not UTF-8 is answered
//! with a parse error like any other malformed frame.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::MCPServer;
use crate::Result;
use crate::protocol::{Response, RpcError};

impl MCPServer {
    /// Serve requests from `reader`, writing responses to `writer`
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(server = %self.info.name, version = %self.info.version, "MCP server started");

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let frame = line.trim();
                    if frame.is_empty() {
                        continue;
                    }
                    self.handle_frame(frame).await
                }
                Err(e) => {
                    warn!(error = %e, "Frame is not valid UTF-8");
                    Some(Response::error(Value::Null, RpcError::parse_error(e.to_string())))
                }
            };
            let Some(response) = response else {
                continue;
            };

            let mut out = serde_json::to_string(&response)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }

        debug!("Input closed");
        info!(server = %self.info.name, "MCP server stopped");
        Ok(())
    }

    /// Serve over the process's stdin and stdout
    pub async fn serve_stdio(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }
}
