//! 外部播放进程 - 通过 stdin 传入数据并等待退出

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::PlaybackError;

/// 启动命令，写入 stdin，等待退出
pub(super) async fn run_with_stdin(
    mut command: Command,
    program: &str,
    input: Vec<u8>,
    timeout: Duration,
) -> Result<(), PlaybackError> {
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command
        .spawn()
        .map_err(|e| PlaybackError::Spawn(format!("{}: {}", program, e)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| PlaybackError::Spawn("Failed to open stdin".to_string()))?;

    // 单独的任务写 stdin，避免管道写满时死锁
    let write_task = tokio::spawn(async move {
        let result = stdin.write_all(&input).await;
        drop(stdin);
        result
    });

    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| PlaybackError::Timeout)?
        .map_err(|e| PlaybackError::Failed(format!("Failed to wait for {}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PlaybackError::Failed(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    match write_task.await {
        Ok(Ok(())) => Ok(()),
        // 进程可能不读 stdin 就正常退出
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Ok(Err(e)) => Err(PlaybackError::Failed(format!(
            "Failed to write to {} stdin: {}",
            program, e
        ))),
        Err(e) => Err(PlaybackError::Failed(format!("Stdin task failed: {}", e))),
    }
}
