//! remind: 播报一条用药提醒
//!
//! 从 stdin 读取仪表盘药品记录 JSON（name / dosage / instructions），
//! 按配置选择本地合成器或 voice-tts 网关播放。播放失败时退出码为 1。

use std::io::Read;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use carevoice::application::{PlaybackOutcome, ReminderPlaybackClient};
use carevoice::config::load_config;
use carevoice::domain::MedicationReminder;
use carevoice::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    init_logging(&config.log);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let medication: MedicationReminder = serde_json::from_str(&input)
        .map_err(|e| anyhow::anyhow!("Invalid medication JSON on stdin: {}", e))?;

    tracing::info!(
        output = ?config.playback.output,
        medication = %medication.name,
        "Playing medication reminder"
    );

    let output = config.playback.build_output()?;

    let last: Arc<Mutex<Option<PlaybackOutcome>>> = Arc::new(Mutex::new(None));
    let sink = last.clone();
    let client = ReminderPlaybackClient::new(output).with_observer(move |outcome| {
        if let Ok(mut slot) = sink.lock() {
            *slot = Some(outcome.clone());
        }
    });

    client.speak(&medication).await?;

    let outcome = last.lock().ok().and_then(|slot| slot.clone());

    match outcome {
        Some(outcome) if !outcome.is_failure() => Ok(ExitCode::SUCCESS),
        Some(outcome) => {
            eprintln!("Reminder playback {} failed, see logs for details", outcome.playback_id());
            Ok(ExitCode::FAILURE)
        }
        None => {
            eprintln!("Reminder playback did not report an outcome");
            Ok(ExitCode::FAILURE)
        }
    }
}
