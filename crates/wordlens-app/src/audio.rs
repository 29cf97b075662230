use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;

/// Plays a pronunciation clip by URL
pub trait AudioPlayer: Send + Sync {
    fn play(&self, url: &str) -> anyhow::Result<()>;
}

/// Hands the URL to an external player process. Playback is fire-and-forget,
/// a second call while the first clip is playing starts another process.
pub struct CommandPlayer {
    program: String,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&self, url: &str) -> anyhow::Result<()> {
        let child = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        tracing::debug!("[AUDIO] {} playing {} (pid {:?})", self.program, url, child.id());
        Ok(())
    }
}

/// Used when no player is configured
pub struct NoPlayer;

impl AudioPlayer for NoPlayer {
    fn play(&self, url: &str) -> anyhow::Result<()> {
        tracing::warn!("[AUDIO] No player configured (AUDIO_PLAYER), skipping {}", url);
        Ok(())
    }
}

pub fn player_for(program: Option<&str>) -> Arc<dyn AudioPlayer> {
    match program {
        Some(program) => Arc::new(CommandPlayer::new(program)),
        None => Arc::new(NoPlayer),
    }
}
