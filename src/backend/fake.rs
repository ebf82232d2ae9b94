//! In-memory backend that records every command (unit tests only).

use std::path::{Path, PathBuf};

use super::{BackendError, MediaBackend, ResourceHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(String),
    SetMedia(ResourceHandle),
    Play,
    Pause,
    SetPosition(f64),
    SetTime(i64),
    SetRate(f64),
    Snapshot(PathBuf, u32, u32),
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub calls: Vec<Call>,
    pub media: Option<ResourceHandle>,
    pub playing: bool,
    pub position: f64,
    pub time: i64,
    pub fps: Option<f64>,
    /// Paths whose `load` fails
    pub unloadable: Vec<String>,
    /// Every command except `load` fails
    pub broken: bool,
    next_handle: u64,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self, command: &str) -> Result<(), BackendError> {
        if self.broken {
            return Err(BackendError::Command {
                command: command.to_string(),
                message: "error running command".to_string(),
            });
        }
        Ok(())
    }
}

impl MediaBackend for FakeBackend {
    fn load(&mut self, path: &str) -> Result<ResourceHandle, BackendError> {
        self.calls.push(Call::Load(path.to_string()));
        if self.unloadable.iter().any(|p| p == path) {
            return Err(BackendError::Command {
                command: "load".to_string(),
                message: "loading failed".to_string(),
            });
        }
        let handle = ResourceHandle::new(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }

    fn set_media(&mut self, handle: ResourceHandle) -> Result<(), BackendError> {
        self.check("set_media")?;
        self.calls.push(Call::SetMedia(handle));
        self.media = Some(handle);
        self.playing = false;
        self.position = 0.0;
        self.time = 0;
        Ok(())
    }

    fn play(&mut self) -> Result<(), BackendError> {
        self.check("play")?;
        self.calls.push(Call::Play);
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), BackendError> {
        self.check("pause")?;
        self.calls.push(Call::Pause);
        self.playing = !self.playing;
        Ok(())
    }

    fn is_playing(&mut self) -> Result<bool, BackendError> {
        self.check("is_playing")?;
        Ok(self.playing)
    }

    fn position(&mut self) -> Result<f64, BackendError> {
        self.check("position")?;
        Ok(self.position)
    }

    fn set_position(&mut self, fraction: f64) -> Result<(), BackendError> {
        self.check("set_position")?;
        self.calls.push(Call::SetPosition(fraction));
        self.position = fraction;
        Ok(())
    }

    fn time(&mut self) -> Result<i64, BackendError> {
        self.check("time")?;
        Ok(self.time)
    }

    fn set_time(&mut self, millis: i64) -> Result<(), BackendError> {
        self.check("set_time")?;
        self.calls.push(Call::SetTime(millis));
        self.time = millis;
        Ok(())
    }

    fn fps(&mut self) -> Result<Option<f64>, BackendError> {
        self.check("fps")?;
        Ok(self.fps)
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), BackendError> {
        self.check("set_rate")?;
        self.calls.push(Call::SetRate(rate));
        Ok(())
    }

    fn take_snapshot(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), BackendError> {
        self.check("take_snapshot")?;
        self.calls.push(Call::Snapshot(path.to_path_buf(), width, height));
        Ok(())
    }
}
