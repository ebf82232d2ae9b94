//! mpv as a media backend.
//!
//! Spawns an external `mpv` process in idle mode and drives it through its
//! JSON IPC socket (`--input-ipc-server`). mpv opens its own video window,
//! or renders into an existing native window when a window id is given.
//!
//! The client is synchronous: each command writes one JSON line and reads
//! until the reply with the same `request_id` arrives. Asynchronous event
//! lines that mpv interleaves are skipped.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use super::{BackendError, MediaBackend, ResourceHandle};

/// How to launch and talk to the mpv process.
#[derive(Debug, Clone)]
pub struct MpvOptions {
    /// Executable name or path
    pub program: String,
    /// Extra command line arguments appended after the built-in ones
    pub extra_args: Vec<String>,
    /// Native window to render into (`--wid`); mpv opens its own when unset
    pub window_id: Option<u64>,
    /// How long to wait for the IPC socket to appear after spawning
    pub startup_timeout: Duration,
    /// How long to wait for the reply to a single command
    pub ipc_timeout: Duration,
}

impl Default for MpvOptions {
    fn default() -> Self {
        Self {
            program: "mpv".to_string(),
            extra_args: Vec::new(),
            window_id: None,
            startup_timeout: Duration::from_millis(5000),
            ipc_timeout: Duration::from_millis(1000),
        }
    }
}

/// A running mpv instance controlled over IPC.
#[derive(Debug)]
pub struct MpvBackend {
    process: Option<Child>,
    socket_path: Option<PathBuf>,
    reader: BufReader<UnixStream>,
    writer: UnixStream,
    /// Bytes of a reply line not yet terminated when a read timed out
    pending: Vec<u8>,
    next_request_id: u64,
    next_handle: u64,
    media: HashMap<u64, String>,
}

impl MpvBackend {
    /// Spawn mpv and connect to its IPC socket.
    pub fn spawn(options: &MpvOptions) -> Result<Self, BackendError> {
        let socket_path =
            std::env::temp_dir().join(format!("vidcue-mpv-{}.sock", std::process::id()));
        // A stale socket from a crashed run would make connect() succeed too early
        let _ = std::fs::remove_file(&socket_path);

        let mut cmd = Command::new(&options.program);
        cmd.arg("--idle=yes")
            .arg("--keep-open=yes")
            .arg("--force-window=yes")
            .arg("--no-terminal")
            .arg(format!("--input-ipc-server={}", socket_path.display()));
        if let Some(wid) = options.window_id {
            cmd.arg(format!("--wid={}", wid));
        }
        cmd.args(&options.extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        tracing::info!(program = %options.program, socket = %socket_path.display(), "spawning mpv");
        let mut process = cmd.spawn().map_err(|source| BackendError::Spawn {
            program: options.program.clone(),
            source,
        })?;

        let stream = match wait_for_socket(&mut process, &socket_path, options.startup_timeout) {
            Some(stream) => stream,
            None => {
                let _ = process.kill();
                let _ = process.wait();
                let _ = std::fs::remove_file(&socket_path);
                return Err(BackendError::Connect { path: socket_path });
            }
        };

        let mut backend = Self::from_stream(stream, options.ipc_timeout)?;
        backend.process = Some(process);
        backend.socket_path = Some(socket_path);
        Ok(backend)
    }

    /// Talk to an already connected IPC stream (no process is owned).
    pub fn from_stream(stream: UnixStream, ipc_timeout: Duration) -> Result<Self, BackendError> {
        stream.set_read_timeout(Some(ipc_timeout))?;
        let writer = stream.try_clone()?;
        Ok(Self {
            process: None,
            socket_path: None,
            reader: BufReader::new(stream),
            writer,
            pending: Vec::new(),
            next_request_id: 1,
            next_handle: 1,
            media: HashMap::new(),
        })
    }

    /// Send one command and wait for its reply's `data`.
    fn request(&mut self, args: Value) -> Result<Value, BackendError> {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let name = args
            .get(0)
            .and_then(Value::as_str)
            .unwrap_or("command")
            .to_string();
        let line = json!({
            "command": args,
            "request_id": request_id,
        });
        tracing::trace!(%line, "mpv request");
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;

        loop {
            // A partial line from an earlier timeout stays in `pending`
            let read = match self.reader.read_until(b'\n', &mut self.pending) {
                Ok(n) => n,
                Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                    return Err(BackendError::Timeout { command: name });
                }
                Err(e) => return Err(e.into()),
            };
            if read == 0 {
                return Err(BackendError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "mpv closed its IPC socket",
                )));
            }

            if self.pending.last() != Some(&b'\n') {
                continue;
            }
            let line = std::mem::take(&mut self.pending);
            let msg: Value = serde_json::from_slice(&line)
                .map_err(|e| BackendError::Protocol(e.to_string()))?;
            if msg.get("event").is_some() {
                tracing::trace!(event = %msg["event"], "mpv event skipped");
                continue;
            }
            if msg["request_id"].as_u64() != Some(request_id) {
                continue;
            }

            return match msg["error"].as_str() {
                Some("success") => Ok(msg.get("data").cloned().unwrap_or(Value::Null)),
                Some(error) => Err(BackendError::Command {
                    command: name,
                    message: error.to_string(),
                }),
                None => Err(BackendError::Protocol(format!(
                    "reply to '{}' has no error field",
                    name
                ))),
            };
        }
    }

    fn get_property(&mut self, property: &str) -> Result<Value, BackendError> {
        self.request(json!(["get_property", property]))
    }

    fn set_property(&mut self, property: &str, value: Value) -> Result<(), BackendError> {
        self.request(json!(["set_property", property, value]))
            .map(|_| ())
    }

    fn get_f64(&mut self, property: &str) -> Result<f64, BackendError> {
        let value = self.get_property(property)?;
        value
            .as_f64()
            .ok_or_else(|| BackendError::Protocol(format!("{} is not a number: {}", property, value)))
    }

    fn get_bool(&mut self, property: &str) -> Result<bool, BackendError> {
        let value = self.get_property(property)?;
        value
            .as_bool()
            .ok_or_else(|| BackendError::Protocol(format!("{} is not a flag: {}", property, value)))
    }

    /// Like `get_f64`, but "no value yet" reads as `default`.
    fn get_f64_or(&mut self, property: &str, default: f64) -> Result<f64, BackendError> {
        match self.get_f64(property) {
            Err(e) if e.is_unavailable() => Ok(default),
            other => other,
        }
    }
}

/// Poll until mpv has created its socket, it exits, or `timeout` passes.
fn wait_for_socket(process: &mut Child, path: &Path, timeout: Duration) -> Option<UnixStream> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(stream) = UnixStream::connect(path) {
            return Some(stream);
        }
        if matches!(process.try_wait(), Ok(Some(_))) || Instant::now() >= deadline {
            return None;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

impl MediaBackend for MpvBackend {
    fn load(&mut self, path: &str) -> Result<ResourceHandle, BackendError> {
        let id = self.next_handle;
        self.next_handle += 1;
        self.media.insert(id, path.to_string());
        Ok(ResourceHandle::new(id))
    }

    fn set_media(&mut self, handle: ResourceHandle) -> Result<(), BackendError> {
        let uri = self
            .media
            .get(&handle.id())
            .cloned()
            .ok_or(BackendError::UnknownHandle(handle.id()))?;
        self.request(json!(["loadfile", uri, "replace"])).map(|_| ())
    }

    fn play(&mut self) -> Result<(), BackendError> {
        self.set_property("pause", json!(false))
    }

    fn pause(&mut self) -> Result<(), BackendError> {
        self.request(json!(["cycle", "pause"])).map(|_| ())
    }

    fn is_playing(&mut self) -> Result<bool, BackendError> {
        if self.get_bool("idle-active")? {
            return Ok(false);
        }
        if self.get_bool("pause")? {
            return Ok(false);
        }
        match self.get_bool("eof-reached") {
            Ok(eof) => Ok(!eof),
            Err(e) if e.is_unavailable() => Ok(true),
            Err(e) => Err(e),
        }
    }

    fn position(&mut self) -> Result<f64, BackendError> {
        let percent = self.get_f64_or("percent-pos", 0.0)?;
        Ok((percent / 100.0).clamp(0.0, 1.0))
    }

    fn set_position(&mut self, fraction: f64) -> Result<(), BackendError> {
        let percent = fraction.clamp(0.0, 1.0) * 100.0;
        self.request(json!(["seek", percent, "absolute-percent+exact"]))
            .map(|_| ())
    }

    fn time(&mut self) -> Result<i64, BackendError> {
        let seconds = self.get_f64_or("time-pos", 0.0)?;
        Ok((seconds * 1000.0).round() as i64)
    }

    fn set_time(&mut self, millis: i64) -> Result<(), BackendError> {
        // mpv keeps the last frame at the end (--keep-open), only the start needs clamping
        let seconds = millis.max(0) as f64 / 1000.0;
        self.set_property("time-pos", json!(seconds))
    }

    fn fps(&mut self) -> Result<Option<f64>, BackendError> {
        match self.get_f64("container-fps") {
            Ok(fps) => Ok(Some(fps)),
            Err(e) if e.is_unavailable() => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), BackendError> {
        self.set_property("speed", json!(rate))
    }

    fn take_snapshot(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), BackendError> {
        if width != 0 || height != 0 {
            return Err(BackendError::Unsupported("scaled snapshots"));
        }
        let target = path.to_string_lossy().into_owned();
        self.request(json!(["screenshot-to-file", target, "video"]))
            .map(|_| ())
    }
}

impl Drop for MpvBackend {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
            let _ = process.wait();
        }
        if let Some(path) = self.socket_path.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}
