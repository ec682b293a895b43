// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded subprocess execution with captured output.

use crate::error::{JartenderError, Result};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Output of a subprocess that ran to completion.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// RAII guard that kills and reaps the child unless it already exited.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        if let Err(err) = self.child.kill() {
            debug!("Failed to kill child process {}: {err}", self.child.id());
        }
        if let Err(err) = self.child.wait() {
            warn!("Failed to reap child process {}: {err}", self.child.id());
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

type Chunk = (Stream, String);

/// Read `source` to the end on a detached thread and send the text over `tx`.
fn drain<R: Read + Send + 'static>(source: Option<R>, stream: Stream, tx: &Sender<Chunk>) -> bool {
    let Some(mut reader) = source else {
        return false;
    };
    let tx = tx.clone();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = reader.read_to_end(&mut buffer);
        let _ = tx.send((stream, String::from_utf8_lossy(&buffer).into_owned()));
    });
    true
}

fn timed_out(program: &Path, timeout: Duration) -> JartenderError {
    JartenderError::ProbeTimeout {
        path: program.display().to_string(),
        timeout,
    }
}

// ETXTBSY: a launcher written moments ago (a fresh install, or a fixture) can
// still be open for writing in a process forked concurrently by this one.
#[cfg(unix)]
const TEXT_FILE_BUSY: i32 = 26;
#[cfg(unix)]
const SPAWN_ATTEMPTS: u32 = 3;

#[cfg(unix)]
fn spawn(command: &mut Command) -> std::io::Result<Child> {
    let mut attempt = 1;
    loop {
        match command.spawn() {
            Err(e) if e.raw_os_error() == Some(TEXT_FILE_BUSY) && attempt < SPAWN_ATTEMPTS => {
                debug!("Executable busy, retrying spawn (attempt {attempt})");
                attempt += 1;
                thread::sleep(POLL_INTERVAL);
            }
            result => return result,
        }
    }
}

#[cfg(not(unix))]
fn spawn(command: &mut Command) -> std::io::Result<Child> {
    command.spawn()
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// The child is killed when `timeout` elapses. The same deadline bounds the
/// wait for its output, so a background process holding the pipes open cannot
/// stall the caller. Stdin is closed so a program waiting for input cannot
/// block past the deadline.
pub fn run_with_timeout(program: &Path, args: &[&str], timeout: Duration) -> Result<CapturedOutput> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    let child = spawn(&mut command).map_err(|e| JartenderError::ProbeSpawn {
        path: program.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut guard = ChildGuard::new(child);

    let (tx, rx) = mpsc::channel();
    let mut pending = usize::from(drain(guard.child.stdout.take(), Stream::Stdout, &tx))
        + usize::from(drain(guard.child.stderr.take(), Stream::Stderr, &tx));
    drop(tx);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match guard.child.try_wait() {
            Ok(Some(status)) => {
                guard.reaped = true;
                break status;
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    return Err(timed_out(program, timeout));
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                return Err(JartenderError::SystemError(format!(
                    "Failed to wait for {}: {e}",
                    program.display()
                )));
            }
        }
    };

    // A grandchild that inherited the pipes can keep them open after the
    // child exits. Reader threads still blocked at the deadline are abandoned.
    let mut stdout = String::new();
    let mut stderr = String::new();
    while pending > 0 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, text)) => stdout = text,
            Ok((Stream::Stderr, text)) => stderr = text,
            Err(RecvTimeoutError::Timeout) => {
                debug!("Output of {} still open at the deadline", program.display());
                return Err(timed_out(program, timeout));
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
        pending -= 1;
    }

    Ok(CapturedOutput {
        status,
        stdout,
        stderr,
    })
}
