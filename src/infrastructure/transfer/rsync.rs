//! Rsync Transfer Backend
//!
//! Spawns rsync with the path list on stdin and relays its output line by
//! line. One reader thread per output stream feeds a shared channel, so a
//! chatty stderr can never block stdout.

use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::domain::ports::{
    OutputLine, TransferBackend, TransferError, TransferProcess, TransferRequest,
};

/// Transfer backend running a local rsync executable
#[derive(Debug, Clone, Copy, Default)]
pub struct RsyncBackend;

impl RsyncBackend {
    pub fn new() -> Self {
        Self
    }

    /// Run `<program> --version` and return its first output line
    pub fn check_available(program: &Path) -> Result<String, TransferError> {
        let output = Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(TransferError::Io(format!(
                "{} --version exited with {:?}",
                program.display(),
                output.status.code()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

impl TransferBackend for RsyncBackend {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn spawn(&self, request: &TransferRequest) -> Result<Box<dyn TransferProcess>, TransferError> {
        let mut child = Command::new(&request.program)
            .args(&request.args)
            .current_dir(&request.cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let (tx, lines) = mpsc::channel();
        let mut threads = Vec::with_capacity(3);

        if let Some(stdout) = child.stdout.take() {
            threads.push(spawn_reader(stdout, tx.clone(), OutputLine::Stdout));
        }
        if let Some(stderr) = child.stderr.take() {
            threads.push(spawn_reader(stderr, tx, OutputLine::Stderr));
        }

        // Written from its own thread: rsync may start printing before it has
        // read the whole list. Dropping the handle closes stdin.
        if let Some(mut stdin) = child.stdin.take() {
            let payload = request.stdin.clone();
            threads.push(thread::spawn(move || {
                let _ = stdin.write_all(payload.as_bytes());
            }));
        }

        Ok(Box::new(RsyncProcess {
            child,
            lines,
            threads,
        }))
    }
}

fn spawn_reader<R>(stream: R, tx: Sender<OutputLine>, wrap: fn(String) -> OutputLine) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        for line in BufReader::new(stream).split(b'\n') {
            let Ok(bytes) = line else {
                break;
            };
            let text = String::from_utf8_lossy(&bytes);
            if tx.send(wrap(text.trim_end_matches('\r').to_string())).is_err() {
                break;
            }
        }
    })
}

/// A running rsync child process
struct RsyncProcess {
    child: Child,
    lines: Receiver<OutputLine>,
    threads: Vec<JoinHandle<()>>,
}

impl TransferProcess for RsyncProcess {
    fn next_line(&mut self) -> Option<OutputLine> {
        self.lines.recv().ok()
    }

    fn wait(self: Box<Self>) -> Result<Option<i32>, TransferError> {
        let RsyncProcess {
            mut child,
            lines,
            threads,
        } = *self;
        // Unread output must not keep the reader threads blocked.
        drop(lines);
        for handle in threads {
            let _ = handle.join();
        }
        let status = child.wait()?;
        Ok(status.code())
    }
}
