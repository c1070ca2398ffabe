use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::mpsc,
    thread,
};

pub use data::log::Error;

// حداکثر اندازه فایل لاگ (50 مگابایت)
const MAX_LOG_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// پیام‌هایی که به ترد نویسنده لاگ ارسال می‌شوند
enum LogMessage {
    Content(Vec<u8>),
    Flush,
    Shutdown,
}

/// راه‌اندازی سیستم لاگینگ برنامه
///
/// در حالت دیباگ خروجی روی کنسول است و در حالت عادی در فایل داده‌های برنامه.
pub fn setup(is_debug: bool) -> Result<(), Error> {
    let default_level = if is_debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    // سطح لاگ از متغیر محیطی RUST_LOG در صورت وجود
    let level_filter = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(str::parse::<log::Level>)
        .transpose()?
        .unwrap_or(default_level)
        .to_level_filter();

    let mut io_sink = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}:{} -- {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            message
        ));
    });

    if is_debug {
        io_sink = io_sink.chain(std::io::stdout());
    } else {
        let log_path = data::log::path()?;
        rotate(&log_path)?;

        let writer: Box<dyn Write + Send> = Box::new(BackgroundWriter::new(log_path)?);
        io_sink = io_sink.chain(writer);
    }

    fern::Dispatch::new()
        .level(log::LevelFilter::Off)
        .level_for("panic", log::LevelFilter::Error)
        .level_for("tickerfloat", level_filter)
        .level_for("tickerfloat_data", level_filter)
        .level_for("tickerfloat_exchange", level_filter)
        .chain(io_sink)
        .apply()?;

    Ok(())
}

/// انتقال لاگ فعلی به فایل «قبلی» (فایل قبلی‌تر حذف می‌شود)
fn rotate(log_path: &Path) -> io::Result<()> {
    let previous = data::log::previous_path(log_path);

    if previous.exists() {
        fs::remove_file(&previous)?;
    }
    if log_path.exists() {
        fs::rename(log_path, &previous)?;
    }

    Ok(())
}

/// نویسنده‌ای که نوشتن در فایل را در یک ترد جداگانه انجام می‌دهد تا ترد رابط کاربری منتظر دیسک نماند
struct BackgroundWriter {
    sender: mpsc::Sender<LogMessage>,
    _thread_handle: thread::JoinHandle<()>,
}

impl BackgroundWriter {
    fn new(path: PathBuf) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel();

        let thread_handle = thread::Builder::new()
            .name("logger-thread".to_string())
            .spawn(move || {
                let mut file = match LogFile::open(path) {
                    Ok(file) => file,
                    Err(e) => {
                        eprintln!("Failed to open log file: {e}");
                        return;
                    }
                };

                while let Ok(message) = receiver.recv() {
                    let result = match message {
                        LogMessage::Content(data) => file.write_all(&data),
                        LogMessage::Flush => file.flush(),
                        LogMessage::Shutdown => break,
                    };
                    if let Err(e) = result {
                        eprintln!("Logging error: {e}");
                    }
                }
            })?;

        Ok(Self {
            sender,
            _thread_handle: thread_handle,
        })
    }

    fn send(&self, message: LogMessage) -> io::Result<()> {
        self.sender
            .send(message)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "Logger thread disconnected"))
    }
}

impl Write for BackgroundWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.send(LogMessage::Content(buf.to_vec()))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send(LogMessage::Flush)
    }
}

impl Drop for BackgroundWriter {
    fn drop(&mut self) {
        let _ = self.sender.send(LogMessage::Shutdown);
    }
}

/// فایل لاگ با کنترل اندازه؛ پس از رسیدن به سقف، به فایل قبلی منتقل و از نو شروع می‌شود
struct LogFile {
    path: PathBuf,
    file: fs::File,
    current_size: u64,
}

impl LogFile {
    fn open(path: PathBuf) -> io::Result<Self> {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        let current_size = file.metadata()?.len();

        Ok(Self {
            path,
            file,
            current_size,
        })
    }

    fn reopen_rotated(&mut self) -> io::Result<()> {
        self.file.flush()?;
        rotate(&self.path)?;
        *self = Self::open(self.path.clone())?;
        Ok(())
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.current_size + buf.len() as u64 > MAX_LOG_FILE_SIZE {
            self.reopen_rotated()?;
        }

        let bytes = self.file.write(buf)?;
        self.current_size += bytes as u64;

        Ok(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
