use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;

/// Where an export lands: a file when a path was given, stdout otherwise.
#[derive(Debug)]
pub(crate) enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_path(path: Option<PathBuf>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create output file: {}", path.display()))?;
                Ok(Output::File {
                    writer: BufWriter::new(file),
                    path,
                })
            }
            None => Ok(Output::Stdout(io::stdout().lock())),
        }
    }

    pub fn target(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("failed to write JSON to {}", self.target()))?;
        writeln!(self)
            .and_then(|()| self.flush())
            .with_context(|| format!("failed to flush output to {}", self.target()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}
