use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, Read, Stdin, Stdout, Write, stdin, stdout},
};

/// Path argument where `-` stands for the standard stream
macro_rules! define_file_or_std {
    ($name:ident, $std_enum:ident) => {
        #[derive(Debug, Clone)]
        pub enum $name {
            FilePath(String),
            $std_enum,
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    Self::$std_enum => write!(f, "-"),
                    Self::FilePath(value) => write!(f, "{value}"),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                if &value == "-" {
                    Self::$std_enum
                } else {
                    Self::FilePath(value)
                }
            }
        }
    };
}

define_file_or_std!(FileOrStdin, Stdin);
define_file_or_std!(FileOrStdout, Stdout);

pub enum FileOrStdinReader {
    File(File),
    Stdin(Stdin),
}

impl Read for FileOrStdinReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.read(buf),
            Self::Stdin(fd) => fd.lock().read(buf),
        }
    }
}

impl FileOrStdin {
    pub fn open(&self) -> io::Result<FileOrStdinReader> {
        match self {
            Self::FilePath(fp) => Ok(FileOrStdinReader::File(File::open(fp)?)),
            Self::Stdin => Ok(FileOrStdinReader::Stdin(stdin())),
        }
    }

    /// Read the whole input into memory. Invalid UTF-8 is replaced, the game reader only looks
    /// at ascii digits and whitespace.
    pub fn read_to_string(&self) -> Result<String> {
        let reader = self
            .open()
            .context(format!("Could not open '{}'", self))?;
        read_lossy(reader).context(format!("Could not read from '{}'", self))
    }
}

fn read_lossy(mut reader: impl Read) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub enum FileOrStdoutWriter {
    File(File),
    Stdout(Stdout),
}

impl Write for FileOrStdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.write(buf),
            Self::Stdout(fd) => fd.lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(f) => f.flush(),
            Self::Stdout(fd) => fd.lock().flush(),
        }
    }
}

impl FileOrStdout {
    pub fn create(&self) -> Result<FileOrStdoutWriter> {
        match self {
            Self::FilePath(fp) => Ok(FileOrStdoutWriter::File(
                File::create(fp).context(format!("Could not create file '{}'", fp))?,
            )),
            Self::Stdout => Ok(FileOrStdoutWriter::Stdout(stdout())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nim::position::Nim;

    #[test]
    fn invalid_utf8_after_the_game_is_ignored() {
        let input = read_lossy(&b"2\n1 1\n\xff\xfe trailing\n"[..]).unwrap();
        let position = Nim::read_game(&input).unwrap();
        assert_eq!(position, Nim::new(vec![1, 1]));
        assert_eq!(position.decide().to_string(), "LOSE: take 1 from pile 0");
    }

    #[test]
    fn invalid_utf8_in_place_of_a_pile_stops_reading() {
        let input = read_lossy(&b"3\n4 \xc3 5\n"[..]).unwrap();
        assert_eq!(Nim::read_game(&input).unwrap(), Nim::new(vec![4, 0, 0]));
    }

    #[test]
    fn reads_from_file_path() {
        let path = std::env::temp_dir().join(format!("nim_cli_io_{}.txt", std::process::id()));
        std::fs::write(&path, b"3\n3 4 5\n\x80").unwrap();

        let input = FileOrStdin::from(path.to_string_lossy().into_owned())
            .read_to_string()
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            Nim::read_game(&input).unwrap().decide().to_string(),
            "WIN: take 2 from pile 0"
        );
    }
}
