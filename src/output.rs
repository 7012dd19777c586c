use anyhow::anyhow;
use formatx::formatx;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub trait Output: Debug {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

/// Writes each location key to its own file in a directory. The file template receives the
/// location key, e.g. a template of "office_{}" turns "results" into "office_results.csv".
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }

    fn file_name(&self, location_key: &str, file_extension: &str) -> anyhow::Result<String> {
        let stem = formatx!(&self.file_template, location_key)
            .map_err(|err| anyhow!("Could not apply output file template: {err:?}"))?;
        Ok(format!("{stem}.{file_extension}"))
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        let file_name = self.file_name(location_key, file_extension)?;
        Ok(BufWriter::new(File::create(
            self.directory_path.join(file_name),
        )?))
    }
}

impl Output for &FileOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_location_key(self, location_key, file_extension)
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(
        &self,
        _location_key: &str,
        _file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_apply_file_template_to_location_key() {
        let output = FileOutput::new(PathBuf::from("."), "office_{}".to_string());
        assert_eq!(
            output.file_name("results", "csv").unwrap(),
            "office_results.csv"
        );
    }

    #[rstest]
    fn should_report_sink_as_noop() {
        assert!(SinkOutput.is_noop());
        let mut writer = SinkOutput.writer_for_location_key("results", "csv").unwrap();
        assert!(writer.write_all(b"ignored").is_ok());
    }

    #[rstest]
    fn should_write_file_into_directory() {
        let directory = std::env::temp_dir().join(format!("room-output-{}", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        let output = FileOutput::new(directory.clone(), "{}".to_string());

        {
            let mut writer = output.writer_for_location_key("catalog", "txt").unwrap();
            writer.write_all(b"concrete").unwrap();
        }

        assert_eq!(
            std::fs::read_to_string(directory.join("catalog.txt")).unwrap(),
            "concrete"
        );
        std::fs::remove_dir_all(directory).unwrap();
    }
}
