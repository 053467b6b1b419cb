use crate::output::OutputFormatter;
use file_entry::{FileEntry, HashAlgorithm};
use std::path::PathBuf;

pub struct CommandExecutor {
    formatter: OutputFormatter,
}

impl CommandExecutor {
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self {
            formatter: OutputFormatter::new(use_colors, verbose),
        }
    }

    pub fn inspect(&self, path: PathBuf, json: bool) -> bool {
        let info = FileEntry::new(&path).info();

        if json {
            match serde_json::to_string_pretty(&info) {
                Ok(rendered) => {
                    println!("{}", rendered);
                    true
                }
                Err(err) => {
                    self.formatter
                        .print_error(&format!("Failed to serialize report: {}", err));
                    false
                }
            }
        } else {
            self.formatter.print_report(&info);
            true
        }
    }

    pub fn hash(&self, path: PathBuf, algorithm: HashAlgorithm) -> bool {
        let digest = FileEntry::new(&path).hash(algorithm);

        if digest.is_empty() {
            self.formatter.print_error(&format!(
                "No {} digest for {}: not a readable regular file",
                algorithm,
                path.display()
            ));
            false
        } else {
            println!("{}  {}", digest, path.display());
            true
        }
    }

    pub fn mime(&self, path: PathBuf) -> bool {
        let mime = FileEntry::new(&path).mime_type();

        if mime.is_empty() {
            self.formatter.print_error(&format!(
                "No MIME type for {}: not a readable regular file",
                path.display()
            ));
            false
        } else {
            println!("{}", mime);
            true
        }
    }

    pub fn mkdir(&self, path: PathBuf, recursive: bool) -> bool {
        let entry = FileEntry::new(&path);

        if entry.mkdir(recursive) {
            self.formatter
                .print_success(&format!("Created {}", path.display()));
            true
        } else if entry.exists() {
            self.formatter
                .print_error(&format!("{} already exists", path.display()));
            false
        } else {
            self.formatter
                .print_error(&format!("Failed to create {}", path.display()));
            false
        }
    }

    pub fn rm(&self, path: PathBuf, recursive: bool) -> bool {
        if FileEntry::new(&path).rm(recursive) {
            self.formatter
                .print_success(&format!("Removed {}", path.display()));
            true
        } else {
            self.formatter
                .print_error(&format!("Failed to remove {}", path.display()));
            false
        }
    }
}
