use colored::*;
use file_entry::{EntryInfo, EntryKind};

pub struct OutputFormatter {
    use_colors: bool,
    verbose: bool,
}

impl OutputFormatter {
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self {
            use_colors,
            verbose,
        }
    }

    pub fn print_report(&self, info: &EntryInfo) {
        self.print_header(&info.path.display().to_string());
        println!();

        self.print_stat("Kind", kind_label(info.kind));
        self.print_stat("Name", &info.name);

        if let Some(ref extension) = info.extension {
            self.print_stat("Extension", extension);
        }

        self.print_stat("Size", &format_size(info.size));

        if let Some(ref mime) = info.mime_type {
            self.print_stat("MIME", mime);
        }

        if self.verbose {
            if let Some(created) = info.created_at {
                self.print_stat("Created", &created.to_rfc3339());
            }
            if let Some(modified) = info.modified_at {
                self.print_stat("Modified", &modified.to_rfc3339());
            }
            self.print_stat("Hidden", if info.is_hidden { "yes" } else { "no" });
        }

        println!();
    }

    fn print_stat(&self, label: &str, value: &str) {
        if self.use_colors {
            println!("  {}: {}", label.cyan(), value.white());
        } else {
            println!("  {}: {}", label, value);
        }
    }

    pub fn print_header(&self, text: &str) {
        if self.use_colors {
            println!("{}", text.bright_green().bold());
        } else {
            println!("{}", text);
            println!("{}", "=".repeat(text.len()));
        }
    }

    pub fn print_success(&self, text: &str) {
        if self.use_colors {
            println!("{} {}", "✓".green(), text.green());
        } else {
            println!("[SUCCESS] {}", text);
        }
    }

    pub fn print_error(&self, text: &str) {
        if self.use_colors {
            eprintln!("{} {}", "✗".red(), text.red());
        } else {
            eprintln!("[ERROR] {}", text);
        }
    }
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::File => "file",
        EntryKind::Directory => "directory",
        EntryKind::Other => "other",
        EntryKind::Missing => "missing",
    }
}

pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if size >= TB {
        format!("{:.2} TB", size as f64 / TB as f64)
    } else if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} B", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(100), "100 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
    }
}
