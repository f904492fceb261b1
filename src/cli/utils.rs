use std::io::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::client::{Clipboard, Notifier};

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str, error_code: Option<&str>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Print records as JSON, or one `id  summary` line each for text output
pub fn output_records<T, F>(
    output_format: &OutputFormat,
    collection_name: &str,
    records: &[T],
    summary: F,
) -> anyhow::Result<()>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ collection_name: records }))?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No {} found", collection_name);
            }
            for record in records {
                println!("{}", summary(record));
            }
        }
    }
    Ok(())
}

/// Print a single record, or `null`
pub fn output_record<T: Serialize>(output_format: &OutputFormat, record: Option<&T>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => match record {
            Some(r) => println!("{}", serde_json::to_string_pretty(r)?),
            None => println!("Not found"),
        },
    }
    Ok(())
}

/// Terminal stand-in for toast notifications
pub struct ConsoleNotifier {
    output_format: OutputFormat,
}

impl ConsoleNotifier {
    pub fn new(output_format: OutputFormat) -> Self {
        Self { output_format }
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        if let Err(e) = output_success(&self.output_format, message, None) {
            tracing::warn!("failed to write notification: {}", e);
        }
    }

    fn error(&self, message: &str) {
        if let Err(e) = output_error(&self.output_format, message, None) {
            tracing::warn!("failed to write notification: {}", e);
        }
    }
}

/// "Copies" by writing the text on its own line to stdout, so it can be piped
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Read one trimmed line from stdin after printing `prompt`
pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;
    drop(stdout);

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
