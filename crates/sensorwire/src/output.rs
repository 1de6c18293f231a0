use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use sensorwire_layout::{Layout, SensorReading, Value};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ReadingOutput<'a> {
    layout: String,
    values: &'a SensorReading,
    timestamp: String,
}

pub fn print_reading(reading: &SensorReading, layout: &Layout, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ReadingOutput {
                layout: layout.to_string(),
                values: reading,
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "TYPE", "VALUE"]);
            for (i, value) in reading.values().iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    value_type(value).to_string(),
                    render_value(value),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let rendered: Vec<String> = reading.values().iter().map(render_value).collect();
            println!(
                "layout={} values=({})",
                layout,
                rendered.join(", ")
            );
        }
        OutputFormat::Raw => {
            for value in reading.values() {
                println!("{}", render_value(value));
            }
        }
    }
}

pub fn value_type(value: &Value) -> &'static str {
    match value {
        Value::F32(_) => "float32",
        Value::I32(_) => "int32",
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::F32(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
