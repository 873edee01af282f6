//! # CLI Argument Definitions
//!
//! Subcommands, shared options, and one flag per FCM setting.

use clap::{ArgAction, Args, Parser, Subcommand};
use fcmkit::FcmBuilder;
use fcmkit::domain::{Lights, Style};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "fcmkit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Assemble the Android (FCM) settings of a push notification as JSON")]
pub struct Cli {
    /// Log at DEBUG level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the assembled options as JSON on stdout
    Build {
        #[command(flatten)]
        source: SourceArgs,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the settings that would be sent and flag undocumented enum values
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List every recognized setting key
    Settings {},
}

/// Where the options come from: file, then `FCMKIT__*` environment, then flags.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Options file (TOML, JSON or YAML, by extension) with snake_case keys
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingArgs,
}

/// One flag per FCM setting; every flag given overrides the file and environment layers.
#[derive(Debug, Clone, Default, Args)]
pub struct SettingArgs {
    /// Hold the message until the device becomes active
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub delay_while_idle: Option<bool>,
    /// Seconds to keep the message while the device is offline
    #[arg(long, value_name = "SECONDS")]
    pub time_to_live: Option<u64>,
    #[arg(long)]
    pub collapse_key: Option<String>,
    /// Custom data as a JSON value
    #[arg(long, value_name = "JSON", value_parser = json_arg::<Value>)]
    pub payload: Option<Value>,
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub sync: Option<bool>,
    #[arg(long)]
    pub sound: Option<String>,
    #[arg(long)]
    pub interactive_category: Option<String>,
    /// max, high, default, low or min
    #[arg(long)]
    pub priority: Option<String>,
    /// Style descriptor as a JSON object
    #[arg(long, value_name = "JSON", value_parser = json_arg::<Style>)]
    pub style: Option<Style>,
    /// private or public
    #[arg(long)]
    pub visibility: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    /// LED descriptor as a JSON object
    #[arg(long, value_name = "JSON", value_parser = json_arg::<Lights>)]
    pub lights: Option<Lights>,
    /// DEFAULT or SILENT
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,
    #[arg(long)]
    pub android_title: Option<String>,
    #[arg(long)]
    pub group_id: Option<String>,
}

impl SettingArgs {
    /// Applies every flag that was given on top of `builder`.
    pub fn apply(self, mut builder: FcmBuilder) -> FcmBuilder {
        if let Some(v) = self.delay_while_idle {
            builder = builder.delay_while_idle(v);
        }
        if let Some(v) = self.time_to_live {
            builder = builder.time_to_live(v);
        }
        if let Some(v) = self.collapse_key {
            builder = builder.collapse_key(v);
        }
        if let Some(v) = self.payload {
            builder = builder.payload(v);
        }
        if let Some(v) = self.sync {
            builder = builder.sync(v);
        }
        if let Some(v) = self.sound {
            builder = builder.sound(v);
        }
        if let Some(v) = self.interactive_category {
            builder = builder.interactive_category(v);
        }
        if let Some(v) = self.priority {
            builder = builder.priority(v);
        }
        if let Some(v) = self.style {
            builder = builder.style(v);
        }
        if let Some(v) = self.visibility {
            builder = builder.visibility(v);
        }
        if let Some(v) = self.icon {
            builder = builder.icon(v);
        }
        if let Some(v) = self.lights {
            builder = builder.lights(v);
        }
        if let Some(v) = self.kind {
            builder = builder.kind(v);
        }
        if let Some(v) = self.android_title {
            builder = builder.android_title(v);
        }
        if let Some(v) = self.group_id {
            builder = builder.group_id(v);
        }
        builder
    }
}

fn json_arg<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}
