// SPDX-License-Identifier: MPL-2.0
//! Command-line front end: argument parsing and command execution.

use crate::config::paths;
use crate::error::{Error, Result};
use crate::i18n::{Catalog, ConfigStore, I18n, Locale, Params, PreferenceStore, Translation};
use crate::page::{Location, Page};
use crate::site;
use std::io::Write;
use std::sync::Arc;

pub const DEFAULT_URL: &str = "https://brenon.cloud/";

pub const HELP: &str = "\
brenon-cloud: Brenon.Cloud translations from the command line

USAGE:
  brenon-cloud [OPTIONS] <COMMAND>

COMMANDS:
  locale                  Print the active locale and where it came from
  t <KEY> [--name <V>]    Print the translation of KEY
  list <KEY>              Print a list-valued key, one item per line
  set <LANG>              Switch locale, persist it and print the new URL
  render [--service <ID>] Print the bound home page (or a service page) as HTML
  keys                    Print every translation key

OPTIONS:
  --lang <LANG>           Force the locale (en, pt-br, es)
  --url <URL>             Page URL to read the `lang` parameter from
  --config-dir <DIR>      Directory holding settings.toml
  -v, --verbose           Enable debug logging
  -h, --help              Print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Locale,
    Translate { key: String, name: Option<String> },
    List { key: String },
    Set { lang: String },
    Render { service: Option<String> },
    Keys,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Forced locale override; ignored unless it is a supported tag.
    pub lang: Option<String>,
    pub url: String,
    /// Takes precedence over the `BRENON_CLOUD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    pub verbose: bool,
    pub command: Command,
}

fn usage(message: impl Into<String>) -> Error {
    Error::Usage(message.into())
}

fn arg_error(err: pico_args::Error) -> Error {
    usage(err.to_string())
}

impl Flags {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let help = args.contains(["-h", "--help"]);
        let verbose = args.contains(["-v", "--verbose"]);
        let lang = args.opt_value_from_str("--lang").map_err(arg_error)?;
        let url = args
            .opt_value_from_str("--url")
            .map_err(arg_error)?
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let config_dir = args.opt_value_from_str("--config-dir").map_err(arg_error)?;
        let name = args.opt_value_from_str("--name").map_err(arg_error)?;
        let service = args.opt_value_from_str("--service").map_err(arg_error)?;

        let subcommand: Option<String> = args.subcommand().map_err(arg_error)?;
        let command = match subcommand.as_deref() {
            _ if help => Command::Help,
            None => Command::Help,
            Some("locale") => Command::Locale,
            Some("t") => Command::Translate {
                key: args.free_from_str().map_err(arg_error)?,
                name,
            },
            Some("list") => Command::List {
                key: args.free_from_str().map_err(arg_error)?,
            },
            Some("set") => Command::Set {
                lang: args.free_from_str().map_err(arg_error)?,
            },
            Some("render") => Command::Render { service },
            Some("keys") => Command::Keys,
            Some(other) => return Err(usage(format!("unknown command `{}`", other))),
        };

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(usage(format!("unexpected arguments: {:?}", rest)));
        }

        Ok(Self {
            lang,
            url,
            config_dir,
            verbose,
            command,
        })
    }
}

/// Runs `flags.command` against the settings store, writing to `out`.
pub fn run(flags: &Flags, out: &mut impl Write) -> Result<()> {
    if flags.command == Command::Help {
        out.write_all(HELP.as_bytes())?;
        return Ok(());
    }

    paths::init_cli_override(flags.config_dir.clone());
    run_with_store(flags, ConfigStore::new(), out)
}

/// Same as [`run`] with an explicit preference store.
pub fn run_with_store<S: PreferenceStore>(
    flags: &Flags,
    store: S,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = Arc::new(Catalog::embedded()?);
    let location = Location::parse(&flags.url)?;
    let document = match &flags.command {
        Command::Render {
            service: Some(service),
        } => site::service_page(service),
        _ => site::home_page(),
    };
    let mut page = Page::new(location, document);
    let mut i18n = I18n::init(catalog, store, &mut page, flags.lang.clone())?;

    match &flags.command {
        Command::Help => out.write_all(HELP.as_bytes())?,
        Command::Locale => writeln!(out, "{} ({})", i18n.locale(), i18n.source())?,
        Command::Translate { key, name } => {
            let params = name.as_ref().map(|name| Params::new().with("name", name));
            match i18n.t(key, params.as_ref()) {
                Translation::Text(text) | Translation::Missing(text) => writeln!(out, "{}", text)?,
                Translation::List(items) => {
                    for item in items {
                        writeln!(out, "{}", item)?;
                    }
                }
            }
        }
        Command::List { key } => {
            let items = i18n
                .list(key)
                .ok_or_else(|| usage(format!("`{}` is not a list-valued key", key)))?;
            for item in items {
                writeln!(out, "{}", item)?;
            }
        }
        Command::Set { lang } => {
            if !i18n.set_locale(&mut page, lang)? {
                let supported: Vec<&str> = Locale::ALL.iter().map(|l| l.as_str()).collect();
                return Err(usage(format!(
                    "unsupported locale `{}`, expected one of: {}",
                    lang,
                    supported.join(", ")
                )));
            }
            writeln!(out, "{}", page.location.href())?;
        }
        Command::Render { .. } => {
            site::fill_lists(&i18n, &mut page.document);
            out.write_all(page.document.to_html().as_bytes())?;
        }
        Command::Keys => {
            for key in i18n.catalog().keys(Locale::DEFAULT) {
                writeln!(out, "{}", key)?;
            }
        }
    }
    Ok(())
}
