use std::{env, fs, path::Path, path::PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::actions::Operation;
use crate::menu::Menu;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    pub title: String,

    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntryConfig {
    Action(ActionEntry),
    Menu(BranchEntry),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionEntry {
    #[serde(default)]
    pub label: Option<String>,
    pub action: Operation,
}

/// A branch is labelled by its nested menu's title.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BranchEntry {
    pub menu: MenuConfig,
}

impl MenuConfig {
    /// Builds the runnable tree, rejecting blank titles and empty menus.
    pub fn build(&self) -> Result<Menu> {
        if self.title.trim().is_empty() {
            bail!("menu title must not be blank");
        }
        if self.entries.is_empty() {
            bail!("menu '{}' has no entries", self.title);
        }

        let mut menu = Menu::new(self.title.clone());
        for (i, entry) in self.entries.iter().enumerate() {
            menu = match entry {
                EntryConfig::Action(entry) => {
                    menu.leaf(entry.action.action(entry.label.as_deref()))
                }
                EntryConfig::Menu(entry) => {
                    let nested = entry
                        .menu
                        .build()
                        .with_context(|| format!("entry {} of menu '{}'", i + 1, self.title))?;
                    menu.branch(nested)
                }
            };
        }
        Ok(menu)
    }
}

pub fn default_menu() -> Menu {
    Menu::new("Main menu")
        .leaf(Operation::Add.action(None))
        .branch(
            Menu::new("Multiply or divide?")
                .leaf(Operation::Multiply.action(None))
                .leaf(Operation::Divide.action(None)),
        )
}

pub fn load_optional() -> Result<Option<MenuConfig>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load(&path).map(Some)
}

pub fn load(path: &Path) -> Result<MenuConfig> {
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: MenuConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("MENUCALC_CONFIG") {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("menucalc.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("menucalc").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("menucalc").join("config.json"));
    }

    None
}

/// The configured menu if a config file exists, the built-in tree otherwise.
pub fn load_menu() -> Result<Menu> {
    match load_optional()? {
        Some(cfg) => {
            log::info!("using menu definition '{}' from config", cfg.title);
            cfg.build().context("building menu from config")
        }
        None => {
            log::info!("no menu config found, using built-in menu");
            Ok(default_menu())
        }
    }
}
