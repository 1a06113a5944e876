//! Interactive session entry point

use anyhow::Result;

use crate::config::Config;
use crate::ui::menu;

pub fn run(config: &Config) -> Result<()> {
    let mut registry = super::open_registry(config);
    menu::run(&mut registry)
}
