//! Config subcommands handler

use anyhow::Result;

use ftl::config::docs::{annotate_config, insert_optional_field_templates};
use ftl::theme::current_theme;
use ftl::Config;

/// Show current configuration as TOML with inline documentation comments.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let annotated = render_annotated(&config)?;
    let theme = current_theme();
    println!("{}", theme.toml_comments(&annotated));
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    if !path.exists() {
        let theme = current_theme();
        eprintln!("{}", theme.secondary_text("(not created yet, defaults apply)"));
    }
    Ok(())
}

/// Pretty TOML with optional-field templates and description comments.
pub fn render_annotated(config: &Config) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    // Templates go in before annotation so they get descriptions too
    let with_templates = insert_optional_field_templates(&toml_str);
    Ok(annotate_config(&with_templates))
}
