// 配置管理（由命令列參數建立）

use crate::buffer::encoding_for_label;
use crate::stripes::ThemeKind;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub file: Option<PathBuf>,
    pub tab_width: usize,
    pub line_numbers: bool,
    pub stripes_enabled: bool,
    pub theme: ThemeKind,
    pub split: bool,
    pub encoding: Option<&'static encoding_rs::Encoding>,
    pub debug: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            file: None,
            tab_width: 4,
            line_numbers: true,
            stripes_enabled: true,
            theme: ThemeKind::Dark,
            split: false,
            encoding: None,
            debug: false,
        }
    }

    /// 解析 `--help` / `--version` 之外的參數
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let mut config = Self::new();

        if let Some(theme) = args.opt_value_from_str::<_, String>("--theme")? {
            config.theme = theme.parse()?;
        }
        if let Some(label) = args.opt_value_from_str::<_, String>("--encoding")? {
            config.encoding = Some(encoding_for_label(&label)?);
        }
        if let Some(width) = args
            .opt_value_from_str::<_, usize>("--tab-width")
            .context("--tab-width expects a number")?
        {
            config.tab_width = width.clamp(1, 16);
        }
        config.stripes_enabled = !args.contains("--no-stripes");
        config.line_numbers = !args.contains("--no-line-numbers");
        config.split = args.contains("--split");
        config.debug = args.contains("--debug");
        config.file = args.opt_free_from_str()?;

        let rest = args.finish();
        if !rest.is_empty() {
            anyhow::bail!("Unexpected arguments: {:?}", rest);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Config> {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        Config::from_args(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.theme, ThemeKind::Dark);
        assert!(config.stripes_enabled);
        assert!(config.line_numbers);
        assert!(!config.split);
        assert!(config.file.is_none());
        assert_eq!(config.tab_width, 4);
    }

    #[test]
    fn test_flags_and_file() {
        let config = parse(&[
            "--theme",
            "hc-light",
            "--no-stripes",
            "--split",
            "--encoding",
            "gbk",
            "notes.txt",
        ])
        .unwrap();
        assert_eq!(config.theme, ThemeKind::HighContrastLight);
        assert!(!config.stripes_enabled);
        assert!(config.split);
        assert_eq!(config.encoding.map(|e| e.name()), Some("GBK"));
        assert_eq!(config.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse(&["--theme", "solarized"]).is_err());
        assert!(parse(&["--encoding", "klingon"]).is_err());
        assert!(parse(&["--tab-width", "wide"]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }
}
