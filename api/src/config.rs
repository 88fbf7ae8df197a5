use bbs_common::{PagingConfig, TokenStore};
use clap::{ArgAction, Parser, ValueEnum};
use std::{net::SocketAddr, path::PathBuf, time::Duration};

/// Which layout to serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeviceMode {
    /// PC layout everywhere, including on phones.
    Pc,
    /// Mobile layout everywhere, including on desktops.
    Mobile,
    /// Follow the client's User-Agent.
    Both,
}

#[derive(Clone, Debug, Parser)]
pub struct BbsApiConfig {
    #[clap(
        short,
        long,
        env = "BBS_API_BIND_ADDR",
        default_value = "0.0.0.0:8000"
    )]
    pub bind_addr: SocketAddr,

    #[clap(
        long,
        env = "BBS_API_PUBLIC_URL",
        default_value = "http://localhost:8000"
    )]
    pub public_url: String,

    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,

    /// Root directory holding one sub-directory per theme.
    #[clap(long, env = "BBS_API_TEMPLATES_DIR", default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Active theme. Falls back to `basic` when the directory is missing.
    #[clap(long, env = "BBS_API_THEME", default_value = "basic")]
    pub theme: String,

    #[clap(long, env = "BBS_API_EDITOR_DIR", default_value = "static/plugin/editor")]
    pub editor_dir: PathBuf,

    /// Upload root for board images.
    #[clap(long, env = "BBS_API_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Admin menu JSON files, merged in order. Missing files are skipped.
    #[clap(
        long,
        env = "BBS_API_ADMIN_MENU_FILES",
        value_delimiter = ',',
        default_value = "_admin/admin_menu_bbs.json,_admin/admin_menu_shop.json,_admin/admin_menu_sms.json"
    )]
    pub admin_menu_files: Vec<PathBuf>,

    /// Rows per list page.
    #[clap(long, env = "BBS_API_PAGE_ROWS", default_value_t = 15)]
    pub page_rows: u64,

    /// Rows per list page on mobile. 0 uses `page_rows`.
    #[clap(long, env = "BBS_API_MOBILE_PAGE_ROWS", default_value_t = 0)]
    pub mobile_page_rows: u64,

    /// Numbered page links shown at once.
    #[clap(long, env = "BBS_API_WRITE_PAGES", default_value_t = 10)]
    pub write_pages: u64,

    /// Numbered page links shown at once on mobile. 0 uses `write_pages`.
    #[clap(long, env = "BBS_API_MOBILE_PAGES", default_value_t = 5)]
    pub mobile_pages: u64,

    #[clap(long, env = "BBS_API_DEVICE_MODE", value_enum, default_value_t = DeviceMode::Both)]
    pub device_mode: DeviceMode,

    /// Disable to always serve the PC layout.
    #[clap(long, env = "BBS_API_USE_MOBILE", action = ArgAction::Set, default_value_t = true)]
    pub use_mobile: bool,

    #[clap(long, env = "BBS_API_TOKEN_TTL_SECS", default_value_t = 3600)]
    pub token_ttl_secs: u64,

    #[clap(long, env = "BBS_API_TOKEN_CAPACITY", default_value_t = 10_000)]
    pub token_capacity: u64,
}

impl BbsApiConfig {
    pub fn paging(&self) -> PagingConfig {
        PagingConfig {
            page_rows: self.page_rows,
            mobile_page_rows: self.mobile_page_rows,
            write_pages: self.write_pages,
            mobile_pages: self.mobile_pages,
        }
    }

    pub fn token_store(&self) -> TokenStore {
        TokenStore::with_limits(self.token_capacity, Duration::from_secs(self.token_ttl_secs))
    }

    /// Whether a client whose User-Agent looks mobile gets the mobile layout.
    pub fn serves_mobile(&self, client_is_mobile: bool) -> bool {
        if !self.use_mobile {
            return false;
        }
        match self.device_mode {
            DeviceMode::Pc => false,
            DeviceMode::Mobile => true,
            DeviceMode::Both => client_is_mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BbsApiConfig {
        BbsApiConfig::parse_from(std::iter::once("bbs-api").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);

        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.theme, "basic");
        assert_eq!(config.admin_menu_files.len(), 3);
        assert_eq!(config.paging(), PagingConfig {
            page_rows: 15,
            mobile_page_rows: 0,
            write_pages: 10,
            mobile_pages: 5,
        });
        assert_eq!(config.device_mode, DeviceMode::Both);
        assert!(config.use_mobile);
    }

    #[test]
    fn test_serves_mobile() {
        let both = parse(&[]);
        assert!(both.serves_mobile(true));
        assert!(!both.serves_mobile(false));

        let pc = parse(&["--device-mode", "pc"]);
        assert!(!pc.serves_mobile(true));

        let mobile = parse(&["--device-mode", "mobile"]);
        assert!(mobile.serves_mobile(false));

        let disabled = parse(&["--device-mode", "mobile", "--use-mobile", "false"]);
        assert!(!disabled.serves_mobile(true));
    }

    #[test]
    fn test_admin_menu_files_are_comma_separated() {
        let config = parse(&["--admin-menu-files", "a.json,b.json"]);
        assert_eq!(
            config.admin_menu_files,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
    }
}
