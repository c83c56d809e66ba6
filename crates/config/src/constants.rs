pub const TOP_LEVEL_DOMAIN: &str = "com";
pub const AUTHOR: &str = "realty";
pub const APP_NAME: &str = "realty-site";

pub const SERVER_CONFIG_FILE_NAME: &str = "server.toml";
pub const UNIX_SOCKET_FILE_NAME: &str = "realty.sock";
