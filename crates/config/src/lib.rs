pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory: environment override first, then the platform
/// strategy, then a folder under the system temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Path of the server's unix socket inside `runtime_dir`.
pub fn socket_path(runtime_dir: &std::path::Path) -> PathBuf {
    runtime_dir.join(constants::UNIX_SOCKET_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins_over_strategy() {
        // cargo sets CARGO_MANIFEST_DIR for the test process
        let strategy = create_strategy().unwrap();
        let dir = resolve_dir("CARGO_MANIFEST_DIR", &strategy, |_| {
            Some(PathBuf::from("/never"))
        });
        assert_eq!(dir, PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn strategy_used_without_override() {
        let strategy = create_strategy().unwrap();
        let dir = resolve_dir("REALTY_TEST_UNSET_DIR", &strategy, |_| {
            Some(PathBuf::from("/run/realty"))
        });
        assert_eq!(dir, PathBuf::from("/run/realty"));
    }

    #[test]
    fn falls_back_to_temp_dir() {
        let strategy = create_strategy().unwrap();
        let dir = resolve_dir("REALTY_TEST_UNSET_DIR", &strategy, |_| None);
        assert_eq!(dir, env::temp_dir().join(constants::APP_NAME));
    }

    #[test]
    fn socket_lives_in_runtime_dir() {
        let path = socket_path(std::path::Path::new("/run/realty"));
        assert_eq!(path, PathBuf::from("/run/realty/realty.sock"));
    }
}
