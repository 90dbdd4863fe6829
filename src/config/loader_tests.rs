use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::*;
use crate::rules::RuleId;

#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    cwd: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            cwd: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/site-lint")),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

const LOCAL: &str = "/project/.site-lint.toml";
const USER: &str = "/home/user/.config/site-lint/config.toml";

#[test]
fn defaults_when_no_config_exists() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let loaded = loader.load().unwrap();
    assert_eq!(loaded.config, Config::default());
    assert_eq!(loaded.source, None);
}

#[test]
fn local_config_is_preferred() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL, "[scanner]\nroot = \"public\"\n")
        .with_file(USER, "[scanner]\nroot = \"dist\"\n");
    let loaded = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(loaded.config.scanner.root, Path::new("public"));
    assert_eq!(loaded.source.as_deref(), Some(Path::new(LOCAL)));
}

#[test]
fn user_config_used_when_no_local() {
    let fs = MockFileSystem::new().with_file(USER, "[rules]\ndisable = [\"E016\"]\n");
    let loaded = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(loaded.config.disabled_rules().unwrap(), [RuleId::E016]);
    assert_eq!(loaded.source.as_deref(), Some(Path::new(USER)));
}

#[test]
fn no_user_config_dir_falls_back_to_defaults() {
    let mut fs = MockFileSystem::new();
    fs.config_dir = None;
    let loaded = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(loaded.config, Config::default());
}

#[test]
fn explicit_path_is_loaded() {
    let fs = MockFileSystem::new().with_file("/etc/lint.toml", "[scanner]\ngitignore = true\n");
    let loaded = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/lint.toml"))
        .unwrap();
    assert!(loaded.config.scanner.gitignore);
}

#[test]
fn missing_explicit_path_is_a_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert!(matches!(err, SiteLintError::FileRead { ref path, .. } if path == Path::new("/nope.toml")));
}

#[test]
fn malformed_toml_is_rejected() {
    let fs = MockFileSystem::new().with_file(LOCAL, "[scanner\nroot = 1");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, SiteLintError::TomlParse(_)));
}

#[test]
fn unknown_rule_in_config_is_rejected() {
    let fs = MockFileSystem::new().with_file(LOCAL, "[rules]\ndisable = [\"X001\"]\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, SiteLintError::UnknownRule(_)));
    assert_eq!(err.error_type(), "Config");
}
