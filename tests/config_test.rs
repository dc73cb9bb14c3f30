
use fixtures::{extls, FixtureBuilder};
use predicates::prelude::*;

#[test]
fn test_config_file_sets_extension_and_format() {
    let (_tmp, root) = FixtureBuilder::new()
        .touch_all(["sky.hdr", "ground.png"])
        .file("extls.toml", "extension = \".hdr\"\nformat = \"lines\"\n")
        .build();

    extls()
        .arg("--config")
        .arg(root.join("extls.toml"))
        .arg(&root)
        .assert()
        .success()
        .stdout("sky.hdr\n");
}

#[test]
fn test_cli_overrides_config() {
    let (_tmp, root) = FixtureBuilder::new()
        .touch_all(["sky.hdr", "ground.png"])
        .file("extls.toml", "extension = \".hdr\"\nformat = \"lines\"\n")
        .build();

    extls()
        .arg("--config")
        .arg(root.join("extls.toml"))
        .args(["--ext", ".png", "--format", "list"])
        .arg(&root)
        .assert()
        .success()
        .stdout("[\"ground.png\"]\n");
}

#[test]
fn test_config_directory() {
    let (_tmp, root) = FixtureBuilder::new()
        .touch("textures/sky.hdr")
        .file("extls.toml", "extension = [\".hdr\"]\ndirectory = \"textures\"\n")
        .build();

    extls()
        .current_dir(&root)
        .args(["--config", "extls.toml"])
        .assert()
        .success()
        .stdout("[\"sky.hdr\"]\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let (_tmp, root) = FixtureBuilder::new().build();

    extls()
        .arg("--config")
        .arg(root.join("absent.toml"))
        .arg(&root)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_malformed_config_fails() {
    let (_tmp, root) = FixtureBuilder::new()
        .file("bad.toml", "format = \"json\"\n")
        .build();

    extls()
        .arg("--config")
        .arg(root.join("bad.toml"))
        .arg(&root)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_from_xdg_dir() {
    let (_tmp, root) = FixtureBuilder::new()
        .touch_all(["sky.hdr", "ground.png"])
        .file("xdg/extls/config.toml", "extension = \".hdr\"\n")
        .build();

    extls()
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .arg(&root)
        .assert()
        .success()
        .stdout("[\"sky.hdr\"]\n");

    extls()
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .arg("--no-config")
        .arg(&root)
        .assert()
        .success()
        .stdout("[\"ground.png\"]\n");
}

#[test]
fn test_empty_extension_in_config_names_the_file() {
    let (_tmp, root) = FixtureBuilder::new()
        .file("blank.toml", "extension = [\" \"]\n")
        .build();

    extls()
        .arg("--config")
        .arg(root.join("blank.toml"))
        .arg(&root)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid config"))
        .stderr(predicate::str::contains("blank.toml"));
}
