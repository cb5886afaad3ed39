use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const PASSPHRASE: &str = "alpha bravo charlie delta echo foxtrot golf";
const OTHER_PASSPHRASE: &str = "hotel golf foxtrot echo delta charlie bravo";
const WORD_COUNT: usize = 58_110;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_scrambl"))
}

/// Temp XDG home with a synthetic word list in the data dir.
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let env = Self { dir };
        std::fs::create_dir_all(env.config_home()).expect("create config dir");
        std::fs::create_dir_all(env.data_home().join("scrambl")).expect("create data dir");
        write_word_list(&env.words_path());
        env
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn words_path(&self) -> PathBuf {
        self.data_home().join("scrambl").join("words.txt")
    }

    fn contacts_path(&self) -> PathBuf {
        self.data_home().join("scrambl").join("contacts.json")
    }

    fn command(&self, passphrase: Option<&str>) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env("NO_COLOR", "1")
            .env_remove("SCRAMBL_WORDS")
            .env_remove("SCRAMBL_BASE_URL")
            .env_remove("SCRAMBL_CONTACTS")
            .env_remove("SCRAMBL_CONFIG")
            .env_remove("SCRAMBL_LOG")
            .env_remove("SCRAMBL_PASSPHRASE");
        if let Some(passphrase) = passphrase {
            cmd.env("SCRAMBL_PASSPHRASE", passphrase);
        }
        cmd
    }

    fn run(&self, passphrase: Option<&str>, args: &[&str]) -> Output {
        self.command(passphrase)
            .args(args)
            .output()
            .expect("run scrambl")
    }

    fn run_with_stdin(&self, passphrase: Option<&str>, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(passphrase)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn scrambl");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait scrambl")
    }
}

fn write_word_list(path: &Path) {
    let mut words: Vec<String> = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect();
    words.extend((words.len()..WORD_COUNT).map(|i| format!("word{}", i)));
    std::fs::write(path, words.join("\n") + "\n").expect("write word list");
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn tagged_key(env: &TestEnv, passphrase: &str) -> String {
    let output = env.run(Some(passphrase), &["key"]);
    assert_success(&output);
    stdout(&output).trim().to_string()
}

#[test]
fn test_generate_prints_seven_listed_words() {
    let env = TestEnv::new();
    let output = env.run(None, &["generate", "-q"]);
    assert_success(&output);

    let list = std::fs::read_to_string(env.words_path()).expect("read words");
    let passphrase = stdout(&output);
    let words: Vec<&str> = passphrase.split_whitespace().collect();
    assert_eq!(words.len(), 7);
    assert!(words.iter().all(|w| list.lines().any(|l| l == *w)));
}

#[test]
fn test_key_is_deterministic_and_valid() {
    let env = TestEnv::new();
    let first = tagged_key(&env, PASSPHRASE);
    let second = tagged_key(&env, PASSPHRASE);
    assert_eq!(first, second);
    assert_ne!(first, tagged_key(&env, OTHER_PASSPHRASE));

    let check = env.run(None, &["check-key", &format!("  {}  ", first)]);
    assert_success(&check);
}

#[test]
fn test_check_key_rejects_short_key() {
    let env = TestEnv::new();
    let output = env.run(None, &["check-key", &"1".repeat(32)]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_encrypt_then_decrypt_from_stdin() {
    let env = TestEnv::new();
    let key = tagged_key(&env, PASSPHRASE);

    let encrypt = env.run(None, &["encrypt", "--to", &key, "--message", "hello"]);
    assert_success(&encrypt);
    let ciphertext = stdout(&encrypt);
    assert!(ciphertext.lines().all(|l| l.len() == 64));

    let decrypt = env.run_with_stdin(Some(PASSPHRASE), &["decrypt"], &ciphertext);
    assert_success(&decrypt);
    assert_eq!(stdout(&decrypt), "hello\n");
}

#[test]
fn test_decrypt_with_wrong_passphrase_is_neutral() {
    let env = TestEnv::new();
    let key = tagged_key(&env, PASSPHRASE);
    let encrypt = env.run(None, &["encrypt", "--to", &key, "--message", "secret"]);
    assert_success(&encrypt);

    let decrypt = env.run(
        Some(OTHER_PASSPHRASE),
        &["decrypt", "--input", &stdout(&encrypt)],
    );
    assert_eq!(decrypt.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&decrypt.stderr);
    assert!(stderr.contains("Message could not be decrypted"));
    assert!(!stdout(&decrypt).contains("secret"));
}

#[test]
fn test_garbage_input_is_neutral() {
    let env = TestEnv::new();
    let decrypt = env.run(Some(PASSPHRASE), &["decrypt", "--input", "not a message"]);
    assert_eq!(decrypt.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&decrypt.stderr);
    assert!(stderr.contains("Message could not be decrypted"));
}

#[test]
fn test_write_link_to_read_link_round_trip() {
    let env = TestEnv::new();
    let key_link = env.run(
        Some(PASSPHRASE),
        &["key", "--email", "me@example.com", "--base-url", "https://example.org"],
    );
    assert_success(&key_link);
    let write_link = stdout(&key_link).trim().to_string();
    assert!(write_link.starts_with("https://example.org/write/"));
    assert!(write_link.ends_with("/email/me@example.com"));

    let encrypt = env.run(
        None,
        &["encrypt", "--to", &write_link, "--message", "two\nlines", "--link"],
    );
    assert_success(&encrypt);
    let read_link = stdout(&encrypt).trim().to_string();
    assert!(read_link.starts_with("https://scrambl.is/read/"));

    let decrypt = env.run(Some(PASSPHRASE), &["decrypt", "--input", &read_link]);
    assert_success(&decrypt);
    assert_eq!(stdout(&decrypt), "two\nlines\n");
}

#[test]
fn test_inspect_legacy_link_json() {
    let env = TestEnv::new();
    let key = env.run(Some(PASSPHRASE), &["key", "--legacy", "--tweet", "@handle"]);
    assert_success(&key);
    let url = stdout(&key).trim().to_string();
    assert!(url.contains("?v=1&twitter=handle"));

    let inspect = env.run(None, &["inspect", &url, "--json"]);
    assert_success(&inspect);
    let value: serde_json::Value =
        serde_json::from_slice(&inspect.stdout).expect("parse inspect json");
    assert_eq!(value["kind"], "write");
    assert_eq!(value["format"], "query");
    assert_eq!(value["recipients"][0]["kind"], "twitter");
    assert_eq!(value["recipients"][0]["address"], "handle");
}

#[test]
fn test_weak_passphrase_rejected() {
    let env = TestEnv::new();
    let output = env.run(Some("alpha bravo charlie"), &["key"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 7"));
}

#[test]
fn test_missing_word_list_is_not_found() {
    let env = TestEnv::new();
    let missing = env.dir.path().join("nowhere.txt");
    let output = env.run(
        None,
        &["generate", "--words", &missing.to_string_lossy()],
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Word list not found"));
}

#[test]
fn test_missing_passphrase_without_tty() {
    let env = TestEnv::new();
    let output = env.run(None, &["key"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SCRAMBL_PASSPHRASE"));
}

#[test]
fn test_contacts_json_and_encrypt_by_address() {
    let env = TestEnv::new();
    let key = tagged_key(&env, PASSPHRASE);
    std::fs::write(
        env.contacts_path(),
        format!(
            r#"[{{"key": "{}", "recipient": "friend@example.com"}}, {{"key": "broken", "recipient": "x"}}]"#,
            key
        ),
    )
    .expect("write contacts");

    let contacts = env.run(None, &["contacts", "--json"]);
    assert_success(&contacts);
    let value: serde_json::Value =
        serde_json::from_slice(&contacts.stdout).expect("parse contacts json");
    let array = value.as_array().expect("contacts array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["key"], key.as_str());

    let encrypt = env.run(
        None,
        &["encrypt", "--to", "friend@example.com", "--message", "hi"],
    );
    assert_success(&encrypt);
    let decrypt = env.run(Some(PASSPHRASE), &["decrypt", "--input", &stdout(&encrypt)]);
    assert_success(&decrypt);
    assert_eq!(stdout(&decrypt), "hi\n");
}

#[test]
fn test_encrypt_refuses_empty_message() {
    let env = TestEnv::new();
    let key = tagged_key(&env, PASSPHRASE);
    let output = env.run(None, &["encrypt", "--to", &key, "--message", ""]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_config_init_and_show() {
    let env = TestEnv::new();
    let init = env.run(None, &["config", "init"]);
    assert_success(&init);
    let config_path = env.config_home().join("scrambl").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).expect("read config");
    let value: toml::Table = toml::from_str(&contents).expect("parse config");
    assert_eq!(
        value["links"]["base_url"].as_str(),
        Some("https://scrambl.is")
    );

    let again = env.run(None, &["config", "init"]);
    assert_eq!(again.status.code(), Some(4));

    let show = env.run(None, &["config", "show", "--base-url", "https://example.org"]);
    assert_success(&show);
    assert!(stdout(&show).contains("base_url = \"https://example.org\""));
}

#[test]
fn test_completions() {
    let env = TestEnv::new();
    let output = env.run(None, &["completions", "bash"]);
    assert_success(&output);
    assert!(stdout(&output).contains("scrambl"));
}
