//! Declarative environment for CLI integration tests.

use assert_cmd::Command;

use crate::fixtures::VaultFixture;

/// Fixture vault plus a pre-wired `notedays` command.
///
/// # Example
/// ```no_run
/// use notedays_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.write_note("daily.md", "standup 2024-01-01 09:00");
/// world.run(&["view"]).success();
/// ```
pub struct TestWorld {
    vault: VaultFixture,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            vault: VaultFixture::new(),
        }
    }

    pub fn vault(&self) -> &VaultFixture {
        &self.vault
    }

    pub fn write_note(&self, rel_path: &str, content: &str) {
        self.vault.write_note(rel_path, content);
    }

    pub fn write_note_bytes(&self, rel_path: &str, bytes: &[u8]) {
        self.vault.write_note_bytes(rel_path, bytes);
    }

    /// A `notedays` command pointed at the fixture vault.
    ///
    /// The vault name is pinned to `test-vault` so link assertions don't
    /// depend on the random tempdir name.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("notedays").expect("notedays binary not built");
        cmd.arg("--vault")
            .arg(self.vault.path())
            .arg("--vault-name")
            .arg("test-vault");
        cmd
    }

    /// Run the CLI with extra args and return the assertion handle.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert()
    }
}
