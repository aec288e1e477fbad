//! Common test utilities for stew integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch extension workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Count entries at the workspace root
    pub fn root_entry_count(&self) -> usize {
        std::fs::read_dir(&self.path)
            .expect("Failed to read workspace root")
            .count()
    }

    /// Path the stub bundler logs its argument vector to, one per line
    pub fn bundler_args_log(&self) -> PathBuf {
        self.path.join("esbuild_args.log")
    }

    /// Install a stub `esbuild` that records its arguments and exits 0.
    /// Returns the directory to use as PATH.
    #[cfg(unix)]
    pub fn install_passing_bundler(&self) -> PathBuf {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\nexit 0\n",
            self.bundler_args_log().display()
        );
        self.install_bundler_script(&script)
    }

    /// Install a stub `esbuild` that prints `stderr_message` and exits 1.
    /// Returns the directory to use as PATH.
    #[cfg(unix)]
    pub fn install_failing_bundler(&self, stderr_message: &str) -> PathBuf {
        let script = format!("#!/bin/sh\necho '{stderr_message}' >&2\nexit 1\n");
        self.install_bundler_script(&script)
    }

    #[cfg(unix)]
    fn install_bundler_script(&self, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.path.join("stub-bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create stub bin dir");
        let stub = bin_dir.join("esbuild");
        std::fs::write(&stub, script).expect("Failed to write stub bundler");
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub bundler executable");
        bin_dir
    }

    /// An empty directory suitable as PATH so no bundler resolves
    pub fn empty_path_dir(&self) -> PathBuf {
        let bin_dir = self.path.join("empty-bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create empty bin dir");
        bin_dir
    }
}
